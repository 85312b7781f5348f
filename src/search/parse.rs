//! Per-provider result parsing.
//!
//! Scraped markup is inherently fragile, so extraction is regex-based and
//! deliberately conservative: a small cap of matches per query, a relevance
//! filter on titles, and normalization of the surviving titles. Metadata
//! the result pages do not expose is left unset rather than invented.

use regex::Regex;

use crate::error::Result;

use super::types::{CourseCandidate, Price, ProficiencyLevel, Provider};

/// Minimum raw title length for a video result to be considered.
const MIN_VIDEO_TITLE_LEN: usize = 15;

/// Learning-intent keywords required in video titles.
const VIDEO_KEYWORDS: [&str; 5] = ["tutorial", "course", "learn", "guide", "introduction"];

/// Learning-repository keywords required in repository titles.
const REPO_KEYWORDS: [&str; 5] = ["learn", "tutorial", "course", "guide", "examples"];

/// Matches considered per query, before the relevance filter.
const VIDEO_MATCH_CAP: usize = 3;
const REPO_MATCH_CAP: usize = 2;

/// Regex-based extraction of course candidates from raw provider pages.
pub struct ResultParser {
    video_re: Regex,
    repo_re: Regex,
}

impl Default for ResultParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            video_re: Regex::new(
                r#"(?s)"videoId":"([a-zA-Z0-9_-]{11})".*?"title":\{"runs":\[\{"text":"([^"]+)""#,
            )
            .unwrap(),
            repo_re: Regex::new(r#"href="(/[^/]+/[^"/]+)"[^>]*>([^<]+)</a>"#).unwrap(),
        }
    }

    /// Parse raw result text for the given provider.
    pub fn parse(
        &self,
        provider: Provider,
        raw: &str,
        query: &str,
    ) -> Result<Vec<CourseCandidate>> {
        match provider {
            Provider::Video => self.parse_video(raw, query),
            Provider::Repository => self.parse_repository(raw, query),
        }
    }

    /// Extract video results: id + title pairs, capped, then filtered by
    /// title length and learning-intent keywords.
    fn parse_video(&self, raw: &str, query: &str) -> Result<Vec<CourseCandidate>> {
        let mut courses = Vec::new();

        for captures in self.video_re.captures_iter(raw).take(VIDEO_MATCH_CAP) {
            let video_id = &captures[1];
            let title = &captures[2];
            let lowered = title.to_lowercase();

            if title.len() <= MIN_VIDEO_TITLE_LEN
                || !VIDEO_KEYWORDS.iter().any(|kw| lowered.contains(kw))
            {
                continue;
            }

            courses.push(CourseCandidate {
                title: clean_title(title),
                url: format!("https://www.youtube.com/watch?v={video_id}"),
                provider: Provider::Video.label().to_string(),
                level: ProficiencyLevel::Beginner,
                rating: None,
                duration: None,
                instructors: vec!["YouTube Instructor".to_string()],
                enrollment_count: None,
                price: Price::Free,
                language: "English".to_string(),
                searched_for: query.to_string(),
                score: 0.0,
            });
        }

        Ok(courses)
    }

    /// Extract repository results: path + link text pairs, capped, then
    /// filtered by learning-repository keywords.
    fn parse_repository(&self, raw: &str, query: &str) -> Result<Vec<CourseCandidate>> {
        let mut courses = Vec::new();

        for captures in self.repo_re.captures_iter(raw).take(REPO_MATCH_CAP) {
            let repo_path = &captures[1];
            let title = &captures[2];
            let lowered = title.to_lowercase();

            if !REPO_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
                continue;
            }

            courses.push(CourseCandidate {
                title: format!("GitHub: {title}"),
                url: format!("https://github.com{repo_path}"),
                provider: Provider::Repository.label().to_string(),
                level: ProficiencyLevel::Intermediate,
                rating: None,
                duration: Some("Self-paced".to_string()),
                instructors: vec!["Open Source Community".to_string()],
                enrollment_count: None,
                price: Price::Free,
                language: "English".to_string(),
                searched_for: query.to_string(),
                score: 0.0,
            });
        }

        Ok(courses)
    }
}

/// Normalize a title: non-alphanumeric characters become spaces, runs of
/// whitespace collapse, leading and trailing whitespace is trimmed.
#[must_use]
pub fn clean_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
