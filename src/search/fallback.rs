//! Synthetic fallback candidates.
//!
//! When the external providers yield too few results, a small fixed set of
//! generic candidates keeps the recommendation list non-empty. These carry
//! plausible static metadata and rank like any other candidate.

use super::types::{CourseCandidate, Price, ProficiencyLevel};

/// Marker stored in `searched_for` for synthetic candidates.
pub const FALLBACK_SEARCH_TERM: &str = "fallback";

/// Number of candidates [`fallback_candidates`] produces.
pub const FALLBACK_COUNT: usize = 2;

/// Build the fixed fallback set for a career and level.
#[must_use]
pub fn fallback_candidates(career: &str, level: ProficiencyLevel) -> Vec<CourseCandidate> {
    vec![
        CourseCandidate {
            title: format!("Introduction to {career} - {} Level", level.title()),
            url: "https://www.youtube.com/results?search_query=career+development".to_string(),
            provider: "Career Guidance".to_string(),
            level,
            rating: Some(4.5),
            duration: Some("Self-paced".to_string()),
            instructors: vec!["Professional Instructors".to_string()],
            enrollment_count: Some(10_000),
            price: Price::Free,
            language: "English".to_string(),
            searched_for: FALLBACK_SEARCH_TERM.to_string(),
            score: 0.0,
        },
        CourseCandidate {
            title: format!("{career} Skills Development Course"),
            url: "https://www.youtube.com/results?search_query=professional+skills".to_string(),
            provider: "Skills Academy".to_string(),
            level,
            rating: Some(4.3),
            duration: Some("4-6 weeks".to_string()),
            instructors: vec!["Industry Experts".to_string()],
            enrollment_count: Some(15_000),
            price: Price::Free,
            language: "English".to_string(),
            searched_for: FALLBACK_SEARCH_TERM.to_string(),
            score: 0.0,
        },
    ]
}
