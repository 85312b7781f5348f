//! Candidate and provider types shared across the search pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User proficiency level, part of the cache key and query derivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Title-cased form for display and fallback course titles.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProficiencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown level '{other}' (expected beginner, intermediate, or advanced)"
            )),
        }
    }
}

/// Course price. Only exactly-free courses earn the free-price bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Price {
    #[default]
    Free,
    Paid,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Free => "Free",
            Self::Paid => "Paid",
        })
    }
}

/// External search providers, in the fixed order they contribute to the
/// candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    Video,
    Repository,
}

impl Provider {
    /// Display label, also the key into the credibility table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Video => "YouTube",
            Self::Repository => "GitHub",
        }
    }

    /// Search results URL for a query.
    #[must_use]
    pub fn search_url(self, query: &str) -> String {
        match self {
            Self::Video => format!(
                "https://www.youtube.com/results?search_query={}",
                urlencoding::encode(&format!("{query} course tutorial learning"))
            ),
            Self::Repository => format!(
                "https://github.com/search?q={}&type=repositories",
                urlencoding::encode(query)
            ),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate learning resource.
///
/// Metadata the providers do not expose (rating, duration, enrollment) is
/// left `None` rather than invented; ranking substitutes documented
/// defaults (rating 4.0, enrollment 0) and display shows "unrated" /
/// "self-paced". `score` is written exactly once, during ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseCandidate {
    pub title: String,
    pub url: String,
    /// Provider label ("YouTube", "GitHub", or a fallback label).
    pub provider: String,
    pub level: ProficiencyLevel,
    /// Star rating in [0.0, 5.0] where known.
    pub rating: Option<f32>,
    pub duration: Option<String>,
    pub instructors: Vec<String>,
    pub enrollment_count: Option<u64>,
    pub price: Price,
    pub language: String,
    /// Query that produced this candidate; "fallback" for synthetic ones.
    pub searched_for: String,
    #[serde(default)]
    pub score: f64,
}

impl CourseCandidate {
    /// Rating used for display and scoring when the provider gave none.
    pub const DEFAULT_RATING: f32 = 4.0;
}
