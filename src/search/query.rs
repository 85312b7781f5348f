//! Search query derivation from (career, level).
//!
//! Static keyword tables drive the queries. Unknown careers fall back to
//! the lower-cased career label as the sole base term; unknown levels
//! contribute no level phrase.

use itertools::Itertools;

use super::types::ProficiencyLevel;

/// Career-specific base phrases, strongest first.
fn career_keywords(career: &str) -> Option<&'static [&'static str]> {
    let terms: &[&str] = match career {
        "Data Scientist" => &[
            "data science",
            "machine learning",
            "python data analysis",
            "artificial intelligence",
        ],
        "Software Engineer" => &[
            "programming",
            "web development",
            "python programming",
            "javascript tutorial",
        ],
        "UI/UX Designer" => &["ui design", "ux design", "user experience", "figma tutorial"],
        "Graphic Designer" => &[
            "graphic design",
            "photoshop tutorial",
            "illustrator course",
            "digital design",
        ],
        "Project Manager" => &[
            "project management",
            "agile methodology",
            "scrum master",
            "leadership skills",
        ],
        "Healthcare Specialist" => &[
            "healthcare",
            "medical education",
            "public health",
            "biology basics",
        ],
        "Research Scientist" => &[
            "research methods",
            "data analysis",
            "academic research",
            "scientific methods",
        ],
        "Engineer" => &[
            "engineering",
            "mechanical engineering",
            "electrical engineering",
            "physics concepts",
        ],
        "Manager / HR Specialist" => &[
            "human resources",
            "management skills",
            "leadership",
            "team management",
        ],
        "Journalist / Public Speaker" => &[
            "journalism",
            "public speaking",
            "communication skills",
            "writing skills",
        ],
        "Technician" => &[
            "technical skills",
            "it support",
            "computer repair",
            "hardware tutorial",
        ],
        "Sales Assistant" => &[
            "sales training",
            "marketing basics",
            "customer service",
            "communication skills",
        ],
        _ => return None,
    };
    Some(terms)
}

/// Level-qualifying phrases, strongest first.
const fn level_keywords(level: ProficiencyLevel) -> &'static [&'static str] {
    match level {
        ProficiencyLevel::Beginner => {
            &["beginner", "fundamentals", "basics", "introduction", "getting started"]
        }
        ProficiencyLevel::Intermediate => {
            &["intermediate", "advanced", "professional", "deep dive"]
        }
        ProficiencyLevel::Advanced => &["advanced", "expert", "master", "professional"],
    }
}

/// Build deduplicated search queries for a career and level.
///
/// Combines up to 2 base phrases with up to 1 level phrase, and also
/// includes each base phrase on its own. Order is deterministic given the
/// static tables.
#[must_use]
pub fn build_queries(career: &str, level: ProficiencyLevel) -> Vec<String> {
    let fallback = [career.to_lowercase()];
    let base_terms: Vec<&str> = career_keywords(career).map_or_else(
        || fallback.iter().map(String::as_str).collect(),
        |terms| terms.to_vec(),
    );
    let level_terms = level_keywords(level);

    let mut queries = Vec::new();
    for base in base_terms.iter().take(2) {
        for level_term in level_terms.iter().take(1) {
            queries.push(format!("{base} {level_term}"));
        }
        queries.push((*base).to_string());
    }

    queries.into_iter().unique().collect()
}
