//! Multi-factor course ranking.
//!
//! Each candidate's score is the sum of five independent sub-scores:
//! provider credibility, weighted rating, enrollment popularity, price,
//! and title-to-career relevance. Scores are rounded to two decimals and
//! the sort is stable, so candidates from the fixed provider sequence
//! (video, repository, fallback) keep their relative order on ties.

use std::cmp::Ordering;

use super::types::{CourseCandidate, Price};

/// Rating weight applied after the unknown-rating default.
const RATING_WEIGHT: f64 = 1.5;

/// Enrollment divisor and cap for the popularity sub-score.
const ENROLLMENT_DIVISOR: f64 = 50_000.0;
const ENROLLMENT_CAP: f64 = 2.0;

/// Number of courses returned to the caller.
pub const TOP_RESULTS: usize = 5;

/// Score and order candidates for a career, descending, truncated to
/// [`TOP_RESULTS`].
#[must_use]
pub fn rank(mut candidates: Vec<CourseCandidate>, career: &str) -> Vec<CourseCandidate> {
    for course in &mut candidates {
        course.score = score(course, career);
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(TOP_RESULTS);
    candidates
}

/// Compute the rounded five-factor score for one candidate.
#[must_use]
pub fn score(course: &CourseCandidate, career: &str) -> f64 {
    let mut score = provider_score(&course.provider);

    score += f64::from(course.rating.unwrap_or(CourseCandidate::DEFAULT_RATING)) * RATING_WEIGHT;

    let enrollment = course.enrollment_count.unwrap_or(0) as f64;
    score += (enrollment / ENROLLMENT_DIVISOR).min(ENROLLMENT_CAP);

    score += match course.price {
        Price::Free => 2.0,
        Price::Paid => 0.5,
    };

    score += relevance_score(&course.title, career);

    round2(score)
}

/// Fixed credibility lookup per provider label.
fn provider_score(provider: &str) -> f64 {
    match provider {
        "YouTube" => 1.5,
        "GitHub" => 1.2,
        "Career Guidance" | "Skills Academy" => 0.8,
        _ => 0.5,
    }
}

/// Title-to-career textual overlap: 2.0 for a full (case-insensitive)
/// career-label substring, 1.5 for any single career word, 0.5 otherwise.
fn relevance_score(title: &str, career: &str) -> f64 {
    let title = title.to_lowercase();
    let career = career.to_lowercase();

    if title.contains(&career) {
        2.0
    } else if career.split_whitespace().any(|word| title.contains(word)) {
        1.5
    } else {
        0.5
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::ProficiencyLevel;

    fn candidate(title: &str, provider: &str) -> CourseCandidate {
        CourseCandidate {
            title: title.to_string(),
            url: "https://example.com".to_string(),
            provider: provider.to_string(),
            level: ProficiencyLevel::Beginner,
            rating: None,
            duration: None,
            instructors: vec![],
            enrollment_count: None,
            price: Price::Free,
            language: "English".to_string(),
            searched_for: "test".to_string(),
            score: 0.0,
        }
    }

    #[test]
    fn test_score_components_sum() {
        let mut course = candidate("Data Scientist bootcamp", "YouTube");
        course.rating = Some(4.0);
        course.enrollment_count = Some(50_000);

        // 1.5 provider + 6.0 rating + 1.0 enrollment + 2.0 free + 2.0 relevance
        assert!((score(&course, "Data Scientist") - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_provider_and_missing_metadata_defaults() {
        let course = candidate("completely unrelated", "Mystery Site");

        // 0.5 provider + 4.0 * 1.5 rating default + 0.0 enrollment + 2.0 free + 0.5 relevance
        assert!((score(&course, "Data Scientist") - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_enrollment_capped() {
        let mut course = candidate("x", "YouTube");
        course.enrollment_count = Some(10_000_000);
        let mut capped = course.clone();
        capped.enrollment_count = Some(100_000);
        assert!((score(&course, "y") - score(&capped, "y")).abs() < f64::EPSILON);
    }

    #[test]
    fn test_free_beats_paid_by_one_point_five() {
        let free = candidate("some course", "YouTube");
        let mut paid = free.clone();
        paid.price = Price::Paid;
        assert!((score(&free, "career") - score(&paid, "career") - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rating_monotonicity() {
        let mut low = candidate("a course", "YouTube");
        low.rating = Some(3.0);
        let mut high = low.clone();
        high.rating = Some(4.8);
        assert!(score(&high, "career") >= score(&low, "career"));
    }

    #[test]
    fn test_relevance_tiers() {
        assert!((relevance_score("learn data scientist skills", "Data Scientist") - 2.0).abs() < f64::EPSILON);
        assert!((relevance_score("data analysis deep dive", "Data Scientist") - 1.5).abs() < f64::EPSILON);
        assert!((relevance_score("cooking for beginners", "Data Scientist") - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rank_is_deterministic_and_stable() {
        let pool = vec![
            candidate("first equal", "Career Guidance"),
            candidate("second equal", "Skills Academy"),
            candidate("Data Scientist complete course", "YouTube"),
        ];

        let once = rank(pool.clone(), "Data Scientist");
        let twice = rank(pool, "Data Scientist");

        let titles: Vec<_> = once.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles[0], "Data Scientist complete course");
        // Equal-scoring candidates keep their original relative order.
        assert_eq!(titles[1], "first equal");
        assert_eq!(titles[2], "second equal");

        let scores_once: Vec<_> = once.iter().map(|c| c.score).collect();
        let scores_twice: Vec<_> = twice.iter().map(|c| c.score).collect();
        assert_eq!(scores_once, scores_twice);
    }

    #[test]
    fn test_rank_truncates_to_top_results() {
        let pool: Vec<_> = (0..10)
            .map(|i| candidate(&format!("course {i}"), "YouTube"))
            .collect();
        assert_eq!(rank(pool, "career").len(), TOP_RESULTS);
    }

    #[test]
    fn test_real_candidate_outranks_fallback() {
        let mut real = candidate("Complete Data Scientist Bootcamp", "YouTube");
        real.rating = Some(4.9);
        real.enrollment_count = Some(200_000);

        let mut fallback = candidate("Skills Development Course", "Skills Academy");
        fallback.rating = Some(4.3);
        fallback.enrollment_count = Some(15_000);

        assert!(score(&real, "Data Scientist") > score(&fallback, "Data Scientist"));
    }

    #[test]
    fn test_scores_rounded_to_two_decimals() {
        let mut course = candidate("a", "YouTube");
        course.enrollment_count = Some(12_345);
        let ranked = rank(vec![course], "b");
        let score = ranked[0].score;
        assert!(((score * 100.0).round() / 100.0 - score).abs() < f64::EPSILON);
    }
}
