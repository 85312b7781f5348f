use proptest::prelude::*;

use ca::search::rank::{rank, score};
use ca::search::types::{CourseCandidate, Price, ProficiencyLevel};

fn arb_candidate() -> impl Strategy<Value = CourseCandidate> {
    (
        "[a-zA-Z ]{0,40}",
        proptest::option::of(0.0f32..=5.0),
        proptest::option::of(0u64..1_000_000),
        prop_oneof![Just(Price::Free), Just(Price::Paid)],
        "[a-zA-Z]{1,12}",
    )
        .prop_map(|(title, rating, enrollment_count, price, provider)| CourseCandidate {
            title,
            url: "https://example.com".to_string(),
            provider,
            level: ProficiencyLevel::Beginner,
            rating,
            duration: None,
            instructors: vec![],
            enrollment_count,
            price,
            language: "English".to_string(),
            searched_for: "test".to_string(),
            score: 0.0,
        })
}

proptest! {
    #[test]
    fn test_rank_is_deterministic(pool in proptest::collection::vec(arb_candidate(), 0..12)) {
        let once = rank(pool.clone(), "Data Scientist");
        let twice = rank(pool, "Data Scientist");

        let titles_once: Vec<_> = once.iter().map(|c| c.title.clone()).collect();
        let titles_twice: Vec<_> = twice.iter().map(|c| c.title.clone()).collect();
        prop_assert_eq!(titles_once, titles_twice);

        let scores_once: Vec<_> = once.iter().map(|c| c.score).collect();
        let scores_twice: Vec<_> = twice.iter().map(|c| c.score).collect();
        prop_assert_eq!(scores_once, scores_twice);
    }

    #[test]
    fn test_rank_orders_descending_and_truncates(pool in proptest::collection::vec(arb_candidate(), 0..12)) {
        let ranked = rank(pool, "Engineer");
        prop_assert!(ranked.len() <= 5);
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_raising_rating_never_lowers_score(course in arb_candidate(), bump in 0.0f32..=1.0) {
        let base_rating = course.rating.unwrap_or(0.0);
        let mut better = course.clone();
        better.rating = Some((base_rating + bump).min(5.0));

        let mut baseline = course;
        baseline.rating = Some(base_rating);

        prop_assert!(score(&better, "Engineer") >= score(&baseline, "Engineer"));
    }

    #[test]
    fn test_free_strictly_beats_paid(course in arb_candidate()) {
        let mut free = course.clone();
        free.price = Price::Free;
        let mut paid = course;
        paid.price = Price::Paid;

        // Each score is rounded to 2 decimals, so allow a cent of slack.
        let delta = score(&free, "Engineer") - score(&paid, "Engineer");
        prop_assert!((delta - 1.5).abs() < 0.011);
    }
}
