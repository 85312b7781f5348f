//! End-to-end pipeline tests with fixture fetchers standing in for the
//! external providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ca::config::SearchConfig;
use ca::error::{CaError, Result};
use ca::search::cache::{CacheKey, ResultCache};
use ca::search::fetch::SourceFetcher;
use ca::search::types::{ProficiencyLevel, Provider};
use ca::search::SearchAgent;

/// Serves canned pages and counts fetches per provider.
struct CountingFetcher {
    video_page: Option<String>,
    repo_page: Option<String>,
    video_calls: Arc<AtomicUsize>,
    repo_calls: Arc<AtomicUsize>,
}

impl CountingFetcher {
    fn new(video_page: Option<&str>, repo_page: Option<&str>) -> Self {
        Self {
            video_page: video_page.map(String::from),
            repo_page: repo_page.map(String::from),
            video_calls: Arc::new(AtomicUsize::new(0)),
            repo_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl SourceFetcher for CountingFetcher {
    fn fetch(&self, provider: Provider, query: &str) -> Result<String> {
        let (page, calls) = match provider {
            Provider::Video => (&self.video_page, &self.video_calls),
            Provider::Repository => (&self.repo_page, &self.repo_calls),
        };
        calls.fetch_add(1, Ordering::SeqCst);
        page.clone().ok_or_else(|| CaError::Fetch {
            provider: provider.label().to_string(),
            query: query.to_string(),
            message: "simulated outage".to_string(),
        })
    }
}

fn video_page(titles: &[&str]) -> String {
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            format!(
                r#"{{"videoId":"{:0>11}","title":{{"runs":[{{"text":"{title}"}}]}}}}"#,
                i
            )
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn agent(fetcher: CountingFetcher) -> SearchAgent {
    SearchAgent::new(
        Box::new(fetcher),
        ResultCache::default(),
        SearchConfig::default(),
    )
}

#[test]
fn test_total_outage_returns_exactly_fallback_set() {
    let agent = agent(CountingFetcher::new(None, None));
    let results = agent
        .search("Data Scientist", ProficiencyLevel::Beginner)
        .unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|c| c.searched_for == "fallback"));
    assert!(results[0].score >= results[1].score);
}

#[test]
fn test_query_caps_bound_total_requests() {
    let fetcher = CountingFetcher::new(None, None);
    let video_calls = Arc::clone(&fetcher.video_calls);
    let repo_calls = Arc::clone(&fetcher.repo_calls);

    let agent = agent(fetcher);
    agent
        .search("Software Engineer", ProficiencyLevel::Beginner)
        .unwrap();

    // Defaults: 2 video queries, 1 repository query.
    assert_eq!(video_calls.load(Ordering::SeqCst), 2);
    assert_eq!(repo_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_second_search_is_served_from_cache() {
    let fetcher = CountingFetcher::new(
        Some(&video_page(&["Learn Software Engineering the Right Way"])),
        None,
    );
    let video_calls = Arc::clone(&fetcher.video_calls);

    let agent = agent(fetcher);
    let first = agent
        .search("Software Engineer", ProficiencyLevel::Beginner)
        .unwrap();
    let calls_after_first = video_calls.load(Ordering::SeqCst);

    let second = agent
        .search("Software Engineer", ProficiencyLevel::Beginner)
        .unwrap();

    assert_eq!(video_calls.load(Ordering::SeqCst), calls_after_first);
    let titles_first: Vec<_> = first.iter().map(|c| c.title.clone()).collect();
    let titles_second: Vec<_> = second.iter().map(|c| c.title.clone()).collect();
    assert_eq!(titles_first, titles_second);
}

#[test]
fn test_different_levels_are_cached_independently() {
    let fetcher = CountingFetcher::new(None, None);
    let video_calls = Arc::clone(&fetcher.video_calls);

    let agent = agent(fetcher);
    agent.search("Engineer", ProficiencyLevel::Beginner).unwrap();
    let after_beginner = video_calls.load(Ordering::SeqCst);

    agent.search("Engineer", ProficiencyLevel::Advanced).unwrap();
    assert!(video_calls.load(Ordering::SeqCst) > after_beginner);
}

#[test]
fn test_partial_outage_still_collects_from_healthy_provider() {
    let repo_page = concat!(
        r#"<a href="/org/awesome-courses">awesome course list to learn from</a>"#,
        r#"<a href="/org/misc">misc</a>"#,
    );
    let agent = agent(CountingFetcher::new(None, Some(repo_page)));

    let results = agent
        .search("Data Scientist", ProficiencyLevel::Beginner)
        .unwrap();

    assert!(results.iter().any(|c| c.provider == "GitHub"));
    // Pool stays under the minimum, so fallback joins the ranking too.
    assert!(results.iter().any(|c| c.searched_for == "fallback"));
}

#[test]
fn test_stale_cache_triggers_fresh_search() {
    use chrono::{Duration, Utc};

    let cache = ResultCache::default();
    let key = CacheKey::new("Engineer", ProficiencyLevel::Beginner);
    cache.put_at(key.clone(), vec![], Utc::now() - Duration::days(8));

    let fetcher = CountingFetcher::new(None, None);
    let video_calls = Arc::clone(&fetcher.video_calls);
    let agent = SearchAgent::new(Box::new(fetcher), cache, SearchConfig::default());

    let results = agent.search("Engineer", ProficiencyLevel::Beginner).unwrap();

    // The stale (empty) entry was evicted rather than served.
    assert!(!results.is_empty());
    assert!(video_calls.load(Ordering::SeqCst) > 0);
}
