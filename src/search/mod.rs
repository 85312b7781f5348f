//! Course discovery pipeline.
//!
//! Query derivation, provider fetching, parsing, fallback injection,
//! ranking, and caching, coordinated by [`SearchAgent`]. The pipeline is
//! deliberately sequential: provider politeness delays and deterministic
//! candidate ordering both depend on it.

pub mod cache;
pub mod fallback;
pub mod fetch;
pub mod parse;
pub mod query;
pub mod rank;
pub mod types;

use tracing::{debug, info, warn};

use crate::config::SearchConfig;
use crate::error::Result;

use self::cache::{CacheKey, ResultCache};
use self::fetch::SourceFetcher;
use self::parse::ResultParser;
use self::types::{CourseCandidate, ProficiencyLevel, Provider};

/// Orchestrates the course search pipeline for one career at a time.
///
/// Blocking by design; callers with an interactive surface should invoke
/// [`SearchAgent::search`] from a background thread and hand results back
/// through their own event mechanism.
pub struct SearchAgent {
    fetcher: Box<dyn SourceFetcher>,
    parser: ResultParser,
    cache: ResultCache,
    config: SearchConfig,
}

impl SearchAgent {
    pub fn new(fetcher: Box<dyn SourceFetcher>, cache: ResultCache, config: SearchConfig) -> Self {
        Self {
            fetcher,
            parser: ResultParser::new(),
            cache,
            config,
        }
    }

    /// Search for courses for a career, returning the ranked top results.
    ///
    /// Cache hits short-circuit the pipeline. On a miss the agent queries
    /// the video provider then the repository provider, skipping failed
    /// fetches and parses, injects fallback candidates when the pool is
    /// thin, ranks, caches, and returns.
    pub fn search(
        &self,
        career: &str,
        level: ProficiencyLevel,
    ) -> Result<Vec<CourseCandidate>> {
        let key = CacheKey::new(career, level);
        if let Some(cached) = self.cache.get(&key) {
            info!(career, %level, "serving cached course results");
            return Ok(cached);
        }

        info!(career, %level, "starting fresh course search");
        let queries = query::build_queries(career, level);

        let mut pool = Vec::new();
        self.gather(Provider::Video, &queries, self.config.video_queries, &mut pool);
        self.gather(
            Provider::Repository,
            &queries,
            self.config.repo_queries,
            &mut pool,
        );

        if pool.len() < self.config.min_pool {
            let fallback = fallback::fallback_candidates(career, level);
            info!(
                pool = pool.len(),
                injected = fallback.len(),
                "pool below minimum, injecting fallback candidates"
            );
            pool.extend(fallback);
        }

        let ranked = rank::rank(pool, career);
        info!(results = ranked.len(), career, "course search complete");

        self.cache.put(key, ranked.clone());
        Ok(ranked)
    }

    /// Fetch and parse up to `max_queries` queries for one provider,
    /// appending surviving candidates to the pool. Per-query failures are
    /// logged and skipped; they never abort the search.
    fn gather(
        &self,
        provider: Provider,
        queries: &[String],
        max_queries: usize,
        pool: &mut Vec<CourseCandidate>,
    ) {
        for query in queries.iter().take(max_queries) {
            let raw = match self.fetcher.fetch(provider, query) {
                Ok(raw) => raw,
                Err(err) => {
                    warn!(provider = %provider, %query, %err, "fetch failed, skipping query");
                    continue;
                }
            };

            match self.parser.parse(provider, &raw, query) {
                Ok(courses) => {
                    debug!(
                        provider = %provider,
                        %query,
                        found = courses.len(),
                        "parsed provider results"
                    );
                    pool.extend(courses);
                }
                Err(err) => {
                    warn!(provider = %provider, %query, %err, "parse failed, skipping query");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CaError;

    /// Fetcher returning canned pages per provider.
    struct FixtureFetcher {
        video: Option<String>,
        repo: Option<String>,
    }

    impl SourceFetcher for FixtureFetcher {
        fn fetch(&self, provider: Provider, query: &str) -> Result<String> {
            let page = match provider {
                Provider::Video => &self.video,
                Provider::Repository => &self.repo,
            };
            page.clone().ok_or_else(|| CaError::Fetch {
                provider: provider.label().to_string(),
                query: query.to_string(),
                message: "connection refused".to_string(),
            })
        }
    }

    fn agent(fetcher: FixtureFetcher) -> SearchAgent {
        SearchAgent::new(
            Box::new(fetcher),
            ResultCache::default(),
            SearchConfig::default(),
        )
    }

    #[test]
    fn test_all_providers_down_yields_ranked_fallback() {
        let agent = agent(FixtureFetcher {
            video: None,
            repo: None,
        });

        let results = agent
            .search("Data Scientist", ProficiencyLevel::Beginner)
            .unwrap();

        assert_eq!(results.len(), fallback::FALLBACK_COUNT);
        for course in &results {
            assert_eq!(course.searched_for, fallback::FALLBACK_SEARCH_TERM);
            assert!(course.score > 0.0);
        }
        // Ranked descending.
        assert!(results[0].score >= results[1].score);
    }

    #[test]
    fn test_cache_hit_skips_providers() {
        let agent = agent(FixtureFetcher {
            video: None,
            repo: None,
        });

        let first = agent
            .search("Engineer", ProficiencyLevel::Beginner)
            .unwrap();
        let second = agent
            .search("Engineer", ProficiencyLevel::Beginner)
            .unwrap();

        let titles_first: Vec<_> = first.iter().map(|c| c.title.clone()).collect();
        let titles_second: Vec<_> = second.iter().map(|c| c.title.clone()).collect();
        assert_eq!(titles_first, titles_second);
    }

    #[test]
    fn test_thin_pool_merges_real_and_fallback_results() {
        let video = r#"{"videoId":"dQw4w9WgXcQ","title":{"runs":[{"text":"Data Scientist Full Course for Beginners"}]}}"#;
        let agent = agent(FixtureFetcher {
            video: Some(video.to_string()),
            repo: None,
        });

        let results = agent
            .search("Data Scientist", ProficiencyLevel::Beginner)
            .unwrap();

        // One real candidate per video query plus the fallback pair,
        // ranked together and ordered descending by score.
        assert_eq!(results.len(), 2 + fallback::FALLBACK_COUNT);
        assert!(results.iter().any(|c| c.provider == "YouTube"));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
