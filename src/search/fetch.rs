//! Provider fetching.
//!
//! [`SourceFetcher`] abstracts the raw retrieval of provider result pages so
//! that search APIs or static fixtures can be substituted without touching
//! parsing, ranking, or caching. The production [`HttpFetcher`] is a
//! blocking client with a fixed timeout and a mandatory politeness delay
//! between consecutive requests to the same provider.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::{CaError, Result};

use super::types::Provider;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Raw retrieval of provider search results.
pub trait SourceFetcher: Send + Sync {
    /// Fetch the raw result text for a query.
    ///
    /// A failure here is non-fatal to the pipeline: the orchestrator logs
    /// it and continues with the remaining queries and providers.
    fn fetch(&self, provider: Provider, query: &str) -> Result<String>;
}

/// Blocking HTTP fetcher with per-provider rate limiting.
///
/// The inter-request delay is a politeness requirement toward the scraped
/// providers, not a performance knob; requests are intentionally never
/// issued in parallel.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
    delay: Duration,
    last_request: Mutex<HashMap<Provider, Instant>>,
}

impl HttpFetcher {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| CaError::Config(format!("build http client: {err}")))?;

        Ok(Self {
            client,
            delay: Duration::from_millis(config.fetch_delay_ms),
            last_request: Mutex::new(HashMap::new()),
        })
    }

    /// Sleep until at least `delay` has passed since the previous request
    /// to this provider.
    fn throttle(&self, provider: Provider) {
        let wait = {
            let last = self.last_request.lock();
            last.get(&provider)
                .map(|at| self.delay.saturating_sub(at.elapsed()))
        };
        if let Some(wait) = wait {
            if !wait.is_zero() {
                trace!(provider = %provider, ?wait, "throttling before fetch");
                std::thread::sleep(wait);
            }
        }
        self.last_request.lock().insert(provider, Instant::now());
    }

    fn get(&self, url: &str, provider: Provider, query: &str) -> Result<String> {
        let fetch_err = |message: String| CaError::Fetch {
            provider: provider.label().to_string(),
            query: query.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| fetch_err(err.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_err(format!("HTTP {}", response.status())));
        }

        response
            .text()
            .map_err(|err| fetch_err(format!("read body: {err}")))
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self, provider: Provider, query: &str) -> Result<String> {
        self.throttle(provider);
        let url = provider.search_url(query);
        debug!(provider = %provider, query, "fetching search results");
        self.get(&url, provider, query)
    }
}
