use std::sync::Arc;

use crate::assessment::DecisionTree;
use crate::config::Config;
use crate::error::Result;
use crate::search::SearchAgent;
use crate::search::cache::ResultCache;
use crate::search::fetch::HttpFetcher;

/// Shared application context wiring config into the agents.
pub struct AppContext {
    pub config: Config,
    pub tree: DecisionTree,
    pub search: Arc<SearchAgent>,
    pub json_output: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;

        let fetcher = HttpFetcher::new(&config.search)?;
        let cache = ResultCache::new(config.cache.max_age_days);
        let search = Arc::new(SearchAgent::new(
            Box::new(fetcher),
            cache,
            config.search.clone(),
        ));

        Ok(Self {
            config,
            tree: DecisionTree::default(),
            search,
            json_output: cli.json,
            verbosity: cli.verbose,
        })
    }
}
