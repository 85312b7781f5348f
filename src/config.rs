//! Configuration loading and defaults.
//!
//! Settings load from an optional TOML file (explicit `--config` path,
//! then the `CA_CONFIG` environment variable, then the user config
//! directory) as a patch merged over the defaults, with a final pass of
//! environment overrides for the knobs worth flipping per invocation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CaError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Knobs for the course search pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Per-request timeout for provider fetches, in seconds.
    pub request_timeout_secs: u64,
    /// Mandatory politeness delay between requests to one provider.
    pub fetch_delay_ms: u64,
    /// Pool size below which fallback candidates are injected.
    pub min_pool: usize,
    /// Queries issued to the video provider per search.
    pub video_queries: usize,
    /// Queries issued to the repository provider per search.
    pub repo_queries: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 15,
            fetch_delay_ms: 2000,
            min_pool: 20,
            video_queries: 2,
            repo_queries: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Staleness window for cached search results, in days.
    pub max_age_days: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_age_days: 7 }
    }
}

impl Config {
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("CA_CONFIG").ok().map(PathBuf::from));

        let path = match explicit {
            Some(path) => Some(path),
            None => dirs::config_dir().map(|dir| dir.join("ca/config.toml")),
        };

        if let Some(path) = path {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CaError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CaError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(search) = patch.search {
            if let Some(v) = search.request_timeout_secs {
                self.search.request_timeout_secs = v;
            }
            if let Some(v) = search.fetch_delay_ms {
                self.search.fetch_delay_ms = v;
            }
            if let Some(v) = search.min_pool {
                self.search.min_pool = v;
            }
            if let Some(v) = search.video_queries {
                self.search.video_queries = v;
            }
            if let Some(v) = search.repo_queries {
                self.search.repo_queries = v;
            }
        }
        if let Some(cache) = patch.cache {
            if let Some(v) = cache.max_age_days {
                self.cache.max_age_days = v;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(delay) = env_u64("CA_FETCH_DELAY_MS")? {
            self.search.fetch_delay_ms = delay;
        }
        if let Some(days) = env_u64("CA_CACHE_MAX_AGE_DAYS")? {
            self.cache.max_age_days = i64::try_from(days)
                .map_err(|_| CaError::Config("CA_CACHE_MAX_AGE_DAYS out of range".to_string()))?;
        }
        Ok(())
    }
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| CaError::Config(format!("{name} must be an integer, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}

/// Partial config as it appears in a TOML file.
#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    search: Option<SearchPatch>,
    cache: Option<CachePatch>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchPatch {
    request_timeout_secs: Option<u64>,
    fetch_delay_ms: Option<u64>,
    min_pool: Option<usize>,
    video_queries: Option<usize>,
    repo_queries: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct CachePatch {
    max_age_days: Option<i64>,
}
