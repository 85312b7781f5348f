//! Staleness-evicting cache of ranked search results.
//!
//! Keyed by (career, level). Entries older than the staleness window are
//! eagerly evicted on lookup, never served partially, and only ever
//! replaced wholesale by a fresh search. The map is mutex-guarded so that
//! concurrent callers cannot race a read against an eviction or write.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use tracing::debug;

use super::types::{CourseCandidate, ProficiencyLevel};

/// Cache key: career label plus proficiency level.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub career: String,
    pub level: ProficiencyLevel,
}

impl CacheKey {
    #[must_use]
    pub fn new(career: &str, level: ProficiencyLevel) -> Self {
        Self {
            career: career.to_string(),
            level,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    courses: Vec<CourseCandidate>,
    cached_at: DateTime<Utc>,
}

/// Mutex-guarded result cache with a fixed staleness window.
pub struct ResultCache {
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
    max_age: Duration,
}

impl ResultCache {
    /// Default staleness window of one week.
    pub const DEFAULT_MAX_AGE_DAYS: i64 = 7;

    #[must_use]
    pub fn new(max_age_days: i64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_age: Duration::days(max_age_days),
        }
    }

    /// Look up ranked results, evicting the entry first if it has gone
    /// stale. A stale entry is a clean miss.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Vec<CourseCandidate>> {
        self.get_at(key, Utc::now())
    }

    /// [`Self::get`] with an explicit clock, for deterministic tests.
    #[must_use]
    pub fn get_at(&self, key: &CacheKey, now: DateTime<Utc>) -> Option<Vec<CourseCandidate>> {
        let mut entries = self.entries.lock();

        let stale = entries
            .get(key)
            .is_some_and(|entry| now.signed_duration_since(entry.cached_at) > self.max_age);
        if stale {
            debug!(career = %key.career, level = %key.level, "evicting stale cache entry");
            entries.remove(key);
            return None;
        }

        entries.get(key).map(|entry| entry.courses.clone())
    }

    /// Store ranked results, replacing any prior entry wholesale.
    pub fn put(&self, key: CacheKey, courses: Vec<CourseCandidate>) {
        self.put_at(key, courses, Utc::now());
    }

    /// [`Self::put`] with an explicit timestamp, for deterministic tests.
    pub fn put_at(&self, key: CacheKey, courses: Vec<CourseCandidate>, at: DateTime<Utc>) {
        self.entries.lock().insert(
            key,
            CacheEntry {
                courses,
                cached_at: at,
            },
        );
    }

    /// Number of live entries (stale entries included until touched).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_AGE_DAYS)
    }
}
