use std::collections::HashMap;
use std::future::Future;
use std::sync::LazyLock;
use std::sync::Mutex;

use log::debug;

/// Milliseconds since the epoch. `std::time::Instant` is unavailable on
/// `wasm32-unknown-unknown`, so timestamps come from the JS clock
/// there.
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as f64
    }
}

/// Cache entry with expiration
#[derive(Clone)]
pub struct CacheEntry {
    data: String,
    expires_at: f64,
}

impl CacheEntry {
    fn new(data: String, ttl_ms: f64) -> Self {
        Self {
            data,
            expires_at: now_ms() + ttl_ms,
        }
    }

    fn is_expired(&self) -> bool {
        now_ms() > self.expires_at
    }
}

/// Response cache keyed by endpoint path. Deduplicates the player
/// directory fetch that would otherwise fire on every keystroke.
pub struct RequestCache {
    cache: Mutex<HashMap<String, CacheEntry>>,
    ttl_ms: f64,
}

impl RequestCache {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            ttl_ms,
        }
    }

    /// 5 minute default TTL
    pub fn new_default() -> Self {
        Self::new(300_000.0)
    }

    /// Returns the cached body for `key`, or runs `fetcher` and caches
    /// its result.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetcher: F) -> Result<String, String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, String>>,
    {
        if let Some(entry) = self.get(key) {
            if !entry.is_expired() {
                debug!("cache hit for {}", key);
                return Ok(entry.data);
            }
        }

        debug!("cache miss for {}, fetching", key);
        let result = fetcher().await?;
        self.set(key.to_string(), result.clone());
        Ok(result)
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry> {
        let cache = self.cache.lock().unwrap();
        cache.get(key).cloned()
    }

    pub fn set(&self, key: String, value: String) {
        let entry = CacheEntry::new(value, self.ttl_ms);
        let mut cache = self.cache.lock().unwrap();
        cache.insert(key, entry);
    }

    pub fn clear(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.clear();
    }
}

pub static REQUEST_CACHE: LazyLock<RequestCache> = LazyLock::new(RequestCache::new_default);

/// Helper to get or fetch through the shared cache
pub async fn cached_request<F, Fut>(key: &str, fetcher: F) -> Result<String, String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, String>>,
{
    REQUEST_CACHE.get_or_fetch(key, fetcher).await
}
