use crate::system::ISys;
use std::{collections::HashMap, hash::Hash, sync::Arc, sync::Mutex};

struct CacheEntry<V> {
    value: V,
    expires_at: i64,
}

/// Key value store where every entry expires after a time to live.
///
/// Expired entries are dropped lazily on access and whenever the cache is
/// counted. Time is read from the injected `ISys`.
pub struct TtlCache<K, V> {
    entries: Mutex<HashMap<K, CacheEntry<V>>>,
    default_ttl: i64,
    sys: Arc<dyn ISys>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(default_ttl: i64, sys: Arc<dyn ISys>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
            sys,
        }
    }

    pub fn insert(&self, key: K, value: V) {
        self.insert_with_ttl(key, value, self.default_ttl);
    }

    pub fn insert_with_ttl(&self, key: K, value: V, ttl: i64) {
        let expires_at = self.sys.get_timestamp_millis() + ttl;
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key, CacheEntry { value, expires_at });
    }

    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.sys.get_timestamp_millis();
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        let now = self.sys.get_timestamp_millis();
        let mut entries = self.entries.lock().unwrap();
        entries
            .remove(key)
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.value)
    }

    /// Number of entries that have not expired yet
    pub fn len(&self) -> usize {
        let now = self.sys.get_timestamp_millis();
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tracks which users have been seen recently
pub struct UserActivity {
    pub active_users: TtlCache<String, ()>,
    pub daily_users: TtlCache<String, ()>,
}

const DAY: i64 = 1000 * 60 * 60 * 24;

impl UserActivity {
    pub fn new(active_user_ttl: i64, sys: Arc<dyn ISys>) -> Self {
        Self {
            active_users: TtlCache::new(active_user_ttl, sys.clone()),
            daily_users: TtlCache::new(DAY, sys),
        }
    }

    pub fn record(&self, user_id: &str) {
        self.active_users.insert(user_id.to_string(), ());
        self.daily_users.insert(user_id.to_string(), ());
    }
}
