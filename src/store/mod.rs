//! Expiring key-value store used as the response cache.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::merge::Hints;
use crate::model::OutputLang;

/// Get/set-with-expiry. Implementations must be shareable across threads.
pub trait Store<V>: Send + Sync {
    fn get(&self, key: &str) -> Option<V>;
    fn set(&self, key: String, value: V, ttl: Duration);
    /// Drop expired entries, returning how many were removed.
    fn purge_expired(&self) -> usize;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Process-local store bounded to `capacity` entries.
pub struct MemoryStore<V> {
    entries: Mutex<HashMap<String, Entry<V>>>,
    capacity: usize,
}

impl<V> MemoryStore<V> {
    pub fn new(capacity: usize) -> Self {
        Self { entries: Mutex::new(HashMap::new()), capacity: capacity.max(1) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn get_at(&self, key: &str, now: Instant) -> Option<V>
    where
        V: Clone,
    {
        let mut entries = self.entries.lock();
        let entry = entries.get(key)?;
        if entry.expires_at > now {
            return Some(entry.value.clone());
        }
        entries.remove(key);
        None
    }

    fn set_at(&self, key: String, value: V, ttl: Duration, now: Instant) {
        let mut entries = self.entries.lock();
        if !entries.contains_key(&key) && entries.len() >= self.capacity {
            entries.retain(|_, e| e.expires_at > now);
            if entries.len() >= self.capacity {
                let soonest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.expires_at)
                    .map(|(k, _)| k.clone());
                if let Some(k) = soonest {
                    entries.remove(&k);
                }
            }
        }
        entries.insert(key, Entry { value, expires_at: now + ttl });
    }

    fn purge_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        before - entries.len()
    }
}

impl<V: Clone + Send> Store<V> for MemoryStore<V> {
    fn get(&self, key: &str) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    fn set(&self, key: String, value: V, ttl: Duration) {
        self.set_at(key, value, ttl, Instant::now())
    }

    fn purge_expired(&self) -> usize {
        self.purge_at(Instant::now())
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

/// Cache key for one request. Text is trimmed, whitespace-collapsed and
/// lower-cased; hints serialize with a fixed field order.
pub fn cache_key(text: &str, hints: &Hints, include_details: bool, lang: OutputLang) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let hints = serde_json::to_string(hints).unwrap_or_default();
    format!("{lang}|{}|{text}|{hints}", u8::from(include_details))
}
