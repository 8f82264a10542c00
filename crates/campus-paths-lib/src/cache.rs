//! Memoization of route queries.
//!
//! [`CampusMap`](crate::CampusMap) stores every answered query behind the
//! [`PathCache`] trait so the storage policy can change without touching the
//! solver. [`UnboundedCache`] is the default and never forgets an entry;
//! [`BoundedCache`] caps the number of entries and drops the oldest first.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};

/// Ordered pair of building short names identifying a route query.
///
/// `(A, B)` and `(B, A)` are distinct keys since the graph is directed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteKey {
    pub start: String,
    pub end: String,
}

impl RouteKey {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Key/value memoization store shared across threads.
pub trait PathCache<K, V>: Send + Sync {
    /// Cached value for `key`, if present.
    fn get(&self, key: &K) -> Option<V>;

    /// Return the cached value for `key`, computing and storing it first when
    /// absent. The lookup and the insert are atomic with respect to other
    /// callers, so `compute` runs at most once per key while it stays cached.
    fn get_or_insert_with(&self, key: K, compute: &mut dyn FnMut() -> V) -> V;

    /// Number of cached entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // The guarded maps stay consistent even if a holder panicked mid-compute.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Grow-only cache. Entries live as long as the cache.
///
/// `compute` runs under the single entry lock, so concurrent queries are
/// serialized while a miss is being solved, hits on other keys included.
#[derive(Debug)]
pub struct UnboundedCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for UnboundedCache<K, V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K, V> UnboundedCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> PathCache<K, V> for UnboundedCache<K, V>
where
    K: Eq + Hash + Send,
    V: Clone + Send,
{
    fn get(&self, key: &K) -> Option<V> {
        lock(&self.entries).get(key).cloned()
    }

    fn get_or_insert_with(&self, key: K, compute: &mut dyn FnMut() -> V) -> V {
        lock(&self.entries).entry(key).or_insert_with(compute).clone()
    }

    fn len(&self) -> usize {
        lock(&self.entries).len()
    }
}

/// Cache holding at most `capacity` entries, evicting in insertion order.
///
/// Like [`UnboundedCache`], a miss is solved while the lock is held.
#[derive(Debug)]
pub struct BoundedCache<K, V> {
    capacity: usize,
    inner: Mutex<BoundedInner<K, V>>,
}

#[derive(Debug)]
struct BoundedInner<K, V> {
    entries: HashMap<K, V>,
    order: VecDeque<K>,
}

impl<K, V> BoundedCache<K, V> {
    /// Create a cache that keeps up to `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCacheCapacity);
        }
        Ok(Self {
            capacity,
            inner: Mutex::new(BoundedInner {
                entries: HashMap::with_capacity(capacity),
                order: VecDeque::with_capacity(capacity),
            }),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> PathCache<K, V> for BoundedCache<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Clone + Send,
{
    fn get(&self, key: &K) -> Option<V> {
        lock(&self.inner).entries.get(key).cloned()
    }

    fn get_or_insert_with(&self, key: K, compute: &mut dyn FnMut() -> V) -> V {
        let mut inner = lock(&self.inner);
        if let Some(value) = inner.entries.get(&key) {
            return value.clone();
        }

        let value = compute();
        while inner.entries.len() >= self.capacity {
            let Some(oldest) = inner.order.pop_front() else {
                break;
            };
            inner.entries.remove(&oldest);
        }
        inner.order.push_back(key.clone());
        inner.entries.insert(key, value.clone());
        value
    }

    fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }
}
