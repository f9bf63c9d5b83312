use std::collections::BTreeMap;
use std::fmt::Debug;

use tracing::debug;

use crate::error::RepoError;

pub type Result<T, K> = std::result::Result<T, RepoError<K>>;

/// In-memory repository owning a mapping from key to value.
///
/// Entries are kept in key order so listings are deterministic. Every
/// mutating operation checks key existence first and leaves the mapping
/// untouched when it fails.
#[derive(Debug, Clone)]
pub struct KeyedRepository<K, V> {
    entries: BTreeMap<K, V>,
}

impl<K, V> KeyedRepository<K, V>
where
    K: Ord + Clone + Debug,
{
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a value under a key that must not exist yet
    pub fn insert(&mut self, key: K, value: V) -> Result<(), K> {
        if self.contains(&key) {
            return Err(RepoError::DuplicateKey(key));
        }
        debug!("Inserting entry {:?}", key);
        self.entries.insert(key, value);
        Ok(())
    }

    /// Replace the whole value stored under an existing key
    pub fn replace(&mut self, key: K, value: V) -> Result<(), K> {
        match self.entries.get_mut(&key) {
            Some(slot) => {
                debug!("Replacing entry {:?}", key);
                *slot = value;
                Ok(())
            }
            None => Err(RepoError::NotFound(key)),
        }
    }

    /// Delete an existing key
    pub fn remove(&mut self, key: &K) -> Result<(), K> {
        match self.entries.remove(key) {
            Some(_) => {
                debug!("Removed entry {:?}", key);
                Ok(())
            }
            None => Err(RepoError::NotFound(key.clone())),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> KeyedRepository<K, V>
where
    K: Ord + Clone + Debug,
    V: Clone,
{
    /// Get a copy of the value stored under a key
    pub fn fetch(&self, key: &K) -> Result<V, K> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(key.clone()))
    }

    /// Copy every entry; the returned map is detached from the repository
    pub fn snapshot(&self) -> BTreeMap<K, V> {
        self.entries.clone()
    }
}

impl<K, V> Default for KeyedRepository<K, V>
where
    K: Ord + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
