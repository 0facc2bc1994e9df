//! Structural deduplication tables
//!
//! One table is built per style category (fonts, fills, borders, number
//! format codes) at the start of a finalization pass and dropped at its end.
//! The indices it hands out live on the formats, not in the table.

use std::hash::Hash;

use ahash::AHashMap;

use crate::error::Result;

/// Assigns sequential indices to structurally distinct keys
#[derive(Debug)]
pub struct DedupTable<K> {
    seen: AHashMap<K, u32>,
    next_index: u32,
}

impl<K: Hash + Eq> DedupTable<K> {
    /// Create an empty table whose first index is 0
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create an empty table whose first index is `first`
    pub fn starting_at(first: u32) -> Self {
        Self {
            seen: AHashMap::with_capacity(128),
            next_index: first,
        }
    }

    /// Register a reserved key at a fixed index.
    ///
    /// Used for entries Excel expects before any user entry (the two default
    /// fills). `next_index` moves past `index` if needed.
    pub fn preseed(&mut self, key: K, index: u32) -> Result<()> {
        self.seen.try_reserve(1)?;
        self.seen.insert(key, index);
        self.next_index = self.next_index.max(index + 1);
        Ok(())
    }

    /// Return the index of an equal key, or register `key` under the next index.
    ///
    /// The boolean is `true` when the key was new.
    pub fn register_or_find(&mut self, key: K) -> Result<(u32, bool)> {
        if let Some(&index) = self.seen.get(&key) {
            return Ok((index, false));
        }

        self.seen.try_reserve(1)?;
        let index = self.next_index;
        self.seen.insert(key, index);
        self.next_index += 1;
        Ok((index, true))
    }

    /// Index the next new key would get; equals the category count once the pass is done
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Number of keys registered, reserved ones included
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no key has been registered
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl<K: Hash + Eq> Default for DedupTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
