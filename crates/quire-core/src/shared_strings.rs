//! Shared string table (SST)
//!
//! Every literal string written into a cell is interned here and the cell
//! stores only the returned index. Indices are dense and assigned in
//! first-seen order, which is also the order `xl/sharedStrings.xml` lists
//! the strings in.

use std::rc::Rc;

use ahash::AHashMap;

use crate::error::{Error, Result};

/// Initial capacity of the lookup map.
const SST_BUCKET_HINT: usize = 1024;

/// Document-wide table of unique cell strings
#[derive(Debug)]
pub struct SharedStringTable {
    /// Existence check: string -> index
    lookup: AHashMap<Rc<str>, u32>,
    /// Unique strings in insertion order; position == index
    order: Vec<Rc<str>>,
    /// Total number of intern calls, duplicates included
    string_count: u32,
    frozen: bool,
}

impl SharedStringTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            lookup: AHashMap::with_capacity(SST_BUCKET_HINT),
            order: Vec::new(),
            string_count: 0,
            frozen: false,
        }
    }

    /// Intern `text`, returning its stable index.
    ///
    /// A string seen before returns its existing index and only bumps
    /// [`string_count`](Self::string_count). A new string gets
    /// `index == unique_count` and bumps both counters.
    pub fn intern(&mut self, text: &str) -> Result<u32> {
        if self.frozen {
            return Err(Error::SharedStringsFrozen);
        }

        if let Some(&index) = self.lookup.get(text) {
            self.string_count += 1;
            return Ok(index);
        }

        // Reserve everything up front so a failed allocation leaves the
        // table exactly as it was.
        self.order.try_reserve(1)?;
        self.lookup.try_reserve(1)?;
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);

        let index = self.order.len() as u32;
        let entry: Rc<str> = Rc::from(owned);
        self.lookup.insert(Rc::clone(&entry), index);
        self.order.push(entry);
        self.string_count += 1;

        Ok(index)
    }

    /// Index of `text` if it has been interned
    pub fn get(&self, text: &str) -> Option<u32> {
        self.lookup.get(text).copied()
    }

    /// String stored at `index`
    pub fn lookup(&self, index: u32) -> Option<&str> {
        self.order.get(index as usize).map(|s| s.as_ref())
    }

    /// Total number of intern calls (the `count` attribute)
    pub fn string_count(&self) -> u32 {
        self.string_count
    }

    /// Number of distinct strings (the `uniqueCount` attribute)
    pub fn unique_count(&self) -> u32 {
        self.order.len() as u32
    }

    /// Check if no string has been interned
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Unique strings in the order they were first interned.
    ///
    /// The iterator is `Clone`, so a serializer can walk it more than once.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.order.iter(),
        }
    }

    /// Stop accepting new strings. Called when serialization begins.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether [`freeze`](Self::freeze) has been called
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl Default for SharedStringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a SharedStringTable {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Insertion-order iterator over a [`SharedStringTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, Rc<str>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| s.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
