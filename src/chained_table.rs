//! ChainedTable: fixed bucket array, collisions chained per bucket.
//!
//! Chain nodes live in a `SlotMap` arena. A bucket stores the arena key of
//! its head node and each node stores the key of its successor, so new
//! entries are linked at the head without any pointer juggling.

use crate::error::TableError;
use crate::hash::{home_index, validate_capacity, DEFAULT_CAPACITY};
use crate::word_table::WordTable;
use core::cell::Cell;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug)]
struct Node {
    key: String,
    count: u64,
    next: Option<DefaultKey>,
}

/// Position of an enumeration: the bucket being walked and the next node
/// inside it (`None` means "load the bucket head").
#[derive(Copy, Clone, Debug, Default)]
struct ChainCursor {
    bucket: usize,
    node: Option<DefaultKey>,
}

impl ChainCursor {
    fn advance<'a>(&mut self, table: &'a ChainedTable) -> Option<&'a str> {
        loop {
            if let Some(k) = self.node {
                let node = &table.nodes[k];
                self.node = node.next;
                if node.next.is_none() {
                    self.bucket += 1;
                }
                return Some(node.key.as_str());
            }
            let head = *table.buckets.get(self.bucket)?;
            match head {
                Some(k) => self.node = Some(k),
                None => self.bucket += 1,
            }
        }
    }
}

#[derive(Debug)]
pub struct ChainedTable {
    buckets: Vec<Option<DefaultKey>>,
    nodes: SlotMap<DefaultKey, Node>,
    cursor: Cell<ChainCursor>,
    total_insertions: u64,
    unique_keys: usize,
    occupied_buckets: usize,
}

impl ChainedTable {
    /// Table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_validated_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        validate_capacity(capacity).map(Self::with_validated_capacity)
    }

    fn with_validated_capacity(capacity: usize) -> Self {
        tracing::debug!(capacity, "created chained table");
        Self {
            buckets: vec![None; capacity],
            nodes: SlotMap::with_key(),
            cursor: Cell::new(ChainCursor::default()),
            total_insertions: 0,
            unique_keys: 0,
            occupied_buckets: 0,
        }
    }

    fn find_node(&self, bucket: usize, key: &str) -> Option<DefaultKey> {
        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            let node = &self.nodes[k];
            if node.key == key {
                return Some(k);
            }
            cur = node.next;
        }
        None
    }

    #[cfg(test)]
    fn chain_len(&self, bucket: usize) -> usize {
        let mut len = 0;
        let mut cur = self.buckets.get(bucket).copied().flatten();
        while let Some(k) = cur {
            len += 1;
            cur = self.nodes[k].next;
        }
        len
    }
}

impl Default for ChainedTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of a [`ChainedTable`]'s keys in bucket order, then chain order.
pub struct Keys<'a> {
    table: &'a ChainedTable,
    cursor: ChainCursor,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.advance(self.table)
    }
}

impl WordTable for ChainedTable {
    type Keys<'a> = Keys<'a>;

    fn capacity(&self) -> usize {
        self.buckets.len()
    }

    fn insert(&mut self, key: &str) {
        self.total_insertions += 1;
        let bucket = home_index(key, self.buckets.len());
        if let Some(k) = self.find_node(bucket, key) {
            self.nodes[k].count += 1;
            return;
        }
        let head = self.buckets[bucket];
        if head.is_none() {
            self.occupied_buckets += 1;
        }
        let k = self.nodes.insert(Node {
            key: key.to_owned(),
            count: 1,
            next: head,
        });
        self.buckets[bucket] = Some(k);
        self.unique_keys += 1;
    }

    fn find_count(&self, key: &str) -> u64 {
        let bucket = home_index(key, self.buckets.len());
        self.find_node(bucket, key)
            .map(|k| self.nodes[k].count)
            .unwrap_or(0)
    }

    fn next_key(&self) -> Option<&str> {
        let mut cursor = self.cursor.get();
        let key = cursor.advance(self);
        self.cursor.set(cursor);
        key
    }

    fn keys(&self) -> Keys<'_> {
        Keys {
            table: self,
            cursor: ChainCursor::default(),
        }
    }

    fn total_insertions(&self) -> u64 {
        self.total_insertions
    }

    fn unique_keys(&self) -> usize {
        self.unique_keys
    }

    fn occupied_slots(&self) -> usize {
        self.occupied_buckets
    }
}
