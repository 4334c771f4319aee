//! ProbedTable: open addressing with quadratic probing.
//!
//! Probe `i` for a key with home index `h` visits `(h + i²) mod C`.
//! For a prime `C` that sequence reaches only `(C + 1) / 2` distinct slots
//! and repeats with period `C`.
//!
//! Saturation
//! - `insert` probes until it finds an empty or matching slot. When none
//!   is reachable it never returns. There is no resize and no guard.
//! - `try_insert` stops after `C` probes and reports
//!   [`TableError::Saturated`] without touching the table.
//!
//! Lookup
//! - `find_count` walks the same sequence as insertion, stopping at the
//!   first empty slot.
//! - `find_count_home` inspects the home slot only. Keys displaced by
//!   probing are invisible to it. This single-slot lookup is inherited
//!   behavior and is kept alongside the probing one.
//!
//! Counters
//! - The word, key and slot counters are carried here as on
//!   `ChainedTable`, although some older probing tables had none.

use crate::error::TableError;
use crate::hash::{home_index, validate_capacity, DEFAULT_CAPACITY};
use crate::word_table::WordTable;
use core::cell::Cell;

#[derive(Debug)]
struct Entry {
    key: String,
    count: u64,
}

/// Slot indices visited when probing from a home index.
#[derive(Clone, Debug)]
pub(crate) struct ProbeSequence {
    home: u64,
    capacity: u64,
    attempt: u64,
}

impl ProbeSequence {
    /// `capacity` must be positive and `home` below it.
    pub(crate) fn new(home: usize, capacity: usize) -> Self {
        debug_assert!(home < capacity);
        Self {
            home: home as u64,
            capacity: capacity as u64,
            attempt: 0,
        }
    }

    /// Probes issued so far.
    #[cfg(test)]
    pub(crate) fn attempts(&self) -> u64 {
        self.attempt
    }

    #[inline]
    fn next_slot(&mut self) -> usize {
        let c = self.capacity;
        // i² mod C only depends on i mod C; keeps the square below 2^62.
        let i = self.attempt % c;
        self.attempt += 1;
        ((self.home + i * i % c) % c) as usize
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        Some(self.next_slot())
    }
}

#[derive(Debug)]
pub struct ProbedTable {
    slots: Vec<Option<Entry>>,
    cursor: Cell<usize>,
    total_insertions: u64,
    unique_keys: usize,
}

impl ProbedTable {
    /// Table with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_validated_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        validate_capacity(capacity).map(Self::with_validated_capacity)
    }

    fn with_validated_capacity(capacity: usize) -> Self {
        tracing::debug!(capacity, "created probed table");
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            cursor: Cell::new(0),
            total_insertions: 0,
            unique_keys: 0,
        }
    }

    fn accepts(&self, slot: usize, key: &str) -> bool {
        match &self.slots[slot] {
            None => true,
            Some(e) => e.key == key,
        }
    }

    fn fill(&mut self, slot: usize, home: usize, key: &str) {
        self.total_insertions += 1;
        match self.slots[slot].as_mut() {
            Some(e) => e.count += 1,
            None => {
                if slot != home {
                    tracing::trace!(key, home, slot, "placed key away from its home slot");
                }
                self.slots[slot] = Some(Entry {
                    key: key.to_owned(),
                    count: 1,
                });
                self.unique_keys += 1;
            }
        }
    }

    /// Like `insert`, but gives up after `capacity` probes instead of
    /// looping. The table is unchanged on error.
    pub fn try_insert(&mut self, key: &str) -> Result<(), TableError> {
        let capacity = self.slots.len();
        let home = home_index(key, capacity);
        let found = ProbeSequence::new(home, capacity)
            .take(capacity)
            .find(|&slot| self.accepts(slot, key));
        match found {
            Some(slot) => {
                self.fill(slot, home, key);
                Ok(())
            }
            None => {
                tracing::warn!(key, home, capacity, "probed table saturated");
                Err(TableError::Saturated {
                    home,
                    attempts: capacity,
                })
            }
        }
    }

    /// Count stored in the home slot of `key`, if that slot holds `key`.
    ///
    /// Does not probe: after a collision the displaced key reads as 0
    /// here while `find_count` reports its real count.
    pub fn find_count_home(&self, key: &str) -> u64 {
        let home = home_index(key, self.slots.len());
        match &self.slots[home] {
            Some(e) if e.key == key => e.count,
            _ => 0,
        }
    }

    /// Slot index currently holding `key`, following the probe sequence.
    pub fn slot_of(&self, key: &str) -> Option<usize> {
        let capacity = self.slots.len();
        let home = home_index(key, capacity);
        for slot in ProbeSequence::new(home, capacity).take(capacity) {
            match &self.slots[slot] {
                None => return None,
                Some(e) if e.key == key => return Some(slot),
                Some(_) => {}
            }
        }
        None
    }

    fn advance<'a>(&'a self, cursor: &mut usize) -> Option<&'a str> {
        while let Some(slot) = self.slots.get(*cursor) {
            *cursor += 1;
            if let Some(e) = slot {
                return Some(e.key.as_str());
            }
        }
        None
    }
}

impl Default for ProbedTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumeration of a [`ProbedTable`]'s keys in ascending slot order.
pub struct Keys<'a> {
    table: &'a ProbedTable,
    cursor: usize,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.table.advance(&mut self.cursor)
    }
}

impl WordTable for ProbedTable {
    type Keys<'a> = Keys<'a>;

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Never returns if no empty or matching slot is reachable.
    /// See [`ProbedTable::try_insert`] for the bounded form.
    fn insert(&mut self, key: &str) {
        let capacity = self.slots.len();
        let home = home_index(key, capacity);
        let mut probes = ProbeSequence::new(home, capacity);
        let slot = loop {
            let slot = probes.next_slot();
            if self.accepts(slot, key) {
                break slot;
            }
        };
        self.fill(slot, home, key);
    }

    fn find_count(&self, key: &str) -> u64 {
        self.slot_of(key)
            .and_then(|slot| self.slots[slot].as_ref())
            .map(|e| e.count)
            .unwrap_or(0)
    }

    fn next_key(&self) -> Option<&str> {
        let mut cursor = self.cursor.get();
        let key = self.advance(&mut cursor);
        self.cursor.set(cursor);
        key
    }

    fn keys(&self) -> Keys<'_> {
        Keys {
            table: self,
            cursor: 0,
        }
    }

    fn total_insertions(&self) -> u64 {
        self.total_insertions
    }

    fn unique_keys(&self) -> usize {
        self.unique_keys
    }

    /// One entry per slot, so this always equals `unique_keys`.
    fn occupied_slots(&self) -> usize {
        self.unique_keys
    }
}
