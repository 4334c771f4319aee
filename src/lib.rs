//! wordfreq-hash: fixed-capacity hash tables for counting word frequencies.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: count case-sensitive tokens from text corpora and compare the
//!   resulting frequency distributions, using two interchangeable table
//!   variants that differ only in collision policy.
//! - Layers:
//!   - `hash`: folds a key over its UTF-16 code units with multiplier 229
//!     and reduces it into `[0, capacity)` with a sign-correct remainder.
//!     The result is the home index; both tables use it unchanged.
//!   - `WordTable`: insert-or-increment, count lookup, a single-pass
//!     `next_key` cursor, restartable `keys` views, and counters.
//!   - `ChainedTable`: bucket heads over a `SlotMap` arena of chain nodes;
//!     new keys are linked at the head of their bucket.
//!   - `ProbedTable`: one entry per slot, collisions displaced to
//!     `(home + i²) mod capacity`.
//!   - `corpus` and `compare`: tokenizing files and the squared-error
//!     comparison between two tables.
//!
//! Constraints
//! - Capacity is fixed at construction. No resize, no deletion.
//! - Single-threaded: the `next_key` cursor lives in a `Cell`, so tables
//!   are `!Sync`. Scale out with one table per worker.
//! - Construction rejects a zero capacity; nothing else returns errors
//!   except the bounded `ProbedTable::try_insert`.
//!
//! Saturation
//! - `ProbedTable::insert` loops forever when no empty or matching slot is
//!   reachable by the probe sequence. `try_insert` bounds the search at
//!   `capacity` probes and reports `TableError::Saturated` instead.
//!
//! Lookup asymmetry
//! - `ProbedTable::find_count` follows the insertion probe sequence.
//!   `ProbedTable::find_count_home` inspects the home slot only and misses
//!   displaced keys. Both are kept; the second is inherited behavior.

pub mod chained_table;
pub mod compare;
pub mod corpus;
mod error;
pub mod hash;
pub mod probed_table;
mod probed_table_proptest;
mod word_table;

// Public surface
pub use chained_table::ChainedTable;
pub use compare::{compare, Comparison};
pub use corpus::{read_tokens, tokenize, CorpusError};
pub use error::TableError;
pub use hash::{home_index, DEFAULT_CAPACITY, HASH_MULTIPLIER};
pub use probed_table::ProbedTable;
pub use word_table::WordTable;
