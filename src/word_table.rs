//! WordTable: the contract both table variants implement.

/// Insert-or-increment counting table keyed by case-sensitive tokens.
///
/// `next_key` is a single-pass cursor owned by the table: once it returns
/// `None` it keeps returning `None`. `keys` hands out an independent view
/// with its own cursor, so a full enumeration can be repeated.
pub trait WordTable {
    type Keys<'a>: Iterator<Item = &'a str>
    where
        Self: 'a;

    /// Number of buckets or slots, fixed at construction.
    fn capacity(&self) -> usize;

    /// Count one occurrence of `key`.
    fn insert(&mut self, key: &str);

    /// Occurrences of `key` so far; 0 when absent.
    fn find_count(&self, key: &str) -> u64;

    /// Next distinct key of the table's built-in enumeration.
    fn next_key(&self) -> Option<&str>;

    /// Fresh enumeration of all distinct keys.
    fn keys(&self) -> Self::Keys<'_>;

    /// Every call to `insert`, duplicates included.
    fn total_insertions(&self) -> u64;

    /// Distinct keys stored.
    fn unique_keys(&self) -> usize;

    /// Buckets or slots holding at least one entry.
    fn occupied_slots(&self) -> usize;

    fn load_factor(&self) -> f64 {
        self.occupied_slots() as f64 / self.capacity() as f64
    }

    /// Relative frequency of `key` among all insertions; 0 for an empty table.
    fn frequency(&self, key: &str) -> f64 {
        let total = self.total_insertions();
        if total == 0 {
            return 0.0;
        }
        self.find_count(key) as f64 / total as f64
    }

    fn extend_tokens<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        for token in tokens {
            self.insert(token.as_ref());
        }
    }
}
