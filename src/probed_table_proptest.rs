#![cfg(test)]

// Property tests for probing internals kept inside the crate so they can
// reach `slot_of` and `ProbeSequence` alongside the public table API.

use crate::hash::home_index;
use crate::probed_table::{ProbeSequence, ProbedTable};
use crate::word_table::WordTable;
use proptest::prelude::*;
use std::collections::BTreeSet;

const PRIMES: &[usize] = &[3, 5, 7, 11, 13, 31, 61, 101, 251];

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>)> {
    proptest::sample::select(PRIMES).prop_flat_map(|capacity| {
        let max = (capacity - 1) / 2;
        (
            Just(capacity),
            proptest::collection::btree_set("[a-zA-Z]{1,6}", 0..=max)
                .prop_map(|s| s.into_iter().collect::<Vec<_>>()),
        )
    })
}

// Property: with a prime capacity and at most (C - 1) / 2 distinct keys,
// every insertion finds a free slot within C probes. `try_insert` is used
// so a regression fails instead of hanging.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_half_full_prime_table_never_saturates((capacity, keys) in arb_scenario()) {
        let mut t = ProbedTable::with_capacity(capacity).unwrap();
        for k in &keys {
            prop_assert!(t.try_insert(k).is_ok(), "saturated at {} keys", t.unique_keys());
        }
        prop_assert_eq!(t.unique_keys(), keys.len());
        prop_assert_eq!(t.occupied_slots(), keys.len());
        for k in &keys {
            prop_assert_eq!(t.find_count(k), 1);
        }
    }
}

// Property: every stored key sits on its own probe sequence, and no two
// keys share a slot.
proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]
    #[test]
    fn prop_keys_live_on_their_probe_sequence((capacity, keys) in arb_scenario()) {
        let mut t = ProbedTable::with_capacity(capacity).unwrap();
        for k in &keys {
            t.insert(k);
        }
        let mut used = BTreeSet::new();
        for k in &keys {
            let slot = t.slot_of(k);
            prop_assert!(slot.is_some());
            let slot = slot.unwrap();
            prop_assert!(used.insert(slot));
            let home = home_index(k, capacity);
            let on_sequence = ProbeSequence::new(home, capacity).take(capacity).any(|s| s == slot);
            prop_assert!(on_sequence);
            // Home-only lookup sees the key exactly when it was not displaced.
            prop_assert_eq!(t.find_count_home(k), u64::from(slot == home));
        }
    }
}

// Property: probe slots are always within bounds and the first is home.
proptest! {
    #[test]
    fn prop_probe_sequence_in_bounds(capacity in 1usize..10_000, seed in any::<u32>(), n in 1usize..64) {
        let home = seed as usize % capacity;
        let mut seq = ProbeSequence::new(home, capacity);
        prop_assert_eq!(seq.next(), Some(home));
        for _ in 0..n {
            let slot = seq.next().unwrap();
            prop_assert!(slot < capacity);
        }
        prop_assert_eq!(seq.attempts(), n as u64 + 1);
    }
}
