//! Corpus comparison over two counting tables.

use crate::word_table::WordTable;

/// Result of comparing the frequency distributions of two tables.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    /// Sum of squared frequency differences over the union of keys.
    pub squared_error: f64,
    /// Key with the largest absolute frequency difference, if any differs.
    pub most_divergent: Option<String>,
    /// That key's absolute frequency difference.
    pub greatest_difference: f64,
}

/// Compare `first` against `second`.
///
/// Every key of `first` contributes `(f1 - f2)²`. Keys of `second` that
/// `first` does not contain contribute `f2²`. Frequencies are relative to
/// each table's total insertions. On ties the first key seen wins.
pub fn compare<A, B>(first: &A, second: &B) -> Comparison
where
    A: WordTable,
    B: WordTable,
{
    let mut squared_error = 0.0;
    let mut greatest_difference = 0.0;
    let mut most_divergent: Option<&str> = None;

    for key in first.keys() {
        let difference = (first.frequency(key) - second.frequency(key)).abs();
        squared_error += difference * difference;
        if difference > greatest_difference {
            greatest_difference = difference;
            most_divergent = Some(key);
        }
    }

    for key in second.keys() {
        if first.find_count(key) != 0 {
            continue;
        }
        let difference = second.frequency(key);
        squared_error += difference * difference;
        if difference > greatest_difference {
            greatest_difference = difference;
            most_divergent = Some(key);
        }
    }

    tracing::debug!(
        squared_error,
        greatest_difference,
        most_divergent = most_divergent.unwrap_or(""),
        "compared corpora"
    );

    Comparison {
        squared_error,
        most_divergent: most_divergent.map(str::to_owned),
        greatest_difference,
    }
}
