//! Most-common-value and frequency helpers.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Returns every value that occurs the maximum number of times, in
/// ascending order. Empty input yields no modes.
pub fn modes<K, I>(values: I) -> Vec<K>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let counts = tally(values);
    let Some(max) = counts.values().copied().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter_map(|(k, n)| (n == max).then_some(k))
        .collect()
}

/// Frequency of each distinct value, highest count first. Ties keep
/// ascending value order.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: Vec<_> = tally(values).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn tally<K: Ord, I: IntoIterator<Item = K>>(values: I) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

/// The mode(s) of one column, ready to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostCommon {
    pub label: &'static str,
    pub values: Vec<String>,
}

impl MostCommon {
    pub fn of<K, I>(label: &'static str, values: I) -> Self
    where
        K: Ord + ToString,
        I: IntoIterator<Item = K>,
    {
        Self::from_modes(label, modes(values))
    }

    /// Builds from already computed modes, stringifying each.
    pub fn from_modes<K: ToString>(label: &'static str, modes: Vec<K>) -> Self {
        Self {
            label,
            values: modes.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn verb(&self) -> &'static str {
        if self.values.len() == 1 { "is" } else { "are" }
    }
}

impl fmt::Display for MostCommon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return write!(f, "There is no data to find the most common {}", self.label);
        }
        write!(
            f,
            "The most common {} of travel {} {}",
            self.label,
            self.verb(),
            self.values.join(" ")
        )
    }
}
