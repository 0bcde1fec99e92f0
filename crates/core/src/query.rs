//! Grouping and selection helpers shared by the catalog and the directory.
//!
//! Every helper here is deterministic: grouped output is either in first-seen
//! key order or in key order, and max selection keeps the earliest candidate
//! when keys tie.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;
use std::ops::AddAssign;

/// Accumulate `value(item)` per `key(item)`, keeping keys in first-seen order.
pub fn tally_in_order<T, K, V, I, FK, FV>(items: I, mut key: FK, mut value: FV) -> Vec<(K, V)>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash + Clone,
    V: AddAssign + Default,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> V,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut tallies: Vec<(K, V)> = Vec::new();

    for item in items {
        let k = key(&item);
        let v = value(&item);
        let idx = *slots.entry(k.clone()).or_insert_with(|| {
            tallies.push((k, V::default()));
            tallies.len() - 1
        });
        tallies[idx].1 += v;
    }

    tallies
}

/// Accumulate `value(item)` per `key(item)`, ordered by key.
pub fn tally_by<T, K, V, I, FK, FV>(items: I, mut key: FK, mut value: FV) -> BTreeMap<K, V>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    V: AddAssign + Default,
    FK: FnMut(&T) -> K,
    FV: FnMut(&T) -> V,
{
    let mut tallies = BTreeMap::new();
    for item in items {
        *tallies.entry(key(&item)).or_insert_with(V::default) += value(&item);
    }
    tallies
}

/// Partition items by key; each group keeps the input order.
pub fn group_by<T, K, I, FK>(items: I, mut key: FK) -> BTreeMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    FK: FnMut(&T) -> K,
{
    let mut groups: BTreeMap<K, Vec<T>> = BTreeMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Item with the greatest key; the earliest one wins a tie.
///
/// Unlike `Iterator::max_by_key`, which returns the last maximum.
pub fn first_max_by_key<T, K, I, FK>(items: I, mut key: FK) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: PartialOrd,
    FK: FnMut(&T) -> K,
{
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}
