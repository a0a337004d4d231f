//! Helper operations over [`BTreeMap`].
//!
//! Free functions build maps from sequences ([`group_by`], [`from_iter_by`],
//! [`frequencies`]); the [`BTreeMapExt`] extension trait reshapes or queries
//! an existing map. All of them rely on two properties of the underlying
//! container: keys are unique (inserting under an occupied key overwrites,
//! so the last write wins) and iteration visits entries in ascending key
//! order. Where an operation's result depends on either property, its
//! documentation says so explicitly.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;

/// Groups a sequence of items into buckets keyed by an extracted value.
///
/// Each distinct key produced by `key_of` maps to the items that produced
/// it, in their original relative order. Keys that no item produces have no
/// entry in the result.
///
/// # Examples
///
/// ```
/// use btree_extras::group_by;
///
/// let by_length = group_by(["tree", "apple", "leaf"], |s| s.len());
///
/// assert_eq!(by_length[&4], ["tree", "leaf"]);
/// assert_eq!(by_length[&5], ["apple"]);
/// assert_eq!(by_length.get(&6), None);
/// ```
pub fn group_by<I, K, F>(items: I, mut key_of: F) -> BTreeMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut buckets = BTreeMap::new();
    for item in items {
        let bucket: &mut Vec<_> = buckets.entry(key_of(&item)).or_default();
        bucket.push(item);
    }
    buckets
}

/// Builds a map from a sequence of items, keyed by an extracted value.
///
/// When several items produce the same key, the item occurring last in the
/// sequence wins; earlier ones are discarded. This matches the map's own
/// insert semantics under a left-to-right traversal.
///
/// # Examples
///
/// ```
/// use btree_extras::from_iter_by;
///
/// let by_length = from_iter_by(["tree", "apple", "leaf"], |s| s.len());
///
/// // "leaf" displaced "tree" under key 4
/// assert_eq!(by_length[&4], "leaf");
/// assert_eq!(by_length[&5], "apple");
/// ```
pub fn from_iter_by<I, K, F>(items: I, mut key_of: F) -> BTreeMap<K, I::Item>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut map = BTreeMap::new();
    for item in items {
        map.insert(key_of(&item), item);
    }
    map
}

/// Counts the occurrences of each distinct item in a sequence.
///
/// # Examples
///
/// ```
/// use btree_extras::frequencies;
///
/// let counts = frequencies(["a", "b", "a", "c", "a"]);
///
/// assert_eq!(counts[&"a"], 3);
/// assert_eq!(counts[&"b"], 1);
/// assert_eq!(counts.get(&"z"), None);
/// ```
pub fn frequencies<I>(items: I) -> BTreeMap<I::Item, usize>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }
    counts
}

/// Supplementary operations on [`BTreeMap`].
///
/// Methods that produce a modified map consume `self` and return the result
/// by value; clone first if the original is still needed. Methods that only
/// inspect the map borrow it.
pub trait BTreeMapExt<K, V>: Sized {
    /// Removes every entry satisfying the predicate, keeping the rest.
    ///
    /// The mirror image of retaining by `pred`: an entry survives exactly
    /// when `pred` returns `false` for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
    /// let odd = map.remove_when(|&k, _| k % 2 == 0);
    ///
    /// assert_eq!(odd, BTreeMap::from([(1, "one"), (3, "three")]));
    /// ```
    fn remove_when<F>(self, pred: F) -> Self
    where
        F: FnMut(&K, &V) -> bool;

    /// Removes every entry whose key is a member of `keys`.
    ///
    /// Keys in the set with no corresponding entry are silently ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::{BTreeMap, BTreeSet};
    ///
    /// let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
    /// let pruned = map.remove_many(&BTreeSet::from([2, 3, 99]));
    ///
    /// assert_eq!(pruned, BTreeMap::from([(1, "one")]));
    /// ```
    fn remove_many(self, keys: &BTreeSet<K>) -> Self;

    /// Keeps exactly the entries whose key is a member of `keys`.
    ///
    /// The dual of [`remove_many`]: together the two results partition the
    /// map's entries. Keys in the set with no corresponding entry contribute
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::{BTreeMap, BTreeSet};
    ///
    /// let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
    /// let kept = map.keep_only(&BTreeSet::from([2, 3, 99]));
    ///
    /// assert_eq!(kept, BTreeMap::from([(2, "two"), (3, "three")]));
    /// ```
    ///
    /// [`remove_many`]: BTreeMapExt::remove_many
    fn keep_only(self, keys: &BTreeSet<K>) -> Self;

    /// Transforms every key, leaving values untouched.
    ///
    /// If `transform` is not injective, colliding entries resolve by
    /// last-write-wins under ascending original-key order: of two original
    /// keys mapping to the same new key, the entry of the *larger* original
    /// key survives. This tie-break is part of the contract, not an
    /// accident of implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([(5, "Jack"), (10, "Jill")]);
    /// assert_eq!(
    ///     map.map_keys(|k| k + 1),
    ///     BTreeMap::from([(6, "Jack"), (11, "Jill")]),
    /// );
    ///
    /// // collision: both keys map to 0, the larger original key wins
    /// let map = BTreeMap::from([(5, "Jack"), (10, "Jill")]);
    /// assert_eq!(map.map_keys(|_| 0), BTreeMap::from([(0, "Jill")]));
    /// ```
    fn map_keys<K2, F>(self, transform: F) -> BTreeMap<K2, V>
    where
        K2: Ord,
        F: FnMut(K) -> K2;

    /// Filters and maps values in one traversal.
    ///
    /// Each entry's value is passed to `transform`; `Some(new)` keeps the
    /// entry with the new value under its original key, `None` drops it.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([(1, "7"), (2, "x"), (3, "9")]);
    /// let parsed = map.filter_map_values(|_, v| v.parse::<i32>().ok());
    ///
    /// assert_eq!(parsed, BTreeMap::from([(1, 7), (3, 9)]));
    /// ```
    fn filter_map_values<V2, F>(self, transform: F) -> BTreeMap<K, V2>
    where
        F: FnMut(&K, V) -> Option<V2>;

    /// Swaps keys and values.
    ///
    /// Requires the value type to be usable as a key. Duplicate values
    /// resolve exactly as [`map_keys`] collisions do: entries are processed
    /// in ascending key order and the last write wins, so the entry of the
    /// largest original key survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([("key", "value")]);
    /// assert_eq!(map.invert(), BTreeMap::from([("value", "key")]));
    /// ```
    ///
    /// [`map_keys`]: BTreeMapExt::map_keys
    fn invert(self) -> BTreeMap<V, K>
    where
        V: Ord;

    /// Returns the first entry, in ascending key order, satisfying the
    /// predicate, or `None` if no entry does.
    ///
    /// Stops at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([(9, "Jill"), (7, "Jill")]);
    ///
    /// assert_eq!(map.find(|_, &v| v == "Jill"), Some((&7, &"Jill")));
    /// assert_eq!(map.find(|_, &v| v == "Jack"), None);
    /// ```
    fn find<F>(&self, pred: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool;

    /// Returns `true` if any entry satisfies the predicate.
    ///
    /// Stops at the first match.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let map = BTreeMap::from([(1, "one"), (2, "two")]);
    ///
    /// assert!(map.any(|&k, _| k > 1));
    /// assert!(!map.any(|&k, _| k > 2));
    /// ```
    fn any<F>(&self, pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool;

    /// Inserts a value, combining with the existing one on collision.
    ///
    /// With `key` absent this is a plain insert. With `key` present the
    /// stored value becomes `combine(existing, value)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use btree_extras::BTreeMapExt;
    /// use std::collections::BTreeMap;
    ///
    /// let tally = BTreeMap::from([("a", 2)]);
    /// let tally = tally.insert_dedupe("a", 3, |old, new| old + new);
    /// let tally = tally.insert_dedupe("b", 1, |old, new| old + new);
    ///
    /// assert_eq!(tally, BTreeMap::from([("a", 5), ("b", 1)]));
    /// ```
    fn insert_dedupe<F>(self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(V, V) -> V;
}

impl<K: Ord, V> BTreeMapExt<K, V> for BTreeMap<K, V> {
    fn remove_when<F>(mut self, mut pred: F) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.retain(|k, v| !pred(k, v));
        self
    }

    fn remove_many(mut self, keys: &BTreeSet<K>) -> Self {
        for key in keys {
            self.remove(key);
        }
        self
    }

    fn keep_only(mut self, keys: &BTreeSet<K>) -> Self {
        self.retain(|k, _| keys.contains(k));
        self
    }

    fn map_keys<K2, F>(self, mut transform: F) -> BTreeMap<K2, V>
    where
        K2: Ord,
        F: FnMut(K) -> K2,
    {
        let mut map = BTreeMap::new();
        // ascending source-key order makes the collision tie-break
        // deterministic: later (larger-keyed) entries overwrite earlier ones
        for (key, value) in self {
            map.insert(transform(key), value);
        }
        map
    }

    fn filter_map_values<V2, F>(self, mut transform: F) -> BTreeMap<K, V2>
    where
        F: FnMut(&K, V) -> Option<V2>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in self {
            if let Some(value) = transform(&key, value) {
                map.insert(key, value);
            }
        }
        map
    }

    fn invert(self) -> BTreeMap<V, K>
    where
        V: Ord,
    {
        let mut map = BTreeMap::new();
        // same tie-break as map_keys: the largest source key wins a collision
        for (key, value) in self {
            map.insert(value, key);
        }
        map
    }

    fn find<F>(&self, mut pred: F) -> Option<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        for (key, value) in self {
            if pred(key, value) {
                return Some((key, value));
            }
        }
        None
    }

    fn any<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().any(|(key, value)| pred(key, value))
    }

    fn insert_dedupe<F>(mut self, key: K, value: V, combine: F) -> Self
    where
        F: FnOnce(V, V) -> V,
    {
        let value = match self.remove(&key) {
            Some(existing) => combine(existing, value),
            None => value,
        };
        self.insert(key, value);
        self
    }
}
