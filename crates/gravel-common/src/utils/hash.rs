//! Hashing aliases.
//!
//! Schema maps are keyed by short attribute names and iterated in
//! registration order, so they use an insertion-ordered map with a fast
//! non-cryptographic hasher.

use indexmap::{IndexMap, IndexSet};

/// Fast hasher state used by Gravel maps.
pub type FastHashState = ahash::RandomState;

/// Insertion-ordered map using [`FastHashState`].
pub type OrderedMap<K, V> = IndexMap<K, V, FastHashState>;

/// Insertion-ordered set using [`FastHashState`].
pub type OrderedSet<T> = IndexSet<T, FastHashState>;

/// Creates an empty [`OrderedMap`] with room for `capacity` entries.
#[must_use]
pub fn ordered_map_with_capacity<K, V>(capacity: usize) -> OrderedMap<K, V> {
    IndexMap::with_capacity_and_hasher(capacity, FastHashState::new())
}

/// Creates an empty [`OrderedSet`] with room for `capacity` entries.
#[must_use]
pub fn ordered_set_with_capacity<T>(capacity: usize) -> OrderedSet<T> {
    IndexSet::with_capacity_and_hasher(capacity, FastHashState::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_map_keeps_insertion_order() {
        let mut map = ordered_map_with_capacity(4);
        map.insert("speed", 1);
        map.insert("access", 2);
        map.insert("road_class", 3);

        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, vec!["speed", "access", "road_class"]);
    }
}
