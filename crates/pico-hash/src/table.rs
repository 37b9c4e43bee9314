use std::num::NonZeroUsize;

use crate::error::HashError;

/// djb2 string hash (`h = h * 33 + byte`, seeded with 5381).
#[inline]
pub fn djb2(key: &str) -> u64 {
    key.bytes()
        .fold(5381u64, |h, b| h.wrapping_mul(33).wrapping_add(u64::from(b)))
}

#[derive(Debug)]
struct Entry<V> {
    key: Box<str>,
    value: V,
}

/// String-keyed hash table with a fixed number of chained buckets.
///
/// The bucket count is chosen at creation and never changes; size it for the
/// expected number of keys. Values are opaque to the table: replacing or
/// removing an entry hands the old value back to the caller instead of
/// releasing anything.
#[derive(Debug)]
pub struct HashTable<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

impl<V> HashTable<V> {
    /// Creates an empty table with `buckets` chains.
    pub fn new(buckets: NonZeroUsize) -> Result<Self, HashError> {
        let count = buckets.get();

        let mut chains = Vec::new();
        chains
            .try_reserve_exact(count)
            .map_err(|_| HashError::Buckets { count })?;
        chains.resize_with(count, Vec::new);

        Ok(Self { buckets: chains, len: 0 })
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn slot(&self, key: &str) -> usize {
        (djb2(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts `value` under `key`, replacing any existing value.
    ///
    /// Returns the replaced value, if any. Fails only when the key copy or the
    /// chain slot cannot be allocated; the table is unchanged in that case.
    pub fn add(&mut self, key: &str, value: V) -> Result<Option<V>, HashError> {
        let slot = self.slot(key);
        let chain = &mut self.buckets[slot];

        if let Some(entry) = chain.iter_mut().find(|e| &*e.key == key) {
            return Ok(Some(std::mem::replace(&mut entry.value, value)));
        }

        let mut owned = String::new();
        owned
            .try_reserve_exact(key.len())
            .map_err(|_| HashError::Entry { key_len: key.len() })?;
        owned.push_str(key);

        chain
            .try_reserve(1)
            .map_err(|_| HashError::Entry { key_len: key.len() })?;
        chain.push(Entry { key: owned.into_boxed_str(), value });

        self.len += 1;
        Ok(None)
    }

    /// Detaches the entry stored under `key` and returns its value.
    ///
    /// `None` means no entry matched.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let slot = self.slot(key);
        let chain = &mut self.buckets[slot];

        // Chain order carries no meaning.
        let idx = chain.iter().position(|e| &*e.key == key)?;
        let entry = chain.swap_remove(idx);

        self.len -= 1;
        Some(entry.value)
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.slot(key)]
            .iter()
            .find(|e| &*e.key == key)
            .map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let slot = self.slot(key);
        self.buckets[slot]
            .iter_mut()
            .find(|e| &*e.key == key)
            .map(|e| &mut e.value)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|e| (&*e.key, &e.value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table<V>(buckets: usize) -> HashTable<V> {
        HashTable::new(NonZeroUsize::new(buckets).unwrap()).unwrap()
    }

    // ── hash ──────────────────────────────────────────────────────────────

    #[test]
    fn djb2_known_values() {
        assert_eq!(djb2(""), 5381);
        assert_eq!(djb2("a"), 5381 * 33 + 97);
    }

    #[test]
    fn djb2_is_deterministic() {
        assert_eq!(djb2("res/ship.png"), djb2("res/ship.png"));
        assert_ne!(djb2("res/ship.png"), djb2("res/shop.png"));
    }

    // ── empty table ───────────────────────────────────────────────────────

    #[test]
    fn empty_table_reports_absent() {
        let mut t: HashTable<u32> = table(8);
        assert!(t.is_empty());
        assert_eq!(t.get("x"), None);
        assert_eq!(t.remove("x"), None);
        assert_eq!(t.len(), 0);
        assert_eq!(t.bucket_count(), 8);
    }

    // ── add / get ─────────────────────────────────────────────────────────

    #[test]
    fn get_after_add_returns_value() {
        let mut t = table(8);
        assert_eq!(t.add("k", 1).unwrap(), None);
        assert_eq!(t.get("k"), Some(&1));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn add_existing_key_replaces_and_returns_old() {
        let mut t = table(8);
        t.add("k", 1).unwrap();
        assert_eq!(t.add("k", 2).unwrap(), Some(1));
        assert_eq!(t.get("k"), Some(&2));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut t = table(4);
        t.add("k", 10).unwrap();
        *t.get_mut("k").unwrap() += 5;
        assert_eq!(t.get("k"), Some(&15));
    }

    // ── remove ────────────────────────────────────────────────────────────

    #[test]
    fn get_after_remove_is_absent() {
        let mut t = table(8);
        t.add("k", 1).unwrap();
        assert_eq!(t.remove("k"), Some(1));
        assert_eq!(t.get("k"), None);
        assert_eq!(t.remove("k"), None);
        assert!(t.is_empty());
    }

    // ── collisions ────────────────────────────────────────────────────────

    #[test]
    fn single_bucket_chains_every_key() {
        // One bucket forces every key into the same chain.
        let mut t = table(1);
        for i in 0..50 {
            t.add(&format!("key{i}"), i).unwrap();
        }
        assert_eq!(t.len(), 50);
        for i in 0..50 {
            assert_eq!(t.get(&format!("key{i}")), Some(&i));
        }

        assert_eq!(t.remove("key10"), Some(10));
        assert_eq!(t.get("key10"), None);
        assert_eq!(t.get("key49"), Some(&49));
        assert_eq!(t.len(), 49);
    }

    #[test]
    fn bucket_count_never_changes() {
        let mut t = table(3);
        for i in 0..100 {
            t.add(&i.to_string(), i).unwrap();
        }
        assert_eq!(t.bucket_count(), 3);
        assert_eq!(t.iter().count(), 100);
    }

    #[test]
    fn mixed_sequence_matches_model() {
        use std::collections::HashMap;

        let mut t = table(5);
        let mut model = HashMap::new();
        let ops: [(&str, Option<i32>); 10] = [
            ("a", Some(1)),
            ("b", Some(2)),
            ("a", Some(3)),
            ("c", None),
            ("b", None),
            ("d", Some(4)),
            ("b", Some(5)),
            ("a", None),
            ("a", None),
            ("e", Some(6)),
        ];

        for (key, op) in ops {
            match op {
                Some(v) => {
                    assert_eq!(t.add(key, v).unwrap(), model.insert(key, v));
                }
                None => {
                    assert_eq!(t.remove(key), model.remove(key));
                }
            }
            for k in ["a", "b", "c", "d", "e"] {
                assert_eq!(t.get(k), model.get(k));
            }
        }
        assert_eq!(t.len(), model.len());
    }
}
