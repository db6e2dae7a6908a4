use crate::error::CreateError;
use crate::lru_list::LruList;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Fixed capacity key value store that evicts the least recently used entry.
///
/// Lookups go through a `HashMap` from key to a handle in an [`LruList`], so
/// `get`, `put` and `remove` never scan the recency order. Both reads and
/// writes count as a use.
pub struct LruCache<K, V> {
    capacity: usize,
    lookup_index: HashMap<K, usize>,
    recency_list: LruList<(K, V)>,
}

impl<K, V> LruCache<K, V>
where K: Eq + Hash + Clone
{
    pub fn new(capacity: usize) -> Result<Self, CreateError> {
        Self::with_initial_capacity(0, capacity)
    }

    /// `initial_capacity` only reserves storage up front and is clamped to `capacity`.
    pub fn with_initial_capacity(initial_capacity: usize, capacity: usize) -> Result<Self, CreateError> {
        if capacity == 0 {
            return Err(CreateError::ZeroCapacity);
        }
        let initial_capacity = initial_capacity.min(capacity);
        log::trace!("[lru-cache] capacity={} initial_capacity={}", capacity, initial_capacity);
        Ok(Self {
            capacity,
            lookup_index: HashMap::with_capacity(initial_capacity),
            recency_list: LruList::with_capacity(initial_capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.recency_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recency_list.is_empty()
    }

    /// Returns the value and marks the entry as most recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where K: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        let index = *self.lookup_index.get(key)?;
        let _is_promoted = self.recency_list.promote(index);
        self.recency_list.get_data(index).map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where K: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        let index = *self.lookup_index.get(key)?;
        let _is_promoted = self.recency_list.promote(index);
        self.recency_list.get_mut_data(index).map(|(_, value)| value)
    }

    /// Returns the value without changing recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where K: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        let index = *self.lookup_index.get(key)?;
        self.recency_list.get_data(index).map(|(_, value)| value)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where K: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        self.lookup_index.contains_key(key)
    }

    /// The entry that the next overflowing insert would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let index = self.recency_list.get_oldest()?;
        self.recency_list.get_data(index).map(|(key, value)| (key, value))
    }

    /// Inserts or overwrites a value and marks it as most recently used.
    ///
    /// Inserting a new key into a full cache evicts the least recently used
    /// entry first, so the size never exceeds the capacity.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&index) = self.lookup_index.get(&key) {
            if let Some(entry) = self.recency_list.get_mut_data(index) {
                entry.1 = value;
            }
            let _is_promoted = self.recency_list.promote(index);
            return;
        }
        if self.recency_list.len() >= self.capacity {
            self.evict_oldest();
        }
        let index = self.recency_list.push((key.clone(), value));
        self.lookup_index.insert(key, index);
    }

    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where K: Borrow<Q>, Q: Hash + Eq + ?Sized
    {
        match self.lookup_index.remove(key) {
            Some(index) => {
                let _entry = self.recency_list.remove(index);
                true
            },
            None => false,
        }
    }

    fn evict_oldest(&mut self) {
        if let Some((key, _value)) = self.recency_list.pop_oldest() {
            self.lookup_index.remove(&key);
            log::debug!("[lru-cache] evicted least recently used entry, size={}/{}",
                self.recency_list.len(), self.capacity);
        }
    }

    pub fn clear(&mut self) {
        self.lookup_index.clear();
        self.recency_list.clear();
    }

    /// Entries from most recently used to least recently used.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.recency_list.iter().map(|(key, value)| (key, value))
    }
}

impl<K, V> std::fmt::Debug for LruCache<K, V>
where K: Eq + Hash + Clone + std::fmt::Debug, V: std::fmt::Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
fn check_invariants<K, V>(cache: &LruCache<K, V>)
where K: Eq + Hash + Clone
{
    cache.recency_list.check_links();
    assert_eq!(cache.lookup_index.len(), cache.recency_list.len());
    assert!(cache.len() <= cache.capacity);
    for (key, &index) in cache.lookup_index.iter() {
        let (entry_key, _) = cache.recency_list.get_data(index).expect("indexed handle must be occupied");
        assert!(entry_key == key);
    }
}
