use lru_cache::{LruCache, CreateError};
use test_log::test;

fn create_filled_cache() -> LruCache<u32, &'static str> {
    let mut cache = LruCache::new(3).unwrap();
    cache.put(1, "1");
    cache.put(2, "2");
    cache.put(3, "3");
    cache
}

fn keys(cache: &LruCache<u32, &'static str>) -> Vec<u32> {
    cache.iter().map(|(key, _)| *key).collect()
}

#[test]
fn zero_capacity_is_rejected() {
    let res = LruCache::<u32, u32>::new(0);
    assert!(matches!(res, Err(CreateError::ZeroCapacity)));
    let res = LruCache::<u32, u32>::with_initial_capacity(16, 0);
    assert!(matches!(res, Err(CreateError::ZeroCapacity)));
}

#[test]
fn new_cache_is_empty() {
    let cache = LruCache::<u32, u32>::new(3).unwrap();
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
    assert_eq!(cache.capacity(), 3);
    assert!(cache.peek_lru().is_none());
}

#[test]
fn get_after_fill() {
    let mut cache = create_filled_cache();
    assert_eq!(cache.get(&3), Some(&"3"));
    assert_eq!(cache.get(&4), None);
    assert_eq!(cache.get(&1), Some(&"1"));
    assert_eq!(keys(&cache), vec![1,3,2]);
}

#[test]
fn put_evicts_least_recently_used() {
    let mut cache = create_filled_cache();
    let _ = cache.get(&3);
    let _ = cache.get(&4);
    let _ = cache.get(&1);
    cache.put(4, "4");
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.get(&2), None);
    assert_eq!(cache.get(&4), Some(&"4"));
    assert_eq!(cache.get(&1), Some(&"1"));
    assert_eq!(cache.get(&3), Some(&"3"));
}

#[test]
fn remove_then_refill_without_eviction() {
    let mut cache = create_filled_cache();
    let _ = cache.get(&3);
    let _ = cache.get(&1);
    cache.put(4, "4");
    assert!(cache.remove(&4));
    assert_eq!(cache.get(&4), None);
    assert_eq!(cache.len(), 2);
    cache.put(5, "5");
    assert_eq!(cache.len(), 3);
    assert!(cache.contains(&1));
    assert!(cache.contains(&3));
    assert!(cache.contains(&5));
    // contains does not promote, so 3 is still the oldest entry
    cache.put(6, "6");
    assert_eq!(cache.len(), 3);
    assert!(!cache.contains(&3));
    assert!(cache.contains(&1));
    assert!(cache.contains(&5));
    assert!(cache.contains(&6));
}

#[test]
fn single_entry_cache() {
    let mut cache = LruCache::new(1).unwrap();
    cache.put(0, "0");
    assert_eq!(cache.get(&0), Some(&"0"));
    cache.put(1, "1");
    assert_eq!(cache.get(&0), None);
    assert_eq!(cache.get(&1), Some(&"1"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn single_entry_cache_remove_and_reinsert() {
    let mut cache = LruCache::new(1).unwrap();
    cache.put(0, "0");
    assert!(cache.remove(&0));
    cache.put(0, "0");
    cache.put(1, "1");
    assert_eq!(cache.get(&1), Some(&"1"));
    assert_eq!(cache.get(&0), None);
}

#[test]
fn remove_missing_key_has_no_effect() {
    let mut cache = LruCache::<u32, &'static str>::new(3).unwrap();
    assert!(!cache.remove(&1));
    assert!(cache.is_empty());

    let mut cache = create_filled_cache();
    let before = keys(&cache);
    assert!(!cache.remove(&10));
    assert_eq!(cache.len(), 3);
    assert_eq!(keys(&cache), before);
}

#[test]
fn get_missing_key_has_no_effect() {
    let mut cache = create_filled_cache();
    let before = keys(&cache);
    assert_eq!(cache.get(&10), None);
    assert_eq!(keys(&cache), before);
}

#[test]
fn repeated_put_moves_to_front() {
    let mut cache = create_filled_cache();
    for value in ["a", "b", "c", "c"] {
        cache.put(1, value);
        assert_eq!(cache.len(), 3);
        assert_eq!(keys(&cache)[0], 1);
        assert_eq!(cache.peek(&1), Some(&value));
    }
    assert_eq!(keys(&cache), vec![1,3,2]);
    // update counted as a use so 2 is now the eviction target
    cache.put(4, "4");
    assert!(!cache.contains(&2));
    assert!(cache.contains(&1));
}

#[test]
fn peek_leaves_order_untouched() {
    let mut cache = create_filled_cache();
    assert_eq!(cache.peek(&1), Some(&"1"));
    assert_eq!(cache.peek_lru(), Some((&1, &"1")));
    cache.put(4, "4");
    assert!(!cache.contains(&1));
}

#[test]
fn shared_behind_mutex() {
    use std::sync::{Arc,Mutex};
    let cache = Arc::new(Mutex::new(LruCache::<usize, usize>::new(64).unwrap()));
    let total_threads = 8;
    let total_puts = 32;
    let mut threads = Vec::with_capacity(total_threads);
    for thread_id in 0..total_threads {
        let cache = cache.clone();
        let handle = std::thread::spawn(move || {
            for i in 0..total_puts {
                let key = thread_id*total_puts + i;
                cache.lock().unwrap().put(key, key);
            }
        });
        threads.push(handle);
    }
    threads.into_iter().for_each(|thread| thread.join().unwrap());
    let cache = cache.lock().unwrap();
    assert_eq!(cache.len(), 64);
    assert!(cache.iter().all(|(key, value)| key == value));
}
