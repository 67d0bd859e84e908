use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;

use log::trace;

use crate::callable::Callable;

/// Results computed so far, with hit and miss counts.
struct Store<K, V> {
    cache: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K, V> Store<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn new() -> Self {
        Self {
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    fn lookup(&mut self, key: &K) -> Option<V> {
        let value = self.cache.get(key)?.clone();
        self.hits += 1;
        trace!("memoizer hit ({} hits, {} entries)", self.hits, self.cache.len());
        Some(value)
    }

    // only called once the computation has returned
    fn record(&mut self, key: K, value: &V) {
        self.misses += 1;
        self.cache.insert(key, value.clone());
        trace!("memoizer miss ({} misses, {} entries)", self.misses, self.cache.len());
    }
}

/// Caches the results of a pure function, keyed by its whole argument.
///
/// The cache only grows: entries live as long as the memoizer.
pub struct Memoizer<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    store: Store<K, V>,
    compute: F,
}

impl<K, V, F> Memoizer<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    pub fn new(compute: F) -> Self {
        Self {
            store: Store::new(),
            compute,
        }
    }

    pub fn get(&mut self, key: K) -> V {
        if let Some(value) = self.store.lookup(&key) {
            return value;
        }
        let value = (self.compute)(&key);
        self.store.record(key, &value);
        value
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.cache.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.store.hits
    }

    pub fn misses(&self) -> u64 {
        self.store.misses
    }
}

impl<K, V, F> Callable<K> for Memoizer<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    type Output = V;

    fn invoke(&mut self, key: K) -> V {
        self.get(key)
    }
}

/// Memoizer for fallible functions. Only successes are cached; an error
/// is handed back and the next call with the same key computes again.
pub struct TryMemoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    store: Store<K, V>,
    compute: F,
    error: PhantomData<fn() -> E>,
}

impl<K, V, E, F> TryMemoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    pub fn new(compute: F) -> Self {
        Self {
            store: Store::new(),
            compute,
            error: PhantomData,
        }
    }

    pub fn try_get(&mut self, key: K) -> Result<V, E> {
        if let Some(value) = self.store.lookup(&key) {
            return Ok(value);
        }
        let value = (self.compute)(&key)?;
        self.store.record(key, &value);
        Ok(value)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.store.cache.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.store.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.cache.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.store.hits
    }

    /// Successful computations only.
    pub fn misses(&self) -> u64 {
        self.store.misses
    }
}

impl<K, V, E, F> Callable<K> for TryMemoizer<K, V, E, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> Result<V, E>,
{
    type Output = Result<V, E>;

    fn invoke(&mut self, key: K) -> Result<V, E> {
        self.try_get(key)
    }
}

/// Closure form of [`Memoizer`].
pub fn memoize<K, V, F>(compute: F) -> impl FnMut(K) -> V
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(&K) -> V,
{
    let mut memoizer = Memoizer::new(compute);
    move |key| memoizer.get(key)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn store_counts_only_recorded_values() {
        let mut store: Store<&str, u32> = Store::new();
        assert_eq!(store.lookup(&"a"), None);
        assert_eq!((store.hits, store.misses), (0, 0));
        store.record("a", &1);
        assert_eq!(store.lookup(&"a"), Some(1));
        assert_eq!(store.lookup(&"a"), Some(1));
        assert_eq!((store.hits, store.misses), (2, 1));
        assert_eq!(store.cache.len(), 1);
    }

    #[test]
    fn computes_once_per_key() {
        let calls = Cell::new(0);
        let mut square = Memoizer::new(|x: &u64| {
            calls.set(calls.get() + 1);
            x * x
        });
        assert_eq!(square.get(7), 49);
        assert_eq!(square.get(7), 49);
        assert_eq!(calls.get(), 1);
        assert_eq!(square.hits(), 1);
        assert_eq!(square.misses(), 1);
        assert_eq!(square.len(), 1);
    }

    #[test]
    fn distinct_keys_are_not_conflated() {
        let calls = Cell::new(0);
        let mut square = Memoizer::new(|x: &u64| {
            calls.set(calls.get() + 1);
            x * x
        });
        assert!(square.is_empty());
        assert_eq!(square.get(2), 4);
        assert_eq!(square.get(3), 9);
        assert_eq!(calls.get(), 2);
        assert!(square.contains(&2));
        assert!(square.contains(&3));
        assert!(!square.contains(&4));
    }

    #[test]
    fn tuple_keys_respect_argument_order() {
        let calls = Cell::new(0);
        let mut sub = Memoizer::new(|&(a, b): &(i32, i32)| {
            calls.set(calls.get() + 1);
            a - b
        });
        assert_eq!(sub.get((5, 3)), 2);
        assert_eq!(sub.get((3, 5)), -2);
        assert_eq!(sub.get((5, 3)), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn unit_key() {
        let calls = Cell::new(0);
        let mut constant = Memoizer::new(|_: &()| {
            calls.set(calls.get() + 1);
            String::from("forty-two")
        });
        assert_eq!(constant.get(()), "forty-two");
        assert_eq!(constant.get(()), "forty-two");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let calls = Cell::new(0);
        let mut half = TryMemoizer::new(|x: &u32| {
            calls.set(calls.get() + 1);
            if x % 2 == 0 {
                Ok(x / 2)
            } else {
                Err(format!("{} is odd", x))
            }
        });
        assert_eq!(half.try_get(3), Err(String::from("3 is odd")));
        assert_eq!(half.try_get(3), Err(String::from("3 is odd")));
        assert_eq!(calls.get(), 2);
        assert!(!half.contains(&3));
        assert_eq!(half.misses(), 0);

        assert_eq!(half.try_get(8), Ok(4));
        assert_eq!(half.try_get(8), Ok(4));
        assert_eq!(calls.get(), 3);
        assert_eq!(half.hits(), 1);
        assert_eq!(half.len(), 1);
    }

    #[test]
    fn panic_leaves_no_entry() {
        let mut picky = Memoizer::new(|x: &i32| {
            if *x < 0 {
                panic!("negative input");
            }
            *x
        });
        let result = catch_unwind(AssertUnwindSafe(|| picky.get(-1)));
        assert!(result.is_err());
        assert!(picky.is_empty());
        assert_eq!(picky.misses(), 0);
        assert_eq!(picky.get(1), 1);
    }

    #[test]
    fn callable_and_closure_forms() {
        let calls = Cell::new(0);
        let mut memo = Memoizer::new(|x: &u32| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(memo.invoke(1u32), 2);
        assert_eq!(memo.invoke(1u32), 2);
        assert_eq!(calls.get(), 1);

        let calls = Cell::new(0);
        let mut f = memoize(|s: &String| {
            calls.set(calls.get() + 1);
            s.len()
        });
        assert_eq!(f(String::from("abc")), 3);
        assert_eq!(f(String::from("abc")), 3);
        assert_eq!(f(String::from("ab")), 2);
        assert_eq!(calls.get(), 2);
    }
}
