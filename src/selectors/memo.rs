use std::sync::Arc;

/// One-slot cache: remembers the last key and the value computed for it.
#[derive(Debug)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
    recomputations: usize,
}

impl<K: PartialEq, V: Clone> Memo<K, V> {
    pub fn new() -> Self {
        Self { last: None, recomputations: 0 }
    }

    /// Returns the cached value when `key` equals the previous key, otherwise
    /// runs `compute` and caches its result.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> V {
        if let Some((last_key, value)) = &self.last {
            if *last_key == key {
                return value.clone();
            }
        }
        let value = compute(&key);
        self.recomputations += 1;
        self.last = Some((key, value.clone()));
        value
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

impl<K: PartialEq, V: Clone> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared data compared by identity rather than by value.
#[derive(Debug)]
pub struct ByRef<T>(pub Arc<T>);

impl<T> PartialEq for ByRef<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for ByRef<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
