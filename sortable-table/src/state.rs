use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared widget state with interior mutability.
///
/// `State<T>` is cheap to clone: clones point at the same value. Click
/// handlers registered by a widget hold clones, so updates made while
/// handling an event are visible to the next build. A poisoned lock is
/// recovered rather than propagated, since the value itself is still
/// usable.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().clone()
    }

    /// Run `f` with shared access to the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        *self.write() = value;
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Update the value using a closure, returning whatever it returns.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.write());
        self.dirty.store(true, Ordering::SeqCst);
        result
    }

    /// Like [`update`](Self::update), but marks the state dirty only when
    /// `f` succeeds.
    pub fn try_update<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E> {
        let result = f(&mut self.write());
        if result.is_ok() {
            self.dirty.store(true, Ordering::SeqCst);
        }
        result
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_value_and_dirty_flag() {
        let a = State::new(1);
        let b = a.clone();

        assert!(!a.is_dirty());
        b.update(|v| *v += 1);

        assert_eq!(a.get(), 2);
        assert!(a.is_dirty());

        a.clear_dirty();
        assert!(!b.is_dirty());
    }

    #[test]
    fn update_returns_closure_result() {
        let state = State::new(vec![3, 1, 2]);
        let first = state.update(|v| {
            v.sort();
            v[0]
        });

        assert_eq!(first, 1);
        assert_eq!(state.with(|v| v.len()), 3);
    }

    #[test]
    fn try_update_marks_dirty_only_on_success() {
        let state = State::new(5);

        let rejected: Result<(), &str> = state.try_update(|_| Err("no"));
        assert!(rejected.is_err());
        assert!(!state.is_dirty());

        let doubled = state.try_update(|v| {
            *v *= 2;
            Ok::<_, &str>(*v)
        });
        assert_eq!(doubled, Ok(10));
        assert!(state.is_dirty());
    }
}
