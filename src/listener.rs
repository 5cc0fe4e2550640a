//! Listener registry with snapshot iteration.

use std::sync::{Arc, PoisonError, RwLock};

/// A set of listeners that can change while being notified.
///
/// Registration and removal replace the whole list. Notification clones the
/// current list handle and walks it without holding the lock, so a listener
/// may add or remove listeners (including itself) from inside a callback.
/// Such changes take effect from the next notification.
#[derive(Debug)]
pub struct Listeners<L> {
    listeners: RwLock<Arc<Vec<L>>>,
}

impl<L> Default for Listeners<L> {
    fn default() -> Self {
        Self {
            listeners: RwLock::new(Arc::new(Vec::new())),
        }
    }
}

impl<L: Clone> Listeners<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: L) {
        self.update(|listeners| listeners.push(listener));
    }

    /// Remove every registration equal to `listener`. Returns true if any
    /// was found.
    pub fn remove(&self, listener: &L) -> bool
    where
        L: PartialEq,
    {
        let mut removed = false;
        self.update(|listeners| {
            let before = listeners.len();
            listeners.retain(|candidate| candidate != listener);
            removed = listeners.len() != before;
        });
        removed
    }

    /// Call `f` for every listener registered when the call starts.
    pub fn for_each(&self, mut f: impl FnMut(&L)) {
        let snapshot = self.snapshot();
        log::trace!("notifying {} listeners", snapshot.len());
        for listener in snapshot.iter() {
            f(listener);
        }
    }

    pub fn snapshot(&self) -> Arc<Vec<L>> {
        let guard = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    fn update(&self, f: impl FnOnce(&mut Vec<L>)) {
        let mut guard = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Vec::clone(&guard);
        f(&mut next);
        *guard = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    type Callback = Arc<dyn Fn(&str) + Send + Sync>;

    #[test]
    fn add_and_remove() {
        let listeners = Listeners::new();
        listeners.add("a");
        listeners.add("b");
        listeners.add("a");
        assert_eq!(listeners.len(), 3);

        assert!(listeners.remove(&"a"));
        assert_eq!(*listeners.snapshot(), vec!["b"]);
        assert!(!listeners.remove(&"missing"));
    }

    #[test]
    fn for_each_visits_in_registration_order() {
        let listeners = Listeners::new();
        for name in ["one", "two", "three"] {
            listeners.add(name);
        }
        let mut seen = Vec::new();
        listeners.for_each(|name| seen.push(*name));
        assert_eq!(seen, vec!["one", "two", "three"]);
    }

    #[test]
    fn listeners_may_register_during_notification() {
        let listeners: Arc<Listeners<Callback>> = Arc::new(Listeners::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let registry = Arc::clone(&listeners);
        let counter = Arc::clone(&calls);
        listeners.add(Arc::new(move |_: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
            let inner = Arc::clone(&counter);
            registry.add(Arc::new(move |_: &str| {
                inner.fetch_add(1, Ordering::SeqCst);
            }));
        }));

        listeners.for_each(|listener| listener("first"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(listeners.len(), 2);

        listeners.for_each(|listener| listener("second"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn snapshot_is_unaffected_by_removal() {
        let listeners = Listeners::new();
        listeners.add(1);
        listeners.add(2);

        let mut seen = Vec::new();
        listeners.for_each(|n| {
            listeners.remove(&2);
            seen.push(*n);
        });
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(*listeners.snapshot(), vec![1]);
    }
}
