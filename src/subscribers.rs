//! Synchronous publish/subscribe list
//!
//! Listeners are keyed by an opaque [`SubscriptionId`] handed out at
//! registration, so removing one never depends on comparing closures.

use std::fmt;

/// Token returned by `subscribe`, used to unsubscribe exactly that listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

impl SubscriptionId {
    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn from_u32(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered listener list, notified in registration order
pub struct Subscribers<T: ?Sized> {
    next_id: u32,
    listeners: Vec<(SubscriptionId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            listeners: Vec::new(),
        }
    }
}

impl<T: ?Sized> Subscribers<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Every call is an independent registration.
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the token was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    /// Invoke every listener with `value`
    pub fn notify(&mut self, value: &T) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(value);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<T: ?Sized> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<u32> = Subscribers::new();

        for tag in ["a", "b", "c"] {
            let log = log.clone();
            subs.subscribe(move |v: &u32| log.borrow_mut().push(format!("{tag}{v}")));
        }

        subs.notify(&7);
        assert_eq!(*log.borrow(), vec!["a7", "b7", "c7"]);
    }

    #[test]
    fn test_unsubscribe_removes_only_that_registration() {
        let hits = Rc::new(RefCell::new(0));
        let mut subs: Subscribers<str> = Subscribers::new();

        // Same closure body registered twice is two registrations
        let h1 = hits.clone();
        let first = subs.subscribe(move |_: &str| *h1.borrow_mut() += 1);
        let h2 = hits.clone();
        let _second = subs.subscribe(move |_: &str| *h2.borrow_mut() += 1);

        subs.notify("x");
        assert_eq!(*hits.borrow(), 2);

        assert!(subs.unsubscribe(first));
        subs.notify("x");
        assert_eq!(*hits.borrow(), 3);
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_unsubscribe_unknown_token() {
        let mut subs: Subscribers<u32> = Subscribers::new();
        let id = subs.subscribe(|_| {});
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));
        assert!(subs.is_empty());
    }
}
