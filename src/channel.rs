use std::{
    cell::RefCell,
    sync::{Arc, Weak},
};

type Callback<T> = Arc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    subscribers: Vec<(u64, Callback<T>)>,
    next_id: u64,
}

/// A broadcast cell holding the latest published value.
///
/// New subscribers get the current value replayed immediately, then every
/// subsequent value in publish order. The stream never completes on its own;
/// delivery to a subscriber stops when its [`Subscription`] is dropped.
pub struct Observable<T> {
    inner: Arc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(RefCell::new(Inner {
                value: initial,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Current value of the channel.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Stores `value` and pushes it to every live subscriber.
    pub fn publish(&self, value: T) {
        // The borrow is released before any callback runs, so subscribers may
        // read or publish from within their callback.
        let subscribers = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, callback)| callback.clone()).collect::<Vec<_>>()
        };
        for callback in subscribers {
            callback(&value);
        }
    }

    /// Registers `callback`, replaying the current value to it at once.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription<T> {
        let callback: Callback<T> = Arc::new(callback);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback.clone()));
            (id, inner.value.clone())
        };
        callback(&current);
        Subscription { inner: Arc::downgrade(&self.inner), id }
    }
}

/// Disposer for a single subscription. Dropping it stops delivery.
pub struct Subscription<T> {
    inner: Weak<RefCell<Inner<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    pub fn unsubscribe(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}
