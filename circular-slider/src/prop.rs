//! Comparable callback handles for slider notifications.

use std::sync::Arc;

/// Shared handle for a one-argument callback.
///
/// Two handles are equal only when they point at the same closure, so args
/// carrying callbacks can still be compared cheaply.
pub struct CallbackWith<T> {
    handler: Arc<dyn Fn(T) + Send + Sync>,
}

impl<T> CallbackWith<T> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// A callback that ignores its argument.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) {
        (self.handler)(value)
    }
}

impl<T, F> From<F> for CallbackWith<T>
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Clone for CallbackWith<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T> PartialEq for CallbackWith<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T> Eq for CallbackWith<T> {}

impl<T> std::fmt::Debug for CallbackWith<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn compares_by_identity() {
        let a = CallbackWith::<u32>::new(|_| {});
        let b = a.clone();
        let c = CallbackWith::<u32>::new(|_| {});
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn forwards_argument() {
        let seen = Arc::new(AtomicUsize::new(0));
        let sink = seen.clone();
        let callback = CallbackWith::new(move |v: usize| {
            sink.fetch_add(v, Ordering::SeqCst);
        });
        callback.call(3);
        callback.call(4);
        assert_eq!(seen.load(Ordering::SeqCst), 7);
    }
}
