//! Multicast event sinks.
//!
//! An [`EventSink`] is an explicit ordered list of subscriber callbacks.
//! Dispatch is synchronous and runs listeners in registration order, each
//! exactly once per event. Listeners must return promptly; work that needs
//! to block should be scheduled elsewhere and the listener return.

use std::sync::{Arc, Mutex};

type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

pub struct EventSink<T> {
    listeners: Mutex<Vec<Listener<T>>>,
}

impl<T> EventSink<T> {
    pub fn new() -> Self {
        Self {
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Append a listener. Listeners are never removed for the lifetime of
    /// the sink.
    pub fn add_listener(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .expect("event sink lock poisoned")
            .push(Arc::new(listener));
    }

    /// Invoke every currently registered listener with `value`, in
    /// registration order. The listener list is snapshotted before the
    /// calls, so a listener may register further listeners without
    /// deadlocking; those only see later events.
    pub fn dispatch(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self
            .listeners
            .lock()
            .expect("event sink lock poisoned")
            .clone();
        for listener in listeners {
            listener(value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .expect("event sink lock poisoned")
            .len()
    }
}

impl<T> Default for EventSink<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_dispatch_reaches_all_listeners_in_order() {
        let sink = EventSink::<u32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&log);
        sink.add_listener(move |v| first.lock().unwrap().push(("first", *v)));
        let second = Arc::clone(&log);
        sink.add_listener(move |v| second.lock().unwrap().push(("second", *v)));

        sink.dispatch(&7);
        assert_eq!(*log.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_each_listener_runs_exactly_once_per_event() {
        let sink = EventSink::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        sink.add_listener(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sink.dispatch(&());
        sink.dispatch(&());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dispatch_with_no_listeners_is_a_no_op() {
        let sink = EventSink::<String>::new();
        sink.dispatch(&"ignored".to_string());
        assert_eq!(sink.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_register_listener_during_dispatch() {
        let sink = Arc::new(EventSink::<u32>::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let inner_sink = Arc::clone(&sink);
        let inner_calls = Arc::clone(&calls);
        sink.add_listener(move |_| {
            let counter = Arc::clone(&inner_calls);
            inner_sink.add_listener(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        });

        // The listener registered mid-dispatch only sees later events.
        sink.dispatch(&1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        sink.dispatch(&2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
