//! Resize notification plumbing.
//!
//! The host owns a [`ResizeBus`] and publishes every viewport size
//! change into it. Subscribers hold a [`ResizeSubscription`] guard and
//! are detached when the guard drops, so a discarded camera can be
//! fully reclaimed.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::viewport::ViewportSize;

type Listener = Rc<RefCell<dyn FnMut(ViewportSize)>>;

/// Single-threaded source of viewport-size-changed notifications.
#[derive(Default, Clone)]
pub struct ResizeBus {
    inner: Rc<RefCell<BusInner>>,
}

#[derive(Default)]
struct BusInner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

impl ResizeBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its subscription guard.
    pub fn subscribe(
        &self,
        listener: impl FnMut(ViewportSize) + 'static,
    ) -> ResizeSubscription {
        let listener: Listener = Rc::new(RefCell::new(listener));
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, listener));
        ResizeSubscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers a size change to every live listener.
    ///
    /// Listeners run outside the bus borrow, so a listener may
    /// subscribe or unsubscribe while the bus is dispatching.
    pub fn publish(&self, size: ViewportSize) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            (listener.borrow_mut())(size);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// RAII guard for a bus subscription.
///
/// Dropping the guard detaches the listener; dropping the bus first
/// makes the guard a no-op.
pub struct ResizeSubscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            inner
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}
