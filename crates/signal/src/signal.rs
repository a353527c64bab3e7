//! Single-threaded signal with RAII connections.
//!
//! Observers run synchronously on the emitting call stack. An observer may
//! connect, disconnect, or trigger further emissions while it runs: emission
//! works on a snapshot of observer ids, skips ids that were disconnected in the
//! meantime, and never calls observers connected after it started.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of one observer registered on a [`Signal`].
    pub struct ObserverId;
}

type Slot<T> = Rc<dyn Fn(&T)>;

struct Observers<T> {
    slots: RefCell<SlotMap<ObserverId, Slot<T>>>,
}

/// Type-erased removal, so [`Connection`] does not carry the signal's value type.
trait Detach {
    fn detach(&self, id: ObserverId) -> bool;
    fn contains(&self, id: ObserverId) -> bool;
}

impl<T> Detach for Observers<T> {
    fn detach(&self, id: ObserverId) -> bool {
        self.slots.borrow_mut().remove(id).is_some()
    }

    fn contains(&self, id: ObserverId) -> bool {
        self.slots.borrow().contains_key(id)
    }
}

/// A list of observers notified with `&T` on every [`emit`](Signal::emit).
pub struct Signal<T> {
    observers: Rc<Observers<T>>,
}

impl<T: 'static> Signal<T> {
    pub fn new() -> Self {
        Self {
            observers: Rc::new(Observers {
                slots: RefCell::new(SlotMap::with_key()),
            }),
        }
    }

    /// Register an observer. It stays connected until the returned
    /// [`Connection`] is disconnected or dropped.
    pub fn connect<F>(&self, observer: F) -> Connection
    where
        F: Fn(&T) + 'static,
    {
        let id = self.observers.slots.borrow_mut().insert(Rc::new(observer));
        let target: Weak<dyn Detach> = Rc::downgrade(&self.observers) as Weak<dyn Detach>;
        Connection {
            target: Some(target),
            id,
        }
    }

    /// Remove an observer by id. Returns false if it was not connected.
    pub fn disconnect(&self, id: ObserverId) -> bool {
        self.observers.detach(id)
    }

    pub fn disconnect_all(&self) {
        self.observers.slots.borrow_mut().clear();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.slots.borrow().is_empty()
    }

    /// Call every connected observer with `value`.
    pub fn emit(&self, value: &T) {
        let ids: Vec<ObserverId> = self.observers.slots.borrow().keys().collect();
        tracing::trace!(target: "match3_signal", observers = ids.len(), "emit");

        for id in ids {
            // Clone the slot out so the observer runs without the map borrowed.
            let slot = self.observers.slots.borrow().get(id).cloned();
            if let Some(slot) = slot {
                slot(value);
            }
        }
    }
}

impl<T: 'static> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.observers.slots.borrow().len())
            .finish()
    }
}

/// Disposal handle for one observer.
///
/// Dropping the handle disconnects the observer. Disconnecting is idempotent
/// and is a no-op once the signal itself is gone.
#[must_use = "dropping a Connection disconnects its observer immediately"]
pub struct Connection {
    target: Option<Weak<dyn Detach>>,
    id: ObserverId,
}

impl Connection {
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// True while the observer is registered on a live signal.
    pub fn is_connected(&self) -> bool {
        self.target
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|observers| observers.contains(self.id))
            .unwrap_or(false)
    }

    pub fn disconnect(&mut self) {
        if let Some(observers) = self.target.take().and_then(|w| w.upgrade()) {
            observers.detach(self.id);
        }
    }

    /// Release the handle without disconnecting: the observer then lives as
    /// long as the signal, or until [`Signal::disconnect`] is called with the id.
    pub fn detach(mut self) -> ObserverId {
        self.target = None;
        self.id
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}
