//! Observable value container.

use std::cell::RefCell;
use std::fmt;

use crate::signal::{Connection, Signal};

/// A value that notifies its observers synchronously whenever it is set.
///
/// Observers receive the new value. They run after the value is stored and
/// without any internal borrow held, so an observer may read the property or
/// even set it again.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use match3_signal::Property;
///
/// let prop = Property::new(0);
/// let seen = Rc::new(Cell::new(0));
/// let s = seen.clone();
/// let conn = prop.connect(move |v| s.set(*v));
///
/// prop.set(7);
/// assert_eq!(seen.get(), 7);
///
/// drop(conn);
/// prop.set(8);
/// assert_eq!(seen.get(), 7);
/// ```
pub struct Property<T> {
    value: RefCell<T>,
    changed: Signal<T>,
}

impl<T: Clone + 'static> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            changed: Signal::new(),
        }
    }

    /// Current value (cloned).
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Access the current value without cloning.
    ///
    /// The closure must not set this property.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.value.borrow())
    }

    /// Replace the value and notify every observer, even if the value is unchanged.
    pub fn set(&self, value: T) {
        let current = {
            let mut slot = self.value.borrow_mut();
            *slot = value;
            slot.clone()
        };
        self.changed.emit(&current);
    }

    /// Replace the value without notification.
    pub fn set_silent(&self, value: T) {
        *self.value.borrow_mut() = value;
    }

    /// Observe every future [`set`](Self::set).
    pub fn connect<F>(&self, observer: F) -> Connection
    where
        F: Fn(&T) + 'static,
    {
        self.changed.connect(observer)
    }

    /// Underlying change signal.
    pub fn signal(&self) -> &Signal<T> {
        &self.changed
    }

    pub fn observer_count(&self) -> usize {
        self.changed.observer_count()
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    /// Set the value only when it differs from the current one. Returns `true`
    /// (and notifies) if it changed.
    pub fn set_if_changed(&self, value: T) -> bool {
        if *self.value.borrow() == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: Clone + Default + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Cloning copies the value; observers stay with the original.
impl<T: Clone + 'static> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self::new(self.get())
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.borrow())
            .field("observers", &self.changed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_set_notifies_even_when_equal() {
        let prop = Property::new(3);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _c = prop.connect(move |_| h.set(h.get() + 1));

        prop.set(3);
        prop.set(3);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_set_if_changed() {
        let prop = Property::new(3);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _c = prop.connect(move |_| h.set(h.get() + 1));

        assert!(!prop.set_if_changed(3));
        assert!(prop.set_if_changed(4));
        assert_eq!(hits.get(), 1);
        assert_eq!(prop.get(), 4);
    }

    #[test]
    fn test_set_silent() {
        let prop = Property::new(String::from("a"));
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _c = prop.connect(move |_| h.set(h.get() + 1));

        prop.set_silent("b".to_string());
        assert_eq!(prop.get(), "b");
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_observer_can_read_property() {
        let prop = Rc::new(Property::new(1));
        let seen = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&prop);
        let s = seen.clone();
        let _c = prop.connect(move |_| {
            if let Some(p) = weak.upgrade() {
                s.set(p.get());
            }
        });

        prop.set(9);
        assert_eq!(seen.get(), 9);
    }

    #[test]
    fn test_clone_does_not_share_observers() {
        let prop = Property::new(1);
        let _c = prop.connect(|_| {});
        let copy = prop.clone();
        assert_eq!(copy.get(), 1);
        assert_eq!(copy.observer_count(), 0);
        assert_eq!(prop.observer_count(), 1);
    }
}
