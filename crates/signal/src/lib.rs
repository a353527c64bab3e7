//! Observable attributes for the match-3 engine.
//!
//! Board entities expose their state (type, position, alive flag) as
//! [`Property`] values so that a presentation layer can subscribe and update
//! incrementally. Everything here is single-threaded: notifications run
//! synchronously, on the caller's stack, in the same call as the mutation.
//!
//! - [`Signal<T>`]: observer list with `emit`
//! - [`Property<T>`]: value container that emits on `set`
//! - [`Connection`]: disposal handle returned by `connect`, disconnects on drop

pub mod property;
pub mod signal;

pub use property::Property;
pub use signal::{Connection, ObserverId, Signal};
