//! Match-3 (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so applications can depend
//! on a single package: `match3::{core, engine, signal, types}`.

pub use match3_core as core;
pub use match3_engine as engine;
pub use match3_signal as signal;
pub use match3_types as types;
