//! Engine layer - rules built on top of the board
//!
//! The board in `match3-core` only knows single steps: one match removal pass,
//! one gravity pass. This crate composes them into play:
//!
//! - [`cascade`]: settle a board, resolve chained removals with combo scoring
//! - [`swap`]: validated player swaps, hints, dead-board detection
//! - [`scoring`]: points per round
//! - [`config`]: [`GameConfig`] read from `MATCH3_*` environment variables
//!
//! Rejections are plain values ([`SwapError`], [`EngineError`]) with stable
//! `code()` strings.

pub mod cascade;
pub mod config;
pub mod error;
pub mod scoring;
pub mod swap;

pub use cascade::{resolve_cascade, settle, CascadeReport, CascadeRound, SettleReport};
pub use config::{GameConfig, OutputFormat};
pub use error::{EngineError, SwapError};
pub use scoring::{calculate_round_score, RoundScore};
pub use swap::{find_hint, has_moves, play_swap, try_swap};
