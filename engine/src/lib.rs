//! Core engine for GymMatch - deck state machine and card motion.
//!
//! This crate contains the App state machine without TUI dependencies.

mod app;

pub use app::{App, OutgoingCard};
pub use gymmatch_config::{GymMatchConfig, SwipeSettings};
pub use gymmatch_types::ui::{CardMotion, UiOptions};
pub use gymmatch_types::{DeckState, Profile, Stat, SwipeDirection};
