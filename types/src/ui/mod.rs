//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod card;
mod options;

pub use animation::{AnimPhase, ease_out_cubic};
pub use card::{
    CardEffect, CardEffectKind, CardMotion, DEFAULT_CARD_ANIMATION, ENTER_SCALE, EXIT_OFFSET_PX,
    EXIT_ROTATION_DEG,
};
pub use options::UiOptions;
