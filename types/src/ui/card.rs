//! Card motion effects: enter, exit, snap-back and the exhausted fade-in.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer, ease_out_cubic};
use crate::SwipeDirection;

pub const DEFAULT_CARD_ANIMATION: Duration = Duration::from_millis(300);

/// Horizontal distance a dismissed card travels.
pub const EXIT_OFFSET_PX: f32 = 500.0;
/// Tilt of a dismissed card at the end of its exit.
pub const EXIT_ROTATION_DEG: f32 = 25.0;
/// Starting scale of a card that is entering.
pub const ENTER_SCALE: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEffectKind {
    Enter,
    Exit {
        direction: SwipeDirection,
        from_px: f32,
    },
    SnapBack {
        from_px: f32,
    },
    FadeIn,
}

/// Where and how a card is drawn at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    pub offset_px: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl CardMotion {
    pub const REST: CardMotion = CardMotion {
        offset_px: 0.0,
        rotation_deg: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// A card following a live drag. Tilts proportionally to the drag
    /// distance, reaching full exit tilt at the exit offset.
    #[must_use]
    pub fn dragged(offset_px: f32) -> Self {
        Self {
            offset_px,
            rotation_deg: (offset_px / EXIT_OFFSET_PX).clamp(-1.0, 1.0) * EXIT_ROTATION_DEG,
            ..Self::REST
        }
    }
}

impl Default for CardMotion {
    fn default() -> Self {
        Self::REST
    }
}

#[derive(Debug, Clone)]
pub struct CardEffect {
    kind: CardEffectKind,
    timer: EffectTimer,
}

impl CardEffect {
    #[must_use]
    pub fn enter(duration: Duration) -> Self {
        Self::new(CardEffectKind::Enter, duration)
    }

    #[must_use]
    pub fn exit(direction: SwipeDirection, from_px: f32, duration: Duration) -> Self {
        Self::new(CardEffectKind::Exit { direction, from_px }, duration)
    }

    #[must_use]
    pub fn snap_back(from_px: f32, duration: Duration) -> Self {
        Self::new(CardEffectKind::SnapBack { from_px }, duration)
    }

    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self::new(CardEffectKind::FadeIn, duration)
    }

    fn new(kind: CardEffectKind, duration: Duration) -> Self {
        Self {
            kind,
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn kind(&self) -> CardEffectKind {
        self.kind
    }

    #[must_use]
    pub fn motion(&self) -> CardMotion {
        let t = ease_out_cubic(self.timer.progress());
        match self.kind {
            CardEffectKind::Enter => CardMotion {
                scale: ENTER_SCALE + (1.0 - ENTER_SCALE) * t,
                opacity: t,
                ..CardMotion::REST
            },
            CardEffectKind::Exit { direction, from_px } => {
                let target = direction.sign() * EXIT_OFFSET_PX;
                let start = CardMotion::dragged(from_px);
                let end_rotation = direction.sign() * EXIT_ROTATION_DEG;
                CardMotion {
                    offset_px: from_px + (target - from_px) * t,
                    rotation_deg: start.rotation_deg + (end_rotation - start.rotation_deg) * t,
                    scale: 1.0,
                    opacity: 1.0 - t,
                }
            }
            CardEffectKind::SnapBack { from_px } => CardMotion::dragged(from_px * (1.0 - t)),
            CardEffectKind::FadeIn => CardMotion {
                opacity: t,
                ..CardMotion::REST
            },
        }
    }
}
