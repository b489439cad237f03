//! Swipe gestures: direction, release threshold and drag tracking.

use serde::{Deserialize, Serialize};

/// Horizontal release offset (in pixels) a drag must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 100.0;

/// Pixels per terminal column when the terminal does not report its pixel size.
pub const DEFAULT_PX_PER_CELL: f32 = 8.0;

/// Which way a card left the screen.
///
/// Both directions advance the deck by one; the direction only picks the side
/// the exit animation flies towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// `-1.0` for left, `1.0` for right.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Left => -1.0,
            SwipeDirection::Right => 1.0,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SwipeDirection::Left => "left",
            SwipeDirection::Right => "right",
        }
    }
}

/// Decide whether a drag released at `offset_px` is a swipe.
///
/// The comparison is strict: a release exactly on the threshold snaps back.
#[must_use]
pub fn classify_release(offset_px: f32, threshold_px: f32) -> Option<SwipeDirection> {
    if offset_px > threshold_px {
        Some(SwipeDirection::Right)
    } else if offset_px < -threshold_px {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    Idle,
    Dragging { origin: u16, current: u16 },
}

/// Tracks a horizontal mouse drag in terminal columns and reports it in pixels.
#[derive(Debug, Clone, Copy)]
pub struct DragTracker {
    state: DragState,
    px_per_cell: f32,
}

impl DragTracker {
    #[must_use]
    pub fn new(px_per_cell: f32) -> Self {
        let px_per_cell = if px_per_cell.is_finite() && px_per_cell > 0.0 {
            px_per_cell
        } else {
            DEFAULT_PX_PER_CELL
        };
        Self {
            state: DragState::Idle,
            px_per_cell,
        }
    }

    #[must_use]
    pub fn px_per_cell(&self) -> f32 {
        self.px_per_cell
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn begin(&mut self, column: u16) {
        self.state = DragState::Dragging {
            origin: column,
            current: column,
        };
    }

    /// Move the drag to `column`. Ignored when no drag is in progress.
    pub fn update(&mut self, column: u16) {
        if let DragState::Dragging { origin, .. } = self.state {
            self.state = DragState::Dragging {
                origin,
                current: column,
            };
        }
    }

    /// Finish the drag at `column`, returning the release offset in pixels.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn release(&mut self, column: u16) -> Option<f32> {
        self.update(column);
        let offset = match self.state {
            DragState::Idle => return None,
            DragState::Dragging { .. } => self.offset_px(),
        };
        self.state = DragState::Idle;
        Some(offset)
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Current horizontal displacement in pixels (`0.0` when idle).
    #[must_use]
    pub fn offset_px(&self) -> f32 {
        match self.state {
            DragState::Idle => 0.0,
            DragState::Dragging { origin, current } => {
                (f32::from(current) - f32::from(origin)) * self.px_per_cell
            }
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PX_PER_CELL)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PX_PER_CELL, DragTracker, SWIPE_THRESHOLD_PX, SwipeDirection, classify_release};

    #[test]
    fn release_beyond_threshold_swipes() {
        assert_eq!(
            classify_release(101.0, SWIPE_THRESHOLD_PX),
            Some(SwipeDirection::Right)
        );
        assert_eq!(
            classify_release(-101.0, SWIPE_THRESHOLD_PX),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn release_on_threshold_snaps_back() {
        assert_eq!(classify_release(100.0, SWIPE_THRESHOLD_PX), None);
        assert_eq!(classify_release(-100.0, SWIPE_THRESHOLD_PX), None);
        assert_eq!(classify_release(0.0, SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn drag_offset_scales_by_cell_width() {
        let mut drag = DragTracker::new(10.0);
        drag.begin(20);
        drag.update(32);
        assert!((drag.offset_px() - 120.0).abs() < f32::EPSILON);
        assert_eq!(drag.release(32), Some(120.0));
        assert!(!drag.is_dragging());
        assert!(drag.offset_px().abs() < f32::EPSILON);
    }

    #[test]
    fn leftward_drag_is_negative() {
        let mut drag = DragTracker::default();
        drag.begin(40);
        let offset = drag.release(25).expect("drag in progress");
        assert!((offset - (-15.0 * DEFAULT_PX_PER_CELL)).abs() < f32::EPSILON);
        assert_eq!(
            classify_release(offset, SWIPE_THRESHOLD_PX),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn release_without_begin_is_none() {
        let mut drag = DragTracker::default();
        drag.update(10);
        assert_eq!(drag.release(12), None);
    }

    #[test]
    fn invalid_cell_width_falls_back() {
        assert!((DragTracker::new(0.0).px_per_cell() - DEFAULT_PX_PER_CELL).abs() < f32::EPSILON);
        assert!(
            (DragTracker::new(f32::NAN).px_per_cell() - DEFAULT_PX_PER_CELL).abs() < f32::EPSILON
        );
    }

    #[test]
    fn direction_sign() {
        assert!(SwipeDirection::Left.sign() < 0.0);
        assert!(SwipeDirection::Right.sign() > 0.0);
    }
}
