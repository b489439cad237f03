//! The `App` state machine: deck cursor, pending swipe, drag and card motion.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use gymmatch_config::SwipeSettings;
use gymmatch_types::ui::{AnimPhase, CardEffect, CardMotion, UiOptions};
use gymmatch_types::{
    Advance, DEFAULT_PX_PER_CELL, Deck, DeckState, DragTracker, Profile, SwipeDirection,
    classify_release,
};

/// A swipe that has been accepted but not yet applied to the deck.
///
/// Each swipe runs its own countdown, so quick repeated presses each advance.
#[derive(Debug, Clone, Copy)]
struct PendingSwipe {
    direction: SwipeDirection,
    /// Card offset at the moment of the swipe; the exit motion starts here.
    from_px: f32,
    remaining: Duration,
}

/// A card that has left the deck and is still animating out.
#[derive(Debug, Clone)]
pub struct OutgoingCard {
    pub profile: Profile,
    effect: CardEffect,
}

impl OutgoingCard {
    #[must_use]
    pub fn motion(&self) -> CardMotion {
        self.effect.motion()
    }
}

#[derive(Debug)]
pub struct App {
    deck: Deck,
    settings: SwipeSettings,
    options: UiOptions,
    drag: DragTracker,
    /// Queued in arrival order, so they expire in order too.
    pending: VecDeque<PendingSwipe>,
    /// Motion of the front card (or the exhausted panel when the deck is empty).
    effect: Option<CardEffect>,
    /// Cards still animating out, oldest first.
    outgoing: Vec<OutgoingCard>,
    last_direction: Option<SwipeDirection>,
    should_quit: bool,
    tick: usize,
    last_frame: Instant,
}

impl App {
    #[must_use]
    pub fn new(profiles: Vec<Profile>, settings: SwipeSettings, options: UiOptions) -> Self {
        let drag = DragTracker::new(settings.px_per_cell.unwrap_or(DEFAULT_PX_PER_CELL));
        let mut app = Self {
            deck: Deck::new(profiles),
            settings,
            options,
            drag,
            pending: VecDeque::new(),
            effect: None,
            outgoing: Vec::new(),
            last_direction: None,
            should_quit: false,
            tick: 0,
            last_frame: Instant::now(),
        };
        app.start_front_effect();
        tracing::info!(profiles = app.deck.len(), "Deck ready");
        app
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn deck_state(&self) -> DeckState {
        self.deck.state()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_exhausted()
    }

    #[must_use]
    pub fn current_profile(&self) -> Option<&Profile> {
        self.deck.current()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.deck.position()
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn last_direction(&self) -> Option<SwipeDirection> {
        self.last_direction
    }

    #[must_use]
    pub fn swipe_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn settings(&self) -> SwipeSettings {
        self.settings
    }

    #[must_use]
    pub fn px_per_cell(&self) -> f32 {
        self.drag.px_per_cell()
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Use the terminal's measured column width unless the config pins one.
    pub fn calibrate_cell_width(&mut self, px_per_cell: f32) {
        if self.settings.px_per_cell.is_some() || self.drag.is_dragging() {
            return;
        }
        self.drag = DragTracker::new(px_per_cell);
        tracing::debug!(px_per_cell = self.drag.px_per_cell(), "Calibrated cell width");
    }

    /// Motion of the front card, or of the exhausted panel.
    #[must_use]
    pub fn card_motion(&self) -> CardMotion {
        if self.drag.is_dragging() {
            return CardMotion::dragged(self.drag.offset_px());
        }
        if let Some(pending) = self.pending.front() {
            return CardMotion::dragged(pending.from_px);
        }
        self.effect
            .as_ref()
            .map_or(CardMotion::REST, CardEffect::motion)
    }

    #[must_use]
    pub fn outgoing(&self) -> &[OutgoingCard] {
        &self.outgoing
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Dismiss the front card. Both directions advance the deck by one.
    ///
    /// Ignored while exhausted. Swipes made while earlier ones are still
    /// pending queue up behind them.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        self.swipe_from(direction, 0.0);
    }

    fn swipe_from(&mut self, direction: SwipeDirection, from_px: f32) {
        if self.deck.is_exhausted() {
            tracing::debug!(direction = direction.as_str(), "Swipe ignored: deck exhausted");
            return;
        }
        tracing::debug!(
            direction = direction.as_str(),
            position = self.deck.position(),
            queued = self.pending.len(),
            "Swipe"
        );
        self.drag.cancel();
        self.effect = None;
        self.last_direction = Some(direction);
        self.pending.push_back(PendingSwipe {
            direction,
            from_px,
            remaining: self.settings.delay,
        });
        self.commit_expired();
    }

    /// Return to the first profile. Only available once the deck is exhausted.
    pub fn reset(&mut self) {
        if !self.deck.is_exhausted() {
            tracing::debug!("Reset ignored: deck not exhausted");
            return;
        }
        self.deck.reset();
        self.pending.clear();
        self.last_direction = None;
        self.start_front_effect();
        tracing::info!("Deck reset");
    }

    pub fn begin_drag(&mut self, column: u16) {
        if self.deck.is_exhausted() || !self.pending.is_empty() {
            return;
        }
        self.effect = None;
        self.drag.begin(column);
    }

    pub fn drag_to(&mut self, column: u16) {
        self.drag.update(column);
    }

    /// Release the drag: past the threshold it swipes, otherwise the card
    /// springs back to rest.
    pub fn end_drag(&mut self, column: u16) {
        let Some(offset_px) = self.drag.release(column) else {
            return;
        };
        match classify_release(offset_px, self.settings.threshold_px) {
            Some(direction) => self.swipe_from(direction, offset_px),
            None => {
                tracing::debug!(offset_px, "Drag released under threshold");
                if !self.options.reduced_motion && offset_px.abs() > f32::EPSILON {
                    self.effect = Some(CardEffect::snap_back(offset_px, self.settings.animation));
                }
            }
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Advance the clock to now.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed);
    }

    /// Advance the clock by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.tick = self.tick.wrapping_add(1);

        for outgoing in &mut self.outgoing {
            outgoing.effect.advance(delta);
        }
        self.outgoing
            .retain(|outgoing| outgoing.effect.phase() != AnimPhase::Completed);
        if let Some(effect) = self.effect.as_mut() {
            effect.advance(delta);
            if effect.phase() == AnimPhase::Completed {
                self.effect = None;
            }
        }
        for pending in &mut self.pending {
            pending.remaining = pending.remaining.saturating_sub(delta);
        }
        self.commit_expired();
    }

    fn commit_expired(&mut self) {
        while self
            .pending
            .front()
            .is_some_and(|pending| pending.remaining.is_zero())
        {
            if let Some(pending) = self.pending.pop_front() {
                self.commit(pending);
            }
        }
    }

    fn commit(&mut self, pending: PendingSwipe) {
        if !self.options.reduced_motion
            && let Some(profile) = self.deck.current()
        {
            self.outgoing.push(OutgoingCard {
                profile: profile.clone(),
                effect: CardEffect::exit(
                    pending.direction,
                    pending.from_px,
                    self.settings.animation,
                ),
            });
        }

        let advance = self.deck.advance();
        match advance {
            Advance::Next { index } => tracing::debug!(index, "Advanced"),
            Advance::Exhausted => tracing::info!("Deck exhausted"),
            Advance::AlreadyExhausted => {
                tracing::debug!("Queued swipe dropped: deck exhausted");
            }
        }
        if self.pending.is_empty() {
            self.last_direction = None;
        }
        if advance != Advance::AlreadyExhausted {
            self.start_front_effect();
        }
    }

    fn start_front_effect(&mut self) {
        self.effect = if self.options.reduced_motion {
            None
        } else if self.deck.is_exhausted() {
            Some(CardEffect::fade_in(self.settings.animation))
        } else {
            Some(CardEffect::enter(self.settings.animation))
        };
    }
}
