//! The swipe-index controller.
//!
//! A deck is an ordered list of profiles plus a cursor. It is a two-state
//! automaton: `Browsing` while the cursor points at a profile, `Exhausted`
//! once it has moved past the last one. Advancing and resetting are the only
//! transitions.

use crate::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    Browsing { index: usize },
    Exhausted,
}

/// Outcome of [`Deck::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the profile at `index`.
    Next { index: usize },
    /// This advance moved past the last profile.
    Exhausted,
    /// The deck was already exhausted; nothing changed.
    AlreadyExhausted,
}

#[derive(Debug, Clone)]
pub struct Deck {
    profiles: Vec<Profile>,
    /// Invariant: `position <= profiles.len()`.
    position: usize,
}

impl Deck {
    #[must_use]
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            position: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> DeckState {
        if self.position < self.profiles.len() {
            DeckState::Browsing {
                index: self.position,
            }
        } else {
            DeckState::Exhausted
        }
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state(), DeckState::Exhausted)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.position)
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.profiles.len() - self.position
    }

    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Move to the next profile. Saturates at the end of the deck.
    pub fn advance(&mut self) -> Advance {
        if self.is_exhausted() {
            return Advance::AlreadyExhausted;
        }
        self.position += 1;
        match self.state() {
            DeckState::Browsing { index } => Advance::Next { index },
            DeckState::Exhausted => Advance::Exhausted,
        }
    }

    pub fn reset(&mut self) {
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{Advance, Deck, DeckState};
    use crate::Profile;

    fn deck() -> Deck {
        Deck::new(Profile::builtin_roster())
    }

    #[test]
    fn starts_browsing_first_profile() {
        let deck = deck();
        assert_eq!(deck.state(), DeckState::Browsing { index: 0 });
        assert_eq!(deck.current().map(|p| p.name.as_str()), Some("Mert"));
        assert_eq!(deck.remaining(), 3);
    }

    #[test]
    fn advance_walks_then_exhausts() {
        let mut deck = deck();
        assert_eq!(deck.advance(), Advance::Next { index: 1 });
        assert_eq!(deck.current().map(|p| p.name.as_str()), Some("Selin"));
        assert_eq!(deck.advance(), Advance::Next { index: 2 });
        assert_eq!(deck.advance(), Advance::Exhausted);
        assert_eq!(deck.state(), DeckState::Exhausted);
        assert!(deck.current().is_none());
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn advance_saturates_when_exhausted() {
        let mut deck = deck();
        for _ in 0..3 {
            deck.advance();
        }
        assert_eq!(deck.advance(), Advance::AlreadyExhausted);
        assert_eq!(deck.position(), deck.len());
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut deck = deck();
        for _ in 0..3 {
            deck.advance();
        }
        deck.reset();
        assert_eq!(deck.state(), DeckState::Browsing { index: 0 });
        assert_eq!(deck.current().map(|p| p.id), Some(1));
    }

    #[test]
    fn reset_mid_deck_also_rewinds() {
        let mut deck = deck();
        deck.advance();
        deck.reset();
        assert_eq!(deck.position(), 0);
    }

    #[test]
    fn empty_deck_is_always_exhausted() {
        let mut deck = Deck::new(Vec::new());
        assert!(deck.is_exhausted());
        assert_eq!(deck.advance(), Advance::AlreadyExhausted);
        deck.reset();
        assert!(deck.is_exhausted());
    }
}
