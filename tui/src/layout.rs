//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 5;

const CARD_MAX_WIDTH: u16 = 44;
const CARD_MAX_HEIGHT: u16 = 22;
const PASS_BUTTON_WIDTH: u16 = 9;
const LIKE_BUTTON_WIDTH: u16 = 11;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 6;
const EXHAUSTED_WIDTH: u16 = 44;
const EXHAUSTED_HEIGHT: u16 = 11;
const RESET_BUTTON_WIDTH: u16 = 20;

/// Every region the UI draws into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    /// Play area; cards are clipped to it while animating.
    pub main: Rect,
    pub footer: Rect,
    /// Resting position of the front card.
    pub card: Rect,
    pub pass_button: Rect,
    pub like_button: Rect,
    pub hints: Rect,
    /// The exhausted-state panel and its reset button.
    pub exhausted: Rect,
    pub reset_button: Rect,
}

/// Something the mouse can press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Card,
    Pass,
    Like,
    Reset,
}

#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let card = centered(
        main,
        CARD_MAX_WIDTH.min(main.width.saturating_sub(4)),
        CARD_MAX_HEIGHT.min(main.height.saturating_sub(1)),
    );

    let [buttons, hints, _] = Layout::vertical([
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(footer);
    let [pass_button, like_button] = Layout::horizontal([
        Constraint::Length(PASS_BUTTON_WIDTH),
        Constraint::Length(LIKE_BUTTON_WIDTH),
    ])
    .flex(Flex::Center)
    .spacing(BUTTON_GAP)
    .areas(buttons);

    let exhausted = centered(
        main,
        EXHAUSTED_WIDTH.min(main.width),
        EXHAUSTED_HEIGHT.min(main.height),
    );
    let reset_row = Rect {
        y: exhausted
            .bottom()
            .saturating_sub(BUTTON_HEIGHT + 1)
            .max(exhausted.y),
        height: BUTTON_HEIGHT.min(exhausted.height),
        ..exhausted
    };
    let reset_button = centered(
        reset_row,
        RESET_BUTTON_WIDTH.min(reset_row.width),
        reset_row.height,
    );

    ScreenLayout {
        header,
        main,
        footer,
        card,
        pass_button,
        like_button,
        hints,
        exhausted,
        reset_button,
    }
}

/// Resolve a mouse press. Buttons win over the card; the card only accepts
/// presses while browsing and the reset button only while exhausted.
#[must_use]
pub fn hit_test(layout: &ScreenLayout, exhausted: bool, column: u16, row: u16) -> Option<HitTarget> {
    let pos = Position::new(column, row);
    if layout.pass_button.contains(pos) {
        return Some(HitTarget::Pass);
    }
    if layout.like_button.contains(pos) {
        return Some(HitTarget::Like);
    }
    if exhausted {
        return layout
            .reset_button
            .contains(pos)
            .then_some(HitTarget::Reset);
    }
    layout.card.contains(pos).then_some(HitTarget::Card)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{FOOTER_HEIGHT, HEADER_HEIGHT, HitTarget, hit_test, screen_layout};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 40,
    };

    #[test]
    fn regions_stack_vertically() {
        let layout = screen_layout(SCREEN);
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.main.y, HEADER_HEIGHT);
        assert_eq!(layout.footer.bottom(), SCREEN.bottom());
    }

    #[test]
    fn card_is_centered_in_main() {
        let layout = screen_layout(SCREEN);
        assert!(layout.main.contains(layout.card.as_position()));
        let left = layout.card.x - layout.main.x;
        let right = layout.main.right() - layout.card.right();
        assert!(left.abs_diff(right) <= 1);
    }

    #[test]
    fn buttons_sit_side_by_side() {
        let layout = screen_layout(SCREEN);
        assert_eq!(layout.pass_button.y, layout.like_button.y);
        assert!(layout.pass_button.right() < layout.like_button.x);
        assert!(layout.reset_button.y >= layout.exhausted.y);
        assert!(layout.reset_button.bottom() <= layout.exhausted.bottom());
    }

    #[test]
    fn hit_test_routes_presses() {
        let layout = screen_layout(SCREEN);
        let pass = layout.pass_button;
        let like = layout.like_button;
        let card = layout.card;
        let reset = layout.reset_button;

        assert_eq!(hit_test(&layout, false, pass.x, pass.y), Some(HitTarget::Pass));
        assert_eq!(hit_test(&layout, false, like.x + 1, like.y + 1), Some(HitTarget::Like));
        assert_eq!(hit_test(&layout, false, card.x + 2, card.y + 2), Some(HitTarget::Card));
        assert_eq!(hit_test(&layout, true, card.x, card.y), None);
        assert_eq!(hit_test(&layout, true, reset.x + 1, reset.y + 1), Some(HitTarget::Reset));
        assert_eq!(hit_test(&layout, false, 0, 0), None);
    }
}
