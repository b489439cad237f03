//! End-to-end rendering tests: drive the app, draw through a vt100 virtual
//! terminal, and inspect the screen.


use std::time::Duration;

use ratatui::Terminal;

use gymmatch_engine::{App, Profile, SwipeDirection, SwipeSettings, UiOptions};
use vt100_backend::VT100Backend;

const SETTLE: Duration = Duration::from_millis(400);

fn app_with(options: UiOptions) -> App {
    App::new(
        Profile::builtin_roster(),
        SwipeSettings {
            px_per_cell: Some(8.0),
            ..SwipeSettings::default()
        },
        options,
    )
}

fn settled_app(options: UiOptions) -> App {
    let mut app = app_with(options);
    app.advance(SETTLE);
    app
}

fn render(app: &App, width: u16, height: u16) -> Terminal<VT100Backend> {
    let mut terminal =
        Terminal::new(VT100Backend::new(width, height)).expect("failed to create terminal");
    terminal
        .draw(|frame| gymmatch_tui::draw(frame, app))
        .expect("failed to draw");
    terminal
}

fn swipe_and_settle(app: &mut App, direction: SwipeDirection) {
    app.swipe(direction);
    app.advance(SETTLE);
    app.advance(SETTLE);
}

#[test]
fn first_card_shows_profile_and_chrome() {
    let app = settled_app(UiOptions::default());
    let terminal = render(&app, 80, 40);
    let screen = terminal.backend().contents();

    assert!(screen.contains("GYMMATCH"));
    assert!(screen.contains("Mert, 26"));
    assert!(screen.contains("Bodybuilding"));
    assert!(screen.contains("2 km nearby"));
    assert!(screen.contains("BENCH"));
    assert!(screen.contains("140kg"));
    assert!(screen.contains("✕"));
    assert!(screen.contains("♥"));
    assert!(screen.contains("pass"));
}

#[test]
fn entering_card_is_invisible_on_first_frame() {
    let app = app_with(UiOptions::default());
    let terminal = render(&app, 80, 40);
    assert!(!terminal.backend().contents().contains("Mert, 26"));
}

#[test]
fn swiping_shows_next_profile() {
    let mut app = settled_app(UiOptions::default());
    swipe_and_settle(&mut app, SwipeDirection::Left);
    let terminal = render(&app, 80, 40);
    let screen = terminal.backend().contents();

    assert!(screen.contains("Selin, 24"));
    assert!(screen.contains("DEADLIFT"));
    assert!(!screen.contains("Mert, 26"));
}

#[test]
fn exhausted_screen_offers_reset() {
    let mut app = settled_app(UiOptions::default());
    for _ in 0..3 {
        swipe_and_settle(&mut app, SwipeDirection::Right);
    }
    let terminal = render(&app, 80, 40);
    let screen = terminal.backend().contents();

    assert!(screen.contains("You've matched with every athlete nearby!"));
    assert!(screen.contains("BROWSE AGAIN"));
    assert!(screen.contains("browse again"));
    assert!(!screen.contains("Can, 29"));

    app.reset();
    app.advance(SETTLE);
    let terminal = render(&app, 80, 40);
    assert!(terminal.backend().contents().contains("Mert, 26"));
}

#[test]
fn ascii_mode_avoids_unicode_glyphs() {
    let app = settled_app(UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    });
    let terminal = render(&app, 80, 40);
    let screen = terminal.backend().contents();

    assert!(screen.contains("|=| GYMMATCH"));
    assert!(screen.contains("<3"));
    assert!(!screen.contains("♥"));
}

#[test]
fn dragged_card_follows_the_pointer() {
    let mut app = settled_app(UiOptions::default());
    let at_rest = render(&app, 80, 40)
        .backend()
        .find("Mert, 26")
        .expect("headline visible at rest");

    app.begin_drag(30);
    app.drag_to(40);
    let dragged = render(&app, 80, 40)
        .backend()
        .find("Mert, 26")
        .expect("headline visible while dragging");

    assert_eq!(dragged.0, at_rest.0);
    assert!(
        dragged.1 >= at_rest.1 + 8,
        "expected headline to move right: {at_rest:?} -> {dragged:?}"
    );
}

#[test]
fn reduced_motion_draws_immediately() {
    let app = app_with(UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    });
    let terminal = render(&app, 80, 40);
    assert!(terminal.backend().contents().contains("Mert, 26"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let app = settled_app(UiOptions::default());
    let terminal = render(&app, 20, 6);
    assert_eq!(terminal.backend().rows().len(), 6);
}
