//! Input handling for the GymMatch TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use gymmatch_engine::{App, SwipeDirection};

use crate::layout::{HitTarget, hit_test, screen_layout};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the render loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it to `app`. Returns `true` when the app
/// should quit.
///
/// `area` is the full terminal area of the last drawn frame; mouse presses
/// are resolved against it.
pub fn handle_events(app: &mut App, input: &mut InputPump, area: Rect) -> Result<bool> {
    for _ in 0..MAX_EVENTS_PER_FRAME {
        let msg = match input.rx.try_recv() {
            Ok(msg) => msg,
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input thread disconnected"));
            }
        };
        match msg {
            InputMsg::Event(event) => apply_event(app, &event, area),
            InputMsg::Error(err) => return Err(anyhow!("terminal input error: {err}")),
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event to `app`.
pub fn apply_event(app: &mut App, event: &Event, area: Rect) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, *key),
        Event::Mouse(mouse) => handle_mouse(app, *mouse, area),
        Event::FocusLost => app.cancel_drag(),
        _ => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ if app.is_exhausted() => {
            if matches!(
                key.code,
                KeyCode::Char('r' | ' ') | KeyCode::Enter
            ) {
                app.reset();
            }
        }
        KeyCode::Left | KeyCode::Char('h' | 'x') => app.swipe(SwipeDirection::Left),
        KeyCode::Right | KeyCode::Char('l' | ' ') | KeyCode::Enter => {
            app.swipe(SwipeDirection::Right);
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = screen_layout(area);
            let target = hit_test(&layout, app.is_exhausted(), mouse.column, mouse.row);
            debug!(?target, column = mouse.column, row = mouse.row, "Mouse press");
            match target {
                Some(HitTarget::Pass) => app.swipe(SwipeDirection::Left),
                Some(HitTarget::Like) => app.swipe(SwipeDirection::Right),
                Some(HitTarget::Reset) => app.reset(),
                Some(HitTarget::Card) => app.begin_drag(mouse.column),
                None => {}
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(mouse.column),
        _ => {}
    }
}
