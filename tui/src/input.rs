//! Input handling for the CyberElement TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use cyberelement_engine::{App, DetailClient, Direction, element_at};

use crate::layout::ScreenLayout;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    /// Must be called within a tokio runtime.
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
        // Close first so a reader blocked on a full channel wakes up.
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
                    // Bounded queue: apply backpressure instead of dropping events.
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

/// Apply queued input to `app`. Returns `true` once the app should quit.
///
/// `viewport` is the current terminal area, used to hit-test mouse clicks.
pub fn handle_events<C>(app: &mut App<C>, input: &mut InputPump, viewport: Rect) -> Result<bool>
where
    C: DetailClient + 'static,
{
    let layout = ScreenLayout::new(viewport);
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        apply_event(app, &ev, &layout);
        if app.should_quit() {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

pub(crate) fn apply_event<C>(app: &mut App<C>, ev: &Event, layout: &ScreenLayout)
where
    C: DetailClient + 'static,
{
    match ev {
        Event::Key(key) => apply_key(app, *key),
        Event::Mouse(mouse) => apply_mouse(app, *mouse, layout),
        _ => {}
    }
}

fn apply_key<C>(app: &mut App<C>, key: KeyEvent)
where
    C: DetailClient + 'static,
{
    if key.kind == KeyEventKind::Release {
        return;
    }
    let repeat = key.kind == KeyEventKind::Repeat;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') if !repeat => {
            if app.is_panel_open() {
                app.close();
            } else {
                app.request_quit();
            }
        }
        KeyCode::Esc | KeyCode::Char('x') => app.close(),
        _ if app.is_panel_open() => {}
        KeyCode::Enter | KeyCode::Char(' ') if !repeat => {
            if app.select_at_cursor().is_none() {
                debug!("Cursor is on an empty cell");
            }
        }
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor(Direction::Right),
        _ => {}
    }
}

fn apply_mouse<C>(app: &mut App<C>, mouse: MouseEvent, layout: &ScreenLayout)
where
    C: DetailClient + 'static,
{
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if app.is_panel_open() {
        let inside = layout
            .panel
            .contains(Position::new(mouse.column, mouse.row));
        if !inside {
            app.close();
        }
        return;
    }

    let Some(position) = layout
        .grid
        .and_then(|grid| grid.cell_at(mouse.column, mouse.row))
    else {
        return;
    };
    if let Some(element) = element_at(position) {
        app.select(element);
    }
}
