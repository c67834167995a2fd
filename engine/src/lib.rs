//! Core engine for CyberElement - selection state machine and fetch orchestration.
//!
//! This crate contains the App state machine without TUI dependencies.

use std::sync::Arc;
use std::time::{Duration, Instant};

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;

pub use cyberelement_providers::{
    self, DetailClient, DetailRecord, FetchError, FetchErrorKind, fallback_for,
    try_fetch_details,
};
pub use cyberelement_types::ui::{AnimPhase, DetailReveal, ModalEffect, UiOptions};
pub use cyberelement_types::{
    DetailField, ElementRecord, GridPosition, ModelName, element_at, element_by_number,
};

mod navigation;
mod selection;

pub use navigation::Direction;
pub use selection::{DetailOrigin, RequestToken, SelectionState};

use selection::{PendingFetch, TokenSource};

const PANEL_OPEN_DURATION: Duration = Duration::from_millis(700);

/// A finished fetch, tagged with the selection it was issued for.
#[derive(Debug)]
struct FetchOutcome {
    token: RequestToken,
    result: Result<DetailRecord, FetchError>,
}

pub struct App<C> {
    client: Arc<C>,
    state: SelectionState,
    pending: Option<PendingFetch>,
    tokens: TokenSource,
    fetch_tx: mpsc::UnboundedSender<FetchOutcome>,
    fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
    cursor: GridPosition,
    options: UiOptions,
    model: ModelName,
    should_quit: bool,
    tick: usize,
    /// Frame timing for animations.
    last_frame: Instant,
    /// Active panel animation.
    modal_effect: Option<ModalEffect>,
}

impl<C> App<C>
where
    C: DetailClient + 'static,
{
    pub fn new(client: Arc<C>, options: UiOptions, model: ModelName) -> Self {
        let (fetch_tx, fetch_rx) = mpsc::unbounded_channel();
        Self {
            client,
            state: SelectionState::Idle,
            pending: None,
            tokens: TokenSource::default(),
            fetch_tx,
            fetch_rx,
            cursor: navigation::HOME,
            options,
            model,
            should_quit: false,
            tick: 0,
            last_frame: Instant::now(),
            modal_effect: None,
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Select `element` and start fetching its details in the background.
    ///
    /// Must be called within a tokio runtime.
    pub fn select(&mut self, element: &'static ElementRecord) -> RequestToken {
        let token = self.begin_selection(element);

        let client = Arc::clone(&self.client);
        let tx = self.fetch_tx.clone();
        let (abort_handle, abort_registration) = AbortHandle::new_pair();
        let task = async move {
            let result = try_fetch_details(client.as_ref(), element).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(FetchOutcome { token, result });
        };
        tokio::spawn(Abortable::new(task, abort_registration));

        if let Some(pending) = self.pending.as_mut() {
            pending.abort_handle = Some(abort_handle);
        }
        token
    }

    /// Enter `Loading` for `element` without issuing a fetch.
    ///
    /// Any previous selection is superseded: its fetch is aborted and its
    /// result, should it still arrive, is discarded.
    pub fn begin_selection(&mut self, element: &'static ElementRecord) -> RequestToken {
        if let Some(previous) = self.pending.take() {
            tracing::debug!(token = previous.token.value(), "Superseding in-flight fetch");
            previous.cancel();
        }

        let token = self.tokens.mint();
        tracing::info!(
            element = element.symbol,
            number = element.number,
            token = token.value(),
            "Element selected"
        );

        self.state = SelectionState::Loading { element, token };
        self.pending = Some(PendingFetch {
            token,
            abort_handle: None,
        });
        self.cursor = element.grid_position();
        self.modal_effect = if self.options.reduced_motion {
            None
        } else {
            Some(ModalEffect::pop_scale(PANEL_OPEN_DURATION))
        };
        self.last_frame = Instant::now();
        token
    }

    /// Apply a fetch result. Returns `false` if `token` is not the current
    /// selection's, in which case the result is dropped.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        result: Result<DetailRecord, FetchError>,
    ) -> bool {
        let element = match &self.state {
            SelectionState::Loading {
                element,
                token: current,
            } if *current == token => *element,
            _ => {
                tracing::debug!(token = token.value(), "Discarding stale fetch result");
                return false;
            }
        };
        self.pending = None;

        let (detail, origin) = match result {
            Ok(detail) => (detail, DetailOrigin::Remote),
            Err(err) => (
                fallback_for(element, &err),
                DetailOrigin::Fallback(err.kind()),
            ),
        };

        let reveal = if self.options.reduced_motion {
            DetailReveal::completed(&detail)
        } else {
            DetailReveal::new(&detail)
        };
        self.state = SelectionState::Loaded {
            element,
            detail,
            origin,
            reveal,
        };
        true
    }

    /// Drain finished background fetches. Returns how many were applied.
    pub fn process_fetch_results(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(FetchOutcome { token, result }) = self.fetch_rx.try_recv() {
            if self.complete_fetch(token, result) {
                applied += 1;
            }
        }
        applied
    }

    /// Return to `Idle` from any state.
    pub fn close(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        if !matches!(self.state, SelectionState::Idle) {
            tracing::debug!("Detail panel closed");
        }
        self.state = SelectionState::Idle;
        self.modal_effect = None;
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn selected(&self) -> Option<&'static ElementRecord> {
        self.state.selected()
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailRecord> {
        self.state.detail()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        !matches!(self.state, SelectionState::Idle)
    }

    // ------------------------------------------------------------------
    // Grid navigation
    // ------------------------------------------------------------------

    #[must_use]
    pub fn cursor(&self) -> GridPosition {
        self.cursor
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = navigation::step(self.cursor, direction);
    }

    /// Select the element under the cursor, if any.
    pub fn select_at_cursor(&mut self) -> Option<RequestToken> {
        let element = element_at(self.cursor)?;
        Some(self.select(element))
    }

    /// Element shown in grid cell (`row`, `col`), both 1-based.
    #[must_use]
    pub fn element_at_cell(&self, row: u8, col: u8) -> Option<&'static ElementRecord> {
        element_at(GridPosition::new(row, col))
    }

    // ------------------------------------------------------------------
    // Frame timing and animation
    // ------------------------------------------------------------------

    /// Advance one frame: poll fetches and step animations.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.process_fetch_results();
        let elapsed = self.frame_elapsed();
        self.advance_animations(elapsed);
    }

    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Step the panel animation and the text reveal by `elapsed`.
    pub fn advance_animations(&mut self, elapsed: Duration) {
        if let Some(effect) = self.modal_effect.as_mut() {
            effect.advance(elapsed);
            if effect.phase() == AnimPhase::Completed {
                self.modal_effect = None;
            }
        }
        if let SelectionState::Loaded { reveal, .. } = &mut self.state {
            reveal.advance(elapsed);
        }
    }

    #[must_use]
    pub fn modal_effect(&self) -> Option<&ModalEffect> {
        self.modal_effect.as_ref()
    }

    // ------------------------------------------------------------------
    // Misc
    // ------------------------------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn model(&self) -> &ModelName {
        &self.model
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
