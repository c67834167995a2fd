//! Selection state machine types.

use futures_util::future::AbortHandle;

use cyberelement_providers::{DetailRecord, FetchErrorKind};
use cyberelement_types::ElementRecord;
use cyberelement_types::ui::DetailReveal;

/// Identifies one selection's fetch. Minted fresh for every selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub(crate) struct TokenSource {
    next: u64,
}

impl TokenSource {
    pub(crate) fn mint(&mut self) -> RequestToken {
        self.next = self.next.wrapping_add(1);
        RequestToken(self.next)
    }
}

/// Where the shown record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrigin {
    Remote,
    /// The fetch failed and the sentinel record is shown instead.
    Fallback(FetchErrorKind),
}

impl DetailOrigin {
    #[must_use]
    pub fn is_fallback(self) -> bool {
        matches!(self, DetailOrigin::Fallback(_))
    }
}

/// In-flight fetch bookkeeping.
#[derive(Debug)]
pub(crate) struct PendingFetch {
    pub(crate) token: RequestToken,
    /// `None` when the fetch is driven externally via `begin_selection`.
    pub(crate) abort_handle: Option<AbortHandle>,
}

impl PendingFetch {
    pub(crate) fn cancel(self) {
        if let Some(handle) = self.abort_handle {
            handle.abort();
        }
    }
}

/// `Idle -> Loading -> Loaded`, and back to `Idle` on close.
///
/// A detail record only exists in `Loaded`, so `loading` with a record, or a
/// partial record, cannot be represented.
#[derive(Debug)]
pub enum SelectionState {
    Idle,
    Loading {
        element: &'static ElementRecord,
        token: RequestToken,
    },
    Loaded {
        element: &'static ElementRecord,
        detail: DetailRecord,
        origin: DetailOrigin,
        /// Typing reveal; dropped with the state.
        reveal: DetailReveal,
    },
}

impl SelectionState {
    #[must_use]
    pub fn selected(&self) -> Option<&'static ElementRecord> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Loading { element, .. } | SelectionState::Loaded { element, .. } => {
                Some(*element)
            }
        }
    }

    #[must_use]
    pub fn detail(&self) -> Option<&DetailRecord> {
        match self {
            SelectionState::Loaded { detail, .. } => Some(detail),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SelectionState::Loading { .. })
    }

    #[must_use]
    pub fn origin(&self) -> Option<DetailOrigin> {
        match self {
            SelectionState::Loaded { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    #[must_use]
    pub fn reveal(&self) -> Option<&DetailReveal> {
        match self {
            SelectionState::Loaded { reveal, .. } => Some(reveal),
            _ => None,
        }
    }
}
