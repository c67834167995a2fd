//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod modal;
mod reveal;

pub use animation::AnimPhase;
pub use modal::ModalEffect;
pub use reveal::DetailReveal;

/// Accessibility and rendering preferences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Disable modal animations and the incremental text reveal.
    pub reduced_motion: bool,
}
