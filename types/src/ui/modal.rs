//! Modal animation effects for the detail panel.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

/// Opening animation of the detail panel: it grows from 60% to full size.
#[derive(Debug, Clone)]
pub struct ModalEffect {
    timer: EffectTimer,
}

impl ModalEffect {
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }
}
