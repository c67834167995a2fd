//! Panel animation effects.

use ratatui::layout::Rect;

use cyberelement_engine::{AnimPhase, ModalEffect};

/// Scale the panel's resting rectangle for the current animation frame.
#[must_use]
pub fn apply_modal_effect(effect: &ModalEffect, base: Rect) -> Rect {
    let t = ease_out_cubic(progress(effect.phase()));
    scale_rect(base, 0.6 + 0.4 * t)
}

fn progress(phase: AnimPhase) -> f32 {
    match phase {
        AnimPhase::Running { progress } => progress,
        AnimPhase::Completed => 1.0,
    }
}

fn scale_rect(base: Rect, scale: f32) -> Rect {
    let width = (f32::from(base.width) * scale).round() as u16;
    let height = (f32::from(base.height) * scale).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    Rect {
        x: base.x + (base.width.saturating_sub(width) / 2),
        y: base.y + (base.height.saturating_sub(height) / 2),
        width,
        height,
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}
