//! Color theme and glyphs for the CyberElement TUI.
//!
//! Neon-on-slate palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use cyberelement_engine::UiOptions;
use cyberelement_types::ElementCategory;

/// Neon palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (slate) ===
    pub const BG_DARK: Color = Color::Rgb(2, 6, 23); // slate-950
    pub const BG_PANEL: Color = Color::Rgb(15, 23, 42); // slate-900

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240); // slate-200
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const TEXT_MUTED: Color = Color::Rgb(71, 85, 105); // slate-600

    // === Accents ===
    pub const CYAN: Color = Color::Rgb(34, 211, 238);
    pub const PURPLE: Color = Color::Rgb(192, 132, 252);
    pub const GREEN: Color = Color::Rgb(74, 222, 128);
    pub const YELLOW: Color = Color::Rgb(250, 204, 21);
    pub const RED: Color = Color::Rgb(248, 113, 113);

    // === Categories ===
    pub const NONMETAL: Color = Color::Rgb(74, 222, 128); // green-400
    pub const NOBLE_GAS: Color = Color::Rgb(192, 132, 252); // purple-400
    pub const ALKALI_METAL: Color = Color::Rgb(248, 113, 113); // red-400
    pub const ALKALINE_EARTH: Color = Color::Rgb(251, 146, 60); // orange-400
    pub const METALLOID: Color = Color::Rgb(45, 212, 191); // teal-400
    pub const HALOGEN: Color = Color::Rgb(250, 204, 21); // yellow-400
    pub const TRANSITION_METAL: Color = Color::Rgb(96, 165, 250); // blue-400
    pub const POST_TRANSITION: Color = Color::Rgb(148, 163, 184); // slate-400
    pub const LANTHANIDE: Color = Color::Rgb(244, 114, 182); // pink-400
    pub const ACTINIDE: Color = Color::Rgb(251, 113, 133); // rose-400
    pub const UNKNOWN: Color = Color::Rgb(107, 114, 128); // gray-500
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    categories: [Color; 11],
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::CYAN,
            accent: colors::PURPLE,
            success: colors::GREEN,
            warning: colors::YELLOW,
            error: colors::RED,
            categories: [
                colors::NONMETAL,
                colors::NOBLE_GAS,
                colors::ALKALI_METAL,
                colors::ALKALINE_EARTH,
                colors::METALLOID,
                colors::HALOGEN,
                colors::TRANSITION_METAL,
                colors::POST_TRANSITION,
                colors::LANTHANIDE,
                colors::ACTINIDE,
                colors::UNKNOWN,
            ],
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::Cyan,
            accent: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            categories: [
                Color::LightGreen,
                Color::LightMagenta,
                Color::LightRed,
                Color::Yellow,
                Color::LightCyan,
                Color::LightYellow,
                Color::LightBlue,
                Color::White,
                Color::Magenta,
                Color::Red,
                Color::Gray,
            ],
        }
    }

    /// Color for cells of `category`.
    #[must_use]
    pub fn category(&self, category: ElementCategory) -> Color {
        let index = ElementCategory::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(ElementCategory::ALL.len() - 1);
        self.categories[index]
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for markers and spinners.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub online: &'static str,
    pub swatch: &'static str,
    pub cursor_left: &'static str,
    pub cursor_right: &'static str,
    pub warning: &'static str,
    pub section: &'static str,
    pub spinner_frames: &'static [&'static str],
    /// Rounded borders need box-drawing characters.
    pub rounded_borders: bool,
}

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_FRAMES_ASCII: &[&str] = &["|", "/", "-", "\\"];

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            online: "*",
            swatch: "#",
            cursor_left: "[",
            cursor_right: "]",
            warning: "!",
            section: ">",
            spinner_frames: SPINNER_FRAMES_ASCII,
            rounded_borders: false,
        }
    } else {
        Glyphs {
            online: "●",
            swatch: "■",
            cursor_left: "▸",
            cursor_right: "◂",
            warning: "⚠",
            section: "▍",
            spinner_frames: SPINNER_FRAMES,
            rounded_borders: true,
        }
    }
}

/// When `reduced_motion` is enabled, returns a static glyph instead of cycling.
#[must_use]
pub fn spinner_frame(tick: usize, options: UiOptions) -> &'static str {
    let frames = glyphs(options).spinner_frames;
    if options.reduced_motion {
        frames[0]
    } else {
        frames[tick % frames.len()]
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn section_label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_primary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn cell(color: Color, palette: &Palette) -> Style {
        Style::default().fg(color).bg(palette.bg_panel)
    }

    #[must_use]
    pub fn cell_cursor(color: Color, palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn degraded(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.error)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.warning)
            .add_modifier(Modifier::BOLD)
    }
}
