//! TUI rendering and input handling for CyberElement.

mod effects;
mod grid;
mod input;
mod layout;
mod panel;
mod theme;

pub use effects::apply_modal_effect;
pub use input::{InputPump, handle_events};
pub use layout::{GridGeometry, ScreenLayout};
pub use theme::{Glyphs, Palette, glyphs, palette, spinner_frame, styles};

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use cyberelement_engine::{App, DetailClient};

/// Render one frame of the whole UI.
pub fn draw<C>(frame: &mut Frame, app: &App<C>)
where
    C: DetailClient + 'static,
{
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let area = frame.area();
    let layout = ScreenLayout::new(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.bg_dark)),
        area,
    );

    draw_header(frame, &layout, &palette);
    match layout.grid.as_ref() {
        Some(grid) => {
            grid::draw_grid(frame, app, grid, &palette, &glyphs);
            grid::draw_legend(frame, layout.legend, &palette, &glyphs);
        }
        None => draw_too_small(frame, &layout, &palette),
    }
    draw_footer(frame, app, &layout, &palette);

    if app.is_panel_open() {
        panel::draw_detail_panel(frame, app, layout.panel, &palette, &glyphs);
    }
}

fn draw_header(frame: &mut Frame, layout: &ScreenLayout, palette: &Palette) {
    let lines = vec![
        Line::from(vec![
            Span::styled("CYBER", styles::title(palette)),
            Span::styled(
                "ELEMENT",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(
            "INTERACTIVE PERIODIC DATA VISUALIZATION",
            Style::default().fg(palette.text_secondary),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.header,
    );
}

fn draw_footer<C>(frame: &mut Frame, app: &App<C>, layout: &ScreenLayout, palette: &Palette)
where
    C: DetailClient + 'static,
{
    let hint = styles::key_hint(palette);
    let key = styles::key_highlight(palette);
    let line = Line::from(vec![
        Span::styled("ARROWS/HJKL", key),
        Span::styled(" MOVE  ", hint),
        Span::styled("ENTER", key),
        Span::styled(" SELECT  ", hint),
        Span::styled("ESC", key),
        Span::styled(" CLOSE  ", hint),
        Span::styled("Q", key),
        Span::styled(" QUIT  //  ", hint),
        Span::styled(
            format!("POWERED BY GOOGLE GEMINI ({})", app.model()),
            Style::default().fg(palette.text_muted),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        layout.footer,
    );
}

fn draw_too_small(frame: &mut Frame, layout: &ScreenLayout, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Line::styled(
            "TERMINAL TOO SMALL // ENLARGE WINDOW TO RENDER GRID",
            Style::default().fg(palette.warning),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        layout.grid_region,
    );
}

/// Truncate `text` to at most `width` display columns.
pub(crate) fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
