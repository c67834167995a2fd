//! Detail panel overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use cyberelement_engine::{
    App, DetailClient, DetailField, DetailOrigin, ElementRecord, SelectionState,
};
use cyberelement_types::sanitize_terminal_text;

use crate::effects::apply_modal_effect;
use crate::theme::{Glyphs, Palette, spinner_frame, styles};

const LEFT_COLUMN_WIDTH: u16 = 24;

/// Section heading for each detail field, in display order.
const SECTIONS: [(DetailField, &str); 4] = [
    (DetailField::Description, "ANALYSIS_LOG"),
    (DetailField::Substance, "MATERIAL_FORM"),
    (DetailField::Usage, "APPLICATIONS"),
    (DetailField::FunFact, "TRIVIA_MODULE"),
];

pub(crate) fn draw_detail_panel<C>(
    frame: &mut Frame,
    app: &App<C>,
    base: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) where
    C: DetailClient + 'static,
{
    let Some(element) = app.selected() else {
        return;
    };

    let area = match app.modal_effect() {
        Some(effect) => apply_modal_effect(effect, base),
        None => base,
    };
    if area.width < 4 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let accent = palette.category(element.category);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if glyphs.rounded_borders {
            BorderType::Rounded
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1))
        .title(Line::from(vec![Span::styled(
            format!(" ID:{:03} // {} ", element.number, element.name.to_uppercase()),
            styles::title(palette),
        )]))
        .title_bottom(Line::from(vec![
            Span::styled(" [ESC] ", styles::key_highlight(palette)),
            Span::styled("CLOSE ", styles::key_hint(palette)),
        ]));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Skip content while the panel is still too small to lay out.
    if inner.width < LEFT_COLUMN_WIDTH + 10 || inner.height < 4 {
        return;
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LEFT_COLUMN_WIDTH), Constraint::Min(10)])
        .spacing(2)
        .split(inner);

    draw_identity(frame, columns[0], element, palette);
    draw_analysis(frame, columns[1], app, palette, glyphs);
}

fn draw_identity(frame: &mut Frame, area: Rect, element: &ElementRecord, palette: &Palette) {
    let accent = palette.category(element.category);
    let label = Style::default().fg(palette.text_muted);
    let value = Style::default().fg(palette.text_primary);

    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!("{name:<6}"), label),
            Span::styled(text, value),
        ])
    };

    let lines = vec![
        Line::default(),
        Line::styled(
            element.symbol,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            element.name,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            element.category.label().to_uppercase(),
            Style::default().fg(accent),
        ),
        Line::default(),
        row("NO.", format!("{:03}", element.number)),
        row("MASS", element.atomic_mass.to_string()),
        row("POS", format!("P{} / G{}", element.period, element.group)),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_analysis<C>(frame: &mut Frame, area: Rect, app: &App<C>, palette: &Palette, glyphs: &Glyphs)
where
    C: DetailClient + 'static,
{
    let lines = match app.state() {
        SelectionState::Loaded {
            detail,
            origin,
            reveal,
            ..
        } => {
            let mut lines = vec![Line::default()];
            if let DetailOrigin::Fallback(kind) = origin {
                lines.push(Line::styled(
                    format!(" {} DATA STREAM DEGRADED // {} ", glyphs.warning, kind.label()),
                    styles::degraded(palette),
                ));
                lines.push(Line::default());
            }
            let typing = !reveal.is_complete();
            for (field, heading) in SECTIONS {
                let visible = reveal.visible(detail, field);
                let text = sanitize_terminal_text(visible);
                let mut body = vec![Span::styled(text.into_owned(), styles::body(palette))];
                if typing && visible.len() < detail.field(field).len() {
                    body.push(Span::styled("_", Style::default().fg(palette.primary)));
                }
                lines.push(Line::from(vec![
                    Span::styled(glyphs.section, Style::default().fg(palette.accent)),
                    Span::styled(format!(" {heading}"), styles::section_label(palette)),
                ]));
                lines.push(Line::from(body));
                lines.push(Line::default());
            }
            lines
        }
        SelectionState::Loading { .. } => vec![
            Line::default(),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(app.tick_count(), app.ui_options())),
                    Style::default().fg(palette.primary),
                ),
                Span::styled(
                    "DECRYPTING DATA PACKETS...",
                    Style::default()
                        .fg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ],
        SelectionState::Idle => return,
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
