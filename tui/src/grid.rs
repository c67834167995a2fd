//! Element grid, status box, and category legend.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use cyberelement_engine::{App, DetailClient, DetailOrigin, ElementRecord};
use cyberelement_types::{ELEMENT_COUNT, ELEMENTS, ElementCategory, GridPosition};

use crate::layout::GridGeometry;
use crate::theme::{Glyphs, Palette, styles};
use crate::truncate_to_width;

pub(crate) fn draw_grid<C>(
    frame: &mut Frame,
    app: &App<C>,
    grid: &GridGeometry,
    palette: &Palette,
    glyphs: &Glyphs,
) where
    C: DetailClient + 'static,
{
    let cursor = app.cursor();
    let selected = app.selected().map(|element| element.number);

    for element in &ELEMENTS {
        let position = element.grid_position();
        let highlighted = position == cursor || selected == Some(element.number);
        let rect = grid.cell_rect(position);
        draw_cell(frame, rect, element, highlighted, palette, glyphs);
    }

    draw_status_box(frame, app, grid, palette, glyphs);
}

fn draw_cell(
    frame: &mut Frame,
    rect: Rect,
    element: &ElementRecord,
    highlighted: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let color = palette.category(element.category);
    let style = if highlighted {
        styles::cell_cursor(color, palette)
    } else {
        styles::cell(color, palette)
    };
    let width = usize::from(rect.width);

    let number = format!("{:02}", element.number);
    let symbol = if highlighted && rect.height == 1 && width >= element.symbol.len() + 2 {
        format!("{}{}{}", glyphs.cursor_left, element.symbol, glyphs.cursor_right)
    } else {
        element.symbol.to_string()
    };
    let mass = element
        .rounded_mass()
        .map(|mass| mass.to_string())
        .unwrap_or_default();
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = match rect.height {
        0 => return,
        1 => vec![Line::styled(symbol, bold)],
        2 => vec![Line::from(number), Line::styled(symbol, bold)],
        3 => vec![
            Line::from(number),
            Line::styled(symbol, bold),
            Line::from(truncate_to_width(&mass, width)),
        ],
        _ => vec![
            Line::from(number),
            Line::styled(symbol, bold),
            Line::from(truncate_to_width(element.name, width)),
            Line::from(truncate_to_width(&mass, width)),
        ],
    };

    frame.render_widget(
        Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center),
        rect,
    );
}

/// "SYSTEM STATUS" box in the gap above the transition metals.
fn draw_status_box<C>(
    frame: &mut Frame,
    app: &App<C>,
    grid: &GridGeometry,
    palette: &Palette,
    glyphs: &Glyphs,
) where
    C: DetailClient + 'static,
{
    let area = grid.span_rect(GridPosition::new(2, 4), GridPosition::new(3, 11));
    if area.height < 2 || area.width < 20 {
        return;
    }

    let (node_label, node_color) = match app.state().origin() {
        Some(DetailOrigin::Fallback(_)) => ("AI NODE: DEGRADED", palette.error),
        _ => ("AI NODE: ONLINE", palette.success),
    };

    let mut lines = vec![
        Line::styled("SYSTEM STATUS", styles::title(palette)),
        Line::from(vec![
            Span::styled(format!("{} ", glyphs.online), Style::default().fg(node_color)),
            Span::styled(node_label, Style::default().fg(node_color)),
        ]),
    ];
    if area.height >= 3 {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.online),
                Style::default().fg(palette.primary),
            ),
            Span::styled(
                format!("DB: {ELEMENT_COUNT} ENTRIES"),
                Style::default().fg(palette.primary),
            ),
        ]));
    }
    if area.height >= 5 {
        lines.push(Line::default());
        lines.push(Line::styled(
            "Select an element to initiate quantum analysis sequence.",
            styles::muted(palette),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

pub(crate) fn draw_legend(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = Vec::with_capacity(ElementCategory::ALL.len() * 2);
    for category in ElementCategory::ALL {
        spans.push(Span::styled(
            format!("{} ", glyphs.swatch),
            Style::default().fg(palette.category(category)),
        ));
        spans.push(Span::styled(
            format!("{}  ", category.label()),
            Style::default().fg(palette.text_secondary),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
