//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use cyberelement_types::{GRID_COLUMNS, GRID_ROWS, GridPosition};

const HEADER_HEIGHT: u16 = 3;
const LEGEND_HEIGHT: u16 = 2;
const FOOTER_HEIGHT: u16 = 1;

/// Narrowest cell that still fits a two-letter symbol plus a gap column.
const MIN_CELL_WIDTH: u16 = 4;
const MAX_CELL_WIDTH: u16 = 8;
const MAX_CELL_HEIGHT: u16 = 4;

const PANEL_MAX_WIDTH: u16 = 96;
const PANEL_MAX_HEIGHT: u16 = 26;

/// Cell sizing for the 18x10 element grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Exact area covered by the cells.
    pub area: Rect,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl GridGeometry {
    /// Fit the grid into `available`, centered horizontally.
    ///
    /// Returns `None` when not even the minimum cell size fits.
    #[must_use]
    pub fn fit(available: Rect) -> Option<Self> {
        let columns = u16::from(GRID_COLUMNS);
        let rows = u16::from(GRID_ROWS);
        let cell_width = (available.width / columns).min(MAX_CELL_WIDTH);
        let cell_height = (available.height / rows).min(MAX_CELL_HEIGHT);
        if cell_width < MIN_CELL_WIDTH || cell_height == 0 {
            return None;
        }

        let width = cell_width * columns;
        let height = cell_height * rows;
        let area = Rect {
            x: available.x + (available.width - width) / 2,
            y: available.y,
            width,
            height,
        };
        Some(Self {
            area,
            cell_width,
            cell_height,
        })
    }

    /// Screen rectangle of a 1-based grid cell, excluding the gap column.
    #[must_use]
    pub fn cell_rect(&self, position: GridPosition) -> Rect {
        let col = u16::from(position.col.saturating_sub(1));
        let row = u16::from(position.row.saturating_sub(1));
        Rect {
            x: self.area.x + col * self.cell_width,
            y: self.area.y + row * self.cell_height,
            width: self.cell_width - 1,
            height: self.cell_height,
        }
    }

    /// Rectangle spanning whole cells from `from` to `to` inclusive.
    #[must_use]
    pub fn span_rect(&self, from: GridPosition, to: GridPosition) -> Rect {
        let start = self.cell_rect(from);
        let end = self.cell_rect(to);
        Rect {
            x: start.x,
            y: start.y,
            width: (end.x + end.width).saturating_sub(start.x),
            height: (end.y + end.height).saturating_sub(start.y),
        }
    }

    /// Grid cell under terminal coordinate (`column`, `row`).
    #[must_use]
    pub fn cell_at(&self, column: u16, row: u16) -> Option<GridPosition> {
        if column < self.area.x
            || row < self.area.y
            || column >= self.area.x + self.area.width
            || row >= self.area.y + self.area.height
        {
            return None;
        }
        let col = (column - self.area.x) / self.cell_width + 1;
        let row = (row - self.area.y) / self.cell_height + 1;
        Some(GridPosition::new(row as u8, col as u8))
    }
}

/// Regions of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    /// `None` when the terminal is too small for the grid.
    pub grid: Option<GridGeometry>,
    pub grid_region: Rect,
    pub legend: Rect,
    pub footer: Rect,
    /// Resting position of the detail panel.
    pub panel: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(u16::from(GRID_ROWS)),
                Constraint::Length(LEGEND_HEIGHT),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        Self {
            header: chunks[0],
            grid: GridGeometry::fit(chunks[1]),
            grid_region: chunks[1],
            legend: chunks[2],
            footer: chunks[3],
            panel: panel_rect(area),
        }
    }
}

fn panel_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(PANEL_MAX_WIDTH);
    let height = area.height.saturating_sub(2).min(PANEL_MAX_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
