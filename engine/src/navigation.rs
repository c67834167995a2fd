//! Keyboard cursor over the occupied cells of the element grid.

use cyberelement_types::{GRID_COLUMNS, GRID_ROWS, GridPosition, element_at};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    const fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Position of the first element (hydrogen).
pub const HOME: GridPosition = GridPosition::new(1, 1);

/// Next occupied cell from `from` in `direction`, skipping empty cells.
///
/// Returns `from` unchanged when no occupied cell lies that way.
#[must_use]
pub fn step(from: GridPosition, direction: Direction) -> GridPosition {
    let (dr, dc) = direction.delta();
    let mut row = i16::from(from.row);
    let mut col = i16::from(from.col);

    loop {
        row += dr;
        col += dc;
        if row < 1 || col < 1 || row > i16::from(GRID_ROWS) || col > i16::from(GRID_COLUMNS) {
            return from;
        }
        let candidate = GridPosition::new(row as u8, col as u8);
        if element_at(candidate).is_some() {
            return candidate;
        }
    }
}
