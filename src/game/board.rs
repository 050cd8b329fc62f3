use std::collections::VecDeque;

use super::win::WinningPlay;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of connected pieces required to win.
pub const WIN_LENGTH: usize = 4;

/// Scan directions for win detection, checked in this order: horizontal,
/// vertical, diagonal descending (\), diagonal ascending (/). The first
/// direction that completes a line is the one reported.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column is full")]
    ColumnFull,
    #[error("column out of range")]
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a position. Row 0 is the top, row 5 is the bottom.
    /// Out-of-range coordinates return `Empty` rather than an error, so
    /// callers probing neighbors near an edge need no bounds checks.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= ROWS || col >= COLS {
            return Cell::Empty;
        }
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, DropError> {
        if col >= COLS {
            return Err(DropError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(DropError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Find a four-in-a-row line through (row, col), if one exists.
    ///
    /// Each direction is scanned bidirectionally from the anchor cell: up to
    /// three steps forward, then up to three steps backward, stopping at the
    /// first mismatch on each side. Directions are checked in the fixed
    /// order of [`DIRECTIONS`] and the first completed line wins.
    pub fn winning_line(&self, row: usize, col: usize) -> Option<WinningPlay> {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return None;
        }

        DIRECTIONS
            .iter()
            .find_map(|&(dr, dc)| self.scan_direction(row, col, dr, dc, cell))
    }

    /// Bidirectional scan in one direction. The run is assembled head-first:
    /// backward-extension cells are pushed to the front, so the reported
    /// line reads from the far backward end through the anchor.
    fn scan_direction(
        &self,
        row: usize,
        col: usize,
        dr: i32,
        dc: i32,
        cell: Cell,
    ) -> Option<WinningPlay> {
        let mut run: VecDeque<(usize, usize)> = VecDeque::with_capacity(2 * WIN_LENGTH - 1);
        run.push_back((row, col));

        for step in 1..WIN_LENGTH as i32 {
            let r = row as i32 + dr * step;
            let c = col as i32 + dc * step;
            if !self.matches(r, c, cell) {
                break;
            }
            run.push_back((r as usize, c as usize));
        }

        for step in 1..WIN_LENGTH as i32 {
            let r = row as i32 - dr * step;
            let c = col as i32 - dc * step;
            if !self.matches(r, c, cell) {
                break;
            }
            run.push_front((r as usize, c as usize));
        }

        if run.len() < WIN_LENGTH {
            return None;
        }

        // A run longer than four is possible; the line is its first four cells.
        let mut line = [(0usize, 0usize); WIN_LENGTH];
        for (slot, pos) in line.iter_mut().zip(run) {
            *slot = pos;
        }
        Some(WinningPlay::new(line))
    }

    fn matches(&self, row: i32, col: i32, cell: Cell) -> bool {
        row >= 0
            && (row as usize) < ROWS
            && col >= 0
            && (col as usize) < COLS
            && self.cells[row as usize][col as usize] == cell
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
