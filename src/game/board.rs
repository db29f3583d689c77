use std::fmt;

use super::Checker;
use crate::error::MoveError;

/// Number of rows on a standard board.
pub const ROWS: usize = 6;
/// Number of columns on a standard board.
pub const COLS: usize = 7;
/// Checkers in a row needed to win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A Connect Four grid of any size. Row 0 is the top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. `Match::new` checks this first.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "board dimensions must be positive");
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// The standard 6x7 board.
    pub fn standard() -> Self {
        Self::new(ROWS, COLS)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Check if a checker can be dropped into `col`
    pub fn can_drop(&self, col: usize) -> bool {
        col < self.width && self.get(0, col) == Cell::Empty
    }

    /// Columns that can still accept a checker, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width).filter(|&col| self.can_drop(col)).collect()
    }

    /// Number of checkers stacked in `col`.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.height)
            .take_while(|&r| self.get(self.height - 1 - r, col) != Cell::Empty)
            .count()
    }

    /// Drop a checker in a column, returns the row where it landed
    pub fn drop(&mut self, checker: Checker, col: usize) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::OutOfRange {
                col,
                width: self.width,
            });
        }
        if !self.can_drop(col) {
            return Err(MoveError::ColumnFull(col));
        }

        let row = self.height - 1 - self.column_height(col);
        self.set(row, col, checker.to_cell());
        Ok(row)
    }

    /// Remove the topmost checker of a column, returns the row it was taken from
    pub fn undo_top(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::OutOfRange {
                col,
                width: self.width,
            });
        }
        let stacked = self.column_height(col);
        if stacked == 0 {
            return Err(MoveError::ColumnEmpty(col));
        }

        let row = self.height - stacked;
        self.set(row, col, Cell::Empty);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| !self.can_drop(col))
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check whether `checker` has four in a row anywhere on the board
    pub fn is_winning_for(&self, checker: Checker) -> bool {
        let cell = checker.to_cell();
        self.has_horizontal_run(cell)
            || self.has_vertical_run(cell)
            || self.has_diagonal_down_run(cell)
            || self.has_diagonal_up_run(cell)
    }

    /// Scan every window of `WIN_LENGTH` cells along `step` (row, col delta).
    /// `rows` and `cols` bound the start positions so windows stay in range.
    fn scan_windows(
        &self,
        cell: Cell,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
        step: (isize, isize),
    ) -> bool {
        rows.flat_map(|row| cols.clone().map(move |col| (row, col)))
            .any(|(row, col)| {
                (0..WIN_LENGTH).all(|i| {
                    let r = (row as isize + step.0 * i as isize) as usize;
                    let c = (col as isize + step.1 * i as isize) as usize;
                    self.get(r, c) == cell
                })
            })
    }

    fn has_horizontal_run(&self, cell: Cell) -> bool {
        if self.width < WIN_LENGTH {
            return false;
        }
        let cols = 0..self.width - (WIN_LENGTH - 1);
        self.scan_windows(cell, 0..self.height, cols, (0, 1))
    }

    fn has_vertical_run(&self, cell: Cell) -> bool {
        if self.height < WIN_LENGTH {
            return false;
        }
        let rows = 0..self.height - (WIN_LENGTH - 1);
        self.scan_windows(cell, rows, 0..self.width, (1, 0))
    }

    /// Top-left to bottom-right, \
    fn has_diagonal_down_run(&self, cell: Cell) -> bool {
        if self.height < WIN_LENGTH || self.width < WIN_LENGTH {
            return false;
        }
        let rows = 0..self.height - (WIN_LENGTH - 1);
        let cols = 0..self.width - (WIN_LENGTH - 1);
        self.scan_windows(cell, rows, cols, (1, 1))
    }

    /// Bottom-left to top-right, /
    fn has_diagonal_up_run(&self, cell: Cell) -> bool {
        if self.height < WIN_LENGTH || self.width < WIN_LENGTH {
            return false;
        }
        let rows = WIN_LENGTH - 1..self.height;
        let cols = 0..self.width - (WIN_LENGTH - 1);
        self.scan_windows(cell, rows, cols, (-1, 1))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                write!(f, "{}|", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "-".repeat(2 * self.width + 1))?;

        let labels: Vec<String> = (0..self.width).map(|i| (i % 10).to_string()).collect();
        write!(f, " {}", labels.join(" "))
    }
}
