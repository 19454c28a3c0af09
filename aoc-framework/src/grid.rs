//! A dense 2-D grid for puzzles laid out on a map.
//!
//! # Coordinates
//!
//! Methods that address a cell directly take `(row, col)`. Everything positional, [`Point`]s and
//! line endpoints, uses `(x, y)` where `x` is the column and `y` is the row.
//!
//! ```
//! use aoc_framework::grid::{Adjacency, Grid};
//!
//! let mut grid = Grid::filled(4, 3, '.')?;
//! assert!(grid.set_point(1, 2, '#'));
//!
//! let point = grid.point_at(1, 2)?;
//! assert_eq!((point.x(), point.y()), (2, 1));
//! assert_eq!(*point.value(), '#');
//!
//! let open_neighbors =
//!     grid.neighboring_points_where(1, 1, Adjacency::Cardinal, |_, n| *n.value() == '.')?;
//! assert_eq!(open_neighbors.len(), 3);
//! # Ok::<(), aoc_framework::grid::GridError>(())
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use nalgebra::{DMatrix, Point2, Scalar};
use thiserror::Error;

mod point;
mod search;

pub use point::{Direction, Point};

/// An axis of a grid, for reporting out-of-range indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Row => write!(f, "row"),
            Self::Column => write!(f, "column"),
        }
    }
}

/// A reason rows can't form a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("a grid needs at least one row and one column")]
    Empty,

    #[error("expected grid width to be {expected} across rows, but row {row} has width {found}")]
    UnequalRowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// An error from building or addressing a [`Grid`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid shape")]
    InvalidShape(#[from] ShapeError),

    #[error("{axis} index {index} is out of range for length {len}")]
    IndexOutOfRange { axis: Axis, index: usize, len: usize },

    /// Only horizontal and vertical lines can be drawn.
    #[error("line from {start} to {end} is neither horizontal nor vertical")]
    UnsupportedGeometry {
        start: Point2<usize>,
        end: Point2<usize>,
    },
}

/// Which neighbors count as adjacent to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjacency {
    /// Up, down, left and right.
    Cardinal,
    /// Cardinal directions plus the four diagonals.
    All,
}

impl Adjacency {
    /// The directions to consider for this adjacency.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Self::Cardinal => &Direction::CARDINAL,
            Self::All => &Direction::ALL,
        }
    }
}

/// How many rows and columns [`Grid::expand`] adds to each side.
///
/// Name only the sides that grow:
///
/// ```
/// # use aoc_framework::grid::Expansion;
/// let wider = Expansion { left: 2, right: 2, ..Expansion::default() };
/// assert_eq!(wider.up, 0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expansion {
    pub left: usize,
    pub right: usize,
    pub up: usize,
    pub down: usize,
}

/// A rectangular, non-empty grid of cells.
///
/// The grid owns its cells; rows, columns and points handed out are copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T: Scalar> {
    cells: DMatrix<T>,
}

impl<T: Scalar> Grid<T> {
    /// Build a grid from rows listed top to bottom.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidShape`] if there are no rows, the rows are empty, or any row's width
    /// differs from the first row's.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut width_opt = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row_index, row) in rows.into_iter().enumerate() {
            let row_start = cells.len();
            cells.extend(row);
            let found = cells.len() - row_start;

            match width_opt {
                None => width_opt = Some(found),
                Some(expected) if expected != found => {
                    return Err(ShapeError::UnequalRowWidth {
                        row: row_index,
                        expected,
                        found,
                    }
                    .into());
                }
                Some(_) => {}
            }
            height = row_index + 1;
        }

        let width = width_opt
            .filter(|width| *width > 0)
            .ok_or(ShapeError::Empty)?;

        Ok(Self {
            cells: DMatrix::from_row_iterator(height, width, cells),
        })
    }

    /// Build a `width` by `height` grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidShape`] if either dimension is zero.
    pub fn filled(width: usize, height: usize, fill: T) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty.into());
        }
        Ok(Self {
            cells: DMatrix::from_element(height, width, fill),
        })
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// A copy of row `row`, left to right.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `row` is not below [`Grid::height`].
    pub fn row_at(&self, row: usize) -> Result<Vec<T>, GridError> {
        self.check_row(row)?;
        Ok(self.cells.row(row).iter().cloned().collect())
    }

    /// A copy of column `col`, top to bottom.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `col` is not below [`Grid::width`].
    pub fn column_at(&self, col: usize) -> Result<Vec<T>, GridError> {
        self.check_column(col)?;
        Ok(self.cells.column(col).iter().cloned().collect())
    }

    /// Copies of every row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        self.cells
            .row_iter()
            .map(|row| row.iter().cloned().collect())
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.cells.get((row, col))
    }

    /// A [`Point`] for the cell at `(row, col)`, stored as `x = col`, `y = row`.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] naming the first axis found out of range.
    pub fn point_at(&self, row: usize, col: usize) -> Result<Point<T>, GridError> {
        self.check_row(row)?;
        self.check_column(col)?;
        Ok(Point::new(col, row, self.cells[(row, col)].clone()))
    }

    /// Overwrite the cell at `(row, col)`. Returns `false`, leaving the grid alone, if the cell
    /// is outside the grid.
    pub fn set_point(&mut self, row: usize, col: usize, value: T) -> bool {
        self.cells.get_mut((row, col)).is_some_and(|cell| {
            *cell = value;
            true
        })
    }

    /// A new grid with rows turned into columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            cells: self.cells.transpose(),
        }
    }

    /// A new grid with `fill` cells added around this one.
    #[must_use]
    pub fn expand(&self, expansion: Expansion, fill: T) -> Self {
        let height = expansion.up + self.height() + expansion.down;
        let width = expansion.left + self.width() + expansion.right;

        let cells = DMatrix::from_fn(height, width, |row, col| {
            row.checked_sub(expansion.up)
                .zip(col.checked_sub(expansion.left))
                .and_then(|index| self.cells.get(index))
                .unwrap_or(&fill)
                .clone()
        });

        Self { cells }
    }

    /// Set every cell from `start` to `end` inclusive to `fill`. Endpoints are `(x, y)` and may
    /// come in either order.
    ///
    /// # Errors
    ///
    /// - [`GridError::IndexOutOfRange`] if an endpoint is outside the grid.
    /// - [`GridError::UnsupportedGeometry`] if the line is diagonal.
    ///
    /// Nothing is written when an error is returned.
    pub fn draw_line(
        &mut self,
        start: Point2<usize>,
        end: Point2<usize>,
        fill: T,
    ) -> Result<(), GridError> {
        for endpoint in [start, end] {
            self.check_row(endpoint.y)?;
            self.check_column(endpoint.x)?;
        }

        if start.x == end.x {
            let col = start.x;
            for row in start.y.min(end.y)..=start.y.max(end.y) {
                self.cells[(row, col)] = fill.clone();
            }
        } else if start.y == end.y {
            let row = start.y;
            for col in start.x.min(end.x)..=start.x.max(end.x) {
                self.cells[(row, col)] = fill.clone();
            }
        } else {
            return Err(GridError::UnsupportedGeometry { start, end });
        }

        Ok(())
    }

    /// Every neighbor of `(row, col)` inside the grid, keyed by the direction it lies in.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `(row, col)` itself is outside the grid.
    pub fn neighboring_points(
        &self,
        row: usize,
        col: usize,
        adjacency: Adjacency,
    ) -> Result<HashMap<Direction, Point<T>>, GridError> {
        self.neighboring_points_where(row, col, adjacency, |_, _| true)
    }

    /// Like [`Grid::neighboring_points`], keeping only neighbors for which
    /// `admissible(current, neighbor)` holds.
    ///
    /// Neighbors outside the grid are dropped before `admissible` is asked about them.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `(row, col)` itself is outside the grid.
    pub fn neighboring_points_where<F>(
        &self,
        row: usize,
        col: usize,
        adjacency: Adjacency,
        mut admissible: F,
    ) -> Result<HashMap<Direction, Point<T>>, GridError>
    where
        F: FnMut(&Point<T>, &Point<T>) -> bool,
    {
        let current = self.point_at(row, col)?;

        let neighbors = adjacency
            .directions()
            .iter()
            .filter_map(|&direction| {
                let position = current.step(direction)?;
                let neighbor = self.point_at_position(position)?;
                admissible(&current, &neighbor).then_some((direction, neighbor))
            })
            .collect();

        Ok(neighbors)
    }

    /// A point for an `(x, y)` position, or `None` outside the grid.
    fn point_at_position(&self, position: Point2<usize>) -> Option<Point<T>> {
        self.get(position.y, position.x)
            .map(|value| Point::new(position.x, position.y, value.clone()))
    }

    fn check_row(&self, row: usize) -> Result<(), GridError> {
        if row < self.height() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                len: self.height(),
            })
        }
    }

    fn check_column(&self, col: usize) -> Result<(), GridError> {
        if col < self.width() {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                axis: Axis::Column,
                index: col,
                len: self.width(),
            })
        }
    }
}

/// Rows on separate lines, cells written back to back.
impl<T: Scalar + Display> Display for Grid<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width() {
                write!(f, "{}", self.cells[(row, col)])?;
            }
        }
        Ok(())
    }
}
