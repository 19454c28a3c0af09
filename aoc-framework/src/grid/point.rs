//! Positions on a [`Grid`][super::Grid] and the directions between them.
//!
//! Positions follow the grid's convention: `x` is the column and `y` is the row.

use std::hash::{Hash, Hasher};

use nalgebra::{Point2, Vector2};

/// A step from one cell to a neighboring cell.
///
/// `Up` decreases the row, `Left` decreases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Every direction, cardinal directions first.
    pub const ALL: [Self; 8] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// The four non-diagonal directions.
    pub const CARDINAL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Whether the direction moves along both axes at once.
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Self::UpLeft | Self::UpRight | Self::DownLeft | Self::DownRight
        )
    }

    /// The direction pointing back the way this one came.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::DownRight,
            Self::UpRight => Self::DownLeft,
            Self::DownLeft => Self::UpRight,
            Self::DownRight => Self::UpLeft,
        }
    }

    /// The `(dx, dy)` offset of a single step.
    #[must_use]
    pub fn offset(self) -> Vector2<isize> {
        match self {
            Self::Up => Vector2::new(0, -1),
            Self::Down => Vector2::new(0, 1),
            Self::Left => Vector2::new(-1, 0),
            Self::Right => Vector2::new(1, 0),
            Self::UpLeft => Vector2::new(-1, -1),
            Self::UpRight => Vector2::new(1, -1),
            Self::DownLeft => Vector2::new(-1, 1),
            Self::DownRight => Vector2::new(1, 1),
        }
    }

    /// Take one step from `position`. Returns `None` if the step would leave the non-negative
    /// coordinate space; upper bounds are the grid's concern.
    #[must_use]
    pub fn step_from(self, position: Point2<usize>) -> Option<Point2<usize>> {
        let offset = self.offset();
        let x = position.x.checked_add_signed(offset.x)?;
        let y = position.y.checked_add_signed(offset.y)?;
        Some(Point2::new(x, y))
    }
}

/// A grid position with a snapshot of the value found there.
///
/// Equality and hashing only consider the position, so a `Point` works as a graph node no matter
/// what value was captured with it.
#[derive(Debug, Clone)]
pub struct Point<T> {
    position: Point2<usize>,
    value: T,
}

impl<T> Point<T> {
    /// Create a point at column `x` and row `y`.
    pub fn new(x: usize, y: usize, value: T) -> Self {
        Self {
            position: Point2::new(x, y),
            value,
        }
    }

    /// The column.
    pub fn x(&self) -> usize {
        self.position.x
    }

    /// The row.
    pub fn y(&self) -> usize {
        self.position.y
    }

    /// The `(x, y)` position.
    pub const fn position(&self) -> Point2<usize> {
        self.position
    }

    /// The value captured when the point was created.
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Take the captured value, dropping the position.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Whether both points share a position, regardless of value types.
    pub fn is_same_location<U>(&self, other: &Point<U>) -> bool {
        self.position == other.position
    }

    /// Whether `other` is one of the eight cells surrounding this one.
    pub fn is_neighboring_location<U>(&self, other: &Point<U>) -> bool {
        let dx = self.position.x.abs_diff(other.position.x);
        let dy = self.position.y.abs_diff(other.position.y);
        dx.max(dy) == 1
    }

    /// The signed offset from `other` to this point, or `None` if a component doesn't fit
    /// `isize`.
    pub fn checked_difference<U>(&self, other: &Point<U>) -> Option<Vector2<isize>> {
        fn signed_delta(a: usize, b: usize) -> Option<isize> {
            if a >= b {
                isize::try_from(a - b).ok()
            } else {
                isize::try_from(b - a).ok().map(|delta| -delta)
            }
        }

        Some(Vector2::new(
            signed_delta(self.position.x, other.position.x)?,
            signed_delta(self.position.y, other.position.y)?,
        ))
    }

    /// The position one step away in `direction`, if it has non-negative coordinates.
    pub fn step(&self, direction: Direction) -> Option<Point2<usize>> {
        direction.step_from(self.position)
    }
}

impl<T> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<T> Eq for Point<T> {}

impl<T> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}
