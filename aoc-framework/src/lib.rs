//! Framework of traits and utilities for Advent of Code 2022.
//!
//! A day is written as a parsed input type plus one [`Solution`] per part. Map-shaped puzzles
//! parse into a [`grid::Grid`] and lean on its neighbor queries and distance search.
//!
//! # Quick Start
//!
//! Parse the input by implementing [`ParseData`]:
//!
//! ```
//! use aoc_framework::grid::Grid;
//! use aoc_framework::{DynamicResult, ParseData};
//!
//! struct Forest(Grid<u8>);
//!
//! impl ParseData for Forest {
//!     fn parse(input: &str) -> DynamicResult<Self> {
//!         let rows = input.lines().map(|line| line.bytes().map(|b| b - b'0'));
//!         Ok(Self(Grid::from_rows(rows)?))
//!     }
//! }
//! ```
//!
//! Then solve a part by implementing [`Solution`] for it:
//!
//! ```
//! # use aoc_framework::grid::Grid;
//! # use aoc_framework::{DynamicResult, ParseData};
//! # struct Forest(Grid<u8>);
//! # impl ParseData for Forest {
//! #     fn parse(input: &str) -> DynamicResult<Self> {
//! #         let rows = input.lines().map(|line| line.bytes().map(|b| b - b'0'));
//! #         Ok(Self(Grid::from_rows(rows)?))
//! #     }
//! # }
//! use aoc_framework::{PartOne, Solution};
//!
//! struct TallestTree;
//!
//! impl Solution<PartOne> for TallestTree {
//!     type Input = Forest;
//!     type Output = u8;
//!
//!     fn solve(input: &Forest) -> DynamicResult<u8> {
//!         let tallest = input.0.rows().flatten().max().unwrap_or(0);
//!         Ok(tallest)
//!     }
//! }
//!
//! let forest = Forest::parse("303\n255\n")?;
//! assert_eq!(TallestTree::solve(&forest)?, 5);
//! # Ok::<(), aoc_framework::DynamicError>(())
//! ```
//!
//! A part that only needs the raw text sets `Input = str`. Use the [`runner`] module to run
//! solutions and report their answers.

#![warn(clippy::pedantic)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::branches_sharing_code,
    clippy::collection_is_never_read,
    clippy::equatable_if_let,
    clippy::needless_collect,
    clippy::needless_pass_by_ref_mut,
    clippy::option_if_let_else,
    clippy::set_contains_or_insert,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::trait_duplication_in_bounds,
    clippy::type_repetition_in_bounds,
    clippy::use_self,
    clippy::useless_let_if_seq
)]
#![deny(
    clippy::expect_used,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::unwrap_used
)]
#![cfg_attr(test, allow(clippy::expect_used, reason = "tests assert on setup"))]

use std::error::Error;
use std::fmt::Display;

pub mod grid;
pub mod parsing;
pub mod runner;

mod private {
    /// Sealing trait; only this crate can name the parts a [`Solution`][super::Solution] solves.
    pub trait Sealed {}
}

/// A dynamically dispatched error, wrapped in a [`Box`].
pub type DynamicError = Box<dyn Error + Send + Sync + 'static>;
/// A result that can return a [`DynamicError`] as an error.
pub type DynamicResult<T> = Result<T, DynamicError>;

/// Which half of a day's puzzle is being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    One,
    Two,
}

impl Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::One => write!(f, "Part 1"),
            Self::Two => write!(f, "Part 2"),
        }
    }
}

/// A marker for the part a [`Solution<P>`] solves.
pub trait Part: private::Sealed {
    /// The [`PartKind`] the marker stands for.
    fn kind() -> PartKind;
}

/// Marks a [`Solution`] for part one.
pub struct PartOne;
impl private::Sealed for PartOne {}
impl Part for PartOne {
    fn kind() -> PartKind {
        PartKind::One
    }
}

/// Marks a [`Solution`] for part two.
pub struct PartTwo;
impl private::Sealed for PartTwo {}
impl Part for PartTwo {
    fn kind() -> PartKind {
        PartKind::Two
    }
}

/// Solves one [`Part`] of a day.
///
/// A type may implement both `Solution<PartOne>` and `Solution<PartTwo>`, sharing one input.
pub trait Solution<P: Part> {
    /// The input passed to [`Solution::solve`] by reference; `str` for raw input.
    type Input: ?Sized;

    /// The answer, displayed once solved.
    type Output: Display;

    /// Solve with the given input.
    ///
    /// # Errors
    ///
    /// Invalid input or an unsolvable puzzle is returned as a dynamically dispatched error.
    fn solve(input: &Self::Input) -> DynamicResult<Self::Output>;
}

/// Data built by parsing the puzzle text, shared by a day's parts through [`Solution::Input`].
pub trait ParseData {
    /// Parse an input string into an instance of self.
    ///
    /// # Errors
    ///
    /// If parsing fails, the resulting error is returned as a dynamically dispatched error.
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized;
}
