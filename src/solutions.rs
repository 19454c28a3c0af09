//! Solutions implemented for Advent of Code 2022.
//!
//! [`run_day`] picks a day's solution from a fixed table; nothing is looked up at runtime.
//!
//! To make a day available:
//! 1. Add a submodule for the day below `IMPORT SUBMODULES HERE`.
//! 2. In it, implement [`SolutionRunner`] for [`AdventOfCode2022<DAY>`] with `#[solution_runner]`.
//! 3. Add a match arm below `MATCH SOLUTIONS HERE`:
//!
//! ```ignore
//! 12 => AdventOfCode2022::<12>::run(input, handler, timed),
//! ```

#![warn(clippy::dbg_macro, clippy::print_stderr, clippy::print_stdout)]

use aoc_framework::DynamicResult;
use aoc_framework::runner::{OutputHandler, SolutionRunner};
use thiserror::Error;

// --- IMPORT SUBMODULES HERE ---
mod day05;
mod day08;
mod day12;
mod day14;

/// Solutions collected by day.
///
/// A submodule registers its day like so:
///
/// ```ignore
/// use aoc_framework::runner::solution_runner;
///
/// #[solution_runner(
///     name = "Day 8: Treetop Tree House",
///     parsed = Forest,
///     part_one = Day08,
///     part_two = Day08
/// )]
/// impl super::AdventOfCode2022<8> {}
/// ```
struct AdventOfCode2022<const DAY: u8>;

/// A solution for a day is not available.
#[derive(Error, Debug)]
#[error("no solution available for day {0}")]
pub struct DayNotAvailable(u8);

/// The days [`run_day`] can run, in order.
pub const AVAILABLE_DAYS: &[u8] = &[5, 8, 12, 14];

/// Run the solution for `day`.
///
/// # Errors
///
/// [`DayNotAvailable`] if there is no solution for `day`; otherwise any error from the solution.
pub fn run_day(
    day: u8,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()> {
    match day {
        // --- MATCH SOLUTIONS HERE ---
        5 => AdventOfCode2022::<5>::run(input, handler, timed),
        8 => AdventOfCode2022::<8>::run(input, handler, timed),
        12 => AdventOfCode2022::<12>::run(input, handler, timed),
        14 => AdventOfCode2022::<14>::run(input, handler, timed),
        _ => Err(DayNotAvailable(day).into()),
    }
}
