//! Running solutions and reporting what happens along the way.
//!
//! Each day is glued to a [`SolutionRunner`] with the [`#[solution_runner]`][solution_runner]
//! attribute, which picks one of the `solve_*` functions below based on whether the day parses
//! its input and whether it has a second part:
//!
//! ```
//! # use aoc_framework::runner::solution_runner;
//! # use aoc_framework::{DynamicResult, PartOne, Solution};
//! #
//! struct Day01;
//!
//! impl Solution<PartOne> for Day01 {
//!     type Input = str;
//!     /* ... */
//! #    type Output = usize;
//! #    fn solve(input: &Self::Input) -> DynamicResult<usize> {
//! #        Ok(input.lines().count())
//! #    }
//! }
//!
//! #[solution_runner(name = "Day 1", part_one = Day01)]
//! struct Day01Runner;
//! ```

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::{DynamicResult, ParseData, Part, PartKind, PartOne, PartTwo, Solution};

pub use aoc_framework_macros::solution_runner;

/// Receives the events of a running solution, in order:
/// [`solution_name`][OutputHandler::solution_name], then
/// [`parse_start`][OutputHandler::parse_start]/[`parse_end`][OutputHandler::parse_end] if the day
/// parses its input, then [`part_start`][OutputHandler::part_start]/
/// [`part_output`][OutputHandler::part_output] per part.
///
/// Durations are `Some` only for timed runs.
pub trait OutputHandler {
    /// The day's display name, before anything runs.
    fn solution_name(&mut self, name: &str);

    /// Input parsing is about to begin.
    fn parse_start(&mut self);

    /// Input parsed successfully, taking `duration_opt` if timed.
    fn parse_end(&mut self, duration_opt: Option<Duration>);

    /// A part is about to be solved.
    fn part_start(&mut self, part: PartKind);

    /// A part's answer, and how long solving it took if timed.
    fn part_output(&mut self, part: PartKind, output: &dyn Display, duration_opt: Option<Duration>);
}

/// Call `f`, measuring how long it took if `timed` is set.
fn measure<R>(timed: bool, f: impl FnOnce() -> R) -> (R, Option<Duration>) {
    if timed {
        let start = Instant::now();
        let result = f();
        (result, Some(start.elapsed()))
    } else {
        (f(), None)
    }
}

fn run_part<S, P>(
    input: &S::Input,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    P: Part,
    S: Solution<P>,
{
    let part = P::kind();
    handler.part_start(part);
    let (result, duration_opt) = measure(timed, || S::solve(input));
    handler.part_output(part, &result?, duration_opt);
    Ok(())
}

fn run_parse<D: ParseData>(
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<D> {
    handler.parse_start();
    let (result, duration_opt) = measure(timed, || D::parse(input));
    let parsed = result?;
    handler.parse_end(duration_opt);
    Ok(parsed)
}

/// Run part one of a day that takes the raw input.
///
/// # Errors
///
/// Any error from the solution is propagated.
pub fn solve_half_solution<S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)
}

/// Run both parts of a day that takes the raw input.
///
/// # Errors
///
/// Any error from either part is propagated; part two doesn't run if part one fails.
pub fn solve_full_solution<S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    S1: Solution<PartOne, Input = str>,
    S2: Solution<PartTwo, Input = str>,
{
    handler.solution_name(name);
    run_part::<S1, PartOne>(input, handler, timed)?;
    run_part::<S2, PartTwo>(input, handler, timed)
}

/// Parse the input once as `D`, then run part one on it.
///
/// # Errors
///
/// Any error from parsing or the solution is propagated.
pub fn solve_parsed_half_solution<D, S1>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)
}

/// Parse the input once as `D`, then run both parts on it.
///
/// # Errors
///
/// Any error from parsing or either part is propagated.
pub fn solve_parsed_full_solution<D, S1, S2>(
    name: &str,
    input: &str,
    handler: &mut dyn OutputHandler,
    timed: bool,
) -> DynamicResult<()>
where
    D: ParseData,
    S1: Solution<PartOne, Input = D>,
    S2: Solution<PartTwo, Input = D>,
{
    handler.solution_name(name);
    let parsed = run_parse::<D>(input, handler, timed)?;
    run_part::<S1, PartOne>(&parsed, handler, timed)?;
    run_part::<S2, PartTwo>(&parsed, handler, timed)
}

/// A day that can be run from its raw input. Implement with [`solution_runner`].
pub trait SolutionRunner {
    /// Run the day's parts on `input`, reporting to `handler`.
    ///
    /// # Errors
    ///
    /// Any error from parsing or solving is propagated.
    fn run(input: &str, handler: &mut dyn OutputHandler, timed: bool) -> DynamicResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynamicError;

    /// Keeps every event as a line of text.
    #[derive(Default)]
    struct RecordingHandler {
        events: Vec<String>,
    }

    impl OutputHandler for RecordingHandler {
        fn solution_name(&mut self, name: &str) {
            self.events.push(format!("name {name}"));
        }

        fn parse_start(&mut self) {
            self.events.push("parse start".to_owned());
        }

        fn parse_end(&mut self, duration_opt: Option<Duration>) {
            self.events
                .push(format!("parse end timed={}", duration_opt.is_some()));
        }

        fn part_start(&mut self, part: PartKind) {
            self.events.push(format!("{part} start"));
        }

        fn part_output(
            &mut self,
            part: PartKind,
            output: &dyn Display,
            duration_opt: Option<Duration>,
        ) {
            self.events
                .push(format!("{part} = {output} timed={}", duration_opt.is_some()));
        }
    }

    struct Widths(Vec<usize>);

    impl ParseData for Widths {
        fn parse(input: &str) -> DynamicResult<Self> {
            if input.is_empty() {
                return Err("no lines".into());
            }
            Ok(Self(input.lines().map(str::len).collect()))
        }
    }

    struct Widest;

    impl Solution<PartOne> for Widest {
        type Input = Widths;
        type Output = usize;

        fn solve(input: &Widths) -> DynamicResult<usize> {
            Ok(input.0.iter().copied().max().unwrap_or(0))
        }
    }

    impl Solution<PartTwo> for Widest {
        type Input = Widths;
        type Output = usize;

        fn solve(input: &Widths) -> DynamicResult<usize> {
            Ok(input.0.iter().sum())
        }
    }

    #[test]
    fn parsed_full_solution_reports_in_order() -> Result<(), DynamicError> {
        let mut handler = RecordingHandler::default();
        solve_parsed_full_solution::<Widths, Widest, Widest>(
            "Widths",
            "ab\nc\n",
            &mut handler,
            true,
        )?;
        assert_eq!(
            handler.events,
            vec![
                "name Widths",
                "parse start",
                "parse end timed=true",
                "Part 1 start",
                "Part 1 = 2 timed=true",
                "Part 2 start",
                "Part 2 = 3 timed=true",
            ]
        );
        Ok(())
    }

    #[test]
    fn parse_failure_skips_parts() {
        let mut handler = RecordingHandler::default();
        let result =
            solve_parsed_full_solution::<Widths, Widest, Widest>("Widths", "", &mut handler, false);
        assert!(result.is_err());
        assert_eq!(handler.events, vec!["name Widths", "parse start"]);
    }
}
