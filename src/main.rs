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
#![deny(clippy::unwrap_used)]

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Error, Result};
use aoc_framework::PartKind;
use aoc_framework::runner::OutputHandler;
use clap::{ArgAction, Parser};

mod checked_product;
mod solutions;

/// Directory holding each day's puzzle input as `dayNN.txt`.
const INPUT_DIR: &str = "inputs";

/// Advent of Code 2022 puzzle solver.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// The day to solve (5, 8, 12 or 14).
    day: u8,

    /// Read puzzle input from this file instead of `inputs/dayNN.txt`.
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print how long parsing and each part took.
    #[arg(short, long, action = ArgAction::SetTrue)]
    timed: bool,

    /// Only print timings at least this many milliseconds long. 0 prints every timing.
    #[arg(long, value_name = "MILLISECONDS", default_value_t)]
    min_timing_ms: u64,
}

impl Cli {
    /// The input file for the chosen day: the one given, or the day's default.
    fn input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| default_input_path(self.day))
    }

    fn read_input(&self) -> Result<String> {
        let path = self.input_path();
        let read = fs::read_to_string(&path);

        if self.input.is_some() {
            read.with_context(|| format!("could not read input file at: {}", path.display()))
        } else {
            read.with_context(|| missing_default_input(&path))
        }
    }
}

fn default_input_path(day: u8) -> PathBuf {
    Path::new(INPUT_DIR).join(format!("day{day:02}.txt"))
}

fn missing_default_input(path: &Path) -> String {
    format!(
        "default input file missing: {}\n\n\
        please create the file or pass one with --input",
        path.display()
    )
}

fn format_duration(duration: Duration) -> String {
    const DECIMAL_PLACES: usize = 3;

    let seconds = duration.as_secs_f64();
    if duration >= Duration::from_secs(1) {
        format!("{:.*} s", DECIMAL_PLACES, seconds)
    } else if duration >= Duration::from_millis(1) {
        format!("{:.*} ms", DECIMAL_PLACES, seconds * 1e3)
    } else if duration >= Duration::from_micros(1) {
        format!("{:.*} µs", DECIMAL_PLACES, seconds * 1e6)
    } else {
        format!("{} ns", duration.subsec_nanos())
    }
}

/// Prints solution events to stdout.
struct CliOutputHandler {
    /// Timings shorter than this are left out.
    min_duration: Duration,
}

impl CliOutputHandler {
    fn timing(&self, duration_opt: Option<Duration>) -> Option<String> {
        duration_opt
            .filter(|duration| *duration >= self.min_duration)
            .map(format_duration)
    }
}

impl OutputHandler for CliOutputHandler {
    fn solution_name(&mut self, name: &str) {
        println!("= {name} =");
    }

    fn parse_start(&mut self) {}

    fn parse_end(&mut self, duration_opt: Option<Duration>) {
        if let Some(timing) = self.timing(duration_opt) {
            println!("Input parsed in {timing}");
        }
    }

    fn part_start(&mut self, part: PartKind) {
        println!("-- {part} --");
    }

    fn part_output(
        &mut self,
        _part: PartKind,
        output: &dyn Display,
        duration_opt: Option<Duration>,
    ) {
        match self.timing(duration_opt) {
            Some(timing) => println!("{output} ({timing})"),
            None => println!("{output}"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = cli.read_input()?;

    let mut handler = CliOutputHandler {
        min_duration: Duration::from_millis(cli.min_timing_ms),
    };
    solutions::run_day(cli.day, &input, &mut handler, cli.timed).map_err(|dyn_error| {
        let context = if dyn_error.is::<solutions::DayNotAvailable>() {
            format!("available days are {:?}", solutions::AVAILABLE_DAYS)
        } else {
            format!("failed to run day {}", cli.day)
        };
        Error::from_boxed(dyn_error).context(context)
    })
}
