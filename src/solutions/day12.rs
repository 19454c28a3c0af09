use std::collections::HashMap;

use aoc_framework::grid::{Adjacency, Grid, Point};
use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

#[solution_runner(
    name = "Day 12: Hill Climbing Algorithm",
    parsed = HeightMap,
    part_one = Day12,
    part_two = Day12
)]
impl super::AdventOfCode2022<12> {}

/*
Input is a grid of elevations from `a` (lowest) to `z` (highest). `S` marks the current position,
at elevation `a`, and `E` marks the best signal, at elevation `z`.
*/

type Elevation = u8;

const LOWEST: Elevation = b'a';
const HIGHEST: Elevation = b'z';

#[derive(Debug)]
struct HeightMap {
    elevations: Grid<Elevation>,
    /// Position of `S` as `(x, y)`.
    start: Point2<usize>,
    /// Position of `E` as `(x, y)`.
    end: Point2<usize>,
}

#[derive(thiserror::Error, Debug)]
enum ParseHeightMapError {
    #[error("invalid elevation character: {0:?}")]
    InvalidChar(char),

    #[error("found another {marker:?} at {second} after {first}")]
    DuplicateMarker {
        marker: char,
        first: Point2<usize>,
        second: Point2<usize>,
    },

    #[error("input is missing the {0:?} marker")]
    MissingMarker(char),
}

/// Record a marker's position, allowing only one per map.
fn track_marker(
    slot: &mut Option<Point2<usize>>,
    marker: char,
    position: Point2<usize>,
) -> Result<(), ParseHeightMapError> {
    if let Some(first) = *slot {
        return Err(ParseHeightMapError::DuplicateMarker {
            marker,
            first,
            second: position,
        });
    }
    *slot = Some(position);
    Ok(())
}

impl ParseData for HeightMap {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut start_opt = None;
        let mut end_opt = None;

        let rows = parse_input_lines(input, |y, line| {
            line.char_indices()
                .map(|(x, ch)| match ch {
                    'S' => {
                        track_marker(&mut start_opt, 'S', Point2::new(x, y))?;
                        Ok(LOWEST)
                    }
                    'E' => {
                        track_marker(&mut end_opt, 'E', Point2::new(x, y))?;
                        Ok(HIGHEST)
                    }
                    'a'..='z' => Ok(u8::try_from(ch).expect("ascii lowercase fits u8")),
                    _ => Err(ParseHeightMapError::InvalidChar(ch)),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            elevations: Grid::from_rows(rows)?,
            start: start_opt.ok_or(ParseHeightMapError::MissingMarker('S'))?,
            end: end_opt.ok_or(ParseHeightMapError::MissingMarker('E'))?,
        })
    }
}

/*
A step can climb at most one elevation higher, but can drop any amount.

For part 1, find the fewest steps from `S` to `E`.

Searching outward from `E` finds the distance to `E` from every position at once. The search walks
steps in reverse, so it may extend from `current` to `neighbor` when climbing from `neighbor` up to
`current` would be allowed.
*/

#[derive(thiserror::Error, Debug)]
enum ClimbError {
    #[error("no path leads from {0} to the best signal")]
    NoPath(Point2<usize>),

    #[error("no path leads from any elevation `a` position to the best signal")]
    NoLowlandPath,
}

impl HeightMap {
    fn distances_to_end(&self) -> DynamicResult<HashMap<Point<Elevation>, usize>> {
        let distances =
            self.elevations
                .find_point_distances(self.end, Adjacency::Cardinal, |current, neighbor| {
                    current.value().saturating_sub(*neighbor.value()) <= 1
                })?;
        Ok(distances)
    }
}

struct Day12;

impl Solution<PartOne> for Day12 {
    type Input = HeightMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let distances = input.distances_to_end()?;
        let start = input
            .elevations
            .point_at(input.start.y, input.start.x)?;

        distances
            .get(&start)
            .copied()
            .ok_or_else(|| ClimbError::NoPath(input.start).into())
    }
}

/*
For part 2, find the fewest steps to `E` from any position at elevation `a`.
*/

impl Solution<PartTwo> for Day12 {
    type Input = HeightMap;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let distances = input.distances_to_end()?;

        distances
            .into_iter()
            .filter(|(point, _)| *point.value() == LOWEST)
            .map(|(_, distance)| distance)
            .min()
            .ok_or_else(|| ClimbError::NoLowlandPath.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    #[test]
    fn parses_markers() -> DynamicResult<()> {
        let parsed = HeightMap::parse(EXAMPLE_INPUT)?;
        assert_eq!(parsed.start, Point2::new(0, 0));
        assert_eq!(parsed.end, Point2::new(5, 2));
        assert_eq!(parsed.elevations.get(2, 5), Some(&HIGHEST));
        assert_eq!(parsed.elevations.get(0, 0), Some(&LOWEST));
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = HeightMap::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, 31);
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = HeightMap::parse(EXAMPLE_INPUT)?;
        let result = <Day12 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, 29);
        Ok(())
    }

    #[test]
    fn cliff_blocks_the_climb() -> DynamicResult<()> {
        let parsed = HeightMap::parse("Saz\nzzE\n")?;
        assert!(<Day12 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }

    #[test]
    fn lowland_cut_off_from_summit_fails() -> DynamicResult<()> {
        let parsed = HeightMap::parse("Saz\nzzE\n")?;
        let error = <Day12 as Solution<PartTwo>>::solve(&parsed)
            .expect_err("no lowland position can climb the cliff");
        assert!(matches!(
            error.downcast_ref::<ClimbError>(),
            Some(ClimbError::NoLowlandPath)
        ));
        Ok(())
    }

    #[test]
    fn rejects_second_start() {
        assert!(HeightMap::parse("SaS\nabE\n").is_err());
    }

    #[test]
    fn rejects_missing_end() {
        assert!(HeightMap::parse("Sab\nabc\n").is_err());
    }
}
