use aoc_framework::grid::{Grid, Point};
use aoc_framework::parsing::parse_input_lines;
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use checked_sum::CheckedSum;

use crate::checked_product::CheckedProduct;

#[solution_runner(
    name = "Day 8: Treetop Tree House",
    parsed = Forest,
    part_one = Day08,
    part_two = Day08
)]
impl super::AdventOfCode2022<8> {}

/*
Input is a grid of digits, each the height of a tree (0 to 9).
*/

type TreeHeight = u8;

/// The forest map.
#[derive(Debug)]
struct Forest(Grid<TreeHeight>);

#[derive(thiserror::Error, Debug)]
enum ParseForestError {
    #[error("invalid tree height character: {0:?}")]
    InvalidDigit(char),
}

impl ParseData for Forest {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let rows = parse_input_lines(input, |_, line| {
            line.chars()
                .map(|ch| {
                    ch.to_digit(10)
                        .map_or(Err(ParseForestError::InvalidDigit(ch)), |digit| {
                            Ok(TreeHeight::try_from(digit).expect("digit is base 10"))
                        })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self(Grid::from_rows(rows)?))
    }
}

/// The trees seen looking out from a tree in each direction, nearest first: left, right, up,
/// down.
struct LinesOfSight {
    lines: [Vec<TreeHeight>; 4],
}

impl Forest {
    fn trees(&self) -> impl Iterator<Item = Point<TreeHeight>> + '_ {
        let grid = &self.0;
        (0..grid.height()).flat_map(move |row| {
            (0..grid.width()).filter_map(move |col| grid.point_at(row, col).ok())
        })
    }

    fn lines_of_sight(&self, tree: &Point<TreeHeight>) -> DynamicResult<LinesOfSight> {
        let row = self.0.row_at(tree.y())?;
        let column = self.0.column_at(tree.x())?;

        let (left, right) = row.split_at(tree.x());
        let (up, down) = column.split_at(tree.y());

        // the split keeps the tree itself at the start of the second half
        Ok(LinesOfSight {
            lines: [
                left.iter().rev().copied().collect(),
                right[1..].to_vec(),
                up.iter().rev().copied().collect(),
                down[1..].to_vec(),
            ],
        })
    }
}

/*
For part 1, count the trees visible from outside the grid. A tree is visible if every tree between
it and an edge, along a row or column, is shorter. Trees on the edge are always visible.
*/

struct Day08;

impl Solution<PartOne> for Day08 {
    type Input = Forest;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut visible_flags = Vec::new();
        for tree in input.trees() {
            let sight = input.lines_of_sight(&tree)?;
            let visible = sight
                .lines
                .iter()
                .any(|line| line.iter().all(|height| height < tree.value()));
            visible_flags.push(usize::from(visible));
        }

        Ok(visible_flags
            .into_iter()
            .checked_sum()
            .expect("count of trees should fit usize"))
    }
}

/*
For part 2, find the highest scenic score. A tree's viewing distance in a direction counts trees
up to and including the first one at least as tall; its scenic score multiplies the four viewing
distances. Edge trees look out over nothing in some direction, so score 0.
*/

/// Trees seen along one line of sight, stopping at the first tree at least as tall.
fn viewing_distance(height: TreeHeight, line: &[TreeHeight]) -> u64 {
    let blocked_at = line.iter().position(|other| *other >= height);
    let seen = blocked_at.map_or(line.len(), |index| index + 1);
    u64::try_from(seen).expect("viewing distance should fit u64")
}

impl Solution<PartTwo> for Day08 {
    type Input = Forest;
    type Output = u64;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut best = 0;
        for tree in input.trees() {
            let sight = input.lines_of_sight(&tree)?;
            let score = sight
                .lines
                .iter()
                .map(|line| viewing_distance(*tree.value(), line))
                .checked_product()
                .expect("scenic score should not overflow");
            best = best.max(score);
        }
        Ok(best)
    }
}
