use std::sync::LazyLock;

use aoc_framework::grid::Grid;
use aoc_framework::parsing::{InputScanner, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use regex::Regex;

#[solution_runner(
    name = "Day 5: Supply Stacks",
    parsed = SupplyStacks,
    part_one = Day05,
    part_two = Day05
)]
impl super::AdventOfCode2022<5> {}

/*
Input is a drawing of crates in stacks, a line numbering the stacks, a blank line, then a list of
moves:

```
    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
```

Each crate is a letter in brackets; stacks sit in columns 4 characters apart.
*/

/// Width of one stack's column in the drawing, `[X] `.
const STACK_COLUMN_WIDTH: usize = 4;

/// A move of `count` crates between stacks, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

/// The input: stacks bottom to top, and the moves to apply.
#[derive(Debug)]
struct SupplyStacks {
    stacks: Vec<Vec<char>>,
    moves: Vec<Move>,
}

#[derive(thiserror::Error, Debug)]
enum ParseSupplyStacksError {
    #[error("missing crate drawing")]
    MissingDrawing,

    #[error("expected a move like \"move 1 from 2 to 1\", found: {0:?}")]
    InvalidMove(String),

    #[error("stack numbers start at 1")]
    ZeroStackNumber,

    #[error("move refers to stack {number}, but there are only {count} stacks")]
    UnknownStack { number: usize, count: usize },

    #[error("drawing line {} has a crate beyond the {stack_count} numbered stacks", .line + 1)]
    CrateOutsideStacks { line: usize, stack_count: usize },
}

static MOVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^move (\d+) from (\d+) to (\d+)$").expect("pattern should be valid")
});

impl Move {
    fn parse(line: &str, stack_count: usize) -> DynamicResult<Self> {
        let captures = MOVE_PATTERN
            .captures(line)
            .ok_or_else(|| ParseSupplyStacksError::InvalidMove(line.to_owned()))?;

        let count = parse_with_context(&captures[1])?;
        let stack_index = |group: usize| -> DynamicResult<usize> {
            let number: usize = parse_with_context(&captures[group])?;
            let index = number
                .checked_sub(1)
                .ok_or(ParseSupplyStacksError::ZeroStackNumber)?;
            if index >= stack_count {
                return Err(ParseSupplyStacksError::UnknownStack {
                    number,
                    count: stack_count,
                }
                .into());
            }
            Ok(index)
        };

        Ok(Self {
            count,
            from: stack_index(2)?,
            to: stack_index(3)?,
        })
    }
}

/// Read the crate letters in drawing line `line_index`, a space for each empty slot, padded to
/// `stack_count` slots.
fn crate_slots(
    line_index: usize,
    line: &str,
    stack_count: usize,
) -> Result<Vec<char>, ParseSupplyStacksError> {
    let mut slots: Vec<_> = line
        .chars()
        .skip(1)
        .step_by(STACK_COLUMN_WIDTH)
        .collect();

    if slots.len() > stack_count {
        if slots[stack_count..].iter().any(|slot| *slot != ' ') {
            return Err(ParseSupplyStacksError::CrateOutsideStacks {
                line: line_index,
                stack_count,
            });
        }
        slots.truncate(stack_count);
    } else {
        slots.resize(stack_count, ' ');
    }
    Ok(slots)
}

impl ParseData for SupplyStacks {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let mut scanner = InputScanner::new(input);

        let drawing = scanner.collect_sequence(|_, line| -> DynamicResult<_> { Ok(line) })?;
        // the last drawing line numbers the stacks
        let (numbering, crate_lines) = drawing
            .split_last()
            .ok_or(ParseSupplyStacksError::MissingDrawing)?;
        let stack_count = numbering.split_whitespace().count();

        // rows of slots bottom to top, so transposing gives each stack bottom to top
        let slot_rows = crate_lines
            .iter()
            .enumerate()
            .rev()
            .map(|(line_index, line)| crate_slots(line_index, line, stack_count))
            .collect::<Result<Vec<_>, _>>()?;
        let slots = Grid::from_rows(slot_rows)?;
        let stacks = slots
            .transpose()
            .rows()
            .map(|stack| stack.into_iter().filter(char::is_ascii_alphabetic).collect::<Vec<_>>())
            .collect();

        scanner.skip_empty();
        let moves = scanner.collect_sequence(|_, line| Move::parse(line, stack_count))?;

        Ok(Self { stacks, moves })
    }
}

#[derive(thiserror::Error, Debug)]
enum CraneError {
    #[error("tried to move {count} crates from stack {stack}, which holds {held}")]
    NotEnoughCrates {
        count: usize,
        stack: usize,
        held: usize,
    },
}

impl SupplyStacks {
    /// Apply every move, with `lift` deciding how a group of lifted crates is ordered when
    /// placed. Returns the top crate of each stack, skipping empty stacks.
    fn rearrange(&self, lift: impl Fn(&mut Vec<char>)) -> Result<String, CraneError> {
        let mut stacks = self.stacks.clone();

        for &Move { count, from, to } in &self.moves {
            let source = &mut stacks[from];
            let held = source.len();
            let split_at = held
                .checked_sub(count)
                .ok_or(CraneError::NotEnoughCrates {
                    count,
                    stack: from + 1,
                    held,
                })?;

            let mut lifted = source.split_off(split_at);
            lift(&mut lifted);
            stacks[to].append(&mut lifted);
        }

        Ok(stacks.iter().filter_map(|stack| stack.last()).collect())
    }
}

/*
For part 1, the crane moves crates one at a time, so a group of moved crates lands reversed.
Return the top crate of each stack.
*/

struct Day05;

impl Solution<PartOne> for Day05 {
    type Input = SupplyStacks;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.rearrange(|lifted| lifted.reverse())?)
    }
}

/*
For part 2, the crane moves a group of crates at once, keeping their order.
*/

impl Solution<PartTwo> for Day05 {
    type Input = SupplyStacks;
    type Output = String;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        Ok(input.rearrange(|_| {})?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_INPUT: &str = r"    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn parses_stacks_bottom_to_top() -> DynamicResult<()> {
        let parsed = SupplyStacks::parse(EXAMPLE_INPUT)?;
        assert_eq!(
            parsed.stacks,
            vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]
        );
        assert_eq!(
            parsed.moves[0],
            Move {
                count: 1,
                from: 1,
                to: 0
            }
        );
        Ok(())
    }

    #[test]
    fn parses_drawing_without_trailing_spaces() -> DynamicResult<()> {
        let trimmed: String = EXAMPLE_INPUT
            .lines()
            .map(|line| format!("{}\n", line.trim_end()))
            .collect();
        let parsed = SupplyStacks::parse(&trimmed)?;
        assert_eq!(parsed.stacks.len(), 3);
        assert_eq!(parsed.stacks[2], vec!['P']);
        Ok(())
    }

    #[test]
    fn rejects_move_from_missing_stack() {
        let input = EXAMPLE_INPUT.replace("move 1 from 1 to 2", "move 1 from 4 to 2");
        assert!(SupplyStacks::parse(&input).is_err());
    }

    #[test]
    fn rejects_crate_beyond_numbered_stacks() {
        let input = "[A] [B] [C] [D]\n 1   2   3\n\nmove 1 from 1 to 2\n";
        assert!(SupplyStacks::parse(input).is_err());
    }

    #[test]
    fn ignores_trailing_blank_slots() -> DynamicResult<()> {
        let input = "[A] [B]        \n 1   2\n\nmove 1 from 1 to 2\n";
        let parsed = SupplyStacks::parse(input)?;
        assert_eq!(parsed.stacks, vec![vec!['A'], vec!['B']]);
        Ok(())
    }

    #[test]
    fn part_one_solves_example() -> DynamicResult<()> {
        let parsed = SupplyStacks::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartOne>>::solve(&parsed)?;
        assert_eq!(result, "CMZ");
        Ok(())
    }

    #[test]
    fn part_two_solves_example() -> DynamicResult<()> {
        let parsed = SupplyStacks::parse(EXAMPLE_INPUT)?;
        let result = <Day05 as Solution<PartTwo>>::solve(&parsed)?;
        assert_eq!(result, "MCD");
        Ok(())
    }

    #[test]
    fn moving_too_many_crates_fails() -> DynamicResult<()> {
        let input = EXAMPLE_INPUT.replace("move 3 from 1 to 3", "move 5 from 1 to 3");
        let parsed = SupplyStacks::parse(&input)?;
        assert!(<Day05 as Solution<PartOne>>::solve(&parsed).is_err());
        Ok(())
    }
}
