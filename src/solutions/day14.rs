use std::fmt::Display;

use aoc_framework::grid::{Adjacency, Direction, Expansion, Grid};
use aoc_framework::parsing::{parse_input_lines, parse_with_context};
use aoc_framework::runner::solution_runner;
use aoc_framework::{DynamicResult, ParseData, PartOne, PartTwo, Solution};
use nalgebra::Point2;

#[solution_runner(
    name = "Day 14: Regolith Reservoir",
    parsed = RockScan,
    part_one = Day14,
    part_two = Day14
)]
impl super::AdventOfCode2022<14> {}

/*
Input is a scan of rock in a cave's vertical slice. Each line is a path of `x,y` points joined by
` -> `, where straight lines of rock run between consecutive points. `x` grows to the right and `y`
grows downward.
*/

/// Column where sand pours into the cave, from the top row.
const SAND_SOURCE_X: usize = 500;

/// Directions a grain of sand tries to fall, in order of preference.
const FALL_ORDER: [Direction; 3] = [Direction::Down, Direction::DownLeft, Direction::DownRight];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Air,
    Rock,
    Sand,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Air => '.',
            Self::Rock => '#',
            Self::Sand => 'o',
        };
        write!(f, "{symbol}")
    }
}

/// The rock paths from input.
#[derive(Debug)]
struct RockScan {
    paths: Vec<Vec<Point2<usize>>>,
}

#[derive(thiserror::Error, Debug)]
enum ParseRockScanError {
    #[error("expected a point like \"498,4\", found: {0:?}")]
    InvalidPoint(String),

    #[error("input has no rock paths")]
    NoRock,
}

/// Parse one `x,y` point of a rock path.
fn parse_point(point: &str) -> DynamicResult<Point2<usize>> {
    let (x, y) = point
        .split_once(',')
        .ok_or_else(|| ParseRockScanError::InvalidPoint(point.to_owned()))?;
    Ok(Point2::new(parse_with_context(x)?, parse_with_context(y)?))
}

impl ParseData for RockScan {
    fn parse(input: &str) -> DynamicResult<Self>
    where
        Self: Sized,
    {
        let paths: Vec<Vec<Point2<usize>>> =
            parse_input_lines(input, |_, line| -> DynamicResult<_> {
                line.split(" -> ").map(parse_point).collect()
            })
            .collect::<Result<_, _>>()?;

        if paths.iter().all(Vec::is_empty) {
            return Err(ParseRockScanError::NoRock.into());
        }

        Ok(Self { paths })
    }
}

/// A cave slice filled with rock, ready for sand.
///
/// The grid covers a window of the scan starting at the top row, so only `x` is shifted.
struct Cave {
    tiles: Grid<Tile>,
    /// The sand source in grid coordinates.
    source: Point2<usize>,
}

/// Where a grain of sand ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landing {
    /// Came to rest at the grid position.
    Rest(Point2<usize>),
    /// Fell past everything into the abyss.
    Abyss,
}

impl Cave {
    /// Build the smallest window holding every rock and the sand source, with a column of air on
    /// each side and a row of air below so falling sand has somewhere to go.
    fn from_scan(scan: &RockScan) -> DynamicResult<Self> {
        let rocks = || scan.paths.iter().flatten();
        let xs = || rocks().map(|p| p.x).chain([SAND_SOURCE_X]);
        let min_x = xs().min().unwrap_or(SAND_SOURCE_X);
        let max_x = xs().max().unwrap_or(SAND_SOURCE_X);
        let max_y = rocks().map(|p| p.y).max().unwrap_or(0);

        let mut tiles = Grid::filled(max_x - min_x + 1, max_y + 1, Tile::Air)?;
        for path in &scan.paths {
            for segment in path.windows(2) {
                let to_grid = |p: &Point2<usize>| Point2::new(p.x - min_x, p.y);
                tiles.draw_line(to_grid(&segment[0]), to_grid(&segment[1]), Tile::Rock)?;
            }
        }

        let padding = Expansion {
            left: 1,
            right: 1,
            down: 1,
            ..Expansion::default()
        };
        Ok(Self {
            tiles: tiles.expand(padding, Tile::Air),
            source: Point2::new(SAND_SOURCE_X - min_x + padding.left, 0),
        })
    }

    /// Lay a floor of rock two rows below the lowest rock, wide enough that sand piling up from
    /// the source never reaches its ends.
    fn with_floor(&self) -> DynamicResult<Self> {
        let source = self.source;
        // sand spreads one column per row fallen, and the floor is this many rows down
        let floor_y = self.tiles.height();
        let left = floor_y.saturating_sub(source.x);
        let right = floor_y.saturating_sub(self.tiles.width() - 1 - source.x);

        let mut tiles = self.tiles.expand(
            Expansion {
                left,
                right,
                down: 1,
                ..Expansion::default()
            },
            Tile::Air,
        );
        let width = tiles.width();
        tiles.draw_line(
            Point2::new(0, floor_y),
            Point2::new(width - 1, floor_y),
            Tile::Rock,
        )?;

        Ok(Self {
            tiles,
            source: Point2::new(source.x + left, source.y),
        })
    }

    /// Drop a grain from the source and follow it until it rests or leaves through the bottom.
    fn drop_grain(&self) -> DynamicResult<Landing> {
        let bottom = self.tiles.height() - 1;
        let mut position = self.source;

        loop {
            if position.y == bottom {
                return Ok(Landing::Abyss);
            }

            let open =
                self.tiles
                    .neighboring_points_where(position.y, position.x, Adjacency::All, |_, n| {
                        *n.value() == Tile::Air
                    })?;

            match FALL_ORDER.iter().find_map(|direction| open.get(direction)) {
                Some(next) => position = next.position(),
                None => return Ok(Landing::Rest(position)),
            }
        }
    }

    /// Pour sand until a grain falls into the abyss or the source is buried, returning how many
    /// grains came to rest.
    fn pour(&mut self) -> DynamicResult<usize> {
        let source = self.source;
        let mut resting = 0;

        while let Landing::Rest(position) = self.drop_grain()? {
            self.tiles.set_point(position.y, position.x, Tile::Sand);
            resting += 1;
            if position == source {
                break;
            }
        }

        Ok(resting)
    }
}

impl Display for Cave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.tiles.fmt(f)
    }
}

/*
Sand falls one grain at a time from the source. Each step it moves down if that tile is air,
otherwise down-left, otherwise down-right, and otherwise it comes to rest.

For part 1, count the grains that come to rest before sand starts flowing into the abyss below the
lowest rock.
*/

struct Day14;

impl Solution<PartOne> for Day14 {
    type Input = RockScan;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut cave = Cave::from_scan(input)?;
        cave.pour()
    }
}

/*
For part 2, there is an endless floor two rows below the lowest rock. Count the grains that come
to rest until one rests at the source.
*/

impl Solution<PartTwo> for Day14 {
    type Input = RockScan;
    type Output = usize;

    fn solve(input: &Self::Input) -> DynamicResult<Self::Output> {
        let mut cave = Cave::from_scan(input)?.with_floor()?;
        cave.pour()
    }
}
