use std::collections::{HashMap, VecDeque};

use nalgebra::{Point2, Scalar};

use super::{Adjacency, Grid, GridError, Point};

impl<T: Scalar> Grid<T> {
    /// Breadth-first search outward from `end`, finding how many steps every reachable point is
    /// from it.
    ///
    /// The search runs backward: `admissible(current, neighbor)` is asked whether the walk may
    /// extend from `current`, a point already reached, to `neighbor`, a point one step further
    /// from `end`. A forward movement rule from `a` to `b` must be written with the arguments
    /// swapped, as `rule(neighbor, current)`.
    ///
    /// The returned map always holds `end` at distance 0.
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] if `end`, an `(x, y)` position, is outside the grid.
    pub fn find_point_distances<F>(
        &self,
        end: Point2<usize>,
        adjacency: Adjacency,
        mut admissible: F,
    ) -> Result<HashMap<Point<T>, usize>, GridError>
    where
        F: FnMut(&Point<T>, &Point<T>) -> bool,
    {
        let end_point = self.point_at(end.y, end.x)?;

        let mut queue = VecDeque::new();
        let mut distances = HashMap::new();

        distances.insert(end_point.clone(), 0);
        queue.push_back((end_point, 0));

        while let Some((point, distance)) = queue.pop_front() {
            let next_distance = distance + 1;
            let neighbors =
                self.neighboring_points_where(point.y(), point.x(), adjacency, |current, neighbor| {
                    admissible(current, neighbor) && !distances.contains_key(neighbor)
                })?;

            // mark as visited on enqueue so nothing is queued twice
            for neighbor in neighbors.into_values() {
                distances.insert(neighbor.clone(), next_distance);
                queue.push_back((neighbor, next_distance));
            }
        }

        Ok(distances)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    /// The sample height map, `S` and `E` already replaced by `a` and `z`.
    const HEIGHT_MAP: [&str; 5] = ["aabqponm", "abcryxxl", "accszzxk", "acctuvwj", "abdefghi"];

    fn height_grid() -> Result<Grid<u8>, GridError> {
        Grid::from_rows(HEIGHT_MAP.iter().map(|line| line.bytes()))
    }

    /// Climbing allows a step up of at most one; the search runs from the summit back down.
    fn can_climb(current: &Point<u8>, neighbor: &Point<u8>) -> bool {
        *current.value() <= *neighbor.value() + 1
    }

    #[test]
    fn finds_hill_climbing_distance() -> Result<(), GridError> {
        let grid = height_grid()?;
        let start = Point::new(0, 0, ());
        let end = Point2::new(5, 2);

        let distances = grid.find_point_distances(end, Adjacency::Cardinal, can_climb)?;

        let start_distance = distances
            .iter()
            .find_map(|(point, distance)| point.is_same_location(&start).then_some(*distance));
        assert_eq!(start_distance, Some(31));
        Ok(())
    }

    #[test]
    fn best_lowland_start_is_closer() -> Result<(), GridError> {
        let grid = height_grid()?;
        let distances =
            grid.find_point_distances(Point2::new(5, 2), Adjacency::Cardinal, can_climb)?;

        let best = distances
            .iter()
            .filter(|(point, _)| *point.value() == b'a')
            .map(|(_, distance)| *distance)
            .min();
        assert_eq!(best, Some(29));
        Ok(())
    }

    #[test]
    fn end_is_at_distance_zero() -> Result<(), GridError> {
        let grid = Grid::filled(1, 1, 0u8)?;
        let distances = grid.find_point_distances(Point2::new(0, 0), Adjacency::All, |_, _| true)?;
        assert_eq!(distances.len(), 1);
        assert_eq!(distances.get(&Point::new(0, 0, 0)), Some(&0));
        Ok(())
    }

    #[test]
    fn end_outside_grid_fails() -> Result<(), GridError> {
        let grid = Grid::filled(2, 2, 0u8)?;
        assert!(
            grid.find_point_distances(Point2::new(2, 0), Adjacency::Cardinal, |_, _| true)
                .is_err()
        );
        Ok(())
    }

    #[test]
    fn walls_cut_off_regions() -> Result<(), GridError> {
        let grid = Grid::from_rows(["..#..", "..#..", "..#.."].iter().map(|row| row.chars()))?;

        let distances =
            grid.find_point_distances(Point2::new(0, 0), Adjacency::All, |_, n| *n.value() == '.')?;

        assert_eq!(distances.len(), 6);
        assert!(distances.keys().all(|point| point.x() < 2));
        assert_eq!(distances.get(&Point::new(1, 2, '.')), Some(&2));
        Ok(())
    }

    #[test]
    fn diagonal_moves_shorten_paths() -> Result<(), GridError> {
        let grid = Grid::filled(4, 4, 0u8)?;
        let corner = Point::new(3, 3, 0);

        let cardinal =
            grid.find_point_distances(Point2::new(0, 0), Adjacency::Cardinal, |_, _| true)?;
        let diagonal = grid.find_point_distances(Point2::new(0, 0), Adjacency::All, |_, _| true)?;

        assert_eq!(cardinal.get(&corner), Some(&6));
        assert_eq!(diagonal.get(&corner), Some(&3));
        Ok(())
    }

    /// Every point reachable by admissible steps, found without tracking distances.
    fn reachable(grid: &Grid<u8>, end: Point2<usize>, adjacency: Adjacency) -> HashSet<Point<u8>> {
        let mut seen = HashSet::new();
        let mut stack = vec![grid.point_at(end.y, end.x).expect("end is in bounds")];
        while let Some(point) = stack.pop() {
            if !seen.insert(point.clone()) {
                continue;
            }
            let neighbors = grid
                .neighboring_points_where(point.y(), point.x(), adjacency, can_climb)
                .expect("point came from the grid");
            stack.extend(neighbors.into_values());
        }
        seen
    }

    fn terrain() -> impl Strategy<Value = (Grid<u8>, Point2<usize>, bool)> {
        (1usize..7, 1usize..7).prop_flat_map(|(width, height)| {
            (
                prop::collection::vec(0u8..4, width * height),
                0..width,
                0..height,
                any::<bool>(),
            )
                .prop_map(move |(cells, x, y, diagonal)| {
                    let grid = Grid::from_rows(cells.chunks(width).map(<[u8]>::to_vec))
                        .expect("chunks are all full width");
                    (grid, Point2::new(x, y), diagonal)
                })
        })
    }

    proptest! {
        #[test]
        fn distances_descend_to_end((grid, end, diagonal) in terrain()) {
            let adjacency = if diagonal { Adjacency::All } else { Adjacency::Cardinal };
            let distances = grid
                .find_point_distances(end, adjacency, can_climb)
                .expect("end is in bounds");

            for (point, &distance) in &distances {
                if distance == 0 {
                    prop_assert_eq!(point.position(), end);
                    continue;
                }
                // some neighbor one step closer could have reached this point
                let closer = grid
                    .neighboring_points(point.y(), point.x(), adjacency)
                    .expect("point came from the grid")
                    .into_values()
                    .any(|q| {
                        distances.get(&q) == Some(&(distance - 1)) && can_climb(&q, point)
                    });
                prop_assert!(closer);
            }
        }

        #[test]
        fn distances_cover_everything_reachable((grid, end, diagonal) in terrain()) {
            let adjacency = if diagonal { Adjacency::All } else { Adjacency::Cardinal };
            let distances = grid
                .find_point_distances(end, adjacency, can_climb)
                .expect("end is in bounds");

            let found: HashSet<_> = distances.into_keys().collect();
            prop_assert_eq!(found, reachable(&grid, end, adjacency));
        }
    }
}
