use crate::Coordinate;
use crate::grid::Grid;

/// Everything that changes between one generation and the next.
///
/// Both sets are computed from the pre-step grid before any of them is
/// applied. The sets are disjoint by construction: a kill targets an alive
/// cell, a spawn targets a dead one.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transition {
    pub kills: Vec<Coordinate>,
    pub spawns: Vec<Coordinate>,
}

/// Classify every cell of the current generation.
///
/// The grid is only read here. Mutating a cell as soon as it is classified
/// would poison the neighbor counts of cells visited later in the same pass,
/// so the caller applies the returned [`Transition`] as a whole afterwards.
pub fn classify(grid: &Grid) -> Transition {
    let mut transition = Transition::default();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let alive = grid.get(x, y);
            let neighbors = grid.count_neighbors(x, y);

            if alive && neighbors < 2 {
                // Underpopulation
                transition.kills.push((x, y));
            } else if alive && neighbors > 3 {
                // Overpopulation
                transition.kills.push((x, y));
            } else if !alive && neighbors == 3 {
                transition.spawns.push((x, y));
            }
        }
    }

    transition
}

/// Advance the grid by one generation.
pub fn advance(grid: &mut Grid) {
    let transition = classify(grid);

    apply(grid, &transition);
}

/// Write a [`Transition`] into the grid, kills first. The order between the
/// two sets doesn't matter since they are disjoint.
fn apply(grid: &mut Grid, transition: &Transition) {
    for &(x, y) in &transition.kills {
        grid.set(x, y, false);
    }

    for &(x, y) in &transition.spawns {
        grid.set(x, y, true);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::grid::Grid;

    use super::advance;
    use super::classify;

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive(x, y).unwrap() {
                    cells.push((x, y));
                }
            }
        }

        cells
    }

    #[test]
    fn block_is_a_still_life() {
        let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let mut grid = Grid::new(4, 4, block).unwrap();

        advance(&mut grid);

        assert_eq!(alive_cells(&grid), vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let horizontal = [(1, 2), (2, 2), (3, 2)];
        let mut grid = Grid::new(5, 5, horizontal).unwrap();

        advance(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(2, 1), (2, 2), (2, 3)]);

        advance(&mut grid);
        assert_eq!(alive_cells(&grid), vec![(1, 2), (2, 2), (3, 2)]);
    }

    /// An alive cell survives exactly when its neighbor count is 2 or 3.
    /// Pins the kill thresholds on both sides of the boundary.
    #[test]
    fn survival_boundaries() {
        for (neighbors, survives) in [(0, false), (1, false), (2, true), (3, true), (4, false)] {
            // Center of a 3x3 field, with `neighbors` cells alive around it
            let ring = [(0, 0), (2, 0), (0, 2), (2, 2), (1, 0), (1, 2), (0, 1), (2, 1)];
            let alive = std::iter::once((1, 1)).chain(ring.into_iter().take(neighbors));
            let mut grid = Grid::new(3, 3, alive).unwrap();

            advance(&mut grid);

            assert_eq!(
                grid.is_alive(1, 1),
                Ok(survives),
                "alive cell with {neighbors} neighbors"
            );
        }
    }

    #[test]
    fn dead_cell_spawns_only_on_exactly_three() {
        for (neighbors, spawns) in [(2, false), (3, true), (4, false)] {
            let ring = [(0, 0), (2, 0), (0, 2), (2, 2), (1, 0), (1, 2), (0, 1), (2, 1)];
            let mut grid = Grid::new(3, 3, ring.into_iter().take(neighbors)).unwrap();

            advance(&mut grid);

            assert_eq!(
                grid.is_alive(1, 1),
                Ok(spawns),
                "dead cell with {neighbors} neighbors"
            );
        }
    }

    /// A naive pass that mutates cells as it classifies them gets this grid
    /// wrong: visiting row-major, the spawn at (1, 0) would become visible to
    /// (2, 0) and tip its count from 2 to 3, and the spawn at (1, 0) would
    /// keep (0, 1) alive at 2 neighbors instead of letting it starve at 1.
    #[test]
    fn classification_never_sees_same_generation_updates() {
        let row = [(0, 1), (1, 1), (2, 1)];
        let mut grid = Grid::new(4, 4, row).unwrap();

        advance(&mut grid);

        assert_eq!(grid.is_alive(2, 0), Ok(false));
        assert_eq!(grid.is_alive(0, 1), Ok(false));
        assert_eq!(alive_cells(&grid), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn empty_grid_stays_empty() {
        let mut grid = Grid::new(6, 6, []).unwrap();

        advance(&mut grid);

        assert!(alive_cells(&grid).is_empty());
    }

    #[test]
    fn lone_cell_starves() {
        let mut grid = Grid::new(3, 3, [(1, 1)]).unwrap();

        advance(&mut grid);

        assert!(alive_cells(&grid).is_empty());
    }

    proptest! {
        /// Kills and spawns are disjoint, in bounds, and target the right
        /// pre-step states.
        #[test]
        fn transitions_are_coherent(
            (w, h, seed) in (1usize..12, 1usize..12).prop_flat_map(|(w, h)| {
                let coords = proptest::collection::vec((0..w, 0..h), 0..48);
                (Just(w), Just(h), coords)
            })
        ) {
            let grid = Grid::new(w, h, seed).unwrap();
            let transition = classify(&grid);

            for &(x, y) in &transition.kills {
                prop_assert_eq!(grid.is_alive(x, y), Ok(true));
            }

            for &(x, y) in &transition.spawns {
                prop_assert_eq!(grid.is_alive(x, y), Ok(false));
                prop_assert!(!transition.kills.contains(&(x, y)));
            }
        }

        /// Stepping is deterministic: the same generation always produces
        /// the same successor.
        #[test]
        fn stepping_is_deterministic(
            (w, h, seed) in (1usize..10, 1usize..10).prop_flat_map(|(w, h)| {
                let coords = proptest::collection::vec((0..w, 0..h), 0..32);
                (Just(w), Just(h), coords)
            })
        ) {
            let mut a = Grid::new(w, h, seed.clone()).unwrap();
            let mut b = Grid::new(w, h, seed).unwrap();

            advance(&mut a);
            advance(&mut b);

            prop_assert_eq!(alive_cells(&a), alive_cells(&b));
        }
    }
}
