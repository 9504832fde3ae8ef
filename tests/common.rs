//! Test utilities for disha-path integration tests.
//!
//! Loads the shipped reference mazes and provides path property checks.

#![allow(dead_code)]

use std::path::PathBuf;

use disha_path::{Direction, MazeFile, MazeGrid, MazeProblem, Position, step_directions};

/// Path to a file under the crate's `mazes/` folder
pub fn maze_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("mazes")
        .join(file)
}

/// Load a named reference maze as a search problem
pub fn reference_problem(name: &str) -> MazeProblem {
    let file =
        MazeFile::load(&maze_path("reference.yaml")).expect("Failed to load reference mazes");
    file.get(name)
        .unwrap_or_else(|| panic!("No reference maze named {}", name))
        .to_problem()
        .expect("Reference maze is malformed")
}

/// Convert `(row, col)` pairs to positions
pub fn cells(pairs: &[(i32, i32)]) -> Vec<Position> {
    pairs.iter().copied().map(Position::from).collect()
}

/// Assert every property a returned path must have
pub fn assert_legal_path(grid: &MazeGrid, path: &[Position], start: Position, end: Position) {
    assert_eq!(path.first(), Some(&start), "path must begin at start");
    assert_eq!(path.last(), Some(&end), "path must end at goal");

    let steps = step_directions(path);
    assert_eq!(steps.len(), path.len() - 1);

    let mut previous: Option<Direction> = None;
    for (i, (step, &cell)) in steps.into_iter().zip(&path[1..]).enumerate() {
        let step = step.unwrap_or_else(|| panic!("step {} is not a cardinal move", i + 1));
        assert!(grid.in_bounds(cell), "cell {} out of bounds", i + 1);
        assert!(grid.is_traversable(cell), "cell {} is blocked", i + 1);
        if let Some(prev) = previous {
            assert!(
                step == prev || step == prev.right_turn(),
                "step {} turns left or reverses ({} -> {})",
                i + 1,
                prev,
                step
            );
        }
        previous = Some(step);
    }
}

/// Regression oracle for reference maze 1
pub const MAZE_1_PATH: &[(i32, i32)] = &[
    (11, 10), (10, 10), (9, 10), (8, 10), (7, 10), (6, 10), (5, 10), (4, 10),
    (3, 10), (2, 10), (2, 11), (2, 12), (3, 12), (4, 12), (5, 12), (6, 12),
    (7, 12), (8, 12), (9, 12), (10, 12), (10, 11), (10, 10), (10, 9), (10, 8),
    (10, 7), (10, 6), (10, 5), (10, 4), (10, 3), (10, 2), (9, 2), (8, 2),
    (7, 2), (6, 2), (5, 2), (4, 2), (3, 2), (2, 2), (2, 3), (2, 4),
    (2, 5), (2, 6), (2, 7), (2, 8), (2, 9), (2, 10), (3, 10), (4, 10),
    (5, 10), (6, 10), (7, 10), (8, 10), (8, 9), (8, 8), (8, 7), (8, 6),
    (7, 6), (6, 6), (5, 6), (4, 6), (4, 7), (4, 8), (5, 8), (6, 8),
    (6, 7), (6, 6), (6, 5), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0),
    (5, 0), (4, 0), (3, 0), (2, 0), (1, 0), (0, 0), (0, 1), (0, 2),
    (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2), (8, 2),
    (9, 2), (10, 2), (11, 2),
];

/// Regression oracle for reference maze 2
pub const MAZE_2_PATH: &[(i32, i32)] = &[
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (6, 2), (7, 2),
    (7, 1), (7, 0), (6, 0), (5, 0), (4, 0), (3, 0), (2, 0), (2, 1),
    (2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (3, 6), (4, 6), (5, 6),
    (5, 5), (5, 4), (4, 4), (3, 4), (2, 4), (1, 4), (0, 4), (0, 5),
    (0, 6), (0, 7), (0, 8), (0, 9), (0, 10), (0, 11), (1, 11), (2, 11),
    (3, 11), (4, 11), (5, 11), (6, 11), (7, 11), (8, 11), (9, 11), (9, 10),
    (9, 9), (9, 8), (8, 8), (7, 8), (6, 8), (5, 8), (4, 8), (3, 8),
    (2, 8), (2, 9), (2, 10), (2, 11), (2, 12),
];

/// Regression oracle for reference maze 3
pub const MAZE_3_PATH: &[(i32, i32)] = &[
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (5, 2), (5, 1), (5, 0),
    (4, 0), (3, 0), (2, 0), (2, 1), (2, 2), (2, 3), (2, 4), (3, 4),
    (4, 4), (5, 4), (6, 4), (7, 4), (7, 3), (7, 2), (6, 2), (5, 2),
    (4, 2), (4, 3), (4, 4), (4, 5), (4, 6), (4, 7), (4, 8), (5, 8),
    (6, 8), (6, 7), (5, 7), (5, 8), (5, 9), (5, 10), (6, 10), (7, 10),
    (8, 10), (9, 10), (10, 10), (10, 9), (9, 9), (9, 10), (9, 11),
];
