use std::collections::{HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::*;

fn walls(maze: &Maze) -> Vec<(i32, i32)> {
    maze.grid()
        .iter()
        .filter(|(pos, cell)| !is_corner(*pos) && cell.kind == CellKind::Path)
        .map(|(pos, _)| pos)
        .collect()
}

/// Cells reachable from `from` through walkable cells, optionally treating
/// one extra cell as blocked.
fn reachable(
    grid: &Grid<MazeCell>,
    from: (i32, i32),
    blocked: Option<(i32, i32)>,
) -> HashSet<(i32, i32)> {
    let mut seen = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);
    while let Some((row, col)) = queue.pop_front() {
        for (d_row, d_col) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = (row + d_row, col + d_col);
            if Some(next) == blocked || seen.contains(&next) {
                continue;
            }
            if grid.get(next.0, next.1).map_or(false, |c| c.is_walkable()) {
                seen.insert(next);
                queue.push_back(next);
            }
        }
    }
    seen
}

#[test]
fn five_by_five_has_nine_corners_and_twelve_edges() {
    assert_eq!(corners(5, 5).len(), 9);
    let edges = candidate_edges(5, 5);
    assert_eq!(edges.len(), 12);
    for edge in &edges {
        assert!(is_corner(edge.a) && is_corner(edge.b));
        assert_eq!(
            edge.wall,
            ((edge.a.0 + edge.b.0) / 2, (edge.a.1 + edge.b.1) / 2)
        );
    }
}

#[test]
fn five_by_five_carves_eight_walls_and_connects_the_corners() {
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let maze = Maze::with_endpoints(5, 5, (0, 0), (4, 4), 1, &mut rng).unwrap();
        assert_eq!(maze.carved(), 8);
        assert_eq!(walls(&maze).len(), 8);
        assert!(reachable(maze.grid(), (0, 0), None).contains(&(4, 4)));
        assert_eq!(maze.cell(4, 4).unwrap().kind, CellKind::Exit);
    }
}

#[test]
fn initial_reveal_uses_the_vision_radius() {
    let mut rng = StdRng::seed_from_u64(3);
    let maze = Maze::with_endpoints(5, 5, (0, 0), (4, 4), 1, &mut rng).unwrap();
    for (row, col) in [(0, 0), (0, 1), (1, 0)] {
        assert!(maze.cell(row, col).unwrap().seen);
    }
    assert!(!maze.cell(2, 2).unwrap().seen);
    assert_eq!(maze.grid().values().filter(|c| c.seen).count(), 3);
}

#[test]
fn carved_paths_form_a_spanning_tree() {
    let sizes = [(21, 31), (9, 9), (10, 14), (3, 17), (1, 9)];
    for (seed, (rows, cols)) in sizes.into_iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(seed as u64);
        let maze = Maze::generate(rows, cols, 7, &mut rng).unwrap();
        let corners = corners(rows, cols);
        let carved = walls(&maze);
        assert_eq!(carved.len(), corners.len() - 1, "{}x{}", rows, cols);

        let all = reachable(maze.grid(), corners[0], None);
        for corner in &corners {
            assert!(all.contains(corner));
        }

        // Every carved wall is a bridge: removing it splits the corners.
        for wall in carved {
            let side = reachable(maze.grid(), corners[0], Some(wall));
            assert!(corners.iter().any(|c| !side.contains(c)));
        }
    }
}

#[test]
fn generated_mazes_are_solvable() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..30 {
        let maze = Maze::generate(21, 31, 7, &mut rng).unwrap();
        assert_ne!(maze.start(), maze.exit());
        assert!(is_corner(maze.start()) && is_corner(maze.exit()));
        assert_eq!(maze.player(), maze.start());
        assert!(reachable(maze.grid(), maze.start(), None).contains(&maze.exit()));
        let exits = maze.grid().values().filter(|c| c.kind == CellKind::Exit).count();
        assert_eq!(exits, 1);
    }
}

/// Replays the draws `pick_endpoints` makes and returns every sampled pair.
fn sampled_pairs(corners: &[(i32, i32)], rng: &mut StdRng) -> Vec<((i32, i32), (i32, i32))> {
    let mut pairs = Vec::new();
    while pairs.len() < ENDPOINT_TRIALS {
        let a = corners[rng.gen_range(0..corners.len())];
        let b = corners[rng.gen_range(0..corners.len())];
        if a != b {
            pairs.push((a, b));
        }
    }
    pairs
}

fn manhattan((a, b): ((i32, i32), (i32, i32))) -> i32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

#[test]
fn endpoints_come_from_the_furthest_of_three_samples() {
    let corners = corners(21, 31);
    let mut rng = StdRng::seed_from_u64(5);
    let mut beat_first_sample = 0;
    for _ in 0..100 {
        let pairs = sampled_pairs(&corners, &mut rng.clone());
        let furthest = pairs.iter().map(|&pair| manhattan(pair)).max().unwrap();
        let expected = *pairs
            .iter()
            .find(|&&pair| manhattan(pair) == furthest)
            .unwrap();
        if expected != pairs[0] {
            beat_first_sample += 1;
        }

        assert_eq!(pick_endpoints(&corners, &mut rng), Some(expected));
    }
    assert!(beat_first_sample > 0);
}

#[test]
fn two_corners_always_give_both_endpoints() {
    let corners = corners(1, 3);
    assert_eq!(corners.len(), 2);
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..20 {
        let (a, b) = pick_endpoints(&corners, &mut rng).unwrap();
        assert_ne!(a, b);
    }
}

#[test]
fn too_few_corners_give_no_endpoints() {
    let mut rng = StdRng::seed_from_u64(8);
    assert_eq!(pick_endpoints(&corners(1, 1), &mut rng), None);
    assert_eq!(pick_endpoints(&[], &mut rng), None);
}

#[test]
fn single_corner_grid_is_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        Maze::generate(2, 2, 7, &mut rng),
        Err(GridError::InvalidLayout(_))
    ));
}

#[test]
fn endpoints_must_be_distinct_corners() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(Maze::with_endpoints(5, 5, (0, 1), (4, 4), 1, &mut rng).is_err());
    assert!(Maze::with_endpoints(5, 5, (2, 2), (2, 2), 1, &mut rng).is_err());
    assert!(Maze::with_endpoints(5, 5, (0, 0), (6, 6), 1, &mut rng).is_err());
}

#[test]
fn moves_never_enter_obstacles_or_leave_the_grid() {
    let mut rng = StdRng::seed_from_u64(21);
    let mut maze = Maze::generate(11, 15, 3, &mut rng).unwrap();
    let steps = [(1, 0), (-1, 0), (0, 1), (0, -1)];
    let mut seen_before: HashSet<(i32, i32)> = HashSet::new();
    for i in 0..2_000 {
        let (d_row, d_col) = steps[(i * 7 + i / 3) % 4];
        let before = maze.player();
        let moved = maze.try_move(d_row, d_col).unwrap();
        let (row, col) = maze.player();
        let cell = maze.cell(row, col).unwrap();
        assert!(cell.is_walkable());
        assert!(cell.seen);
        if !moved {
            assert_eq!(maze.player(), before);
        }

        for pos in &seen_before {
            assert!(maze.cell(pos.0, pos.1).unwrap().seen);
        }
        seen_before = maze
            .grid()
            .iter()
            .filter(|(_, c)| c.seen)
            .map(|(pos, _)| pos)
            .collect();
    }
}

#[test]
fn bumping_into_the_edge_is_a_silent_no_op() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut maze = Maze::with_endpoints(5, 5, (0, 0), (4, 4), 1, &mut rng).unwrap();
    assert_eq!(maze.try_move(-1, 0), Ok(false));
    assert_eq!(maze.try_move(0, -1), Ok(false));
    assert_eq!(maze.player(), (0, 0));
}

#[test]
fn diagonal_or_long_moves_are_rejected() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut maze = Maze::with_endpoints(5, 5, (0, 0), (4, 4), 1, &mut rng).unwrap();
    assert!(matches!(maze.try_move(1, 1), Err(GridError::InvalidOperation(_))));
    assert!(matches!(maze.try_move(0, 2), Err(GridError::InvalidOperation(_))));
    assert!(matches!(maze.try_move(0, 0), Err(GridError::InvalidOperation(_))));
}

#[test]
fn walking_the_solution_wins_and_stays_won() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut maze = Maze::generate(9, 13, 2, &mut rng).unwrap();

    // Breadth-first search for the unique path, then replay it as moves.
    let mut parent = std::collections::HashMap::new();
    let mut queue = VecDeque::from([maze.start()]);
    parent.insert(maze.start(), maze.start());
    while let Some((row, col)) = queue.pop_front() {
        for (d_row, d_col) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let next = (row + d_row, col + d_col);
            if parent.contains_key(&next) {
                continue;
            }
            if maze.cell(next.0, next.1).map_or(false, |c| c.is_walkable()) {
                parent.insert(next, (row, col));
                queue.push_back(next);
            }
        }
    }
    let mut path = vec![maze.exit()];
    while *path.last().unwrap() != maze.start() {
        let previous = parent[path.last().unwrap()];
        path.push(previous);
    }
    path.reverse();

    for pair in path.windows(2) {
        assert!(!maze.is_won());
        let (d_row, d_col) = (pair[1].0 - pair[0].0, pair[1].1 - pair[0].1);
        assert_eq!(maze.try_move(d_row, d_col), Ok(true));
    }
    assert!(maze.is_won());
    assert_eq!(maze.player(), maze.exit());

    // Leaving the exit does not undo the win.
    let back = path[path.len() - 2];
    let step = (back.0 - maze.exit().0, back.1 - maze.exit().1);
    assert_eq!(maze.try_move(step.0, step.1), Ok(true));
    assert!(maze.is_won());
}
