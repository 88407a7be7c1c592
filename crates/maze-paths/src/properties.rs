//! Cross-algorithm checks over generated mazes.

use std::collections::{HashSet, VecDeque};

use maze_core::{Board, Pos};
use maze_gen::MazeGen;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::testing::assert_valid_path;
use crate::{Algorithm, MazeGraph};

const UNREACHABLE: usize = usize::MAX;

/// Edge distance from start to every vertex.
fn distances(g: &MazeGraph) -> Vec<usize> {
    let mut dist = vec![UNREACHABLE; g.len()];
    let mut queue = VecDeque::from([g.start()]);
    dist[g.start()] = 0;
    while let Some(v) = queue.pop_front() {
        for &n in g.neighbors(v) {
            if dist[n] == UNREACHABLE {
                dist[n] = dist[v] + 1;
                queue.push_back(n);
            }
        }
    }
    dist
}

fn boards(seed: u64) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = Vec::new();
    for _ in 0..12 {
        let rows = rng.random_range(2..16);
        let cols = rng.random_range(1..16);
        let loops = rng.random_range(0.0..0.3);
        let mut mg = MazeGen::new(StdRng::seed_from_u64(rng.random())).with_loops(loops);
        out.push(mg.carve(rows, cols));
        let density = rng.random_range(0.0..0.45);
        out.push(mg.scatter(rows, cols, density));
    }
    out
}

fn check(board: &Board) {
    let g = MazeGraph::new(board).unwrap();
    let dist = distances(&g);
    let reachable = dist[g.goal()] != UNREACHABLE;
    let component = dist.iter().filter(|&&d| d != UNREACHABLE).count();
    let dist_at = |p: Pos| dist[g.id_at(p).unwrap()];

    // BFS: each position once, non-decreasing distance.
    let bfs = Algorithm::BreadthFirst.run(&g);
    assert_eq!(bfs.found, reachable, "bfs on\n{board}");
    let unique: HashSet<_> = bfs.positions.iter().collect();
    assert_eq!(unique.len(), bfs.len());
    for w in bfs.positions.windows(2) {
        assert!(dist_at(w[0]) <= dist_at(w[1]));
    }
    if !reachable {
        assert_eq!(bfs.len(), component);
    } else {
        assert_eq!(bfs.positions.last(), Some(&g.goal_pos()));
    }

    // DFS: each position once, whole component when the goal is cut off.
    let dfs = Algorithm::DepthFirst.run(&g);
    assert_eq!(dfs.found, reachable, "dfs on\n{board}");
    let unique: HashSet<_> = dfs.positions.iter().collect();
    assert_eq!(unique.len(), dfs.len());
    assert_eq!(dfs.positions.first(), Some(&g.start_pos()));
    if !reachable {
        assert_eq!(dfs.len(), component);
    }
    for p in &dfs.positions {
        assert_ne!(dist_at(*p), UNREACHABLE);
    }

    // A* is optimal; best-first is valid but possibly longer.
    let astar = Algorithm::AStar.run(&g);
    let best = Algorithm::BestFirst.run(&g);
    assert_eq!(astar.found, reachable, "a* on\n{board}");
    assert_eq!(best.found, reachable, "best-first on\n{board}");
    if reachable {
        assert_valid_path(&g, astar.path().unwrap());
        assert_valid_path(&g, best.path().unwrap());
        assert_eq!(astar.path_len(), Some(dist[g.goal()]));
        assert!(astar.path_len() <= best.path_len());
    } else {
        assert!(astar.is_empty());
        assert!(best.is_empty());
    }

    // Fresh instances on the same graph agree.
    for a in Algorithm::ALL {
        assert_eq!(a.run(&g), a.run(&g), "{a} is not repeatable");
    }
}

#[test]
fn generated_mazes() {
    for seed in 0..8 {
        for board in boards(seed) {
            check(&board);
        }
    }
}

#[test]
fn two_by_one_gives_two_positions_everywhere() {
    let g = MazeGraph::new(&Board::parse("#\n$").unwrap()).unwrap();
    for a in Algorithm::ALL {
        let r = a.run(&g);
        assert!(r.found);
        assert_eq!(r.positions, vec![Pos::new(0, 0), Pos::new(1, 0)], "{a}");
    }
}
