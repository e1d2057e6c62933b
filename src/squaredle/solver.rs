use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use super::grid::{Grid, Position};
use super::trie::Trie;

/// Puzzle rule: words shorter than this never count, even when the
/// dictionary contains them.
pub const MIN_WORD_LEN: usize = 4;

/// Backtracking depth-first search over the grid. One solver owns one
/// in-flight search; the visited grid always mirrors the active path.
pub struct Solver<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    visited: Vec<Vec<bool>>,
    path: Vec<Position>,
    /// Each found word with the path it was first discovered on
    found: HashMap<String, Vec<Position>>,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid, trie: &'a Trie) -> Self {
        let dimension = grid.dimension();
        Self {
            grid,
            trie,
            visited: vec![vec![false; dimension]; dimension],
            path: Vec::new(),
            found: HashMap::new(),
        }
    }

    /// Searches from every starting cell and returns the deduplicated set
    /// of dictionary words embeddable in the grid.
    pub fn solve(&mut self) -> HashSet<String> {
        let dimension = self.grid.dimension();
        for row in 0..dimension {
            for col in 0..dimension {
                self.search_from(Position { row, col });
            }
        }
        self.found.keys().cloned().collect()
    }

    /// Runs one search rooted at `start`, leaving the visited grid as it
    /// was on entry.
    fn search_from(&mut self, start: Position) {
        self.visited[start.row][start.col] = true;
        self.path.push(start);
        self.dfs(start, self.grid[start].to_string());
        self.path.pop();
        self.visited[start.row][start.col] = false;
    }

    fn dfs(&mut self, pos: Position, current: String) {
        let (is_word, has_extensions) = self.trie.query(&current);
        if current.chars().count() >= MIN_WORD_LEN
            && is_word
            && !self.found.contains_key(&current)
        {
            self.found.insert(current.clone(), self.path.clone());
        }

        // No dictionary word extends this prefix, so the whole branch is dead
        if !has_extensions {
            return;
        }

        for next in pos.neighbors(self.grid.dimension()) {
            if self.visited[next.row][next.col] {
                continue;
            }
            self.visited[next.row][next.col] = true;
            self.path.push(next);
            let mut extended = current.clone();
            extended.push(self.grid[next]);
            self.dfs(next, extended);
            self.path.pop();
            self.visited[next.row][next.col] = false;
        }
    }

    /// The path each word was first found on. Every path visits a cell at
    /// most once and steps only between adjacent cells.
    pub fn discovery_paths(&self) -> &HashMap<String, Vec<Position>> {
        &self.found
    }
}

/// Parallel solve, split over starting cells. Each cell gets a private
/// solver so no visited state is ever shared between threads; the
/// per-cell word sets are unioned at the end. Produces the same set as
/// `Solver::solve`.
pub fn par_solve(grid: &Grid, trie: &Trie) -> HashSet<String> {
    let dimension = grid.dimension();
    (0..dimension * dimension)
        .into_par_iter()
        .flat_map(|i| {
            let start = Position {
                row: i / dimension,
                col: i % dimension,
            };
            let mut solver = Solver::new(grid, trie);
            solver.search_from(start);
            solver.found.into_keys().collect::<Vec<_>>()
        })
        .collect()
}
