use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Neighbor offsets (horizontal, vertical, and diagonal)
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1), // Up, Down, Left, Right
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1), // Diagonals
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Returns the in-bounds neighbors of this position under 8-way
    /// adjacency. Bounds are checked here so callers never index out of
    /// range.
    pub fn neighbors(self, dimension: usize) -> impl Iterator<Item = Position> {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row as isize + dr;
            let col = self.col as isize + dc;
            if row >= 0 && col >= 0 && (row as usize) < dimension && (col as usize) < dimension {
                Some(Position {
                    row: row as usize,
                    col: col as usize,
                })
            } else {
                None
            }
        })
    }

    /// Whether `other` is one of this position's 8 neighbors
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

/// The puzzle board: a square of letters, immutable for the duration of
/// a solve.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    dimension: usize,
}

impl Grid {
    pub fn new(cells: Vec<Vec<char>>) -> Result<Self> {
        let dimension = cells.len();
        if dimension == 0 {
            return Err(Error::BadGrid("grid is empty".to_string()));
        }
        for (i, row) in cells.iter().enumerate() {
            if row.len() != dimension {
                return Err(Error::BadGrid(format!(
                    "row {} has {} cells, expected {}",
                    i,
                    row.len(),
                    dimension
                )));
            }
        }
        Ok(Self { cells, dimension })
    }

    /// Parses an inline board like "dico,inmp,vxel,idua" (rows separated
    /// by commas or whitespace). Letters are lowercased.
    pub fn parse(s: &str) -> Result<Self> {
        let normalized = s.replace(',', " ");
        let cells = normalized
            .split_whitespace()
            .map(|row| row.chars().map(|c| c.to_ascii_lowercase()).collect())
            .collect();
        Self::new(cells)
    }

    /// Loads a board from a JSON file holding a row-major array of
    /// single-character strings.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path.as_ref())?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let raw_board: Vec<Vec<String>> = serde_json::from_str(&data)?;
        let mut cells = Vec::with_capacity(raw_board.len());
        for row in raw_board {
            let mut parsed = Vec::with_capacity(row.len());
            for cell in row {
                let mut chars = cell.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => parsed.push(c.to_ascii_lowercase()),
                    _ => {
                        return Err(Error::BadGrid(format!(
                            "cell {:?} is not a single character",
                            cell
                        )))
                    }
                }
            }
            cells.push(parsed);
        }

        Self::new(cells)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = char;

    fn index(&self, index: Position) -> &Self::Output {
        &self.cells[index.row][index.col]
    }
}

#[cfg(test)]
mod tests {
    use super::{Grid, Position};

    #[test]
    fn test_parse() {
        let grid = Grid::parse("DIC,ine,vxx").unwrap();
        assert_eq!(grid.dimension(), 3);
        assert_eq!(grid[Position { row: 0, col: 0 }], 'd');
        assert_eq!(grid[Position { row: 2, col: 0 }], 'v');
    }

    #[test]
    fn test_rejects_ragged() {
        assert!(Grid::parse("ab,c").is_err());
    }

    #[test]
    fn test_rejects_non_square() {
        assert!(Grid::parse("abc,def").is_err());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Grid::parse("").is_err());
    }

    #[test]
    fn test_neighbor_counts() {
        let corner = Position { row: 0, col: 0 };
        assert_eq!(corner.neighbors(4).count(), 3);

        let edge = Position { row: 0, col: 1 };
        assert_eq!(edge.neighbors(4).count(), 5);

        let center = Position { row: 1, col: 1 };
        assert_eq!(center.neighbors(4).count(), 8);

        let lone = Position { row: 0, col: 0 };
        assert_eq!(lone.neighbors(1).count(), 0);
    }

    #[test]
    fn test_neighbors_in_bounds() {
        for row in 0..3 {
            for col in 0..3 {
                for n in (Position { row, col }).neighbors(3) {
                    assert!(n.row < 3 && n.col < 3);
                    assert!(n != Position { row, col });
                }
            }
        }
    }

    #[test]
    fn test_adjacency() {
        let pos = Position { row: 1, col: 1 };
        assert!(pos.is_adjacent(Position { row: 0, col: 0 }));
        assert!(pos.is_adjacent(Position { row: 2, col: 1 }));
        assert!(!pos.is_adjacent(pos));
        assert!(!pos.is_adjacent(Position { row: 3, col: 1 }));
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("squaredle_grid_from_file.json");
        std::fs::write(&path, r#"[["D","i"],["c","e"]]"#).unwrap();
        let grid = Grid::from_file(&path).unwrap();
        assert_eq!(grid.dimension(), 2);
        assert_eq!(grid[Position { row: 0, col: 0 }], 'd');
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_rejects_multichar_cell() {
        let path = std::env::temp_dir().join("squaredle_grid_multichar.json");
        std::fs::write(&path, r#"[["ab","i"],["c","e"]]"#).unwrap();
        assert!(Grid::from_file(&path).is_err());
        std::fs::remove_file(&path).unwrap();
    }
}
