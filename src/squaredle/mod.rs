pub mod grid;
pub mod solver;
pub mod trie;

pub use self::grid::{Grid, Position};
pub use self::solver::{par_solve, Solver, MIN_WORD_LEN};
pub use self::trie::Trie;
