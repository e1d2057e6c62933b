use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process;

use crate::error::{Error, Result};
use crate::squaredle::{Grid, Solver, Trie};

mod error;
mod squaredle;
mod utils;

const USAGE: &str = "squaredle index <wordlist> <out.trie>
squaredle solve <index.trie> <grid>
squaredle solve --words <wordlist> <grid>

<grid> is a JSON file of single-letter strings (row-major) when the
argument ends in .json, otherwise an inline board like \"dico,inmp,vxel,idua\"";

/// Reads a newline-delimited word list: one word per line, trimmed and
/// lowercased, empty lines skipped.
fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        words.push(word);
    }
    Ok(words)
}

fn load_grid(arg: &str) -> Result<Grid> {
    if arg.ends_with(".json") {
        Grid::from_file(arg)
    } else {
        Grid::parse(arg)
    }
}

fn build_index(wordlist: &str, out: &str) -> Result<()> {
    let words = read_word_list(wordlist)?;
    let trie = Trie::from_words(&words);
    trie.save(out)?;
    println!("Indexed {} words into {}", trie.len(), out);
    Ok(())
}

fn solve_puzzle(trie: &Trie, grid_arg: &str) -> Result<()> {
    let grid = load_grid(grid_arg)?;
    let found = Solver::new(&grid, trie).solve();
    print_words(&found);
    Ok(())
}

fn print_words(found: &HashSet<String>) {
    let mut words = found.iter().map(|s| s.as_str()).collect::<Vec<_>>();
    words.sort_unstable();
    println!("Found {} words:", words.len());
    for word in words {
        println!("{}", word);
    }
}

fn run() -> Result<()> {
    let args = env::args().skip(1).collect::<Vec<_>>();
    let args = args.iter().map(|s| s.as_str()).collect::<Vec<_>>();
    match args.as_slice() {
        ["index", wordlist, out] => build_index(wordlist, out),
        ["solve", "--words", wordlist, grid] => {
            let words = read_word_list(wordlist)?;
            solve_puzzle(&Trie::from_words(&words), grid)
        }
        ["solve", index, grid] => solve_puzzle(&Trie::load(index)?, grid),
        _ => Err(Error::Usage(USAGE.to_string())),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::read_word_list;

    #[test]
    fn test_read_word_list_normalizes() {
        let path = std::env::temp_dir().join("squaredle_wordlist.txt");
        std::fs::write(&path, "  DICE \nnice\n\n MiCe\n").unwrap();
        let words = read_word_list(&path).unwrap();
        assert_eq!(words, vec!["dice", "nice", "mice"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_word_list_missing_file() {
        let path = std::env::temp_dir().join("squaredle_wordlist_missing.txt");
        assert!(read_word_list(&path).is_err());
    }
}
