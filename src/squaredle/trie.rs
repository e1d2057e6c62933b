use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::serialization;

/// On-disk format version; bump whenever the node encoding changes
const TRIE_FORMAT_VERSION: u32 = 1;

/// Prefix tree node
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TrieNode {
    next: HashMap<char, TrieNode>,
    terminal: bool,
}

/// Dictionary index over the word list. Built once by insertion, then
/// treated as read-only for the lifetime of a solve.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

#[derive(Serialize)]
struct TrieFileRef<'a> {
    version: u32,
    root: &'a TrieNode,
}

#[derive(Deserialize)]
struct TrieFile {
    version: u32,
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            trie.insert(word.as_ref());
        }
        trie
    }

    /// Adds a word to the trie. Inserting the same word twice leaves the
    /// structure unchanged; inserting the empty string is a no-op so the
    /// root never becomes a terminal.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.next.entry(c).or_default();
        }
        node.terminal = true;
    }

    /// Follows `prefix` down from the root and reports
    /// `(is_word, has_extensions)`. A missing child at any level means no
    /// dictionary word starts with `prefix`, so both flags come back false
    /// and the caller can prune.
    pub fn query(&self, prefix: &str) -> (bool, bool) {
        let mut node = &self.root;
        for c in prefix.chars() {
            match node.next.get(&c) {
                Some(child) => node = child,
                None => return (false, false),
            }
        }
        (node.terminal, !node.next.is_empty())
    }

    /// Number of words stored (terminal nodes)
    pub fn len(&self) -> usize {
        fn count(node: &TrieNode) -> usize {
            node.next.values().map(count).sum::<usize>() + node.terminal as usize
        }
        count(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.next.is_empty()
    }

    /// Writes the trie to disk as a versioned bincode blob
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = TrieFileRef {
            version: TRIE_FORMAT_VERSION,
            root: &self.root,
        };
        serialization::save_to_disk(&file, path)
    }

    /// Loads a trie previously written by `save`. Fails on I/O or decode
    /// problems and on a version we do not understand.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file: TrieFile = serialization::load_from_disk(path)?;
        if file.version != TRIE_FORMAT_VERSION {
            return Err(Error::UnsupportedVersion {
                found: file.version,
                expected: TRIE_FORMAT_VERSION,
            });
        }
        Ok(Self { root: file.root })
    }
}
