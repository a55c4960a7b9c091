mod trie;

pub use self::trie::{NodeId, Trie};

use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// The word set for a game, indexed three ways: a hash set for whole-word
/// membership, a prefix trie, and a suffix trie (each word inserted
/// reversed). The tries drive the solver's affix pruning.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dictionary {
    words: HashSet<String>,
    prefix_tree: Trie,
    suffix_tree: Trie,
    /// Path of the word file used to build the dictionary.
    /// Empty if the dictionary was not built from a file.
    wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} prefix nodes, {} suffix nodes from '{}'>",
            self.words.len(),
            self.prefix_tree.node_count(),
            self.suffix_tree.node_count(),
            self.wordfile
        )
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words. Words are lowercased and
    /// stripped of non-alphabetic characters; empty results are dropped.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Dictionary {
        let mut dictionary = Dictionary {
            words: HashSet::new(),
            prefix_tree: Trie::new(),
            suffix_tree: Trie::new(),
            wordfile: String::new(),
        };
        for word in words {
            dictionary.insert(&Self::sanitize(word.as_ref()));
        }
        dictionary
    }

    /// Read a dictionary from a file with one word per line.
    ///
    /// ## Errors
    /// If the file cannot be read.
    pub fn from_file(path: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let words: Vec<&str> = contents.lines().collect();
        let mut dictionary = Dictionary::from_words(&words);
        dictionary.wordfile = String::from(path);
        log::debug!("loaded {}", dictionary);
        Ok(dictionary)
    }

    #[cfg(feature = "bincode")]
    /// Deserialize a dictionary from a bincoded file.
    ///
    /// ## Errors
    /// If the file cannot be read or its contents deserialized.
    pub fn deserialize_from(path: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DictionaryDeserializeError(String::from(path)))?;
        dictionary.wordfile = String::from(path);
        Ok(dictionary)
    }

    fn sanitize(line: &str) -> String {
        line.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        self.prefix_tree.insert(word.chars());
        self.suffix_tree.insert(word.chars().rev());
        self.words.insert(String::from(word));
    }

    /// Whole-word membership, case-insensitive.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().all(|c| c.is_ascii_lowercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&Self::sanitize(word))
        }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn prefix_tree(&self) -> &Trie {
        &self.prefix_tree
    }

    pub fn suffix_tree(&self) -> &Trie {
        &self.suffix_tree
    }
}
