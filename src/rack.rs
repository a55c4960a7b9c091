use crate::error::Error;
use crate::tiles;
use multiset::HashMultiSet;
use std::fmt;
use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;

/// The multiset of letters a player holds.
///
/// Each search state owns its own rack; extending a state copies the rack
/// with one occurrence of the placed letter removed.
#[derive(Debug, Clone)]
pub struct Rack(HashMultiSet<char>);

impl Deref for Rack {
    type Target = HashMultiSet<char>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Rack {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// The distinct letters held, in sorted order.
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.0.distinct_elements().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// A copy of this rack with one occurrence of `letter` removed.
    pub fn without(&self, letter: char) -> Rack {
        let mut copy = self.clone();
        copy.0.remove(&letter);
        copy
    }
}

impl Default for Rack {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Rack {
    type Err = Error;

    /// Parse rack letters from a string such as `"eefsc_"`.
    /// Uppercase letters are accepted and lowercased; a blank is `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut letters = HashMultiSet::new();
        for c in s.chars() {
            let c = c.to_ascii_lowercase();
            if !tiles::is_tile(c) {
                return Err(Error::InvalidLetter(c));
            }
            letters.insert(c);
        }
        Ok(Rack(letters))
    }
}

impl FromIterator<char> for Rack {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut letters = HashMultiSet::new();
        for letter in iter {
            letters.insert(letter);
        }
        Rack(letters)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for letter in self.distinct_letters() {
            for _ in 0..self.0.count_of(&letter) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}
