#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a trie node in its arena.
pub type NodeId = usize;

const ALPHABET: usize = 26;

/// Map a lowercase letter to a child slot.
fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Node {
    /// One child slot per letter a-z.
    children: [Option<NodeId>; ALPHABET],
    /// Marks a word boundary, standing in for an explicit end-of-word
    /// child.
    terminal: bool,
}

impl Node {
    fn new() -> Node {
        Node {
            children: [None; ALPHABET],
            terminal: false,
        }
    }
}

/// An arena-backed trie over lowercase words.
///
/// Nodes are owned by a flat `Vec` and referenced by stable [`NodeId`]
/// indices, so callers can hold a position in the trie without borrowing
/// it. The root is node 0, which is never a child of any node.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    pub const ROOT: NodeId = 0;

    pub fn new() -> Trie {
        Trie {
            nodes: vec![Node::new()],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a word given as a letter sequence. Words with characters
    /// outside a-z are ignored.
    pub fn insert<I>(&mut self, letters: I)
    where
        I: IntoIterator<Item = char>,
    {
        let mut indices = Vec::new();
        for letter in letters {
            match letter_index(letter) {
                Some(i) => indices.push(i),
                None => return,
            }
        }
        let mut node = Self::ROOT;
        for i in indices {
            node = match self.nodes[node].children[i] {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new());
                    self.nodes[node].children[i] = Some(child);
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// The child of `node` keyed by `letter`, if present.
    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        letter_index(letter).and_then(|i| self.nodes[node].children[i])
    }

    /// Walk `letters` downward from `node`. Returns the node reached, or
    /// None as soon as a letter has no child.
    pub fn walk<I>(&self, node: NodeId, letters: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = node;
        for letter in letters {
            node = self.child(node, letter)?;
        }
        Some(node)
    }

    /// True if `node` ends a word.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node].terminal
    }

    /// True if walking `letters` from the root ends at a word boundary.
    pub fn contains<I>(&self, letters: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        self.walk(Self::ROOT, letters)
            .map_or(false, |node| self.is_terminal(node))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_trie() -> Trie {
        let mut trie = Trie::new();
        for word in &["to", "tea", "ten", "i", "in", "inn", "we"] {
            trie.insert(word.chars());
        }
        trie
    }

    #[test]
    fn test_contains() {
        let trie = test_trie();
        for word in &["to", "tea", "ten", "i", "in", "inn", "we"] {
            assert!(trie.contains(word.chars()), "missing '{}'", word);
        }
        for word in &["te", "inno", "web", "hoge", ""] {
            assert!(!trie.contains(word.chars()), "unexpected '{}'", word);
        }
    }

    #[test]
    fn test_walk() {
        let trie = test_trie();
        let node = trie.walk(Trie::ROOT, "te".chars()).unwrap();
        assert!(!trie.is_terminal(node));
        assert!(trie.child(node, 'a').is_some());
        assert!(trie.child(node, 'x').is_none());
        assert!(trie.walk(node, "a".chars()).is_some());
        assert!(trie.walk(Trie::ROOT, "xyz".chars()).is_none());
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut trie = Trie::new();
        trie.insert("tea".chars());
        let before = trie.node_count();
        trie.insert("ten".chars());
        // "te" is reused, only the leaf is new.
        assert_eq!(trie.node_count(), before + 1);
    }

    #[test]
    fn test_invalid_word_ignored() {
        let mut trie = Trie::new();
        trie.insert("a_c".chars());
        assert_eq!(trie.node_count(), 1);
    }
}
