use crate::board::Board;
use crate::dictionary::{Dictionary, NodeId, Trie};
use crate::error::{AffixKind, Error};
use crate::geometry::{Direction, Point, ALL_DIRECTIONS};

/// One letter run bordering an empty square, with the trie position
/// reached by walking it: a prefix-trie node for a run on the left/up
/// side, a suffix-trie node for a run on the right/down side. The node is
/// an arena index into the dictionary's trie, never an owned subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixConstraint {
    affix: String,
    node: NodeId,
}

impl AffixConstraint {
    /// Walk `prefix` through the prefix trie.
    ///
    /// ## Errors
    /// If no dictionary word starts with `prefix`.
    fn prefix(dictionary: &Dictionary, prefix: String) -> Result<AffixConstraint, Error> {
        match dictionary.prefix_tree().walk(Trie::ROOT, prefix.chars()) {
            Some(node) => Ok(AffixConstraint { affix: prefix, node }),
            None => Err(Error::InvalidAffix {
                affix: prefix,
                kind: AffixKind::Prefix,
            }),
        }
    }

    /// Walk `suffix` back-to-front through the suffix trie.
    ///
    /// ## Errors
    /// If no dictionary word ends with `suffix`.
    fn suffix(dictionary: &Dictionary, suffix: String) -> Result<AffixConstraint, Error> {
        match dictionary
            .suffix_tree()
            .walk(Trie::ROOT, suffix.chars().rev())
        {
            Some(node) => Ok(AffixConstraint { affix: suffix, node }),
            None => Err(Error::InvalidAffix {
                affix: suffix,
                kind: AffixKind::Suffix,
            }),
        }
    }

    pub fn affix(&self) -> &str {
        &self.affix
    }
}

/// The affix constraints acting on one empty square: for each direction
/// the contiguous letter run starting at the neighbouring square, in
/// reading order.
///
/// Placing a letter here must respect all four runs at once; the
/// [`check`](AffixConstraints::check) predicate is what keeps the search
/// from ever proposing an off-dictionary crossing word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AffixConstraints {
    up: Option<AffixConstraint>,
    down: Option<AffixConstraint>,
    left: Option<AffixConstraint>,
    right: Option<AffixConstraint>,
}

impl AffixConstraints {
    /// Constraints of a square with no tiled neighbours.
    pub fn none() -> AffixConstraints {
        AffixConstraints::default()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.down.is_none() && self.left.is_none() && self.right.is_none()
    }

    pub fn get(&self, direction: Direction) -> Option<&AffixConstraint> {
        match direction {
            Direction::Up => self.up.as_ref(),
            Direction::Down => self.down.as_ref(),
            Direction::Left => self.left.as_ref(),
            Direction::Right => self.right.as_ref(),
        }
    }

    fn set(&mut self, direction: Direction, constraint: AffixConstraint) {
        let slot = match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        };
        *slot = Some(constraint);
    }

    /// The constraints at `point`, or None if a tile cannot be placed
    /// there. A free-standing empty square gets an empty constraint set.
    ///
    /// ## Errors
    /// [`InvalidAffix`](Error::InvalidAffix) if a bordering run is not an
    /// affix of any dictionary word. No placement at `point` can then be
    /// part of a legal move, since the run would sit at the edge of
    /// whatever word is formed through the square.
    pub fn at_point(
        board: &Board,
        dictionary: &Dictionary,
        point: Point,
    ) -> Result<Option<AffixConstraints>, Error> {
        if !board.can_place_tile_at(point) {
            return Ok(None);
        }
        let mut constraints = AffixConstraints::none();
        for &direction in &ALL_DIRECTIONS {
            let mut affix = String::new();
            let mut cursor = point.step(direction);
            while let Some(letter) = board.letter_at(cursor) {
                affix.push(letter);
                cursor = cursor.step(direction);
            }
            if affix.is_empty() {
                continue;
            }
            if matches!(direction, Direction::Left | Direction::Up) {
                // Walking outward read the run backwards.
                affix = affix.chars().rev().collect();
                constraints.set(direction, AffixConstraint::prefix(dictionary, affix)?);
            } else {
                constraints.set(direction, AffixConstraint::suffix(dictionary, affix)?);
            }
        }
        Ok(Some(constraints))
    }

    /// Judge placing `letter` on this square as part of a move extended
    /// along `move_direction`.
    ///
    /// Returns `(is_valid_submove, is_valid_move)`. A submove may leave
    /// the run along the move axis a mere affix of some word, because
    /// later placements can complete it; runs crossing the move axis get
    /// no more tiles, so they must be complete words immediately.
    pub fn check(
        &self,
        dictionary: &Dictionary,
        letter: char,
        move_direction: Direction,
    ) -> (bool, bool) {
        if self.is_empty() {
            // Only a single-letter word can be formed on a square with no
            // neighbouring tiles.
            return (true, dictionary.contains(&letter.to_string()));
        }

        let (horizontal_affixes, horizontal_words) =
            self.check_axis(dictionary, letter, Direction::Right);
        let (vertical_affixes, vertical_words) =
            self.check_axis(dictionary, letter, Direction::Down);

        let is_valid_submove = if move_direction.is_horizontal() {
            horizontal_affixes && vertical_words
        } else {
            vertical_affixes && horizontal_words
        };
        let is_valid_move = horizontal_words && vertical_words;
        (is_valid_submove, is_valid_move)
    }

    /// Check one reading axis. Returns whether placing `letter` keeps the
    /// axis run a valid affix, and whether it forms a complete word.
    fn check_axis(&self, dictionary: &Dictionary, letter: char, forward: Direction) -> (bool, bool) {
        let backward = forward.inverse();
        match (self.get(backward), self.get(forward)) {
            (Some(prefix), Some(suffix)) => {
                // The placement bridges two runs; nothing can be added to
                // either side later, so affix validity equals wordhood.
                let word = format!("{}{}{}", prefix.affix, letter, suffix.affix);
                let is_word = dictionary.contains(&word);
                (is_word, is_word)
            }
            (Some(prefix), None) => {
                let word = format!("{}{}", prefix.affix, letter);
                let extends = dictionary.prefix_tree().child(prefix.node, letter).is_some();
                (extends, dictionary.contains(&word))
            }
            (None, Some(suffix)) => {
                let word = format!("{}{}", letter, suffix.affix);
                let extends = dictionary.suffix_tree().child(suffix.node, letter).is_some();
                (extends, dictionary.contains(&word))
            }
            (None, None) => (true, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::tiles::PlacedTile;

    fn board_with(rows: &[&str]) -> Board {
        Board::from_strings(rows).unwrap()
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(&["heat", "heats", "eat", "tea", "at", "a"])
    }

    #[test]
    fn test_no_constraints_on_occupied_square() -> Result<(), Error> {
        let board = board_with(&["- a -", "- - -", "- - -"]);
        let constraints = AffixConstraints::at_point(&board, &dictionary(), Point::new(1, 0))?;
        assert!(constraints.is_none());
        assert!(AffixConstraints::at_point(&board, &dictionary(), Point::new(9, 9))?.is_none());
        Ok(())
    }

    #[test]
    fn test_free_square_is_unconstrained() -> Result<(), Error> {
        let board = board_with(&["- a -", "- - -", "- - -"]);
        let constraints = AffixConstraints::at_point(&board, &dictionary(), Point::new(0, 2))?
            .expect("placeable");
        assert!(constraints.is_empty());
        Ok(())
    }

    #[test]
    fn test_affixes_read_in_reading_order() -> Result<(), Error> {
        // The empty square at (2, 1) has "he" on its left and "t" on its
        // right, "a" above.
        let board = board_with(&["- - a - -", "h e - t -", "- - - - -"]);
        let constraints = AffixConstraints::at_point(&board, &dictionary(), Point::new(2, 1))?
            .expect("placeable");
        assert_eq!(constraints.get(Direction::Left).unwrap().affix(), "he");
        assert_eq!(constraints.get(Direction::Right).unwrap().affix(), "t");
        assert_eq!(constraints.get(Direction::Up).unwrap().affix(), "a");
        assert!(constraints.get(Direction::Down).is_none());
        Ok(())
    }

    #[test]
    fn test_invalid_affix() {
        // "tx" is not a prefix of any word.
        let board = board_with(&["t x -", "- - -", "- - -"]);
        let result = AffixConstraints::at_point(&board, &dictionary(), Point::new(2, 0));
        assert!(matches!(result, Err(Error::InvalidAffix { .. })));
    }

    #[test]
    fn test_bridging_check() -> Result<(), Error> {
        let board = board_with(&["- - a - -", "h e - t -", "- - - - -"]);
        let dict = dictionary();
        let constraints = AffixConstraints::at_point(&board, &dict, Point::new(2, 1))?
            .expect("placeable");
        // "he" + 'a' + "t" = "heat" and "a" + 'a' is not a word.
        assert_eq!(constraints.check(&dict, 'a', Direction::Right), (false, false));

        // Without the cross letter above, 'a' works on both counts.
        let board = board_with(&["- - - - -", "h e - t -", "- - - - -"]);
        let constraints = AffixConstraints::at_point(&board, &dict, Point::new(2, 1))?
            .expect("placeable");
        assert_eq!(constraints.check(&dict, 'a', Direction::Right), (true, true));
        assert_eq!(constraints.check(&dict, 'o', Direction::Right), (false, false));
        Ok(())
    }

    #[test]
    fn test_prefix_only_check() -> Result<(), Error> {
        let board = board_with(&["h e - - -", "- - - - -"]);
        let dict = dictionary();
        let constraints = AffixConstraints::at_point(&board, &dict, Point::new(2, 0))?
            .expect("placeable");
        // "hea" extends toward "heat" but is not a word itself.
        assert_eq!(constraints.check(&dict, 'a', Direction::Right), (true, false));
        // "hex" extends nothing.
        assert_eq!(constraints.check(&dict, 'x', Direction::Right), (false, false));
        Ok(())
    }

    #[test]
    fn test_suffix_only_check() -> Result<(), Error> {
        let board = board_with(&["- - e a t", "- - - - -"]);
        let dict = dictionary();
        let constraints = AffixConstraints::at_point(&board, &dict, Point::new(1, 0))?
            .expect("placeable");
        // 'h' before "eat": "heat" is a word and "heats" continues it.
        assert_eq!(constraints.check(&dict, 'h', Direction::Right), (true, true));
        // 't' before "eat": "teat" is not in this dictionary, and no word
        // ends in "teat".
        assert_eq!(constraints.check(&dict, 't', Direction::Right), (false, false));
        Ok(())
    }

    #[test]
    fn test_perpendicular_words_must_complete() -> Result<(), Error> {
        // Placing below "te" along a horizontal move: the vertical cross
        // word "te" + letter must be complete, not merely a prefix.
        let board = board_with(&["- t -", "- e -", "- - -"]);
        let dict = dictionary();
        let constraints = AffixConstraints::at_point(&board, &dict, Point::new(1, 2))?
            .expect("placeable");
        assert_eq!(constraints.check(&dict, 'a', Direction::Right), (true, true));
        // "tet" is not a word, so the placement fails for a horizontal
        // move even though its own axis is unconstrained.
        assert_eq!(constraints.check(&dict, 't', Direction::Right), (false, false));
        // Extending downward instead, "tea" stays open for more tiles.
        assert_eq!(constraints.check(&dict, 'a', Direction::Down), (true, true));
        Ok(())
    }

    #[test]
    fn test_single_letter_word_on_free_square() -> Result<(), Error> {
        let board = Board::empty(3, 3);
        let dict = dictionary();
        let constraints = AffixConstraints::at_point(&board, &dict, Point::new(1, 1))?
            .expect("placeable");
        assert_eq!(constraints.check(&dict, 'a', Direction::Right), (true, true));
        assert_eq!(constraints.check(&dict, 'b', Direction::Right), (true, false));
        Ok(())
    }

    #[test]
    fn test_constraints_against_partial_move() -> Result<(), Error> {
        // Mid-search the constraints are rebuilt against the board with
        // the partial move applied.
        let board = Board::empty(5, 5);
        let dict = dictionary();
        let mv = Move::new(&[
            PlacedTile::new('h', Point::new(0, 2)),
            PlacedTile::new('e', Point::new(1, 2)),
        ]);
        let played = board.execute_move(&mv)?;
        let constraints =
            AffixConstraints::at_point(&played, &dict, Point::new(2, 2))?.expect("placeable");
        assert_eq!(constraints.get(Direction::Left).unwrap().affix(), "he");
        Ok(())
    }
}
