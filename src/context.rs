use crate::board::Board;
use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::moves::{Move, MoveType};
use crate::rack::Rack;
use crate::tiles::{PlacedTile, BINGO_BONUS};

/// Everything a search reads: the board, the dictionary, and the rack.
///
/// A context is never mutated during a search and may be shared by any
/// number of concurrent searches.
#[derive(Debug, Clone)]
pub struct Context {
    pub board: Board,
    pub dictionary: Dictionary,
    pub rack: Rack,
}

/// The score breakdown of one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveScore {
    /// Each formed word with its score, primary word first.
    pub word_scores: Vec<(String, u32)>,
    /// Present when the move plays the whole rack.
    pub bingo_bonus: Option<u32>,
    pub total_score: u32,
}

impl MoveScore {
    fn empty() -> MoveScore {
        MoveScore {
            word_scores: Vec::new(),
            bingo_bonus: None,
            total_score: 0,
        }
    }

    /// Number of words the move forms.
    pub fn word_count(&self) -> usize {
        self.word_scores.len()
    }
}

impl Context {
    pub fn new(board: Board, dictionary: Dictionary, rack: Rack) -> Context {
        Context {
            board,
            dictionary,
            rack,
        }
    }

    /// Score `mv` against this context's board.
    ///
    /// Words are read from the board with the move applied; bonus squares
    /// are consulted on the board *before* the move, so they apply exactly
    /// once, for the tiles this move places. With `check_valid` every
    /// formed word is asserted to be in the dictionary.
    ///
    /// ## Errors
    /// If the move has an invalid shape or clashes with existing tiles,
    /// or (with `check_valid`) forms an unknown word.
    pub fn score_move(&self, mv: &Move, check_valid: bool) -> Result<MoveScore, Error> {
        let formed_words = self.words_formed_by_move(mv)?;
        if formed_words.is_empty() {
            return Ok(MoveScore::empty());
        }

        let mut word_scores = Vec::with_capacity(formed_words.len());
        for word in &formed_words {
            let text: String = word.iter().map(|tile| tile.letter).collect();
            if check_valid && !self.dictionary.contains(&text) {
                return Err(Error::UnknownWord(text));
            }
            word_scores.push((text, self.board.score_single_word(word)));
        }
        let bingo_bonus = if mv.is_bingo() { Some(BINGO_BONUS) } else { None };
        let total_score =
            word_scores.iter().map(|&(_, score)| score).sum::<u32>() + bingo_bonus.unwrap_or(0);
        Ok(MoveScore {
            word_scores,
            bingo_bonus,
            total_score,
        })
    }

    /// All words formed by `mv`: the word along the move's own axis, then
    /// every crossing word through a placed tile. A singleton move reads
    /// both axes through its tile.
    fn words_formed_by_move(&self, mv: &Move) -> Result<Vec<Vec<PlacedTile>>, Error> {
        let move_type = mv.move_type()?;
        if move_type == MoveType::Exchange {
            return Ok(Vec::new());
        }
        let played = self.board.execute_move(mv)?;
        let first = mv.placed_tiles()[0].location;

        let mut words = Vec::new();
        if move_type == MoveType::UpDown {
            words.extend(played.get_vertical_word_at(first));
            for tile in mv.placed_tiles() {
                words.extend(played.get_horizontal_word_at(tile.location));
            }
        } else {
            words.extend(played.get_horizontal_word_at(first));
            for tile in mv.placed_tiles() {
                words.extend(played.get_vertical_word_at(tile.location));
            }
        }
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Direction, Point};

    fn tiled(letters: &str, start: Point, direction: Direction) -> Move {
        let mut point = start;
        let mut tiles = Vec::new();
        for letter in letters.chars() {
            tiles.push(PlacedTile::new(letter, point));
            point = point.step(direction);
        }
        Move::new(&tiles)
    }

    fn context(board: Board, words: &[&str]) -> Context {
        Context::new(board, Dictionary::from_words(words), Rack::new())
    }

    #[test]
    fn test_exchange_scores_zero() -> Result<(), Error> {
        let ctx = context(Board::empty(9, 9), &[]);
        let score = ctx.score_move(&Move::exchange(), false)?;
        assert_eq!(score.total_score, 0);
        assert!(score.word_scores.is_empty());
        Ok(())
    }

    #[test]
    fn test_score_with_crossing_words() -> Result<(), Error> {
        let board = Board::empty(9, 9);
        let board = board.execute_move(&tiled("heat", Point::new(2, 4), Direction::Right))?;
        let ctx = context(board, &["heat", "heats", "say", "at"]);

        // "say" played downward, its 's' extending "heat" to "heats".
        let mv = tiled("say", Point::new(6, 4), Direction::Down);
        let score = ctx.score_move(&mv, true)?;
        assert_eq!(
            score.word_scores,
            vec![
                (String::from("say"), 1 + 1 + 4),
                (String::from("heats"), 4 + 1 + 1 + 1 + 1)
            ]
        );
        assert_eq!(score.total_score, 14);
        assert_eq!(score.bingo_bonus, None);
        Ok(())
    }

    #[test]
    fn test_singleton_scores_both_axes() -> Result<(), Error> {
        let board = Board::empty(9, 9);
        let board = board.execute_move(&tiled("at", Point::new(3, 4), Direction::Right))?;
        let board = board.execute_move(&tiled("n", Point::new(2, 5), Direction::Right))?;
        let ctx = context(board, &["at"]);

        // 'a' at (2, 4) joins "at" to its right and "n" below.
        let mv = tiled("a", Point::new(2, 4), Direction::Right);
        let score = ctx.score_move(&mv, false)?;
        let words: Vec<&str> = score.word_scores.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["aat", "an"]);
        Ok(())
    }

    #[test]
    fn test_unknown_word_check() -> Result<(), Error> {
        let board = Board::empty(9, 9);
        let ctx = context(board, &["at"]);
        let mv = tiled("ax", Point::new(3, 4), Direction::Right);
        assert!(ctx.score_move(&mv, false).is_ok());
        assert!(matches!(
            ctx.score_move(&mv, true),
            Err(Error::UnknownWord(word)) if word == "ax"
        ));
        Ok(())
    }

    #[test]
    fn test_bingo_bonus() -> Result<(), Error> {
        let board = Board::empty(15, 15);
        let ctx = context(board, &["watched"]);
        let mv = tiled("watched", Point::new(2, 7), Direction::Right);
        let score = ctx.score_move(&mv, true)?;
        assert_eq!(score.bingo_bonus, Some(BINGO_BONUS));
        // w4 a1 t1 c3 h4 e1 d2 = 16, plus the bingo bonus.
        assert_eq!(score.total_score, 16 + 50);
        Ok(())
    }
}
