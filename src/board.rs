use crate::error::Error;
use crate::geometry::{Direction, Point};
use crate::moves::Move;
use crate::tiles::{self, letter_points, PlacedTile};
use std::fmt;
use std::fs::read_to_string;
use std::str::FromStr;

const STANDARD_SIZE: usize = 15;
const QUARTER: usize = 1 + STANDARD_SIZE / 2;

/// The upper-left quarter of the standard board, mirrored horizontally and
/// vertically by [`Board::standard`]. The start square carries a double
/// word bonus.
const STANDARD_QUARTER_BOARD: [&str; QUARTER] = [
    "w3 - - l2 - - - w3",
    "- w2 - - - l3 - -",
    "- - w2 - - - l2 -",
    "l2 - - w2 - - - l2",
    "- - - - w2 - - -",
    "- l3 - - - l3 - -",
    "- - l2 - - - l2 -",
    "w3 - - l2 - - - w2",
];

/// One square of the board: empty, a played tile, or a bonus marker.
///
/// Bonus markers only matter while uncovered. Once a move covers one it is
/// replaced by the tile, so it can never apply to a later move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Square {
    Empty,
    /// A tile showing letter a-z.
    Letter(char),
    /// A played blank tile.
    Blank,
    /// 2x or 3x letter bonus.
    LetterBonus(u32),
    /// 2x or 3x word bonus.
    WordBonus(u32),
}

impl Square {
    /// The letter this square shows, with a blank reading as `_`.
    pub fn tile_letter(self) -> Option<char> {
        match self {
            Square::Letter(c) => Some(c),
            Square::Blank => Some(tiles::BLANK),
            _ => None,
        }
    }

    pub fn has_tile(self) -> bool {
        self.tile_letter().is_some()
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Square::Empty),
            "_" => Ok(Square::Blank),
            "l2" => Ok(Square::LetterBonus(2)),
            "l3" => Ok(Square::LetterBonus(3)),
            "w2" => Ok(Square::WordBonus(2)),
            "w3" => Ok(Square::WordBonus(3)),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_lowercase() => Ok(Square::Letter(c)),
                    _ => Err(Error::InvalidSquare(String::from(s))),
                }
            }
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "-"),
            Square::Letter(c) => write!(f, "{}", c),
            Square::Blank => write!(f, "_"),
            Square::LetterBonus(n) => write!(f, "l{}", n),
            Square::WordBonus(n) => write!(f, "w{}", n),
        }
    }
}

/// A width x height grid of [`Square`]s.
///
/// The board is immutable under move application:
/// [`execute_move`](Board::execute_move) returns a new board. Squares are
/// stored column-major, so a point addresses `squares[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<Vec<Square>>,
    width: usize,
    height: usize,
    start: Point,
    tile_count: usize,
}

impl Board {
    /// Create an empty board without bonus squares.
    pub fn empty(width: usize, height: usize) -> Board {
        Board::from_squares(vec![vec![Square::Empty; height]; width])
    }

    /// The standard 15x15 board with the official bonus layout.
    pub fn standard() -> Board {
        let mut board = Board::empty(STANDARD_SIZE, STANDARD_SIZE);
        let n = STANDARD_SIZE - 1;
        for (y, row) in STANDARD_QUARTER_BOARD.iter().enumerate() {
            for (x, token) in row.split(' ').enumerate() {
                // The quarter board only holds valid tokens.
                let square = token.parse().unwrap();
                board.squares[x][y] = square;
                board.squares[n - x][y] = square;
                board.squares[x][n - y] = square;
                board.squares[n - x][n - y] = square;
            }
        }
        board
    }

    fn from_squares(squares: Vec<Vec<Square>>) -> Board {
        let width = squares.len();
        let height = squares.first().map_or(0, Vec::len);
        let start = Point::new((width / 2) as isize, (height / 2) as isize);
        let tile_count = squares
            .iter()
            .flatten()
            .filter(|square| square.has_tile())
            .count();
        Board {
            squares,
            width,
            height,
            start,
            tile_count,
        }
    }

    /// Parse a board from one string per row, squares separated by
    /// whitespace. Width is the number of tokens per row, height the
    /// number of rows; input is lowercased.
    ///
    /// ## Errors
    /// If a square token is invalid, rows have unequal lengths, or the
    /// board is empty.
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        let mut parsed: Vec<Vec<Square>> = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let row: Vec<Square> = row
                .as_ref()
                .to_ascii_lowercase()
                .split_whitespace()
                .map(Square::from_str)
                .collect::<Result<_, _>>()?;
            if let Some(first) = parsed.first() {
                if row.len() != first.len() {
                    return Err(Error::InvalidRowLength {
                        row: y,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            parsed.push(row);
        }
        let width = parsed.first().map_or(0, Vec::len);
        let height = parsed.len();
        if width == 0 || height == 0 {
            return Err(Error::EmptyBoard);
        }
        // Rows come in as parsed[y][x]; store column-major.
        let mut squares = vec![vec![Square::Empty; height]; width];
        for (y, row) in parsed.iter().enumerate() {
            for (x, &square) in row.iter().enumerate() {
                squares[x][y] = square;
            }
        }
        Ok(Board::from_squares(squares))
    }

    /// Read a board from a text file in the
    /// [`from_strings`](Board::from_strings) format.
    ///
    /// ## Errors
    /// If the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Board, Error> {
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        let rows: Vec<&str> = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();
        Board::from_strings(&rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The distinguished start square at (width / 2, height / 2).
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && (point.x as usize) < self.width
            && point.y >= 0
            && (point.y as usize) < self.height
    }

    /// The square at `point`, or None if out of bounds.
    pub fn square_at(&self, point: Point) -> Option<Square> {
        if self.contains(point) {
            Some(self.squares[point.x as usize][point.y as usize])
        } else {
            None
        }
    }

    /// The letter shown at `point` (a played blank reads as `_`).
    pub fn letter_at(&self, point: Point) -> Option<char> {
        self.square_at(point).and_then(Square::tile_letter)
    }

    pub fn has_tile_at(&self, point: Point) -> bool {
        self.square_at(point).map_or(false, Square::has_tile)
    }

    /// In bounds and not yet covered by a tile.
    pub fn can_place_tile_at(&self, point: Point) -> bool {
        self.square_at(point).map_or(false, |square| !square.has_tile())
    }

    /// True if any tile has been played.
    pub fn has_tiles(&self) -> bool {
        self.tile_count > 0
    }

    /// A point touches the played tiles if any of its four neighbours has
    /// a tile. On a board with no tiles at all, the start square is the
    /// single touching point, so the opening move must cross it.
    pub fn point_touches_tiles(&self, point: Point) -> bool {
        if !self.has_tiles() {
            return point == self.start;
        }
        point
            .neighbours()
            .iter()
            .any(|&neighbour| self.has_tile_at(neighbour))
    }

    /// Score one tile sequence as played on this board.
    ///
    /// Bonuses are taken from the squares *this* board shows, so scoring a
    /// word read from a post-move board against the pre-move board applies
    /// bonus squares exactly for the newly placed tiles: squares already
    /// covered before the move show a letter here, not a bonus.
    pub fn score_single_word(&self, word: &[PlacedTile]) -> u32 {
        let mut raw_score = 0;
        let mut word_multiplier = 1;
        for tile in word {
            let mut letter_score = letter_points(tile.letter);
            match self.square_at(tile.location) {
                Some(Square::LetterBonus(n)) => letter_score *= n,
                Some(Square::WordBonus(n)) => word_multiplier *= n,
                _ => {}
            }
            raw_score += letter_score;
        }
        raw_score * word_multiplier
    }

    /// Return a new board with the move's tiles written in.
    ///
    /// ## Errors
    /// If a tile lands out of bounds or on an occupied square.
    pub fn execute_move(&self, mv: &Move) -> Result<Board, Error> {
        let mut squares = self.squares.clone();
        for tile in mv.placed_tiles() {
            if !self.contains(tile.location) {
                return Err(Error::OutOfBounds {
                    point: tile.location,
                });
            }
            if self.has_tile_at(tile.location) {
                return Err(Error::SquareOccupied {
                    letter: tile.letter,
                    point: tile.location,
                });
            }
            let square = if tile.letter == tiles::BLANK {
                Square::Blank
            } else {
                Square::Letter(tile.letter)
            };
            squares[tile.location.x as usize][tile.location.y as usize] = square;
        }
        Ok(Board {
            squares,
            width: self.width,
            height: self.height,
            start: self.start,
            tile_count: self.tile_count + mv.len(),
        })
    }

    /// The maximal horizontal tile run through `point`, in left-to-right
    /// order, or None if the run length is at most 1.
    pub fn get_horizontal_word_at(&self, point: Point) -> Option<Vec<PlacedTile>> {
        self.word_in_direction(point, Direction::Right)
    }

    /// The maximal vertical tile run through `point`, in top-to-bottom
    /// order, or None if the run length is at most 1.
    pub fn get_vertical_word_at(&self, point: Point) -> Option<Vec<PlacedTile>> {
        self.word_in_direction(point, Direction::Down)
    }

    fn word_in_direction(&self, point: Point, reading: Direction) -> Option<Vec<PlacedTile>> {
        if !self.has_tile_at(point) {
            return None;
        }
        let backward = reading.inverse();
        let mut word_start = point;
        while self.has_tile_at(word_start.step(backward)) {
            word_start = word_start.step(backward);
        }
        let mut word_end = point;
        while self.has_tile_at(word_end.step(reading)) {
            word_end = word_end.step(reading);
        }
        if word_start == word_end {
            return None;
        }

        let mut result = Vec::new();
        let mut pt = word_start;
        loop {
            // All points in the run hold tiles, checked above.
            result.push(PlacedTile::new(self.letter_at(pt).unwrap(), pt));
            if pt == word_end {
                break;
            }
            pt = pt.step(reading);
        }
        Some(result)
    }
}

/// Display the board in the file format: one row per line, squares
/// separated by spaces. Round-trips through [`Board::from_strings`].
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| self.squares[x][y].to_string())
                .collect::<Vec<String>>()
                .join(" ");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
