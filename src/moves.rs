use crate::error::Error;
use crate::tiles::{PlacedTile, RACK_SIZE};
use std::fmt;
use tinyvec::ArrayVec;

/// The tiles of one move. A move can place at most a full rack.
pub type MoveTiles = ArrayVec<[PlacedTile; RACK_SIZE]>;

/// The shape of a move, derived from its tile locations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveType {
    /// Two or more tiles sharing a row.
    LeftRight,
    /// Two or more tiles sharing a column.
    UpDown,
    /// Exactly one tile.
    Singleton,
    /// No tiles: the player swaps rack letters instead of placing.
    Exchange,
}

/// An ordered list of tiles to place on the board.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Move {
    placed_tiles: MoveTiles,
}

impl Move {
    /// A move placing the given tiles, in order.
    pub fn new(tiles: &[PlacedTile]) -> Move {
        Move {
            placed_tiles: tiles.iter().copied().collect(),
        }
    }

    /// The empty move, surfaced when no placement is legal.
    pub fn exchange() -> Move {
        Move::default()
    }

    /// A copy of this move with one more tile appended.
    pub fn with_tile(&self, tile: PlacedTile) -> Move {
        let mut placed_tiles = self.placed_tiles;
        placed_tiles.push(tile);
        Move { placed_tiles }
    }

    pub fn placed_tiles(&self) -> &[PlacedTile] {
        &self.placed_tiles
    }

    pub fn len(&self) -> usize {
        self.placed_tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed_tiles.is_empty()
    }

    /// A bingo plays the whole rack at once.
    pub fn is_bingo(&self) -> bool {
        self.len() == RACK_SIZE
    }

    /// Derive the move type from the tile locations.
    ///
    /// ## Errors
    /// If the tiles are neither row- nor column-aligned.
    pub fn move_type(&self) -> Result<MoveType, Error> {
        let tiles = self.placed_tiles();
        match tiles.len() {
            0 => return Ok(MoveType::Exchange),
            1 => return Ok(MoveType::Singleton),
            _ => {}
        }
        let same_x = tiles.iter().all(|tile| tile.location.x == tiles[0].location.x);
        let same_y = tiles.iter().all(|tile| tile.location.y == tiles[0].location.y);
        if same_x {
            Ok(MoveType::UpDown)
        } else if same_y {
            Ok(MoveType::LeftRight)
        } else {
            Err(Error::InvalidMoveShape)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tiles = self
            .placed_tiles
            .iter()
            .map(PlacedTile::to_string)
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "{{{}}}", tiles)
    }
}
