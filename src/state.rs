use crate::constraints::AffixConstraints;
use crate::context::{Context, MoveScore};
use crate::error::Error;
use crate::geometry::{Direction, Point};
use crate::moves::Move;
use crate::rack::Rack;
use crate::tiles::PlacedTile;

/// One partial extension of a move: the next empty square to fill, the
/// constraints acting on it, and what has been placed so far.
///
/// States are immutable; extending one produces fresh child states.
#[derive(Debug, Clone)]
pub struct State {
    /// Rack letters not yet placed by this partial move.
    pub(crate) rack: Rack,
    pub(crate) mv: Move,
    /// The empty square the next letter would go on.
    pub(crate) point: Point,
    pub(crate) constraints: AffixConstraints,
    /// The axis being extended: `Right` or `Down` once set. Unset states
    /// explore both.
    pub(crate) direction: Option<Direction>,
    /// Whether the move being built connects to the played tiles. The
    /// flag anticipates a placement on `point`, so it already holds the
    /// answer for the tile this state is about to put down.
    pub(crate) touches_tile: bool,
}

/// A fully legal, connected move found by the search, with its score.
#[derive(Debug, Clone)]
pub struct TerminalState {
    pub mv: Move,
    pub score: MoveScore,
}

impl State {
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    pub fn point(&self) -> Point {
        self.point
    }

    /// Expand this state by one letter.
    ///
    /// For each direction under exploration and each distinct rack
    /// letter, the placement is judged against the affix constraints.
    /// Valid submoves yield a child state on the next square along the
    /// axis (unless that square cannot take a tile); placements that
    /// complete words on both axes of a connected move yield a terminal.
    ///
    /// ## Errors
    /// If scoring a terminal move fails; the constraint and bounds checks
    /// keep placement errors from occurring here.
    pub fn get_child_states(
        &self,
        context: &Context,
    ) -> Result<(Vec<TerminalState>, Vec<State>), Error> {
        const EXPLORE_BOTH: [Direction; 2] = [Direction::Right, Direction::Down];

        let mut terminals = Vec::new();
        let mut children = Vec::new();
        let directions: &[Direction] = match &self.direction {
            Some(direction) => std::slice::from_ref(direction),
            None => &EXPLORE_BOTH,
        };

        for &direction in directions {
            for letter in self.rack.distinct_letters() {
                let (is_valid_submove, is_valid_move) =
                    self.constraints
                        .check(&context.dictionary, letter, direction);
                if !is_valid_submove {
                    continue;
                }
                let mv = self.mv.with_tile(PlacedTile::new(letter, self.point));

                if is_valid_move && self.touches_tile {
                    let score = context.score_move(&mv, false)?;
                    terminals.push(TerminalState { mv, score });
                }

                let new_point = self.point.step(direction);
                if !context.board.can_place_tile_at(new_point) {
                    // The move may stop here, but it cannot grow.
                    continue;
                }
                let played = context.board.execute_move(&mv)?;
                let constraints =
                    match AffixConstraints::at_point(&played, &context.dictionary, new_point) {
                        Ok(Some(constraints)) => constraints,
                        Ok(None) => continue,
                        // A bordering run no word can absorb: the
                        // extension is a dead end, not a failure.
                        Err(Error::InvalidAffix { .. }) => continue,
                        Err(e) => return Err(e),
                    };
                let touches_tile =
                    self.touches_tile || context.board.point_touches_tiles(new_point);
                children.push(State {
                    rack: self.rack.without(letter),
                    mv,
                    point: new_point,
                    constraints,
                    direction: Some(direction),
                    touches_tile,
                });
            }
        }
        Ok((terminals, children))
    }
}
