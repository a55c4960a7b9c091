use crate::board::Board;
use crate::constraints::AffixConstraints;
use crate::context::Context;
use crate::error::Error;
use crate::geometry::{Direction, Point};
use crate::moves::Move;
use crate::policies::{PriorityCalculator, PruningStrategy, RankingStrategy};
use crate::state::{State, TerminalState};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Upper bound on worker threads in the parallel search.
#[cfg(feature = "rayon")]
const MAX_NUM_WORKERS: usize = 32;

/// Best-first move search over a [`Context`], parameterized by the three
/// policies.
///
/// The default solver explores high-scoring partial moves first, never
/// prunes, and returns the highest-scoring move.
///
/// With the `rayon` feature (on by default) the seed states are
/// partitioned by row and column and searched in parallel; each worker
/// only reads the shared context, and the per-partition results are
/// reduced with the ranking policy. The outcome does not depend on the
/// feature.
#[derive(Debug, Clone)]
pub struct Solver {
    priority: PriorityCalculator,
    pruner: PruningStrategy,
    ranker: RankingStrategy,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new(
            PriorityCalculator::TotalScore,
            PruningStrategy::NeverPrune,
            RankingStrategy::MaxScore,
        )
    }
}

/// Heap entry: max-ordered by priority, ties resolved to insertion order.
struct QueueItem {
    priority: f64,
    seq: u64,
    state: State,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueItem {}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl Solver {
    pub fn new(
        priority: PriorityCalculator,
        pruner: PruningStrategy,
        ranker: RankingStrategy,
    ) -> Solver {
        Solver {
            priority,
            pruner,
            ranker,
        }
    }

    /// Build a solver from the option names a driving program accepts,
    /// e.g. `("total_score", "never", "max_score")`.
    ///
    /// ## Errors
    /// If an option name is unknown.
    pub fn from_options(priority: &str, pruner: &str, ranker: &str) -> Result<Solver, Error> {
        Ok(Solver::new(priority.parse()?, pruner.parse()?, ranker.parse()?))
    }

    /// Compute the best legal move for `context`.
    ///
    /// If no legal placement exists the returned move is an empty
    /// [`Exchange`](crate::MoveType::Exchange); choosing which letters to
    /// swap is up to the caller.
    ///
    /// ## Errors
    /// If the existing board state is inconsistent or scoring fails.
    pub fn solve(&self, context: &Context) -> Result<Move, Error> {
        Ok(match self.best_terminal_state(context)? {
            Some(best) => best.mv,
            None => Move::exchange(),
        })
    }

    /// Like [`solve`](Solver::solve), but returns the winning terminal
    /// with its score breakdown, or None if no legal move exists.
    ///
    /// ## Errors
    /// See [`solve`](Solver::solve).
    pub fn best_terminal_state(&self, context: &Context) -> Result<Option<TerminalState>, Error> {
        let seeds = self.seed_states(context)?;
        log::debug!("searching from {} seed states", seeds.len());
        let partitions = partition_seeds(context, seeds);
        if partitions.is_empty() {
            return Ok(None);
        }

        let results: Vec<Option<TerminalState>>;
        #[cfg(feature = "rayon")]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(partitions.len().min(MAX_NUM_WORKERS))
                .build()?;
            results = pool.install(|| {
                partitions
                    .into_par_iter()
                    .map(|seeds| self.graph_search(context, seeds))
                    .collect::<Result<_, _>>()
            })?;
        }
        #[cfg(not(feature = "rayon"))]
        {
            results = partitions
                .into_iter()
                .map(|seeds| self.graph_search(context, seeds))
                .collect::<Result<_, _>>()?;
        }

        let mut best: Option<TerminalState> = None;
        for candidate in results.into_iter().flatten() {
            best = match best {
                Some(incumbent) if !self.ranker.is_better_than(&candidate, &incumbent) => {
                    Some(incumbent)
                }
                _ => Some(candidate),
            };
        }
        if let Some(best) = &best {
            log::debug!("best move: {} ({} points)", best.mv, best.score.total_score);
        }
        Ok(best)
    }

    /// One seed per empty square and axis from which the rack could still
    /// connect to the played tiles.
    fn seed_states(&self, context: &Context) -> Result<Vec<State>, Error> {
        let board = &context.board;
        let mut seeds = Vec::new();
        for x in 0..board.width() {
            for y in 0..board.height() {
                let point = Point::new(x as isize, y as isize);
                for &direction in &[Direction::Right, Direction::Down] {
                    if !can_reach_placed_tiles(board, point, direction, context.rack.len()) {
                        continue;
                    }
                    let constraints =
                        match AffixConstraints::at_point(board, &context.dictionary, point) {
                            Ok(Some(constraints)) => constraints,
                            Ok(None) => continue,
                            // No word can absorb a bordering run, so no
                            // legal move goes through this square.
                            Err(Error::InvalidAffix { .. }) => continue,
                            Err(e) => return Err(e),
                        };
                    seeds.push(State {
                        rack: context.rack.clone(),
                        mv: Move::default(),
                        point,
                        constraints,
                        direction: Some(direction),
                        touches_tile: board.point_touches_tiles(point),
                    });
                }
            }
        }
        Ok(seeds)
    }

    /// Best-first exploration of one seed set.
    fn graph_search(
        &self,
        context: &Context,
        seeds: Vec<State>,
    ) -> Result<Option<TerminalState>, Error> {
        let mut queue: BinaryHeap<QueueItem> = BinaryHeap::new();
        let mut seq = 0;
        for state in seeds {
            queue.push(QueueItem {
                priority: self.priority.calculate_priority(context, &state)?,
                seq,
                state,
            });
            seq += 1;
        }

        let mut best: Option<TerminalState> = None;
        while let Some(item) = queue.pop() {
            let (terminals, children) = item.state.get_child_states(context)?;
            for child in children {
                if self.pruner.should_prune(best.as_ref(), &child) {
                    continue;
                }
                queue.push(QueueItem {
                    priority: self.priority.calculate_priority(context, &child)?,
                    seq,
                    state: child,
                });
                seq += 1;
            }
            for candidate in terminals {
                best = match best {
                    Some(incumbent) if !self.ranker.is_better_than(&candidate, &incumbent) => {
                        Some(incumbent)
                    }
                    _ => Some(candidate),
                };
            }
        }
        Ok(best)
    }
}

/// Whether a move starting at `point` and extending along `direction`
/// could connect to the played tiles within the rack size. Seeds failing
/// this cannot yield terminals, since every placement chain walks one
/// square per tile.
fn can_reach_placed_tiles(
    board: &Board,
    point: Point,
    direction: Direction,
    rack_size: usize,
) -> bool {
    if !board.can_place_tile_at(point) {
        return false;
    }
    let mut point = point;
    for _ in 0..rack_size {
        if board.point_touches_tiles(point) {
            return true;
        }
        point = point.step(direction);
    }
    false
}

/// Group seeds into disjoint searches: horizontal seeds by row, vertical
/// seeds by column. Empty groups are dropped.
fn partition_seeds(context: &Context, seeds: Vec<State>) -> Vec<Vec<State>> {
    let height = context.board.height();
    let width = context.board.width();
    let mut partitions: Vec<Vec<State>> = vec![Vec::new(); height + width];
    for seed in seeds {
        let index = match seed.direction {
            Some(Direction::Down) => height + seed.point.x as usize,
            _ => seed.point.y as usize,
        };
        partitions[index].push(seed);
    }
    partitions.retain(|partition| !partition.is_empty());
    partitions
}
