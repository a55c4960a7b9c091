//! The pluggable knobs of the search: what to explore first, what to
//! discard, and which terminal wins.
//!
//! Each policy parses from the option names accepted on the command line
//! of a driving program, e.g. `"max_score"` or `"random:0.3"`.

use crate::context::Context;
use crate::error::Error;
use crate::state::{State, TerminalState};
use rand::Rng;
use std::str::FromStr;

fn parse_probability(option: &str, prefix: &str) -> Option<f64> {
    if option == prefix {
        return Some(0.5);
    }
    option
        .strip_prefix(prefix)?
        .strip_prefix(':')?
        .parse()
        .ok()
}

/// Decides which states are most promising to explore first. A higher
/// priority state is expanded earlier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PriorityCalculator {
    /// Every state is equal; the queue degenerates to insertion order.
    Uniform,
    /// Priority is the score of the partial move built so far.
    TotalScore,
}

impl PriorityCalculator {
    /// ## Errors
    /// If scoring the state's partial move fails.
    pub fn calculate_priority(&self, context: &Context, state: &State) -> Result<f64, Error> {
        match self {
            PriorityCalculator::Uniform => Ok(1.0),
            PriorityCalculator::TotalScore => {
                let score = context.score_move(state.mv(), false)?;
                Ok(f64::from(score.total_score))
            }
        }
    }
}

impl FromStr for PriorityCalculator {
    type Err = Error;

    fn from_str(option: &str) -> Result<Self, Self::Err> {
        match option.to_ascii_lowercase().as_str() {
            "uniform" => Ok(PriorityCalculator::Uniform),
            "total_score" => Ok(PriorityCalculator::TotalScore),
            other => Err(Error::UnknownStrategy(String::from(other))),
        }
    }
}

/// Decides whether a freshly generated state is dropped instead of
/// enqueued.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PruningStrategy {
    /// Keep everything: the search stays exhaustive.
    NeverPrune,
    /// Drop a state with probability `p`, trading optimality for speed.
    Random(f64),
    // TODO: prune states whose maximum remaining letter points cannot
    // lift the partial score past the incumbent terminal.
    GreedyHeuristic,
}

impl PruningStrategy {
    pub fn should_prune(&self, _best: Option<&TerminalState>, _state: &State) -> bool {
        match self {
            PruningStrategy::NeverPrune => false,
            PruningStrategy::Random(p) => rand::thread_rng().gen::<f64>() < *p,
            PruningStrategy::GreedyHeuristic => false,
        }
    }
}

impl FromStr for PruningStrategy {
    type Err = Error;

    fn from_str(option: &str) -> Result<Self, Self::Err> {
        let option = option.to_ascii_lowercase();
        if let Some(p) = parse_probability(&option, "random") {
            return Ok(PruningStrategy::Random(p));
        }
        match option.as_str() {
            "never" => Ok(PruningStrategy::NeverPrune),
            "greedy_heuristic" => Ok(PruningStrategy::GreedyHeuristic),
            other => Err(Error::UnknownStrategy(String::from(other))),
        }
    }
}

/// Decides whether a terminal candidate beats the incumbent best. The
/// comparison is strict: on a tie the incumbent stays.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RankingStrategy {
    /// Highest total score wins.
    MaxScore,
    /// The move forming the most words wins.
    MostWords,
    /// Prefer the higher-scoring move with probability `p`, the lower
    /// with probability `1 - p`.
    Random(f64),
}

impl RankingStrategy {
    pub fn is_better_than(&self, candidate: &TerminalState, incumbent: &TerminalState) -> bool {
        match self {
            RankingStrategy::MaxScore => {
                candidate.score.total_score > incumbent.score.total_score
            }
            RankingStrategy::MostWords => {
                candidate.score.word_count() > incumbent.score.word_count()
            }
            RankingStrategy::Random(p) => {
                let probability = if candidate.score.total_score > incumbent.score.total_score {
                    *p
                } else {
                    1.0 - *p
                };
                rand::thread_rng().gen::<f64>() <= probability
            }
        }
    }
}

impl FromStr for RankingStrategy {
    type Err = Error;

    fn from_str(option: &str) -> Result<Self, Self::Err> {
        let option = option.to_ascii_lowercase();
        if let Some(p) = parse_probability(&option, "random") {
            return Ok(RankingStrategy::Random(p));
        }
        match option.as_str() {
            "max_score" => Ok(RankingStrategy::MaxScore),
            "most_words" => Ok(RankingStrategy::MostWords),
            other => Err(Error::UnknownStrategy(String::from(other))),
        }
    }
}
