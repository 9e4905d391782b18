use serde::{Deserialize, Serialize};

use crate::{identifiers::PlayerId, points::Points};

/// Contains the tiebreak math and the standings comparator
pub mod tiebreaks;

pub use tiebreaks::{get_standings, SectionScore};

/// The trait that defines the interface for a score
pub trait Score {
    /// Returns the primary value of the score
    fn primary_score(&self) -> Points;
}

/// An ordered collection of scores, best first
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Standings<S> {
    /// The player, score pairings
    pub scores: Vec<(PlayerId, S)>,
}

impl<S> Standings<S>
where
    S: Score,
{
    /// Creates a new standings object
    pub fn new(scores: Vec<(PlayerId, S)>) -> Self {
        Standings { scores }
    }

    /// Calculates the number of ranked players
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Calculates if the standings are empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
