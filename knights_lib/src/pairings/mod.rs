use serde::{Deserialize, Serialize};

use crate::identifiers::PlayerId;

/// The color selector for candidate boards
pub mod colors;
/// The Swiss pairer: score groups, floats, and the bye
pub mod swiss;

pub use colors::select_colors;
pub use swiss::pair_round;

/// A struct for communicating a freshly computed set of pairings,
/// before board numbers are frozen onto a round
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct ProposedPairings {
    /// The paired boards as `(white, black)`, in emission order
    pub games: Vec<(PlayerId, PlayerId)>,
    /// The bye recipient, when the active roster was odd
    pub bye: Option<PlayerId>,
}

impl ProposedPairings {
    /// Calculates the number of boards, the bye included
    pub fn len(&self) -> usize {
        self.games.len() + usize::from(self.bye.is_some())
    }

    /// Calculates if no boards were produced
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
