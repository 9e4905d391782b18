use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    error::SectionError,
    identifiers::{PlayerId, PlayerIdentifier},
    players::Color,
    rounds::Round,
    settings::SectionSetting,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// This enum captures all ways in which a section can mutate. Stores
/// that serialize writes (a realtime backend with several TDs acting at
/// once) persist these and replay them inside their own transactions.
pub enum SectionOp {
    /// Registers a new player; the salt pins down the generated id
    RegisterPlayer {
        /// The registration time, used to derive the player's id
        salt: DateTime<Utc>,
        /// The player's name
        name: String,
        /// The player's rating, zero for unrated
        rating: u32,
        /// The player's USCF membership id, if collected
        uscf_id: Option<String>,
    },
    /// Withdraws a player from future pairings
    WithdrawPlayer(PlayerIdentifier),
    /// Closes registration and freezes the roster
    Lock,
    /// Reopens the section, clearing rounds and score state
    Reset,
    /// Updates a single section setting
    UpdateSetting(SectionSetting),
    /// Pairs the next round
    PairNextRound,
    /// Records (or corrects) the result of a board
    ApplyResult {
        /// The 1-based round number
        round: u64,
        /// The 1-based board number
        board: u32,
        /// The result token; the scoresheet glyph is accepted
        result: String,
    },
    /// Exchanges the two seats of a board
    TdSwap {
        /// The 1-based round number
        round: u64,
        /// The 1-based board number
        board: u32,
    },
    /// Puts a different player in one seat of a board
    TdReplace {
        /// The 1-based round number
        round: u64,
        /// The 1-based board number
        board: u32,
        /// The seat being replaced
        side: Color,
        /// The incoming player
        player: PlayerId,
    },
    /// Ensures the given player holds White on a board
    TdForceColor {
        /// The 1-based round number
        round: u64,
        /// The 1-based board number
        board: u32,
        /// The player that must hold White
        white: PlayerId,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// An enum that encodes all possible data after successfully applying a
/// section operation
pub enum OpData {
    /// There is no data to be returned
    Nothing,
    /// A player was registered and this is their id
    RegisterPlayer(PlayerId),
    /// The next round was paired and this is the frozen round
    PairRound(Round),
}

/// A shorthand for the outcome of attempting to apply an operation to a section
pub type OpResult = Result<OpData, SectionError>;

impl OpData {
    /// Calculates if the data is nothing
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Assumes contained data is `Nothing`
    ///
    /// PANICS: If the data is anything else, this method panics.
    pub fn assume_nothing(self) {
        match self {
            Self::Nothing => (),
            _ => panic!("Assumed OpData nothing failed"),
        }
    }

    /// Assumes contained data is from `RegisterPlayer` and returns that id, analogous to `unwrap`.
    ///
    /// PANICS: If the data is anything else, this method panics.
    pub fn assume_register_player(self) -> PlayerId {
        match self {
            Self::RegisterPlayer(id) => id,
            _ => panic!("Assumed OpData was register player failed"),
        }
    }

    /// Assumes contained data is from `PairRound` and returns that round, analogous to `unwrap`.
    ///
    /// PANICS: If the data is anything else, this method panics.
    pub fn assume_pair_round(self) -> Round {
        match self {
            Self::PairRound(rnd) => rnd,
            _ => panic!("Assumed OpData was pair round failed"),
        }
    }
}
