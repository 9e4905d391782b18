use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// All the errors that can occur when applying an operation to a section.
/// The engine never logs or aborts; every failure is returned as one of
/// these values and the caller decides how to surface it.
pub enum SectionError {
    /// The given result string is not one of the known tokens
    InvalidResultToken,
    /// The given player id does not resolve within the section
    UnknownPlayerId,
    /// Pairing was requested while registration is still open
    SectionNotLocked,
    /// Pairing was requested but every planned round has been started
    AllRoundsStarted,
    /// The specified round couldn't be found
    RoundNotFound,
    /// The specified board couldn't be found in the round
    BoardNotFound,
    /// A pairing references a player that is not in the roster
    PlayerMissing,
    /// A pairing or player history no longer satisfies the engine's
    /// invariants (e.g. a prior result that cannot be retracted)
    PairingStateCorrupt,
    /// Registration for the section is closed
    RegClosed,
    /// A player with the same name is already registered
    PlayerAlreadyRegistered,
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SectionError::*;
        let s = match &self {
            InvalidResultToken => "InvalidResultToken",
            UnknownPlayerId => "UnknownPlayerId",
            SectionNotLocked => "SectionNotLocked",
            AllRoundsStarted => "AllRoundsStarted",
            RoundNotFound => "RoundNotFound",
            BoardNotFound => "BoardNotFound",
            PlayerMissing => "PlayerMissing",
            PairingStateCorrupt => "PairingStateCorrupt",
            RegClosed => "RegClosed",
            PlayerAlreadyRegistered => "PlayerAlreadyRegistered",
        };
        write!(f, "{}", s)
    }
}

impl std::error::Error for SectionError {}
