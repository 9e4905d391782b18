use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{error::SectionError, identifiers::PlayerId, points::Points};

/// The note stamped on automatically assigned byes
pub const AUTO_BYE_NOTE: &str = "auto-bye";

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(C)]
/// The final result of a single game, one of the closed token set
/// `1-0`, `0-1`, `0.5-0.5`
pub enum GameResult {
    /// White won the game
    WhiteWin,
    /// Black won the game
    BlackWin,
    /// The game was drawn
    Draw,
}

impl GameResult {
    /// The point pair `(white, black)` the result awards
    pub fn points(self) -> (Points, Points) {
        match self {
            GameResult::WhiteWin => (Points::ONE, Points::ZERO),
            GameResult::BlackWin => (Points::ZERO, Points::ONE),
            GameResult::Draw => (Points::HALF, Points::HALF),
        }
    }

    /// The canonical token for the result
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWin => "1-0",
            GameResult::BlackWin => "0-1",
            GameResult::Draw => "0.5-0.5",
        }
    }
}

impl FromStr for GameResult {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-0" => Ok(GameResult::WhiteWin),
            "0-1" => Ok(GameResult::BlackWin),
            // The scoresheet glyph normalizes to the canonical token
            "0.5-0.5" | "½-½" => Ok(GameResult::Draw),
            _ => Err(SectionError::InvalidResultToken),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for GameResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GameResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token
            .parse()
            .map_err(|_| serde::de::Error::custom("unknown result token"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// A single board in a round: two players, or one player and a bye.
/// `black` is `None` exactly when `is_bye` is set.
pub struct Pairing {
    /// The 1-based board number, assigned when the round is frozen
    pub board: u32,
    /// The player holding White (the bye recipient on bye boards)
    pub white: PlayerId,
    /// The player holding Black, absent for byes
    #[serde(default)]
    pub black: Option<PlayerId>,
    /// Whether this board is a bye
    #[serde(default)]
    pub is_bye: bool,
    /// The recorded result, if any
    #[serde(default)]
    pub result: Option<GameResult>,
    /// Accumulated TD annotations
    #[serde(default)]
    pub td_note: Option<String>,
}

impl Pairing {
    /// Creates a played board between two players
    pub(crate) fn game(board: u32, white: PlayerId, black: PlayerId) -> Self {
        Pairing {
            board,
            white,
            black: Some(black),
            is_bye: false,
            result: None,
            td_note: None,
        }
    }

    /// Creates a bye board. Byes start resolved: the stored token is
    /// the full-point "white wins" form.
    pub(crate) fn bye(board: u32, plyr: PlayerId) -> Self {
        Pairing {
            board,
            white: plyr,
            black: None,
            is_bye: true,
            result: Some(GameResult::WhiteWin),
            td_note: Some(AUTO_BYE_NOTE.into()),
        }
    }

    /// Calculates if a player occupies either seat of the board
    pub fn contains_player(&self, id: &PlayerId) -> bool {
        self.white == *id || self.black == Some(*id)
    }

    /// Appends a TD annotation to the board
    pub(crate) fn push_note(&mut self, note: &str) {
        match &mut self.td_note {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(note);
            }
            None => self.td_note = Some(note.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// One round of the section: an ordered list of boards. The round
/// number equals its 1-based position in the section's round sequence.
pub struct Round {
    /// The 1-based round number
    pub number: u64,
    /// The boards of the round, in board-number order
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// Creates a new, empty round
    pub fn new(number: u64) -> Self {
        Round {
            number,
            pairings: Vec::new(),
        }
    }

    /// Given a board number, returns that board if found
    pub fn get_pairing(&self, board: u32) -> Option<&Pairing> {
        self.pairings.iter().find(|p| p.board == board)
    }

    /// Given a board number, returns that board mutably if found
    pub(crate) fn get_mut_pairing(&mut self, board: u32) -> Option<&mut Pairing> {
        self.pairings.iter_mut().find(|p| p.board == board)
    }

    /// The round's bye board, if one was assigned
    pub fn bye_pairing(&self) -> Option<&Pairing> {
        self.pairings.iter().find(|p| p.is_bye)
    }

    /// Every player id seated in the round
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.pairings
            .iter()
            .flat_map(|p| std::iter::once(p.white).chain(p.black))
    }
}
