use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::identifiers::PlayerId;
use crate::{identifiers::id_from_item, points::Points};

mod roster;
pub use roster::Roster;

#[derive(
    Serialize, Deserialize, Default, PartialEq, Eq, Debug, Clone, Copy, Hash, PartialOrd, Ord,
)]
#[repr(C)]
/// The registration status of a player
pub enum PlayerStatus {
    /// The player is active in the section
    #[default]
    Active,
    /// The player has withdrawn; their recorded results stand but they
    /// are excluded from future pairings
    Withdrawn,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[repr(C)]
/// The color a player holds in a single game
pub enum Color {
    /// The player moves first
    White,
    /// The player moves second
    Black,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// One row of a player's per-round history. `opponent` is `None`
/// exactly when the row records a bye.
pub struct GameRecord {
    /// The 1-based round the game belongs to
    pub round: u64,
    /// The opponent, absent for byes
    #[serde(default)]
    pub opponent: Option<PlayerId>,
    /// The points the player earned in the round
    pub result: Points,
    /// Whether the row records a bye rather than a played game
    #[serde(default)]
    pub is_bye: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// The core player model: identity plus the accumulated history the
/// pairer and scorer work from. `opponents` and `colors` are aligned
/// positionally, one entry per played (non-bye) game; `results` gains a
/// row per round once its result is recorded.
pub struct Player {
    /// The player's id
    pub id: PlayerId,
    /// The player's name
    pub name: String,
    /// The player's rating; zero means unrated
    #[serde(default)]
    pub rating: u32,
    /// The player's USCF membership id, opaque to the engine
    #[serde(default)]
    pub uscf_id: Option<String>,
    /// The player's running score
    #[serde(default)]
    pub score: Points,
    /// Every opponent the player has faced, in board order
    #[serde(default)]
    pub opponents: Vec<PlayerId>,
    /// The color held in each played game, aligned with `opponents`
    #[serde(default)]
    pub colors: Vec<Color>,
    /// Per-round result rows
    #[serde(default)]
    pub results: Vec<GameRecord>,
    /// Whether the player has ever received a bye
    #[serde(default)]
    pub had_bye: bool,
    /// The player's status
    #[serde(default)]
    pub status: PlayerStatus,
}

impl GameRecord {
    /// Calculates if the row records the given round against the given
    /// opponent (or the round's bye row when `is_bye` is set)
    pub fn matches(&self, round: u64, opponent: Option<PlayerId>, is_bye: bool) -> bool {
        self.round == round && self.is_bye == is_bye && (is_bye || self.opponent == opponent)
    }
}

impl Player {
    /// Creates a new player with a fresh id and no history
    pub fn new(name: String, rating: u32, uscf_id: Option<String>) -> Self {
        Player {
            id: Uuid::new_v4().into(),
            name,
            rating,
            uscf_id,
            score: Points::ZERO,
            opponents: Vec::new(),
            colors: Vec::new(),
            results: Vec::new(),
            had_bye: false,
            status: PlayerStatus::Active,
        }
    }

    pub(crate) fn create_salted_id(salt: DateTime<Utc>, name: &str) -> PlayerId {
        id_from_item(salt, name)
    }

    /// Calculates if the player can be paired
    pub fn can_play(&self) -> bool {
        self.status == PlayerStatus::Active
    }

    /// The number of games the player has played (byes excluded)
    pub fn games_played(&self) -> usize {
        self.colors.len()
    }

    /// Counts the player's games with each color, `(whites, blacks)`
    pub fn color_tally(&self) -> (usize, usize) {
        let whites = self.colors.iter().filter(|c| **c == Color::White).count();
        (whites, self.colors.len() - whites)
    }

    /// Calculates if the player's last two games were both played with
    /// the given color
    pub fn last_two_were(&self, color: Color) -> bool {
        self.colors.len() >= 2 && self.colors[self.colors.len() - 2..].iter().all(|c| *c == color)
    }

    /// Records a played (non-bye) board in the player's history
    pub(crate) fn record_game(&mut self, opponent: PlayerId, color: Color) {
        self.opponents.push(opponent);
        self.colors.push(color);
    }

    /// Records a bye: the credit, the history row, and the flag
    pub(crate) fn record_bye(&mut self, round: u64, credit: Points) {
        self.score += credit;
        self.results.push(GameRecord {
            round,
            opponent: None,
            result: credit,
            is_bye: true,
        });
        self.had_bye = true;
    }

    /// Clears all score state, leaving identity and status intact
    pub(crate) fn clear_history(&mut self) {
        self.score = Points::ZERO;
        self.opponents.clear();
        self.colors.clear();
        self.results.clear();
        self.had_bye = false;
    }
}

impl Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PlayerStatus::Active => "Active",
                PlayerStatus::Withdrawn => "Withdrawn",
            }
        )
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Color::White => "White",
                Color::Black => "Black",
            }
        )
    }
}
