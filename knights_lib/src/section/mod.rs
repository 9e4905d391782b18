use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    error::SectionError,
    identifiers::{PlayerId, PlayerIdentifier, SectionId},
    operations::{OpData, OpResult, SectionOp},
    pairings::{self, ProposedPairings},
    players::Roster,
    rounds::{Pairing, Round},
    scoring::{self, SectionScore, Standings},
    settings::{SectionSetting, SectionSettingsTree},
};

mod overrides;
mod results;

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(C)]
/// The lifecycle of a section has exactly two states. This enum encodes them
pub enum SectionStatus {
    /// Registration is open; nothing has been paired
    #[default]
    Open,
    /// The roster is frozen; rounds can be paired and scored
    Locked,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// One section of a tournament: the roster, the rounds played so far,
/// and the settings that govern pairing. Everything the engine does is
/// a method on this type; persistence and presentation live elsewhere
/// and call in through `apply_op` or the named operations.
pub struct Section {
    /// The section's id
    pub id: SectionId,
    /// The section's name
    pub name: String,
    /// The section's settings
    pub settings: SectionSettingsTree,
    /// The lifecycle status
    #[serde(default)]
    pub status: SectionStatus,
    /// The players registered in the section
    pub roster: Roster,
    /// The rounds paired so far, in order
    #[serde(default)]
    pub rounds: Vec<Round>,
}

impl Section {
    /// Creates a new, open section with default settings
    pub fn new(name: String) -> Self {
        Section {
            id: Uuid::new_v4().into(),
            name,
            settings: SectionSettingsTree::new(),
            status: SectionStatus::Open,
            roster: Roster::new(),
            rounds: Vec::new(),
        }
    }

    /// Calculates if registration is still open
    pub fn is_open(&self) -> bool {
        self.status == SectionStatus::Open
    }

    /// Calculates if the roster is frozen
    pub fn is_locked(&self) -> bool {
        self.status == SectionStatus::Locked
    }

    /// Applies a section operation, dispatching to the named methods
    pub fn apply_op(&mut self, op: SectionOp) -> OpResult {
        use SectionOp::*;
        match op {
            RegisterPlayer {
                salt,
                name,
                rating,
                uscf_id,
            } => self
                .register_player(salt, name, rating, uscf_id)
                .map(OpData::RegisterPlayer),
            WithdrawPlayer(ident) => self.withdraw_player(&ident).map(|_| OpData::Nothing),
            Lock => {
                self.lock();
                Ok(OpData::Nothing)
            }
            Reset => self.reset().map(|_| OpData::Nothing),
            UpdateSetting(setting) => {
                self.update_setting(setting);
                Ok(OpData::Nothing)
            }
            PairNextRound => self.pair_next_round().map(OpData::PairRound),
            ApplyResult {
                round,
                board,
                result,
            } => self
                .apply_result(round, board, &result)
                .map(|_| OpData::Nothing),
            TdSwap { round, board } => self.td_swap(round, board).map(|_| OpData::Nothing),
            TdReplace {
                round,
                board,
                side,
                player,
            } => self
                .td_replace(round, board, side, player)
                .map(|_| OpData::Nothing),
            TdForceColor {
                round,
                board,
                white,
            } => self
                .td_force_color(round, board, white)
                .map(|_| OpData::Nothing),
        }
    }

    /// Registers a new player while the section is open
    pub fn register_player(
        &mut self,
        salt: DateTime<Utc>,
        name: String,
        rating: u32,
        uscf_id: Option<String>,
    ) -> Result<PlayerId, SectionError> {
        if !self.is_open() {
            return Err(SectionError::RegClosed);
        }
        self.roster.register(salt, name, rating, uscf_id)
    }

    /// Withdraws a player. Accepted in both states: a withdrawal during
    /// play leaves recorded results standing and excludes the player
    /// from future pairings.
    pub fn withdraw_player(&mut self, ident: &PlayerIdentifier) -> Result<(), SectionError> {
        let id = self.roster.resolve(ident)?;
        self.roster.withdraw(&id)
    }

    /// Closes registration and freezes the roster
    pub fn lock(&mut self) {
        self.status = SectionStatus::Locked;
    }

    /// Reopens a locked section, clearing all rounds and score state.
    /// The roster itself (names, ratings, withdrawal flags) survives.
    pub fn reset(&mut self) -> Result<(), SectionError> {
        if !self.is_locked() {
            return Err(SectionError::SectionNotLocked);
        }
        self.rounds.clear();
        self.roster.clear_history();
        self.status = SectionStatus::Open;
        Ok(())
    }

    /// Updates a single section setting
    pub fn update_setting(&mut self, setting: SectionSetting) {
        self.settings.update(setting);
    }

    /// Pairs the next round, appends it to the section, and returns the
    /// frozen round. Player histories are updated in place as boards
    /// are fixed; the bye's credit is applied here, not deferred to
    /// result entry.
    pub fn pair_next_round(&mut self) -> Result<Round, SectionError> {
        if !self.is_locked() {
            return Err(SectionError::SectionNotLocked);
        }
        if self.rounds.len() as u64 >= self.settings.planned_rounds {
            return Err(SectionError::AllRoundsStarted);
        }
        let number = self.rounds.len() as u64 + 1;
        let ProposedPairings { games, bye } = pairings::pair_round(&mut self.roster);

        let mut round = Round::new(number);
        let mut board = 0u32;
        for (white, black) in games {
            board += 1;
            round.pairings.push(Pairing::game(board, white, black));
        }
        if let Some(plyr) = bye {
            board += 1;
            round.pairings.push(Pairing::bye(board, plyr));
            let credit = self.settings.bye_points;
            self.roster.get_mut_player(&plyr)?.record_bye(number, credit);
        }
        self.rounds.push(round.clone());
        Ok(round)
    }

    /// Gets the current standings of all active players
    pub fn standings(&self) -> Standings<SectionScore> {
        scoring::get_standings(&self.roster)
    }

    /// Given a round number, returns that round if found
    pub fn get_round(&self, number: u64) -> Result<&Round, SectionError> {
        self.rounds
            .iter()
            .find(|r| r.number == number)
            .ok_or(SectionError::RoundNotFound)
    }

    pub(crate) fn get_mut_round(&mut self, number: u64) -> Result<&mut Round, SectionError> {
        self.rounds
            .iter_mut()
            .find(|r| r.number == number)
            .ok_or(SectionError::RoundNotFound)
    }
}

impl Display for SectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SectionStatus::Open => "Open",
                SectionStatus::Locked => "Locked",
            }
        )
    }
}
