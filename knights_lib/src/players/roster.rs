use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use cycle_map::CycleMap;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Seq};

use crate::{
    error::SectionError::{self, PlayerAlreadyRegistered, UnknownPlayerId},
    identifiers::{PlayerId, PlayerIdentifier},
    players::{Color, Player, PlayerStatus},
};

#[serde_as]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// The struct that creates and manages all players in a section.
///
/// Alongside the player map it maintains an opponents-set view. The
/// per-player `opponents` vector keeps board order for rendering; the
/// set view answers "have these two met?" during pairing. Duplicate
/// data, updated in lockstep.
pub struct Roster {
    /// A lookup table between player ids and their names
    pub name_and_id: CycleMap<String, PlayerId>,
    /// All players in a section
    #[serde_as(as = "Seq<(_, _)>")]
    pub players: HashMap<PlayerId, Player>,
    /// A lookup table between players and the set of their past opponents
    #[serde_as(as = "Seq<(_, _)>")]
    pub opponents: HashMap<PlayerId, HashSet<PlayerId>>,
}

impl Roster {
    /// Creates a new roster with no players
    pub fn new() -> Self {
        Roster {
            name_and_id: CycleMap::new(),
            players: HashMap::new(),
            opponents: HashMap::new(),
        }
    }

    /// Calculates if there are no players registered
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Calculates the number of registered players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Calculates the number of players that can still be paired
    pub fn active_player_count(&self) -> usize {
        self.players.values().filter(|p| p.can_play()).count()
    }

    /// Calculates if a player is registered for the section
    pub fn is_registered(&self, id: &PlayerId) -> bool {
        self.players.contains_key(id)
    }

    /// Registers a new player. The id is derived from the salt and the
    /// name, so replicated stores agree on it without coordination.
    pub fn register(
        &mut self,
        salt: DateTime<Utc>,
        name: String,
        rating: u32,
        uscf_id: Option<String>,
    ) -> Result<PlayerId, SectionError> {
        if self.name_and_id.contains_left(&name) {
            return Err(PlayerAlreadyRegistered);
        }
        let mut plyr = Player::new(name.clone(), rating, uscf_id);
        plyr.id = Player::create_salted_id(salt, &name);
        let digest = Ok(plyr.id);
        self.name_and_id.insert(name, plyr.id);
        self.opponents.insert(plyr.id, HashSet::new());
        self.players.insert(plyr.id, plyr);
        digest
    }

    /// Inserts an already-built player, rebuilding the lookup tables.
    /// Persistence backends use this to rehydrate a roster.
    pub fn import_player(&mut self, plyr: Player) -> Result<PlayerId, SectionError> {
        if self.name_and_id.contains_left(&plyr.name) {
            return Err(PlayerAlreadyRegistered);
        }
        let digest = Ok(plyr.id);
        self.name_and_id.insert(plyr.name.clone(), plyr.id);
        self.opponents
            .insert(plyr.id, plyr.opponents.iter().cloned().collect());
        self.players.insert(plyr.id, plyr);
        digest
    }

    /// Sets the specified player's status to `Withdrawn`
    pub fn withdraw(&mut self, id: &PlayerId) -> Result<(), SectionError> {
        self.get_mut_player(id)?.status = PlayerStatus::Withdrawn;
        Ok(())
    }

    /// Resolves a player identifier to an id
    pub fn resolve(&self, ident: &PlayerIdentifier) -> Result<PlayerId, SectionError> {
        match ident {
            PlayerIdentifier::Id(id) => self
                .is_registered(id)
                .then(|| *id)
                .ok_or(UnknownPlayerId),
            PlayerIdentifier::Name(name) => self
                .name_and_id
                .get_right(name)
                .cloned()
                .ok_or(UnknownPlayerId),
        }
    }

    /// Given a player id, returns a reference to that player if found
    pub fn get_player(&self, id: &PlayerId) -> Result<&Player, SectionError> {
        self.players.get(id).ok_or(UnknownPlayerId)
    }

    /// Given a player id, returns a mutable reference to that player if found
    pub fn get_mut_player(&mut self, id: &PlayerId) -> Result<&mut Player, SectionError> {
        self.players.get_mut(id).ok_or(UnknownPlayerId)
    }

    /// Given a player name, returns a reference to that player if found
    pub fn get_by_name(&self, name: &str) -> Result<&Player, SectionError> {
        self.name_and_id
            .get_right(&name.to_string())
            .and_then(|id| self.players.get(id))
            .ok_or(UnknownPlayerId)
    }

    /// Calculates if the two players have already faced each other
    pub fn have_met(&self, a: &PlayerId, b: &PlayerId) -> bool {
        self.opponents.get(a).map_or(false, |opps| opps.contains(b))
    }

    /// Records a freshly paired board in both players' histories and in
    /// the opponents-set view. The pairer calls this the moment a board
    /// is fixed so later boards observe the update.
    pub(crate) fn record_board(&mut self, white: PlayerId, black: PlayerId) {
        if let Some(plyr) = self.players.get_mut(&white) {
            plyr.record_game(black, Color::White);
        }
        if let Some(plyr) = self.players.get_mut(&black) {
            plyr.record_game(white, Color::Black);
        }
        self.opponents.entry(white).or_default().insert(black);
        self.opponents.entry(black).or_default().insert(white);
    }

    /// Ensures each player's opponent list contains the other at least
    /// once, appending a seat-colored entry when a TD edit put a player
    /// on a board the pairer never recorded for them.
    pub(crate) fn ensure_linked(&mut self, white: PlayerId, black: PlayerId) {
        if let Some(plyr) = self.players.get_mut(&white) {
            if !plyr.opponents.contains(&black) {
                plyr.record_game(black, Color::White);
            }
        }
        if let Some(plyr) = self.players.get_mut(&black) {
            if !plyr.opponents.contains(&white) {
                plyr.record_game(white, Color::Black);
            }
        }
        self.opponents.entry(white).or_default().insert(black);
        self.opponents.entry(black).or_default().insert(white);
    }

    /// Clears every player's score state and the opponents view
    pub(crate) fn clear_history(&mut self) {
        for plyr in self.players.values_mut() {
            plyr.clear_history();
        }
        for opps in self.opponents.values_mut() {
            opps.clear();
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn salt() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn register_and_lookup() {
        let mut roster = Roster::new();
        let id = roster
            .register(salt(), "Alice".into(), 1800, None)
            .unwrap();
        assert!(roster.is_registered(&id));
        assert_eq!(roster.get_by_name("Alice").unwrap().id, id);
        assert_eq!(
            roster.resolve(&PlayerIdentifier::Name("Alice".into())).unwrap(),
            id
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut roster = Roster::new();
        roster.register(salt(), "Alice".into(), 1800, None).unwrap();
        assert_eq!(
            roster.register(salt(), "Alice".into(), 1200, None),
            Err(PlayerAlreadyRegistered)
        );
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn withdrawal_excludes_from_active_count() {
        let mut roster = Roster::new();
        let id = roster
            .register(salt(), "Alice".into(), 1800, None)
            .unwrap();
        roster.register(salt(), "Bob".into(), 1600, None).unwrap();
        assert_eq!(roster.active_player_count(), 2);
        roster.withdraw(&id).unwrap();
        assert_eq!(roster.active_player_count(), 1);
        assert!(!roster.get_player(&id).unwrap().can_play());
    }

    #[test]
    fn recorded_boards_update_both_views() {
        let mut roster = Roster::new();
        let a = roster.register(salt(), "Alice".into(), 1800, None).unwrap();
        let b = roster.register(salt(), "Bob".into(), 1600, None).unwrap();
        assert!(!roster.have_met(&a, &b));
        roster.record_board(a, b);
        assert!(roster.have_met(&a, &b));
        assert!(roster.have_met(&b, &a));
        assert_eq!(roster.get_player(&a).unwrap().colors, vec![Color::White]);
        assert_eq!(roster.get_player(&b).unwrap().colors, vec![Color::Black]);
        assert_eq!(roster.get_player(&b).unwrap().opponents, vec![a]);
    }

    #[test]
    fn ensure_linked_is_idempotent() {
        let mut roster = Roster::new();
        let a = roster.register(salt(), "Alice".into(), 1800, None).unwrap();
        let b = roster.register(salt(), "Bob".into(), 1600, None).unwrap();
        roster.record_board(a, b);
        roster.ensure_linked(a, b);
        assert_eq!(roster.get_player(&a).unwrap().opponents, vec![b]);
        assert_eq!(roster.get_player(&a).unwrap().colors.len(), 1);
    }
}
