//! Shared fixtures for the engine's integration tests: spoofed
//! sections, result sweeps, and the structural checks every reachable
//! section state must satisfy.

use chrono::{DateTime, TimeZone, Utc};

use knights_lib::{
    identifiers::PlayerId,
    section::Section,
    settings::SectionSetting,
};

/// A fixed registration salt so spoofed ids are reproducible
pub fn spoof_salt() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Builds a locked section from `(name, rating)` pairs, with enough
/// planned rounds that tests never trip the round bound by accident
pub fn spoof_section(players: &[(&str, u32)]) -> Section {
    let mut section = Section::new("Test Section".into());
    section.update_setting(SectionSetting::PlannedRounds(32));
    for (name, rating) in players {
        section
            .register_player(spoof_salt(), (*name).into(), *rating, None)
            .unwrap();
    }
    section.lock();
    section
}

/// Builds a locked section of `count` players with distinct names and
/// strictly descending ratings
pub fn spoof_field(count: usize) -> Section {
    let players: Vec<(String, u32)> = (0..count)
        .map(|i| (format!("player-{:02}", i), 2000 - 10 * i as u32))
        .collect();
    let mut section = Section::new("Test Section".into());
    section.update_setting(SectionSetting::PlannedRounds(32));
    for (name, rating) in &players {
        section
            .register_player(spoof_salt(), name.clone(), *rating, None)
            .unwrap();
    }
    section.lock();
    section
}

/// Looks up a spoofed player's id by name
pub fn id_of(section: &Section, name: &str) -> PlayerId {
    section.roster.get_by_name(name).unwrap().id
}

/// Applies the same result token to every non-bye board of a round
pub fn sweep_round(section: &mut Section, round: u64, token: &str) {
    let boards: Vec<u32> = section
        .get_round(round)
        .unwrap()
        .pairings
        .iter()
        .filter(|p| !p.is_bye)
        .map(|p| p.board)
        .collect();
    for board in boards {
        section.apply_result(round, board, token).unwrap();
    }
}

/// Asserts the structural invariants every section reachable through
/// the public API must satisfy once a round's results are in
pub fn assert_invariants(section: &Section) {
    for plyr in section.roster.players.values() {
        let summed = plyr
            .results
            .iter()
            .map(|r| r.result)
            .sum::<knights_lib::points::Points>();
        assert_eq!(plyr.score, summed, "score drifted for {}", plyr.name);
        assert_eq!(
            plyr.opponents.len(),
            plyr.colors.len(),
            "opponents/colors misaligned for {}",
            plyr.name
        );
        let played = plyr.results.iter().filter(|r| !r.is_bye).count();
        assert_eq!(
            plyr.opponents.len(),
            played,
            "history rows misaligned for {}",
            plyr.name
        );
        assert_eq!(
            plyr.had_bye,
            plyr.results.iter().any(|r| r.is_bye),
            "bye flag drifted for {}",
            plyr.name
        );
    }
    for round in &section.rounds {
        let ids: Vec<PlayerId> = round.player_ids().collect();
        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| id.to_string());
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len(), "player paired twice in a round");
        for id in &ids {
            assert!(
                section.roster.is_registered(id),
                "round references an unregistered player"
            );
        }
        assert!(
            round.pairings.iter().filter(|p| p.is_bye).count() <= 1,
            "more than one bye in a round"
        );
    }
}
