use knights_lib::{error::SectionError, points::Points, rounds::GameResult};
use knights_tests::{assert_invariants, id_of, spoof_section};

fn two_player_section() -> knights_lib::section::Section {
    let mut section = spoof_section(&[("Alice", 1800), ("Bob", 1600)]);
    section.pair_next_round().unwrap();
    section
}

#[test]
fn results_credit_both_sides() {
    let mut section = two_player_section();
    section.apply_result(1, 1, "1-0").unwrap();

    let white = section.get_round(1).unwrap().pairings[0].white;
    let winner = section.roster.get_player(&white).unwrap();
    assert_eq!(winner.score, Points::ONE);
    assert_eq!(winner.results.len(), 1);
    let loser = section
        .roster
        .get_player(&winner.opponents[0])
        .unwrap();
    assert_eq!(loser.score, Points::ZERO);
    assert_eq!(loser.results.len(), 1);
    assert_invariants(&section);
}

#[test]
fn corrections_flip_the_credit() {
    let mut section = two_player_section();
    section.apply_result(1, 1, "1-0").unwrap();
    section.apply_result(1, 1, "0-1").unwrap();

    let pairing = section.get_round(1).unwrap().pairings[0].clone();
    assert_eq!(pairing.result, Some(GameResult::BlackWin));
    let white = section.roster.get_player(&pairing.white).unwrap();
    let black = section
        .roster
        .get_player(&pairing.black.unwrap())
        .unwrap();
    assert_eq!(white.score, Points::ZERO);
    assert_eq!(black.score, Points::ONE);
    // Exactly one history row each; the old one is gone
    assert_eq!(white.results.len(), 1);
    assert_eq!(black.results.len(), 1);
    assert_invariants(&section);
}

#[test]
fn applying_the_same_token_twice_changes_nothing() {
    let mut section = two_player_section();
    section.apply_result(1, 1, "0.5-0.5").unwrap();
    let before = section.clone();
    section.apply_result(1, 1, "0.5-0.5").unwrap();
    assert_eq!(section, before);
}

#[test]
fn a_correction_matches_a_fresh_application() {
    let mut corrected = two_player_section();
    corrected.apply_result(1, 1, "1-0").unwrap();
    corrected.apply_result(1, 1, "0.5-0.5").unwrap();

    let mut direct = two_player_section();
    direct.apply_result(1, 1, "0.5-0.5").unwrap();

    assert_eq!(corrected, direct);
}

#[test]
fn the_scoresheet_glyph_is_accepted() {
    let mut section = two_player_section();
    section.apply_result(1, 1, "½-½").unwrap();
    let pairing = &section.get_round(1).unwrap().pairings[0];
    assert_eq!(pairing.result, Some(GameResult::Draw));
    let alice = section.roster.get_by_name("Alice").unwrap();
    assert_eq!(alice.score, Points::HALF);
}

#[test]
fn lookups_fail_cleanly() {
    let mut section = two_player_section();
    assert_eq!(
        section.apply_result(9, 1, "1-0"),
        Err(SectionError::RoundNotFound)
    );
    assert_eq!(
        section.apply_result(1, 9, "1-0"),
        Err(SectionError::BoardNotFound)
    );
    assert_eq!(
        section.apply_result(1, 1, "2-0"),
        Err(SectionError::InvalidResultToken)
    );
    // Nothing above may have touched the section
    let alice = section.roster.get_by_name("Alice").unwrap();
    assert_eq!(alice.score, Points::ZERO);
    assert!(alice.results.is_empty());
}

#[test]
fn bye_results_can_be_corrected() {
    let mut section = spoof_section(&[("Alice", 1800), ("Bob", 1600), ("Cara", 1400)]);
    let round = section.pair_next_round().unwrap();
    let bye_board = round.bye_pairing().unwrap().board;
    let recipient = round.bye_pairing().unwrap().white;
    assert_eq!(
        section.roster.get_player(&recipient).unwrap().score,
        Points::ONE
    );

    section.apply_result(1, bye_board, "0.5-0.5").unwrap();
    let plyr = section.roster.get_player(&recipient).unwrap();
    assert_eq!(plyr.score, Points::HALF);
    assert!(plyr.had_bye);
    assert_eq!(plyr.results.len(), 1);
    assert!(plyr.results[0].is_bye);
}

#[test]
fn results_standings_round_trip_after_correction() {
    let mut section = spoof_section(&[
        ("Alice", 1800),
        ("Bob", 1600),
        ("Cara", 1400),
        ("Dan", 1200),
    ]);
    section.pair_next_round().unwrap();
    section.apply_result(1, 1, "1-0").unwrap();
    section.apply_result(1, 2, "1-0").unwrap();

    // Board one's result stood wrong: Black actually won
    section.apply_result(1, 1, "0-1").unwrap();
    let standings = section.standings();
    let alice = id_of(&section, "Alice");
    let cara = id_of(&section, "Cara");
    let alice_row = standings
        .scores
        .iter()
        .find(|(id, _)| *id == alice)
        .unwrap();
    let cara_row = standings.scores.iter().find(|(id, _)| *id == cara).unwrap();
    assert_eq!(alice_row.1.score, Points::ZERO);
    assert_eq!(cara_row.1.score, Points::ONE);
    assert_invariants(&section);
}
