use uuid::Uuid;

use knights_lib::{
    error::SectionError,
    identifiers::PlayerId,
    players::Color,
    points::Points,
};
use knights_tests::{id_of, spoof_section};

fn paired_section() -> knights_lib::section::Section {
    let mut section = spoof_section(&[
        ("Alice", 1800),
        ("Bob", 1600),
        ("Cara", 1400),
        ("Dan", 1200),
    ]);
    section.pair_next_round().unwrap();
    section
}

#[test]
fn swap_exchanges_seats_without_touching_scores() {
    let mut section = paired_section();
    let before = section.get_round(1).unwrap().pairings[0].clone();
    let alice = id_of(&section, "Alice");
    let cara = id_of(&section, "Cara");
    assert_eq!(before.white, alice);

    section.td_swap(1, 1).unwrap();
    let after = section.get_round(1).unwrap().pairings[0].clone();
    assert_eq!(after.white, cara);
    assert_eq!(after.black, Some(alice));
    assert!(after.td_note.as_deref().unwrap().contains("td-swap"));

    for plyr in section.roster.players.values() {
        assert_eq!(plyr.score, Points::ZERO);
        assert!(plyr.results.is_empty());
    }

    // A result applied after the swap credits the new White seat
    section.apply_result(1, 1, "1-0").unwrap();
    assert_eq!(
        section.roster.get_player(&cara).unwrap().score,
        Points::ONE
    );
    assert_eq!(
        section.roster.get_player(&alice).unwrap().score,
        Points::ZERO
    );
}

#[test]
fn force_color_swaps_only_when_needed() {
    let mut section = paired_section();
    let alice = id_of(&section, "Alice");
    let cara = id_of(&section, "Cara");

    // Alice already holds White: no seat change, note still lands
    section.td_force_color(1, 1, alice).unwrap();
    let pairing = section.get_round(1).unwrap().pairings[0].clone();
    assert_eq!(pairing.white, alice);
    assert!(pairing.td_note.as_deref().unwrap().contains("td-force-color"));

    section.td_force_color(1, 1, cara).unwrap();
    let pairing = section.get_round(1).unwrap().pairings[0].clone();
    assert_eq!(pairing.white, cara);
    assert_eq!(pairing.black, Some(alice));
}

#[test]
fn replace_reseats_a_board() {
    let mut section = paired_section();
    let dan = id_of(&section, "Dan");

    section.td_replace(1, 1, Color::Black, dan).unwrap();
    let pairing = section.get_round(1).unwrap().pairings[0].clone();
    assert_eq!(pairing.black, Some(dan));
    assert!(pairing.td_note.as_deref().unwrap().contains("td-replace"));

    // The result credits whoever now occupies the seats
    section.apply_result(1, 1, "0-1").unwrap();
    assert_eq!(section.roster.get_player(&dan).unwrap().score, Points::ONE);
}

#[test]
fn override_lookups_fail_cleanly() {
    let mut section = paired_section();
    let alice = id_of(&section, "Alice");
    let stranger = PlayerId::new(Uuid::new_v4());

    assert_eq!(section.td_swap(9, 1), Err(SectionError::RoundNotFound));
    assert_eq!(section.td_swap(1, 9), Err(SectionError::BoardNotFound));
    assert_eq!(
        section.td_replace(1, 1, Color::White, stranger),
        Err(SectionError::UnknownPlayerId)
    );
    assert_eq!(
        section.td_force_color(1, 2, alice),
        Err(SectionError::UnknownPlayerId)
    );
}

#[test]
fn bye_boards_reject_seat_edits() {
    let mut section = spoof_section(&[("Alice", 1800), ("Bob", 1600), ("Cara", 1400)]);
    let round = section.pair_next_round().unwrap();
    let bye_board = round.bye_pairing().unwrap().board;
    let alice = id_of(&section, "Alice");

    assert_eq!(
        section.td_swap(1, bye_board),
        Err(SectionError::PairingStateCorrupt)
    );
    assert_eq!(
        section.td_replace(1, bye_board, Color::Black, alice),
        Err(SectionError::PairingStateCorrupt)
    );
    // Forcing White for the recipient is a no-op with a note
    let recipient = round.bye_pairing().unwrap().white;
    section.td_force_color(1, bye_board, recipient).unwrap();
}
