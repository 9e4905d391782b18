use knights_lib::{
    identifiers::PlayerId,
    players::{Color, GameRecord, Player},
    points::Points,
    scoring::tiebreaks::compare_standings,
    section::Section,
};
use knights_tests::{id_of, spoof_field, sweep_round};

/// Builds the classic four-player round robin: Alice sweeps, Bob beats
/// the lower two, Cara beats Dan. Rounds: 1) A-B, C-D; 2) A-C, B-D;
/// 3) A-D, B-C.
fn round_robin_section() -> (Section, [PlayerId; 4]) {
    let mut section = Section::new("Vector".into());
    let mut players: Vec<Player> = [("Alice", 1800), ("Bob", 1600), ("Cara", 1400), ("Dan", 1200)]
        .iter()
        .map(|(name, rating)| Player::new((*name).into(), *rating, None))
        .collect();
    let ids = [players[0].id, players[1].id, players[2].id, players[3].id];

    // (round, winner, loser) for every game played
    let games = [
        (1u64, 0usize, 1usize),
        (1, 2, 3),
        (2, 0, 2),
        (2, 1, 3),
        (3, 0, 3),
        (3, 1, 2),
    ];
    for (round, winner, loser) in games {
        let (w_id, l_id) = (ids[winner], ids[loser]);
        let plyr = &mut players[winner];
        plyr.score += Points::ONE;
        plyr.opponents.push(l_id);
        plyr.colors.push(Color::White);
        plyr.results.push(GameRecord {
            round,
            opponent: Some(l_id),
            result: Points::ONE,
            is_bye: false,
        });
        let plyr = &mut players[loser];
        plyr.opponents.push(w_id);
        plyr.colors.push(Color::Black);
        plyr.results.push(GameRecord {
            round,
            opponent: Some(w_id),
            result: Points::ZERO,
            is_bye: false,
        });
    }
    for plyr in players {
        section.roster.import_player(plyr).unwrap();
    }
    (section, ids)
}

#[test]
fn tiebreak_vector_for_the_round_robin() {
    let (section, ids) = round_robin_section();
    let standings = section.standings();
    let row = |id: PlayerId| {
        standings
            .scores
            .iter()
            .find(|(p, _)| *p == id)
            .map(|(_, s)| *s)
            .unwrap()
    };

    let alice = row(ids[0]);
    assert_eq!(alice.score, Points::from_millis(3000));
    assert_eq!(alice.buchholz, Points::from_millis(3000)); // 2 + 1 + 0
    assert_eq!(alice.median, Points::ONE); // strips the 2 and the 0
    assert_eq!(alice.sonneborn_berger, Points::from_millis(3000));
    assert_eq!(alice.cumulative, Points::from_millis(6000)); // 1 + 2 + 3

    let bob = row(ids[1]);
    assert_eq!(bob.score, Points::from_millis(2000));
    assert_eq!(bob.buchholz, Points::from_millis(4000)); // 3 + 1 + 0
    assert_eq!(bob.median, Points::ONE);
    assert_eq!(bob.sonneborn_berger, Points::ONE); // beat Cara and Dan
    assert_eq!(bob.cumulative, Points::from_millis(3000)); // 0 + 1 + 2

    let cara = row(ids[2]);
    assert_eq!(cara.score, Points::ONE);
    assert_eq!(cara.buchholz, Points::from_millis(5000)); // 3 + 2 + 0
    assert_eq!(cara.median, Points::from_millis(2000));
    assert_eq!(cara.sonneborn_berger, Points::ZERO); // only beat Dan
    assert_eq!(cara.cumulative, Points::from_millis(3000)); // 1 + 1 + 1

    let dan = row(ids[3]);
    assert_eq!(dan.score, Points::ZERO);
    assert_eq!(dan.buchholz, Points::from_millis(6000)); // 3 + 2 + 1
    assert_eq!(dan.median, Points::from_millis(2000)); // strips the 3 and the 1
    assert_eq!(dan.sonneborn_berger, Points::ZERO);
    assert_eq!(dan.cumulative, Points::ZERO);

    // Score alone orders this field
    let order: Vec<PlayerId> = standings.scores.iter().map(|(p, _)| *p).collect();
    assert_eq!(order, ids.to_vec());
}

#[test]
fn few_opponents_leave_the_median_alone() {
    let (mut section, ids) = round_robin_section();
    // Strip Dan down to a single game
    let dan = section.roster.get_mut_player(&ids[3]).unwrap();
    dan.opponents.truncate(1);
    dan.colors.truncate(1);
    dan.results.truncate(1);
    let standings = section.standings();
    let dan_row = standings
        .scores
        .iter()
        .find(|(p, _)| *p == ids[3])
        .map(|(_, s)| *s)
        .unwrap();
    assert_eq!(dan_row.median, dan_row.buchholz);
}

#[test]
fn standings_are_a_strict_total_order() {
    let mut section = spoof_field(8);
    for number in 1..=3u64 {
        section.pair_next_round().unwrap();
        let token = if number == 2 { "0.5-0.5" } else { "1-0" };
        sweep_round(&mut section, number, token);
    }
    let standings = section.standings();
    assert_eq!(standings.len(), 8);
    for pair in standings.scores.windows(2) {
        let (a_id, a) = &pair[0];
        let (b_id, b) = &pair[1];
        assert_eq!(
            compare_standings(&section.roster, (*a_id, a), (*b_id, b)),
            std::cmp::Ordering::Less,
            "standings must never tie"
        );
    }
}

#[test]
fn withdrawn_players_drop_out_of_the_table() {
    let mut section = spoof_field(4);
    section.pair_next_round().unwrap();
    sweep_round(&mut section, 1, "1-0");
    let gone = id_of(&section, "player-02");
    section.withdraw_player(&gone.into()).unwrap();
    let standings = section.standings();
    assert_eq!(standings.len(), 3);
    assert!(standings.scores.iter().all(|(id, _)| *id != gone));
}

#[test]
fn head_to_head_splits_otherwise_tied_players() {
    let (section, ids) = round_robin_section();
    // Bob beat Cara directly; with identical synthetic tiebreaks the
    // head-to-head result alone must order them
    let even = knights_lib::scoring::SectionScore::default();
    assert_eq!(
        compare_standings(&section.roster, (ids[1], &even), (ids[2], &even)),
        std::cmp::Ordering::Less
    );
    assert_eq!(
        compare_standings(&section.roster, (ids[2], &even), (ids[1], &even)),
        std::cmp::Ordering::Greater
    );
}
