use knights_lib::{
    error::SectionError,
    identifiers::PlayerIdentifier,
    operations::SectionOp,
    points::Points,
    section::Section,
    settings::SectionSetting,
};
use knights_tests::spoof_salt;

/// Drives a small event end to end through the operation log, the way
/// a serializing backend replays writes.
#[test]
fn an_event_replays_as_an_operation_log() {
    let mut section = Section::new("Replayed Swiss".into());
    let ops = [
        SectionOp::UpdateSetting(SectionSetting::PlannedRounds(2)),
        SectionOp::RegisterPlayer {
            salt: spoof_salt(),
            name: "Alice".into(),
            rating: 1800,
            uscf_id: Some("12345678".into()),
        },
        SectionOp::RegisterPlayer {
            salt: spoof_salt(),
            name: "Bob".into(),
            rating: 1600,
            uscf_id: None,
        },
        SectionOp::Lock,
    ];
    for op in ops {
        section.apply_op(op).unwrap();
    }

    let round = section
        .apply_op(SectionOp::PairNextRound)
        .unwrap()
        .assume_pair_round();
    assert_eq!(round.number, 1);
    assert_eq!(round.pairings.len(), 1);

    section
        .apply_op(SectionOp::ApplyResult {
            round: 1,
            board: 1,
            result: "1-0".into(),
        })
        .unwrap()
        .assume_nothing();
    let white = round.pairings[0].white;
    assert_eq!(
        section.roster.get_player(&white).unwrap().score,
        Points::ONE
    );
}

#[test]
fn register_ops_return_the_new_id() {
    let mut section = Section::new("Replayed Swiss".into());
    let data = section
        .apply_op(SectionOp::RegisterPlayer {
            salt: spoof_salt(),
            name: "Alice".into(),
            rating: 1800,
            uscf_id: None,
        })
        .unwrap();
    assert!(!data.is_nothing());
    let id = data.assume_register_player();
    assert!(section.roster.is_registered(&id));

    // Replaying the same registration is a conflict, not a duplicate
    assert_eq!(
        section.apply_op(SectionOp::RegisterPlayer {
            salt: spoof_salt(),
            name: "Alice".into(),
            rating: 1800,
            uscf_id: None,
        }),
        Err(SectionError::PlayerAlreadyRegistered)
    );
}

#[test]
fn withdraw_ops_resolve_names() {
    let mut section = Section::new("Replayed Swiss".into());
    let id = section
        .apply_op(SectionOp::RegisterPlayer {
            salt: spoof_salt(),
            name: "Alice".into(),
            rating: 1800,
            uscf_id: None,
        })
        .unwrap()
        .assume_register_player();
    section
        .apply_op(SectionOp::WithdrawPlayer(PlayerIdentifier::Name(
            "Alice".into(),
        )))
        .unwrap();
    assert!(!section.roster.get_player(&id).unwrap().can_play());
}
