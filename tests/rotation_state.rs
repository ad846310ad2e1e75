#![forbid(unsafe_code)]
use roulement::{RotationBlock, RotationCycle, RotationPosition, RotationState, Shift, Status};
use std::sync::Arc;

fn reference_cycle() -> Arc<RotationCycle> {
    Arc::new(RotationCycle::reference())
}

fn pos(cycle_index: usize, day_in_cycle: u32, shift: Shift, resting: bool) -> RotationPosition {
    RotationPosition {
        cycle_index,
        day_in_cycle,
        shift,
        resting,
    }
}

#[test]
fn advance_within_block_starts_rest_period() {
    // bloc 3 = 4-2 : le jour 5 est un jour de repos, pas de changement de bloc
    let mut s = RotationState::new(reference_cycle(), pos(3, 4, Shift::Afternoon, false)).unwrap();
    s.advance_one_day();
    assert_eq!(s.position(), pos(3, 5, Shift::Afternoon, true));
    assert_eq!(s.current_status(), (Status::Resting, None));

    s.advance_one_day();
    assert_eq!(s.position(), pos(3, 6, Shift::Afternoon, true));

    // fin du 4-2 : retour au bloc 0, turn imposé par la table
    s.advance_one_day();
    assert_eq!(s.position(), pos(0, 1, Shift::Afternoon, false));
    assert_eq!(s.current_status(), (Status::Working, Some(Shift::Afternoon)));
}

#[test]
fn shift_on_block_entry_follows_table_only() {
    let cycle = reference_cycle();
    // deux employés aux turns différents entrant dans le même bloc
    let mut a = RotationState::new(Arc::clone(&cycle), pos(0, 5, Shift::Morning, true)).unwrap();
    let mut b = RotationState::new(Arc::clone(&cycle), pos(0, 5, Shift::Afternoon, true)).unwrap();
    a.advance_one_day();
    b.advance_one_day();
    assert_eq!(a.cycle_index(), 1);
    assert_eq!(a.shift(), Shift::Morning);
    assert_eq!(b.shift(), Shift::Morning);
}

#[test]
fn shift_is_stable_within_a_block() {
    let mut s = RotationState::new(reference_cycle(), pos(2, 1, Shift::Morning, false)).unwrap();
    for _ in 0..4 {
        assert_eq!(s.shift(), Shift::Morning);
        s.advance_one_day();
    }
    assert_eq!(s.position(), pos(2, 5, Shift::Morning, true));
}

#[test]
fn full_traversal_returns_to_start() {
    let cycle = reference_cycle();
    assert_eq!(cycle.period(), 21);

    for start in [
        pos(3, 4, Shift::Morning, false),
        pos(2, 2, Shift::Afternoon, false),
        pos(0, 5, Shift::Afternoon, true),
    ] {
        let mut s = RotationState::new(Arc::clone(&cycle), start).unwrap();
        for _ in 0..cycle.period() {
            s.advance_one_day();
            let block = s.block();
            assert!(s.day_in_cycle() >= 1 && s.day_in_cycle() <= block.total());
            assert_eq!(s.is_resting(), s.day_in_cycle() > block.work_days);
        }
        assert_eq!(s.position(), start);
    }
}

#[test]
fn current_status_is_idempotent() {
    let s = RotationState::new(reference_cycle(), pos(1, 2, Shift::Morning, false)).unwrap();
    let first = s.current_status();
    assert_eq!(first, s.current_status());
    assert_eq!(first, (Status::Working, Some(Shift::Morning)));
    assert_eq!(s.cycle_label(), "3-2");
}

#[test]
fn single_block_cycle_wraps_onto_itself() {
    let cycle = Arc::new(
        RotationCycle::new(vec![RotationBlock::new(1, 1)], vec![Shift::Morning]).unwrap(),
    );
    let mut s = RotationState::new(cycle, pos(0, 2, Shift::Afternoon, true)).unwrap();
    s.advance_one_day();
    assert_eq!(s.position(), pos(0, 1, Shift::Morning, false));
}

#[test]
fn invalid_positions_are_configuration_errors() {
    let cycle = reference_cycle();
    let cases = [
        pos(4, 1, Shift::Morning, false),
        pos(0, 0, Shift::Morning, false),
        pos(0, 6, Shift::Morning, true),
        // jour 4 du 3-2 : repos, le drapeau contredit
        pos(0, 4, Shift::Morning, false),
        pos(0, 1, Shift::Morning, true),
    ];
    for start in cases {
        let err = RotationState::new(Arc::clone(&cycle), start).unwrap_err();
        assert!(err.is_configuration(), "{start:?} -> {err}");
    }
}

#[test]
fn cycle_validation() {
    let err = RotationCycle::new(vec![], vec![]).unwrap_err();
    assert!(err.is_configuration());

    let err = RotationCycle::new(vec![RotationBlock::new(0, 2)], vec![Shift::Morning]).unwrap_err();
    assert!(err.is_configuration());

    let err = RotationCycle::new(vec![RotationBlock::new(3, 0)], vec![Shift::Morning]).unwrap_err();
    assert!(err.is_configuration());

    let err = RotationCycle::new(
        vec![RotationBlock::new(3, 2), RotationBlock::new(4, 1)],
        vec![Shift::Morning],
    )
    .unwrap_err();
    assert!(err.to_string().contains("shift table"));
}

#[test]
fn cycle_deserialization_is_validated() {
    let ok: RotationCycle = serde_json::from_str(
        r#"{"blocks":[{"work_days":3,"rest_days":2}],"shifts":["tarde"]}"#,
    )
    .unwrap();
    assert_eq!(ok.shift_for(0), Shift::Afternoon);

    let bad = serde_json::from_str::<RotationCycle>(r#"{"blocks":[],"shifts":[]}"#);
    assert!(bad.is_err());
}

#[test]
fn oversized_blocks_are_rejected() {
    let err = RotationCycle::new(vec![RotationBlock::new(u32::MAX, 1)], vec![Shift::Morning])
        .unwrap_err();
    assert!(err.is_configuration());

    let err = RotationCycle::new(
        vec![
            RotationBlock::new(u32::MAX / 2, 1),
            RotationBlock::new(u32::MAX / 2, 1),
        ],
        vec![Shift::Morning, Shift::Afternoon],
    )
    .unwrap_err();
    assert!(err.to_string().contains("period overflows"));

    let bad = serde_json::from_str::<RotationCycle>(
        r#"{"blocks":[{"work_days":4294967295,"rest_days":1}],"shifts":["morning"]}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn state_exposes_its_cycle() {
    let s = RotationState::new(reference_cycle(), pos(2, 2, Shift::Afternoon, false)).unwrap();
    assert_eq!(s.cycle(), &RotationCycle::reference());
    assert_eq!(s.block(), RotationBlock::new(4, 1));
}
