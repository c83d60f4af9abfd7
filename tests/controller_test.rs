use cup_match::core::{GameError, GameState};
use cup_match::engine::{Controller, RoundEvent};
use cup_match::types::{Color, GameCommand, Outcome, Phase};

fn controller() -> Controller<Vec<RoundEvent>> {
    let state = GameState::from_arrangements(
        &[Color::RED, Color::GREEN, Color::BLUE],
        &[Color::BLUE, Color::GREEN, Color::RED],
    )
    .unwrap();
    Controller::with_state(state, Vec::new())
}

fn kinds(events: &[RoundEvent]) -> Vec<&'static str> {
    events.iter().map(RoundEvent::kind).collect()
}

#[test]
fn test_full_round_notification_order() {
    let mut c = controller();
    c.dispatch(GameCommand::Check).unwrap();
    c.dispatch(GameCommand::Swap(0, 2)).unwrap();
    c.dispatch(GameCommand::Check).unwrap();

    assert_eq!(
        kinds(c.presenter()),
        vec![
            "roundStarted",
            "checkResult",
            "arrangementChanged",
            "checkResult",
            "roundEnded"
        ]
    );

    match c.presenter().last() {
        Some(RoundEvent::RoundEnded(result)) => {
            assert_eq!(result.outcome, Outcome::Won);
            // 3 * 20 + (6 - 2) * 10.
            assert_eq!(result.score, 100);
            assert_eq!(result.check_count, 2);
        }
        other => panic!("expected roundEnded, got {:?}", other),
    }
}

#[test]
fn test_round_started_hides_target() {
    let c = Controller::start(42, 6, Default::default(), Vec::new()).unwrap();
    match &c.presenter()[0] {
        RoundEvent::RoundStarted {
            round_id,
            item_count,
            player,
        } => {
            assert_eq!(*round_id, 1);
            assert_eq!(*item_count, 6);
            assert_eq!(player.as_slice(), c.state().player());
        }
        other => panic!("unexpected first event {:?}", other),
    }
    assert!(c.snapshot().target.is_none());
}

#[test]
fn test_rejections_leave_state_untouched() {
    let mut c = controller();
    let before = c.snapshot();

    let err = c.dispatch(GameCommand::Swap(1, 1)).unwrap_err();
    assert_eq!(err, GameError::InvalidIndex { i: 1, j: 1, len: 3 });
    assert!(c.dispatch(GameCommand::StartRound(11)).is_err());
    assert_eq!(c.snapshot(), before);

    let rejected = c
        .presenter()
        .iter()
        .filter(|e| matches!(e, RoundEvent::CommandRejected { .. }))
        .count();
    assert_eq!(rejected, 2);
}

#[test]
fn test_give_up_then_play_again() {
    let mut c = controller();
    c.dispatch(GameCommand::GiveUp).unwrap();
    assert_eq!(c.state().phase(), Phase::GaveUp);
    assert_eq!(c.snapshot().score, Some(0));

    let err = c.dispatch(GameCommand::Check).unwrap_err();
    assert!(matches!(err, GameError::InvalidPhase { phase: Phase::GaveUp, .. }));

    c.dispatch(GameCommand::StartRound(4)).unwrap();
    let snap = c.snapshot();
    assert_eq!(snap.phase, Phase::Playing);
    assert_eq!(snap.item_count, 4);
    assert_eq!(snap.check_count, 0);
    assert_eq!(snap.round_id, 2);
}
