use core::time::Duration;

use lifeduel_core::{
    BLINKER, Cell, ControlOutcome, Coord2, EndReason, MatchConfig, MatchEngine, MatchState, Mode,
    PerPlayer, Player, StepOutcome, ToggleOutcome,
};

fn place(engine: &mut MatchEngine, owner: Player, cells: &[Coord2]) {
    engine.set_brush(owner);
    for &coords in cells {
        assert_eq!(
            engine.toggle_cell(coords, false).unwrap(),
            ToggleOutcome::Placed
        );
    }
}

#[test]
fn a_duel_runs_from_editing_to_a_winner_and_back() {
    let mut engine = MatchEngine::new(MatchConfig::new((10, 10)));

    // player one sets up a blinker, player two a doomed lone cell
    place(&mut engine, Player::One, &[(1, 1), (2, 1), (3, 1)]);
    place(&mut engine, Player::Two, &[(8, 8)]);

    engine.set_step_delay(Duration::from_millis(20));
    assert_eq!(engine.play(), ControlOutcome::Changed);
    assert_eq!(engine.state(), MatchState::Running);

    // drive the loop with 10ms host frames until the match ends
    let mut reports = Vec::new();
    for _ in 0..16 {
        if let StepOutcome::Advanced(report) = engine.advance(Duration::from_millis(10)) {
            reports.push(report);
        }
        if engine.is_finished() {
            break;
        }
    }

    assert_eq!(reports.len(), 1);
    let last = reports.last().unwrap();
    assert_eq!(last.generation, 1);
    assert_eq!(last.ended, Some(EndReason::Eliminated(Player::Two)));
    assert_eq!(last.ended.unwrap().winner(), Some(Player::One));
    assert_eq!(engine.scores(), PerPlayer::new(2, 0));
    assert!(engine.reveal_score());

    // terminal until cleared
    assert_eq!(engine.play(), ControlOutcome::NoChange);
    assert_eq!(engine.step(), StepOutcome::Idle);
    assert_eq!(engine.advance(Duration::from_secs(1)), StepOutcome::Idle);

    engine.clear_all();
    assert_eq!(engine.state(), MatchState::Editing);
    assert_eq!(engine.generation(), 0);
    assert_eq!(engine.scores(), PerPlayer::new(0, 0));
    assert_eq!(engine.play(), ControlOutcome::Changed);
}

#[test]
fn a_blinker_oscillates_for_many_generations() {
    let mut engine = MatchEngine::new(MatchConfig::new((5, 5)));
    engine.toggle_mode();
    assert_eq!(engine.mode(), Mode::Single);

    engine.stamp_pattern(BLINKER, (1, 0)).unwrap();
    let horizontal = engine.board().clone();

    engine.step();
    assert_ne!(engine.board(), &horizontal);

    for _ in 0..9 {
        engine.step();
    }

    assert_eq!(engine.generation(), 10);
    assert_eq!(engine.board(), &horizontal);
    assert_eq!(engine.population(), PerPlayer::new(3, 0));
    assert_eq!(engine.scores(), PerPlayer::new(20, 0));
}

#[test]
fn pausing_freezes_the_loop_and_resuming_waits_a_full_delay() {
    let mut engine = MatchEngine::new(MatchConfig::new((8, 8)));
    engine.toggle_mode();
    engine.stamp_pattern(BLINKER, (2, 2)).unwrap();
    engine.set_step_delay(Duration::from_millis(40));

    engine.play();
    assert!(engine.advance(Duration::from_millis(40)).has_update());
    let paused_position = engine.board().clone();

    engine.pause();
    for _ in 0..8 {
        assert_eq!(engine.advance(Duration::from_millis(40)), StepOutcome::Idle);
    }
    assert_eq!(engine.board(), &paused_position);
    assert_eq!(engine.generation(), 1);

    engine.play();
    assert_eq!(engine.advance(Duration::from_millis(39)), StepOutcome::Idle);
    assert!(engine.advance(Duration::from_millis(1)).has_update());
    assert_eq!(engine.generation(), 2);
}

#[test]
fn edits_are_blocked_while_running_and_allowed_while_paused() {
    let mut engine = MatchEngine::new(MatchConfig::new((8, 8)));
    place(&mut engine, Player::One, &[(1, 1), (2, 1), (3, 1)]);
    place(&mut engine, Player::Two, &[(5, 5), (6, 5), (5, 6), (6, 6)]);

    engine.play();
    assert_eq!(
        engine.toggle_cell((0, 0), false).unwrap(),
        ToggleOutcome::NoChange
    );

    engine.pause();
    assert_eq!(
        engine.toggle_cell((0, 0), false).unwrap(),
        ToggleOutcome::Placed
    );
    assert_eq!(engine.cell_at((0, 0)).unwrap(), Cell::Alive(Player::Two));
}

#[test]
fn a_paused_match_survives_a_serde_round_trip() {
    let mut engine = MatchEngine::new(MatchConfig::new((8, 8)));
    place(&mut engine, Player::One, &[(1, 1), (2, 1), (3, 1)]);
    place(&mut engine, Player::Two, &[(5, 5), (6, 5), (5, 6), (6, 6)]);
    engine.set_step_delay(Duration::from_millis(250));
    engine.play();
    engine.pause();

    let json = serde_json::to_string(&engine).unwrap();
    let restored: MatchEngine = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.state(), MatchState::Paused);
    assert_eq!(restored.board(), engine.board());
    assert_eq!(restored.mode(), engine.mode());
    assert_eq!(restored.scores(), engine.scores());
    assert_eq!(restored.step_delay(), Duration::from_millis(250));
}
