use hanoi_core::prelude::*;
use hanoi_prefs::DEFAULT_PREFS;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use strum::IntoEnumIterator;
use web_time::Duration;

use crate::*;

fn new_sim(n: i64, speed: Speed) -> HanoiSimulation {
    HanoiSimulation::new(DiskCount::new(n).unwrap(), speed, &DEFAULT_PREFS.animation)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Returns the tower after applying the first `count` moves.
fn replay(sim: &HanoiSimulation, count: usize) -> Tower {
    let mut tower = Tower::new(sim.disk_count());
    for &mv in &sim.moves()[..count] {
        tower.apply(mv).unwrap();
    }
    tower
}

fn phase(sim: &HanoiSimulation) -> Option<AnimPhase> {
    sim.animation().map(|anim| anim.phase())
}

#[test]
fn test_step_forward_phases() {
    let mut sim = new_sim(3, Speed::NORMAL);
    let first = sim.moves()[0];

    assert!(sim.step_forward());
    let anim = sim.animation().unwrap();
    assert_eq!(anim.logical_move(), first);
    assert_eq!(anim.visual_move(), first);
    assert_eq!(anim.direction(), StepDirection::Forward);
    assert_eq!(phase(&sim), Some(AnimPhase::Lift));

    assert!(sim.advance(ms(199)));
    assert_eq!(phase(&sim), Some(AnimPhase::Lift));
    sim.advance(ms(1));
    assert_eq!(phase(&sim), Some(AnimPhase::Move));
    sim.advance(ms(300));
    assert_eq!(phase(&sim), Some(AnimPhase::Drop));
    sim.advance(ms(199));
    assert_eq!(phase(&sim), Some(AnimPhase::Drop));

    // The logical state is untouched until the drop completes.
    assert_eq!(sim.moves_applied(), 0);
    assert_eq!(*sim.tower(), Tower::new(sim.disk_count()));

    sim.advance(ms(1));
    assert_eq!(*sim.state(), PlaybackState::Idle);
    assert_eq!(sim.cursor(), Some(0));
    assert_eq!(sim.current_move(), Some(first));
    assert_eq!(sim.tower().top(Peg::C), Some(Disk(1)));

    // Nothing left to do.
    assert!(!sim.advance(ms(1000)));
}

#[test]
fn test_step_forward_then_backward_restores_state() {
    let mut sim = new_sim(4, Speed::NORMAL);
    let step = sim.step_duration();
    for _ in 0..5 {
        assert!(sim.step_forward());
        sim.advance(step);
    }
    let before = sim.tower().clone();
    let cursor = sim.cursor();

    assert!(sim.step_forward());
    sim.advance(step);
    assert_eq!(sim.moves_applied(), 6);

    assert!(sim.step_backward());
    let anim = sim.animation().unwrap();
    assert_eq!(anim.direction(), StepDirection::Backward);
    assert_eq!(anim.logical_move(), sim.moves()[5]);
    assert_eq!(anim.visual_move(), sim.moves()[5].rev());
    sim.advance(step);

    assert_eq!(sim.cursor(), cursor);
    assert_eq!(*sim.tower(), before);
}

#[test]
fn test_step_backward_at_start_rejected() {
    let mut sim = new_sim(3, Speed::NORMAL);
    assert!(!sim.can_step_backward());
    assert!(!sim.step_backward());
    assert_eq!(*sim.state(), PlaybackState::Idle);
}

#[test]
fn test_requests_rejected_during_animation() {
    let mut sim = new_sim(3, Speed::NORMAL);
    assert!(sim.step_forward());
    sim.advance(ms(250));
    let anim = sim.animation().unwrap().clone();

    assert!(!sim.can_step_forward());
    assert!(!sim.step_forward());
    assert!(!sim.step_backward());
    assert!(!sim.play());
    assert!(!sim.reset());
    assert!(!sim.is_playing());
    assert_eq!(sim.animation(), Some(&anim));

    sim.advance(ms(450));
    assert_eq!(sim.moves_applied(), 1);
}

#[test]
fn test_autoplay_runs_to_end_in_order() {
    let mut sim = new_sim(3, Speed::NORMAL);
    assert!(sim.play());
    assert!(sim.is_playing());
    assert!(matches!(sim.state(), PlaybackState::Waiting(_)));

    let mut applied_history = vec![];
    let mut elapsed = Duration::ZERO;
    while sim.is_playing() {
        sim.advance(ms(10));
        elapsed += ms(10);
        assert!(elapsed < ms(60_000), "auto-play never finished");

        let applied = sim.moves_applied();
        if applied_history.last() != Some(&applied) && applied > 0 {
            applied_history.push(applied);
            assert_eq!(*sim.tower(), replay(&sim, applied));
        }
    }

    assert_eq!(applied_history, (1..=7).collect::<Vec<_>>());
    // Each move waits 500ms, then animates for 700ms.
    assert_eq!(elapsed, ms(7 * 1200));
    assert_eq!(sim.cursor(), Some(6));
    assert!(sim.tower().is_complete_on(Peg::C));
    assert_eq!(*sim.state(), PlaybackState::Idle);
}

#[test]
fn test_autoplay_carries_leftover_time() {
    let mut sim = new_sim(3, Speed::NORMAL);
    sim.play();
    sim.advance(ms(8399));
    assert!(sim.is_playing());
    assert_eq!(sim.moves_applied(), 6);
    assert_eq!(phase(&sim), Some(AnimPhase::Drop));

    sim.advance(ms(1));
    assert!(!sim.is_playing());
    assert!(sim.is_finished());
}

#[test]
fn test_play_at_end_rejected() {
    let mut sim = new_sim(1, Speed::NORMAL);
    assert!(sim.step_forward());
    sim.advance(sim.step_duration());
    assert!(sim.is_finished());

    assert!(!sim.play());
    assert!(!sim.is_playing());
    assert!(!sim.toggle_playing());
    assert_eq!(*sim.state(), PlaybackState::Idle);
}

#[test]
fn test_pause_cancels_wait() {
    let mut sim = new_sim(3, Speed::NORMAL);
    sim.play();
    sim.advance(ms(300));
    sim.pause();
    assert!(!sim.is_playing());
    assert_eq!(*sim.state(), PlaybackState::Idle);

    assert!(!sim.advance(ms(10_000)));
    assert_eq!(sim.moves_applied(), 0);
}

#[test]
fn test_pause_lets_animation_finish() {
    let mut sim = new_sim(3, Speed::NORMAL);
    sim.play();
    sim.advance(ms(600));
    assert_eq!(phase(&sim), Some(AnimPhase::Lift));

    sim.pause();
    assert!(!sim.is_playing());
    assert!(sim.is_animating());

    sim.advance(ms(600));
    assert_eq!(sim.moves_applied(), 1);
    assert_eq!(*sim.state(), PlaybackState::Idle);

    sim.advance(ms(10_000));
    assert_eq!(sim.moves_applied(), 1);
}

#[test]
fn test_toggle_playing() {
    let mut sim = new_sim(3, Speed::NORMAL);
    assert!(sim.toggle_playing());
    assert!(sim.is_playing());
    assert!(sim.toggle_playing());
    assert!(!sim.is_playing());
}

#[test]
fn test_manual_step_replaces_wait() {
    let mut sim = new_sim(3, Speed::NORMAL);
    sim.play();
    sim.advance(ms(100));
    assert!(sim.step_forward());
    assert!(sim.is_playing());

    sim.advance(ms(700));
    assert_eq!(sim.moves_applied(), 1);
    // Auto-play schedules the next move with a fresh delay.
    match sim.state() {
        PlaybackState::Waiting(timer) => assert_eq!(timer.remaining(), ms(500)),
        other => panic!("expected auto-play wait, got {other:?}"),
    }
}

#[test]
fn test_fast_speed_durations() {
    let mut sim = new_sim(3, Speed::from_multiplier(4.0).unwrap());
    assert_eq!(sim.speed(), Speed::MAX);
    assert_eq!(sim.phase_duration(AnimPhase::Lift), ms(50));
    assert_eq!(sim.phase_duration(AnimPhase::Move), ms(75));
    assert_eq!(sim.phase_duration(AnimPhase::Drop), ms(50));
    assert_eq!(sim.autoplay_delay(), ms(125));
    assert_eq!(sim.step_duration(), ms(175));

    // Speed affects timing only, never the moves.
    assert_eq!(sim.moves(), new_sim(3, Speed::NORMAL).moves());

    sim.play();
    sim.advance(ms(7 * 300));
    assert!(sim.is_finished());
    assert!(!sim.is_playing());
}

#[test]
fn test_speed_change_does_not_affect_running_timer() {
    let mut sim = new_sim(3, Speed::NORMAL);
    sim.step_forward();
    sim.advance(ms(100));
    sim.set_speed(Speed::MAX);

    sim.advance(ms(99));
    assert_eq!(phase(&sim), Some(AnimPhase::Lift));
    sim.advance(ms(1));
    assert_eq!(phase(&sim), Some(AnimPhase::Move));
    assert_eq!(sim.animation().unwrap().timer().duration(), ms(75));
}

#[test]
fn test_reset() {
    let mut sim = new_sim(3, Speed::NORMAL);
    sim.step_forward();
    sim.advance(ms(700));
    sim.step_forward();
    sim.advance(ms(100));
    assert!(!sim.reset());

    sim.advance(ms(600));
    sim.play();
    assert!(sim.reset());
    assert!(!sim.is_playing());
    assert_eq!(sim.cursor(), None);
    assert_eq!(*sim.tower(), Tower::new(sim.disk_count()));
    assert_eq!(*sim.state(), PlaybackState::Idle);
    assert_eq!(sim.moves().len(), 7);
}

#[test]
fn test_move_description() {
    let mut sim = new_sim(3, Speed::NORMAL);
    assert_eq!(sim.move_description(), "Ready to start");
    assert_eq!(sim.next_move(), Some(sim.moves()[0]));
    sim.step_forward();
    sim.advance(ms(700));
    assert_eq!(sim.move_description(), "Move 1: from A → C");
    sim.step_forward();
    sim.advance(ms(700));
    assert_eq!(sim.move_description(), "Move 2: from A → B");
}

#[test]
fn test_speed() {
    assert_eq!(Speed::from_multiplier(0.25), Ok(Speed::MIN));
    assert_eq!(Speed::from_multiplier(1.0), Ok(Speed::NORMAL));
    assert_eq!(Speed::from_multiplier(1.1), Ok(Speed::NORMAL));
    assert_eq!(Speed::from_multiplier(4.0), Ok(Speed::MAX));
    assert!(Speed::from_multiplier(0.1).is_err());
    assert!(Speed::from_multiplier(4.5).is_err());
    assert!(Speed::from_multiplier(f32::NAN).is_err());
    assert!(Speed::from_multiplier(f32::INFINITY).is_err());

    assert_eq!(Speed::default(), Speed::NORMAL);
    assert_eq!(Speed::MIN.to_string(), "0.25x");
    assert_eq!(Speed::NORMAL.to_string(), "1x");
    assert_eq!(Speed::from_multiplier(2.5).unwrap().multiplier(), 2.5);

    assert_eq!(Speed::MIN.scale(ms(200)), ms(800));
    assert_eq!(Speed::from_multiplier(0.75).unwrap().scale(ms(300)), ms(400));
}

#[test]
fn test_timer() {
    let mut timer = Timer::new(ms(100));
    assert_eq!(timer.advance(ms(40)), None);
    assert_eq!(timer.remaining(), ms(60));
    assert!((timer.progress() - 0.4).abs() < 1e-6);
    assert_eq!(timer.advance(ms(75)), Some(ms(15)));
    assert_eq!(timer.progress(), 1.0);

    assert_eq!(Timer::new(Duration::ZERO).advance(Duration::ZERO), Some(Duration::ZERO));
}

#[test]
fn test_view_invalid_input_keeps_puzzle() {
    let mut view = HanoiView::with_puzzle(&DEFAULT_PREFS);
    assert_eq!(view.disk_count_input, "3");
    assert!(view.do_action(PlaybackAction::StepForward));
    view.sim.as_mut().unwrap().advance(ms(700));

    for input in ["0", "13", "abc", "", "2.5"] {
        view.disk_count_input = input.to_owned();
        assert!(!view.controls().generate);
        assert_eq!(
            view.input_error().as_deref(),
            Some("Please enter a number between 1 and 12"),
        );
        assert!(view.generate().is_err());

        let sim = view.sim.as_ref().unwrap();
        assert_eq!(sim.disk_count().get(), 3);
        assert_eq!(sim.moves_applied(), 1);
    }

    view.disk_count_input = " 5 ".to_owned();
    assert_eq!(view.input_error(), None);
    assert_eq!(view.generate(), Ok(DiskCount::new(5).unwrap()));
    let sim = view.sim.as_ref().unwrap();
    assert_eq!(sim.moves().len(), 31);
    assert_eq!(sim.cursor(), None);
}

#[test]
fn test_view_generate_discards_playback() {
    let mut view = HanoiView::with_puzzle(&DEFAULT_PREFS);
    view.do_action(PlaybackAction::TogglePlay);
    view.sim.as_mut().unwrap().advance(ms(800));
    assert!(view.sim.as_ref().unwrap().is_animating());

    view.disk_count_input = "4".to_owned();
    view.generate().unwrap();
    let sim = view.sim.as_ref().unwrap();
    assert!(!sim.is_playing());
    assert!(!sim.is_animating());
    assert_eq!(sim.moves_applied(), 0);
}

#[test]
fn test_view_speed_persists_across_puzzles() {
    let mut view = HanoiView::with_puzzle(&DEFAULT_PREFS);
    view.set_speed(Speed::MAX);
    assert_eq!(view.sim.as_ref().unwrap().speed(), Speed::MAX);

    view.disk_count_input = "4".to_owned();
    view.generate().unwrap();
    assert_eq!(view.sim.as_ref().unwrap().speed(), Speed::MAX);
}

#[test]
fn test_view_controls() {
    let mut view = HanoiView::new(&DEFAULT_PREFS);
    assert_eq!(
        view.controls(),
        Controls {
            generate: true,
            ..Default::default()
        },
    );
    for action in PlaybackAction::iter() {
        assert!(!view.do_action(action));
    }

    view.generate().unwrap();
    assert_eq!(
        view.controls(),
        Controls {
            generate: true,
            play_pause: true,
            step_backward: false,
            step_forward: true,
            reset: true,
        },
    );

    // Animating
    view.do_action(PlaybackAction::StepForward);
    assert_eq!(
        view.controls(),
        Controls {
            generate: true,
            ..Default::default()
        },
    );
    assert!(!view.do_action(PlaybackAction::Reset));

    // Playing, between moves
    view.sim.as_mut().unwrap().advance(ms(700));
    assert!(view.do_action(PlaybackAction::TogglePlay));
    assert_eq!(
        view.controls(),
        Controls {
            generate: true,
            play_pause: true,
            step_backward: false,
            step_forward: false,
            reset: true,
        },
    );
    assert!(!view.do_action(PlaybackAction::StepForward));
    assert!(view.do_action(PlaybackAction::TogglePlay));
    assert!(!view.sim.as_ref().unwrap().is_playing());

    // Finished
    view.sim.as_mut().unwrap().play();
    view.sim.as_mut().unwrap().advance(ms(60_000));
    let controls = view.controls();
    assert!(controls.step_backward);
    assert!(!controls.step_forward);
}

#[derive(Debug, Clone)]
enum Op {
    Action(PlaybackAction),
    Play,
    Pause,
    SetSpeed(Speed),
    Advance(Duration),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::sample::select(PlaybackAction::iter().collect::<Vec<_>>()).prop_map(Op::Action),
        Just(Op::Play),
        Just(Op::Pause),
        (0.25_f32..=4.0).prop_map(|m| Op::SetSpeed(Speed::from_multiplier(m).unwrap())),
        (0_u64..3000).prop_map(|millis| Op::Advance(ms(millis))),
    ]
}

proptest! {
    #[test]
    fn proptest_playback_consistency(n in 1_i64..=5, ops in prop::collection::vec(arbitrary_op(), 0..100)) {
        let mut sim = new_sim(n, Speed::NORMAL);
        let moves = sim.moves().to_vec();
        for op in ops {
            let was_animating = sim.is_animating();
            let before = (sim.moves_applied(), sim.animation().cloned());
            let accepted = match op {
                Op::Action(PlaybackAction::TogglePlay) => sim.toggle_playing(),
                Op::Action(PlaybackAction::StepBackward) => sim.step_backward(),
                Op::Action(PlaybackAction::StepForward) => sim.step_forward(),
                Op::Action(PlaybackAction::Reset) => sim.reset(),
                Op::Play => sim.play(),
                Op::Pause => {
                    sim.pause();
                    true
                }
                Op::SetSpeed(speed) => {
                    sim.set_speed(speed);
                    true
                }
                Op::Advance(delta) => {
                    sim.advance(delta);
                    true
                }
            };

            if was_animating && !accepted {
                // Rejected requests leave the animation untouched.
                assert_eq!((sim.moves_applied(), sim.animation().cloned()), before);
            }
            assert_eq!(sim.moves(), moves);
            assert!(sim.moves_applied() <= moves.len());
            assert!(sim.tower().is_valid());
            assert_eq!(*sim.tower(), replay(&sim, sim.moves_applied()));
            if sim.is_finished() && !sim.is_animating() {
                assert!(!sim.is_playing());
            }
        }
    }
}
