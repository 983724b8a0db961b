//! End-to-end tests for PlayerController
//!
//! Drive the controller the way a page does: user gestures interleaved with
//! engine callbacks, with a mock engine recording every command it receives.

use std::cell::RefCell;
use std::rc::Rc;
use tubedeck_playback::{
    EngineParams, PlaybackEngine, PlaybackError, PlayerConfig, PlayerController, PlayerEvent,
    SeekState, TrackId,
};

// ===== Test Helpers =====

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Load(String),
    Apply(EngineParams),
    Seek(f64),
}

/// Mock engine for testing
///
/// Shares its command log with the test through an `Rc`.
#[derive(Default)]
struct MockEngine {
    log: Rc<RefCell<Vec<Command>>>,
    unavailable: Vec<String>,
}

impl PlaybackEngine for MockEngine {
    fn load(&mut self, url: &str) -> tubedeck_playback::Result<()> {
        self.log.borrow_mut().push(Command::Load(url.to_string()));
        let unavailable = self.unavailable.iter().any(|id| {
            url.strip_suffix(id.as_str())
                .is_some_and(|rest| rest.ends_with('='))
        });
        if unavailable {
            return Err(PlaybackError::engine("Video unavailable"));
        }
        Ok(())
    }

    fn apply(&mut self, params: &EngineParams) -> tubedeck_playback::Result<()> {
        self.log.borrow_mut().push(Command::Apply(params.clone()));
        Ok(())
    }

    fn seek_to_fraction(&mut self, fraction: f64) -> tubedeck_playback::Result<()> {
        self.log.borrow_mut().push(Command::Seek(fraction));
        Ok(())
    }
}

const REFERENCE_IDS: [&str; 5] = [
    "jKty-A4h1Qk",
    "paFtGQ22YlE",
    "o_DpuiJq9bc",
    "845By_LKvU8",
    "eQOaZPnMmoE",
];

fn reference_tracks() -> Vec<TrackId> {
    REFERENCE_IDS.iter().map(|id| TrackId::from(*id)).collect()
}

fn player_with_engine(unavailable: &[&str]) -> (PlayerController, Rc<RefCell<Vec<Command>>>) {
    let engine = MockEngine {
        unavailable: unavailable.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    let log = Rc::clone(&engine.log);

    let mut player = PlayerController::new(reference_tracks(), PlayerConfig::default()).unwrap();
    player.set_engine(Box::new(engine));
    (player, log)
}

fn seek_commands(log: &Rc<RefCell<Vec<Command>>>) -> Vec<f64> {
    log.borrow()
        .iter()
        .filter_map(|c| match c {
            Command::Seek(f) => Some(*f),
            _ => None,
        })
        .collect()
}

fn last_params(log: &Rc<RefCell<Vec<Command>>>) -> EngineParams {
    log.borrow()
        .iter()
        .rev()
        .find_map(|c| match c {
            Command::Apply(p) => Some(p.clone()),
            _ => None,
        })
        .expect("engine never received parameters")
}

// ===== Navigation =====

#[test]
fn test_reference_navigation_scenario() {
    let (mut player, _) = player_with_engine(&[]);
    assert_eq!(player.current_index(), 0);

    for _ in 0..3 {
        player.next();
    }
    assert_eq!(player.current_index(), 3);

    // 3 -> 2 -> 1 -> 0 -> 4
    for _ in 0..4 {
        player.previous();
    }
    assert_eq!(player.current_index(), 4);
    assert_eq!(player.current_track().as_str(), "eQOaZPnMmoE");
}

#[test]
fn test_every_track_change_loads_and_pauses() {
    let (mut player, log) = player_with_engine(&[]);

    for expected in REFERENCE_IDS.iter().cycle().skip(1).take(6) {
        player.play();
        assert!(player.is_playing());

        player.next();
        assert!(!player.is_playing());
        assert_eq!(player.current_track().as_str(), *expected);

        let params = last_params(&log);
        assert!(!params.playing);
        assert_eq!(params.url, format!("https://www.youtube.com/watch?v={}", expected));
    }
}

// ===== Full Listening Session =====

#[test]
fn test_listen_scrub_and_skip() {
    let (mut player, log) = player_with_engine(&[]);

    // User presses play, engine starts reporting
    assert!(player.toggle_play_pause());
    assert!(last_params(&log).playing);
    player.on_duration_reported(245.0).unwrap();
    for i in 1..=10 {
        player.on_progress_reported(i as f64 * 0.01).unwrap();
    }
    assert_eq!(player.time_display().to_string(), "0:24 / 4:05");

    // User drags the scrub control while reports keep arriving
    player.begin_seek();
    assert_eq!(player.seek_state(), SeekState::Seeking);
    for (i, preview) in [0.3, 0.45, 0.6].iter().enumerate() {
        player.update_seek_preview(*preview).unwrap();
        player.on_progress_reported(0.11 + i as f64 * 0.01).unwrap();
        assert_eq!(player.seek_value(), *preview);
    }
    assert!((player.progress() - 0.10).abs() < 1e-9);
    assert!(seek_commands(&log).is_empty());

    // Release
    assert_eq!(player.commit_seek().unwrap(), 0.6);
    assert_eq!(seek_commands(&log), vec![0.6]);

    // Engine catches up
    player.on_progress_reported(0.6).unwrap();
    assert_eq!(player.time_display().to_string(), "2:27 / 4:05");

    // Skip: paused, timing cleared until the engine reports again
    player.next();
    assert!(!player.is_playing());
    assert_eq!(player.time_display().to_string(), "0:00 / 0:00");
    assert_eq!(player.seek_value(), 0.0);
}

#[test]
fn test_commit_sends_exactly_one_seek_per_gesture() {
    let (mut player, log) = player_with_engine(&[]);
    player.on_duration_reported(100.0).unwrap();

    for target in [0.1, 0.9, 0.5] {
        player.begin_seek();
        player.update_seek_preview(target).unwrap();
        player.commit_seek().unwrap();
    }

    assert_eq!(seek_commands(&log), vec![0.1, 0.9, 0.5]);

    // A stray commit after the gesture ended sends nothing
    assert!(matches!(player.commit_seek(), Err(PlaybackError::NotSeeking)));
    assert_eq!(seek_commands(&log).len(), 3);
}

// ===== Volume =====

#[test]
fn test_mute_round_trip_through_engine() {
    let (mut player, log) = player_with_engine(&[]);
    player.set_volume(0.42).unwrap();

    assert!(player.toggle_mute());
    let params = last_params(&log);
    assert!(params.muted);
    assert_eq!(params.volume, 0.42);
    assert_eq!(player.volume_slider_value(), 0.0);

    assert!(!player.toggle_mute());
    assert_eq!(player.volume(), 0.42);
    assert_eq!(player.volume_slider_value(), 0.42);
}

#[test]
fn test_dragging_volume_unmutes() {
    let (mut player, log) = player_with_engine(&[]);
    player.toggle_mute();
    player.set_volume(0.1).unwrap();

    assert!(!player.is_muted());
    assert!(!last_params(&log).muted);
}

#[test]
fn test_volume_survives_track_changes() {
    let (mut player, log) = player_with_engine(&[]);
    player.set_volume(0.25).unwrap();
    player.toggle_mute();

    player.next();
    player.previous();

    let params = last_params(&log);
    assert_eq!(params.volume, 0.25);
    assert!(params.muted);
}

// ===== Load Failures =====

#[test]
fn test_unavailable_id_does_not_block_longer_ids() {
    // "LKvU8" is a tail of "845By_LKvU8", not the same track
    let (mut player, _) = player_with_engine(&["LKvU8"]);

    player.select(3).unwrap();
    assert!(player.load_error().is_none());
    assert!(player.toggle_play_pause());
}

#[test]
fn test_unavailable_track_is_non_fatal() {
    let (mut player, _) = player_with_engine(&["paFtGQ22YlE"]);
    player.play();
    player.drain_events();

    player.next();
    assert!(matches!(
        player.load_error(),
        Some(PlaybackError::EngineLoadFailure { track_id, .. }) if track_id == "paFtGQ22YlE"
    ));
    assert!(!player.toggle_play_pause());

    let events = player.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::Error { message } if message.contains("Video unavailable"))));

    // The next track plays normally
    player.next();
    assert!(player.load_error().is_none());
    assert!(player.toggle_play_pause());
}

// ===== Events =====

#[test]
fn test_event_stream_for_session() {
    let (mut player, _) = player_with_engine(&[]);
    player.drain_events();

    player.toggle_play_pause();
    player.on_duration_reported(60.0).unwrap();
    player.seek_to(0.5).unwrap();
    player.set_volume(0.5).unwrap();
    player.next();

    let events = player.drain_events();
    assert_eq!(
        events,
        vec![
            PlayerEvent::StateChanged { playing: true },
            PlayerEvent::DurationChanged { duration_secs: 60.0 },
            PlayerEvent::SeekStarted,
            PlayerEvent::SeekDispatched {
                fraction: 0.5,
                position_secs: 30.0,
            },
            PlayerEvent::VolumeChanged {
                level: 0.5,
                is_muted: false,
            },
            PlayerEvent::TrackChanged {
                index: 1,
                track_id: "paFtGQ22YlE".to_string(),
                previous_track_id: "jKty-A4h1Qk".to_string(),
            },
            PlayerEvent::StateChanged { playing: false },
        ]
    );
    assert!(!player.has_pending_events());
}
