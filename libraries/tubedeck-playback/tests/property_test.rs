//! Property-based tests for the player controller
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use tubedeck_playback::{format_time, PlayerConfig, PlayerController, SeekState, TrackId};

// ===== Helpers =====

fn arbitrary_tracks() -> impl Strategy<Value = Vec<TrackId>> {
    prop::collection::vec("[A-Za-z0-9_-]{11}", 1..30)
        .prop_map(|ids| ids.into_iter().map(TrackId::from).collect())
}

/// Random user/engine interaction
#[derive(Debug, Clone)]
enum Action {
    Next,
    Previous,
    TogglePlay,
    Progress(f64),
    Duration(f64),
    BeginSeek,
    Preview(f64),
    CommitSeek,
    Volume(f32),
    ToggleMute,
}

fn arbitrary_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Previous),
        Just(Action::TogglePlay),
        (0.0f64..=1.0).prop_map(Action::Progress),
        (0.0f64..7200.0).prop_map(Action::Duration),
        Just(Action::BeginSeek),
        (-0.5f64..1.5).prop_map(Action::Preview),
        Just(Action::CommitSeek),
        (0.0f32..=1.0).prop_map(Action::Volume),
        Just(Action::ToggleMute),
    ]
}

fn apply(player: &mut PlayerController, action: &Action) {
    match action {
        Action::Next => {
            player.next();
        }
        Action::Previous => {
            player.previous();
        }
        Action::TogglePlay => {
            player.toggle_play_pause();
        }
        Action::Progress(f) => player.on_progress_reported(*f).unwrap(),
        Action::Duration(d) => player.on_duration_reported(*d).unwrap(),
        Action::BeginSeek => player.begin_seek(),
        Action::Preview(f) => player.update_seek_preview(*f).unwrap(),
        Action::CommitSeek => {
            player.commit_seek().ok();
        }
        Action::Volume(v) => player.set_volume(*v).unwrap(),
        Action::ToggleMute => {
            player.toggle_mute();
        }
    }
}

fn player(tracks: Vec<TrackId>) -> PlayerController {
    PlayerController::new(tracks, PlayerConfig::default()).unwrap()
}

// ===== Property Tests =====

proptest! {
    /// Property: N calls to next() return to the starting track
    #[test]
    fn next_wraparound_closure(tracks in arbitrary_tracks(), start in 0usize..30) {
        let len = tracks.len();
        let mut player = player(tracks);
        player.select(start % len).unwrap();
        let origin = player.current_index();

        for _ in 0..len {
            player.next();
        }

        prop_assert_eq!(player.current_index(), origin);
    }

    /// Property: previous() from the first track lands on the last
    #[test]
    fn previous_from_first_is_last(tracks in arbitrary_tracks()) {
        let len = tracks.len();
        let mut player = player(tracks);

        player.previous();
        prop_assert_eq!(player.current_index(), len - 1);
    }

    /// Property: next() then previous() is the identity
    #[test]
    fn next_previous_inverse(tracks in arbitrary_tracks(), steps in 0usize..50) {
        let mut player = player(tracks);
        for _ in 0..steps {
            player.next();
        }
        let index = player.current_index();

        player.next();
        player.previous();
        prop_assert_eq!(player.current_index(), index);
    }

    /// Property: any navigation leaves the player paused
    #[test]
    fn navigation_always_pauses(
        tracks in arbitrary_tracks(),
        actions in prop::collection::vec(arbitrary_action(), 0..30),
        navigation in 0u8..3,
        offset in any::<prop::sample::Index>()
    ) {
        let len = tracks.len();
        let mut player = player(tracks);
        for action in &actions {
            apply(&mut player, action);
        }

        match navigation {
            0 => {
                player.next();
            }
            1 => {
                player.previous();
            }
            // Selecting the current track is a no-op, so pick another one
            _ if len > 1 => {
                let target = (player.current_index() + 1 + offset.index(len - 1)) % len;
                player.select(target).unwrap();
                prop_assert_eq!(player.current_index(), target);
            }
            _ => {
                player.next();
            }
        }

        prop_assert!(!player.is_playing());
        prop_assert_eq!(player.seek_state(), SeekState::Idle);
    }

    /// Property: progress reports never move the scrub position mid-gesture
    #[test]
    fn reports_suppressed_while_seeking(
        initial in 0.0f64..=1.0,
        preview in 0.0f64..=1.0,
        reports in prop::collection::vec(0.0f64..=1.0, 1..50)
    ) {
        let mut player = player(vec![TrackId::from("a")]);
        player.on_progress_reported(initial).unwrap();

        player.begin_seek();
        player.update_seek_preview(preview).unwrap();
        for report in reports {
            player.on_progress_reported(report).unwrap();
        }

        prop_assert_eq!(player.progress(), initial);
        prop_assert_eq!(player.seek_value(), preview);
        prop_assert_eq!(player.commit_seek().unwrap(), preview);
    }

    /// Property: setting the volume always unmutes
    #[test]
    fn set_volume_clears_mute(level in 0.0f32..=1.0, toggles in 0usize..5) {
        let mut player = player(vec![TrackId::from("a")]);
        for _ in 0..toggles {
            player.toggle_mute();
        }

        player.set_volume(level).unwrap();
        prop_assert!(!player.is_muted());
        prop_assert_eq!(player.volume(), level);
    }

    /// Property: mute never changes the stored volume
    #[test]
    fn toggle_mute_preserves_volume(level in 0.0f32..=1.0) {
        let mut player = player(vec![TrackId::from("a")]);
        player.set_volume(level).unwrap();

        player.toggle_mute();
        prop_assert_eq!(player.volume(), level);
        player.toggle_mute();
        prop_assert_eq!(player.volume(), level);
        prop_assert!(!player.is_muted());
    }

    /// Property: positions and volume stay in range under random use
    #[test]
    fn state_stays_in_range(
        tracks in arbitrary_tracks(),
        actions in prop::collection::vec(arbitrary_action(), 1..100)
    ) {
        let mut player = player(tracks);
        for action in &actions {
            apply(&mut player, action);

            prop_assert!(player.current_index() < player.playlist().len());
            prop_assert!((0.0..=1.0).contains(&player.progress()));
            prop_assert!((0.0..=1.0).contains(&player.seek_value()));
            prop_assert!((0.0..=1.0).contains(&player.volume()));
            prop_assert!(player.duration() >= 0.0);
        }
    }

    /// Property: formatted time always has two-digit seconds below 60
    #[test]
    fn format_time_shape(seconds in 0.0f64..100_000.0) {
        let formatted = format_time(seconds);
        let (minutes, secs) = formatted.split_once(':').unwrap();

        prop_assert_eq!(secs.len(), 2);
        let secs: u64 = secs.parse().unwrap();
        let minutes: u64 = minutes.parse().unwrap();
        prop_assert!(secs < 60);
        prop_assert_eq!(minutes * 60 + secs, seconds.floor() as u64);
    }
}
