// SPDX-License-Identifier: MPL-2.0
//! Integration tests driving the controller with the simulated clock.
//!
//! These cover whole sessions: attach, clock notifications, scrubbing,
//! detach, and resume from a file-backed store on the next attach.

use playback_overlay::domain::playback::VolumeLevel;
use playback_overlay::player::events::{self, ClockNotifier};
use playback_overlay::player::{
    ClockEvent, FileStore, Gesture, HeadlessSurface, KeyValueStore, MediaClock, MemoryStore,
    PlaybackController, PlayerOptions, SimulatedClock, TimelineRegion,
};
use tempfile::tempdir;

type SimController<S> = PlaybackController<SimulatedClock, HeadlessSurface, S>;

fn attach<S: KeyValueStore>(
    identity: &str,
    duration: f64,
    store: S,
    autoplay: bool,
) -> (SimController<S>, ClockNotifier) {
    let (notifier, listener) = events::channel();
    let clock = SimulatedClock::new(duration, notifier.clone());
    let options = PlayerOptions::new("output.webm", identity).with_autoplay(autoplay);
    let controller =
        PlaybackController::attach(options, clock, HeadlessSurface::new(), store, listener);
    (controller, notifier)
}

fn play_for(controller: &mut SimController<impl KeyValueStore>, seconds: u32) {
    for _ in 0..seconds {
        controller.clock_mut().tick(1.0);
        controller.pump();
    }
}

#[test]
fn resume_round_trip_through_file_store() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let data_dir = temp_dir.path().to_path_buf();

    {
        let (store, _warning) = FileStore::open(Some(data_dir.clone())).expect("open store");
        let (mut controller, _notifier) = attach("v1", 120.0, store, true);
        controller.clock_mut().load();
        controller.pump();
        play_for(&mut controller, 42);
        controller.clock_mut().tick(0.5);
        controller.pump();

        assert_eq!(controller.state().current_time_text(), "0:42");
        controller.detach();
    }

    let (store, warning) = FileStore::open(Some(data_dir)).expect("reopen store");
    assert!(warning.is_none());
    assert_eq!(store.get("resume:v1").as_deref(), Some("42.5"));

    let (mut controller, _notifier) = attach("v1", 120.0, store, false);
    controller.clock_mut().load();
    controller.pump();

    assert!((controller.clock().current_time() - 42.5).abs() < f64::EPSILON);
    assert_eq!(controller.state().total_time_text(), "2:00");
    assert!(!controller.state().is_playing());
}

#[test]
fn corrupt_store_file_resumes_from_zero() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    std::fs::write(temp_dir.path().join("resume.cbor"), [0xa1, 0x69]).expect("write");

    let (store, warning) =
        FileStore::open(Some(temp_dir.path().to_path_buf())).expect("open store");
    assert!(warning.is_some());

    let (mut controller, _notifier) = attach("v1", 60.0, store, true);
    controller.clock_mut().load();
    controller.pump();
    assert!(controller.clock().current_time().abs() < f64::EPSILON);

    play_for(&mut controller, 3);
    controller.detach();

    let (store, warning) =
        FileStore::open(Some(temp_dir.path().to_path_buf())).expect("reopen store");
    assert!(warning.is_none());
    assert_eq!(store.get("resume:v1").as_deref(), Some("3"));
}

#[test]
fn autoplay_shows_in_first_rendered_view() {
    for autoplay in [false, true] {
        let (mut controller, _notifier) = attach("v1", 60.0, MemoryStore::new(), autoplay);
        controller.clock_mut().load();
        controller.pump();

        assert_eq!(controller.view().paused, !autoplay);
        assert_eq!(controller.clock().is_playing(), autoplay);
    }
}

#[test]
fn resume_is_scoped_to_identity() {
    let mut store = MemoryStore::new();
    store.set("resume:other", "30");

    let (mut controller, _notifier) = attach("v1", 60.0, store, false);
    controller.clock_mut().load();
    controller.pump();

    assert!(controller.clock().current_time().abs() < f64::EPSILON);
}

#[test]
fn playing_to_the_end_stops_and_keeps_position() {
    let (mut controller, _notifier) = attach("v1", 5.0, MemoryStore::new(), true);
    controller.clock_mut().load();
    controller.pump();

    play_for(&mut controller, 6);

    assert!(!controller.state().is_playing());
    assert!(controller.view().paused);
    assert_eq!(controller.state().current_time_text(), "0:05");
    assert!((controller.state().progress_position() - 1.0).abs() < f64::EPSILON);
    assert_eq!(controller.store().get("resume:v1").as_deref(), Some("5"));
}

#[test]
fn scrub_release_resumes_from_dropped_position() {
    let (mut controller, _notifier) = attach("v1", 100.0, MemoryStore::new(), true);
    controller.clock_mut().load();
    controller.pump();
    let region = TimelineRegion::new(10.0, 200.0);

    controller.dispatch(Gesture::TimelinePointerDown { x: 110.0, region });
    controller.pump();
    assert!(!controller.clock().is_playing());
    assert!(controller.state().is_scrubbing());
    assert_eq!(controller.state().current_time_text(), "0:50");

    controller.dispatch(Gesture::TimelinePointerMove { x: 60.0, region });
    let preview = controller.view().preview.expect("preview while scrubbing");
    assert_eq!(preview.index, 2);
    assert!(preview.path.ends_with("preview2.jpg"));

    controller.dispatch(Gesture::TimelinePointerUp);
    assert!(controller.clock().is_playing());
    assert!(controller.state().is_playing());
    assert!(controller.view().preview.is_none());

    play_for(&mut controller, 2);
    assert_eq!(controller.state().current_time_text(), "0:52");
}

#[test]
fn scrub_leave_stays_paused() {
    let (mut controller, _notifier) = attach("v1", 100.0, MemoryStore::new(), true);
    controller.clock_mut().load();
    controller.pump();
    let region = TimelineRegion::new(0.0, 100.0);

    controller.dispatch(Gesture::TimelinePointerDown { x: 30.0, region });
    controller.dispatch(Gesture::TimelinePointerLeave);
    controller.pump();

    assert!(!controller.state().is_scrubbing());
    assert!(!controller.state().is_playing());
    assert!(!controller.clock().is_playing());

    play_for(&mut controller, 3);
    assert_eq!(controller.state().current_time_text(), "0:30");
}

#[test]
fn rate_cycle_changes_clock_speed() {
    let (mut controller, _notifier) = attach("v1", 100.0, MemoryStore::new(), true);
    controller.clock_mut().load();
    controller.pump();

    controller.dispatch(Gesture::CyclePlaybackRate);
    controller.dispatch(Gesture::CyclePlaybackRate);
    assert_eq!(controller.view().rate_label, "2x");

    play_for(&mut controller, 3);
    assert_eq!(controller.state().current_time_text(), "0:06");
}

#[test]
fn mute_cycle_through_gestures() {
    let (mut controller, _notifier) = attach("v1", 100.0, MemoryStore::new(), false);

    controller.dispatch(Gesture::SetVolume(0.4));
    assert_eq!(controller.view().volume_level, VolumeLevel::Low);

    controller.dispatch(Gesture::ToggleMute);
    assert_eq!(controller.view().volume_level, VolumeLevel::Muted);
    assert!(controller.clock().muted());

    controller.dispatch(Gesture::ToggleMute);
    assert_eq!(controller.view().volume_level, VolumeLevel::Low);
    assert!((controller.view().volume - 0.4).abs() < f64::EPSILON);
}

#[test]
fn denied_fullscreen_keeps_flag() {
    let (notifier, listener) = events::channel();
    let clock = SimulatedClock::new(10.0, notifier);
    let mut controller = PlaybackController::attach(
        PlayerOptions::new("output.webm", "v1"),
        clock,
        HeadlessSurface::denying(),
        MemoryStore::new(),
        listener,
    );

    controller.dispatch(Gesture::ToggleFullScreen);
    assert!(!controller.view().full_screen);
}

#[test]
fn detached_controller_receives_nothing() {
    let (controller, notifier) = attach("v1", 10.0, MemoryStore::new(), false);
    let (mut clock, _surface, store) = controller.detach();

    clock.load();
    assert!(!notifier.notify(ClockEvent::TimeAdvanced));
    assert!(store.is_empty());
}
