use super::*;
use crate::catalog::{AlbumId, Quality, Track, TrackId};
use crate::player::{PlayerStore, RepeatMode};
use std::sync::mpsc;

fn t(id: &str, duration: u32) -> Track {
    Track {
        id: TrackId::new(id),
        title: id.to_uppercase(),
        artist: "Artist".into(),
        album: "Album".into(),
        album_id: AlbumId::new("album"),
        duration,
        quality: Quality::Mp3,
        artwork_url: String::new(),
        genre: None,
        year: None,
    }
}

fn store() -> PlayerStore {
    PlayerStore::new(vec![t("a", 3), t("b", 100)])
}

// Long enough that no real tick arrives during a test.
const IDLE_PERIOD: Duration = Duration::from_secs(3600);

#[test]
fn clock_ticks_advance_store_time() {
    let mut s = store();
    s.toggle_play();
    let mut clock = Clock::default();

    assert_eq!(clock.on_tick(&mut s), TickOutcome::Advanced(1));
    assert_eq!(clock.on_tick(&mut s), TickOutcome::Advanced(2));
    assert_eq!(s.current_time(), 2);
    assert_eq!(clock.local_time(), 2);
}

#[test]
fn clock_reaching_duration_advances_track() {
    let mut s = store();
    s.toggle_play();
    let mut clock = Clock::default();

    clock.on_tick(&mut s);
    clock.on_tick(&mut s);
    assert_eq!(clock.on_tick(&mut s), TickOutcome::TrackEnded);
    assert_eq!(s.current_track().map(|t| t.id.as_str()), Some("b"));
    assert_eq!(s.current_time(), 0);
    assert_eq!(clock.local_time(), 0);
}

#[test]
fn clock_at_queue_end_rewinds_in_place() {
    let mut s = PlayerStore::new(vec![t("a", 2)]);
    s.toggle_play();
    let mut clock = Clock::default();

    clock.on_tick(&mut s);
    assert_eq!(clock.on_tick(&mut s), TickOutcome::TrackEnded);
    assert_eq!(s.current_track().map(|t| t.id.as_str()), Some("a"));
    assert_eq!(s.current_time(), 0);
    assert!(s.is_playing());
}

#[test]
fn clock_wraps_queue_with_repeat_all() {
    let mut s = store().with_repeat_mode(RepeatMode::All);
    s.play_track(t("b", 1));
    let mut clock = Clock::default();

    assert_eq!(clock.on_tick(&mut s), TickOutcome::TrackEnded);
    assert_eq!(s.current_track().map(|t| t.id.as_str()), Some("a"));
}

#[test]
fn clock_is_idle_when_paused_seeking_or_empty() {
    let mut s = store();
    let mut clock = Clock::default();
    assert_eq!(clock.on_tick(&mut s), TickOutcome::Idle);

    s.toggle_play();
    clock.begin_seek();
    assert_eq!(clock.on_tick(&mut s), TickOutcome::Idle);
    assert_eq!(s.current_time(), 0);

    let mut empty = PlayerStore::new(Vec::new());
    empty.toggle_play();
    assert_eq!(Clock::default().on_tick(&mut empty), TickOutcome::Idle);
}

#[test]
fn seek_preview_clamps_and_commit_writes_store() {
    let mut s = store();
    s.play_track(t("b", 100));
    let mut clock = Clock::default();

    clock.begin_seek();
    clock.preview_seek(-10, 100);
    assert_eq!(clock.local_time(), 0);
    clock.preview_seek(250, 100);
    assert_eq!(clock.local_time(), 100);
    clock.preview_seek(-40, 100);

    // Store time is untouched until commit, and sync keeps the preview.
    clock.sync(&s);
    assert_eq!(s.current_time(), 0);
    assert_eq!(clock.local_time(), 60);

    clock.commit_seek(&mut s);
    assert!(!clock.is_seeking());
    assert_eq!(s.current_time(), 60);
}

#[test]
fn seek_cancel_restores_store_time() {
    let mut s = store();
    s.seek_to(7);
    let mut clock = Clock::default();
    clock.sync(&s);

    clock.begin_seek();
    clock.preview_seek(30, 100);
    clock.cancel_seek(&s);
    assert!(!clock.is_seeking());
    assert_eq!(clock.local_time(), 7);
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let token = CancelToken::new();
    let other = token.clone();
    assert!(!other.is_cancelled());
    token.cancel();
    assert!(other.is_cancelled());
}

#[test]
fn ticker_emits_ticks_until_cancelled() {
    let (tx, rx) = mpsc::channel();
    let ticker = Ticker::spawn(Duration::from_millis(5), 7, tx);

    let tick = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(tick, Tick { generation: 7 });

    ticker.cancel();
    assert!(ticker.is_cancelled());
    drop(ticker);

    // The thread exits after its current sleep and drops the sender.
    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    loop {
        match rx.recv_timeout(Duration::from_millis(50)) {
            Ok(_) => assert!(std::time::Instant::now() < deadline, "ticker kept running"),
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => {}
        }
    }
}

#[test]
fn transport_runs_ticker_only_while_playing() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();

    transport.reconcile(&s);
    assert!(!transport.is_ticking());

    s.toggle_play();
    transport.reconcile(&s);
    assert!(transport.is_ticking());
    let first = transport.generation();

    transport.reconcile(&s);
    assert_eq!(transport.generation(), first);

    s.toggle_play();
    transport.reconcile(&s);
    assert!(!transport.is_ticking());
}

#[test]
fn transport_restarts_ticker_on_track_change() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();

    s.toggle_play();
    transport.reconcile(&s);
    let first = transport.generation();

    s.next_track();
    transport.reconcile(&s);
    assert!(transport.is_ticking());
    assert!(transport.generation() > first);
}

#[test]
fn transport_drops_stale_ticks() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();

    s.toggle_play();
    transport.reconcile(&s);
    let old = Tick {
        generation: transport.generation(),
    };

    s.next_track();
    transport.reconcile(&s);
    assert_eq!(transport.handle_tick(old, &mut s), TickOutcome::Idle);
    assert_eq!(s.current_time(), 0);

    let live = Tick {
        generation: transport.generation(),
    };
    assert_eq!(transport.handle_tick(live, &mut s), TickOutcome::Advanced(1));
}

#[test]
fn transport_ignores_ticks_after_pause() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();

    s.toggle_play();
    transport.reconcile(&s);
    let tick = Tick {
        generation: transport.generation(),
    };

    s.toggle_play();
    transport.reconcile(&s);
    assert_eq!(transport.handle_tick(tick, &mut s), TickOutcome::Idle);
}

#[test]
fn transport_seek_suspends_ticker_and_play_track_clears_it() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();

    s.toggle_play();
    transport.reconcile(&s);
    transport.begin_seek(&s);
    assert!(transport.clock().is_seeking());
    assert!(!transport.is_ticking());

    transport.preview_seek(2, &s);
    transport.play_track(&mut s, t("b", 100));
    assert!(!transport.clock().is_seeking());
    assert!(transport.is_ticking());
    assert_eq!(transport.clock().local_time(), 0);
}

#[test]
fn transport_commit_seek_resumes_ticker() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();
    s.play_track(t("b", 100));
    transport.reconcile(&s);

    transport.begin_seek(&s);
    transport.preview_seek(42, &s);
    transport.commit_seek(&mut s);

    assert_eq!(s.current_time(), 42);
    assert!(transport.is_ticking());
}

#[test]
fn tick_after_unreconciled_next_does_not_skip_new_track() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = PlayerStore::new(vec![t("a", 200), t("b", 100), t("c", 100)]);
    s.toggle_play();
    s.seek_to(150);
    transport.reconcile(&s);
    let live = Tick {
        generation: transport.generation(),
    };

    // Remote Next lands before the ticker is restarted for "b".
    s.next_track();
    assert_eq!(transport.handle_tick(live, &mut s), TickOutcome::Idle);
    assert_eq!(s.current_track().map(|t| t.id.as_str()), Some("b"));
    assert_eq!(s.current_time(), 0);
}

#[test]
fn tick_after_unreconciled_restart_counts_from_zero() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();
    s.play_track(t("b", 100));
    s.seek_to(10);
    transport.reconcile(&s);
    let live = Tick {
        generation: transport.generation(),
    };

    s.previous_track();
    assert_eq!(s.current_time(), 0);
    assert_eq!(transport.handle_tick(live, &mut s), TickOutcome::Advanced(1));
    assert_eq!(s.current_time(), 1);
}

#[test]
fn track_change_abandons_seek_gesture() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = PlayerStore::new(vec![t("a", 200), t("b", 100)]);
    s.toggle_play();
    transport.reconcile(&s);

    transport.begin_seek(&s);
    transport.preview_seek(60, &s);
    s.next_track();
    transport.reconcile(&s);

    assert!(!transport.clock().is_seeking());
    assert!(transport.is_ticking());
    assert_eq!(transport.clock().local_time(), 0);

    // A late commit has no gesture left to apply.
    transport.commit_seek(&mut s);
    assert_eq!(s.current_time(), 0);
    assert_eq!(s.current_track().map(|t| t.id.as_str()), Some("b"));
}

#[test]
fn seek_gesture_survives_reconcile_on_same_track() {
    let (tx, _rx) = mpsc::channel();
    let mut transport = Transport::new(IDLE_PERIOD, tx);
    let mut s = store();
    s.play_track(t("b", 100));
    transport.reconcile(&s);

    transport.begin_seek(&s);
    transport.preview_seek(30, &s);
    transport.reconcile(&s);
    assert!(transport.clock().is_seeking());
    assert_eq!(transport.clock().local_time(), 30);
}
