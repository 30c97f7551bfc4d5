use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::{Action, App, View};
use crate::config;
use crate::error::AppError;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::PlayerStore;
use crate::runtime::mpris_sync::{SyncKey, update_mpris};
use crate::transport::{Tick, TickOutcome, Transport};
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Store state as last pushed to MPRIS.
    pub last_mpris: Option<SyncKey>,
}

/// Everything the key and control handlers act on.
pub struct Session {
    pub app: App,
    pub store: PlayerStore,
    pub transport: Transport,
}

/// Main terminal event loop: draws, applies ticks, remote commands and key
/// presses, and keeps the ticker and MPRIS in step with the store. Returns
/// `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    session: &mut Session,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    tick_rx: &mpsc::Receiver<Tick>,
    state: &mut EventLoopState,
) -> Result<(), AppError> {
    loop {
        session.transport.reconcile(&session.store);

        let key = SyncKey::of(&session.store);
        if state.last_mpris.as_ref() != Some(&key) {
            update_mpris(mpris, &session.store);
            state.last_mpris = Some(key);
        }

        session.app.clamp_selection(&session.store);
        terminal.draw(|f| {
            ui::draw(
                f,
                &session.app,
                &session.store,
                session.transport.clock(),
                settings,
            )
        })?;

        if drain_channels(session, control_rx, tick_rx) {
            info!("quit requested over MPRIS");
            return Ok(());
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, session, control_tx, state) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Apply pending remote commands, then pending ticks. The transport is
/// reconciled in between so ticks see the store as the commands left it.
/// Returns true when a quit was requested.
pub fn drain_channels(
    session: &mut Session,
    control_rx: &mpsc::Receiver<ControlCmd>,
    tick_rx: &mpsc::Receiver<Tick>,
) -> bool {
    let mut saw_command = false;
    while let Ok(cmd) = control_rx.try_recv() {
        if handle_control_cmd(cmd, &mut session.store) {
            return true;
        }
        saw_command = true;
    }
    if saw_command {
        session.transport.reconcile(&session.store);
    }

    while let Ok(tick) = tick_rx.try_recv() {
        if session.transport.handle_tick(tick, &mut session.store) == TickOutcome::TrackEnded {
            debug!("track ended, advanced");
        }
    }
    false
}

/// Apply a remote command. Returns true when the loop should exit.
pub fn handle_control_cmd(cmd: ControlCmd, store: &mut PlayerStore) -> bool {
    debug!(?cmd, "control command");
    let has_track = store.current_track().is_some();
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if has_track && !store.is_playing() {
                store.toggle_play();
            }
        }
        // There is no stopped state to fall back to once a track is loaded.
        ControlCmd::Pause | ControlCmd::Stop => {
            if store.is_playing() {
                store.toggle_play();
            }
        }
        ControlCmd::PlayPause => {
            if has_track {
                store.toggle_play();
            }
        }
        ControlCmd::Next => store.next_track(),
        ControlCmd::Prev => store.previous_track(),
    }
    false
}

fn apply_action(action: Action, app: &mut App, store: &mut PlayerStore, transport: &mut Transport) {
    match action {
        Action::Play(track) => transport.play_track(store, track),
        Action::AddToQueue(track) => store.add_to_queue(track),
        Action::Open(view) => app.open(view),
    }
}

/// Jump by `delta_secs` within the current track in one gesture.
fn scrub(store: &mut PlayerStore, transport: &mut Transport, delta_secs: i64) {
    if store.current_track().is_none() {
        return;
    }
    transport.begin_seek(store);
    transport.preview_seek(delta_secs, store);
    transport.commit_seek(store);
}

/// Handle one key press. Returns true when the loop should exit.
pub fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    session: &mut Session,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    let step = i64::from(settings.controls.scrub_seconds);

    if session.transport.clock().is_seeking() {
        state.pending_gg = false;
        let Session {
            store, transport, ..
        } = session;
        match key.code {
            KeyCode::Char('h' | 'H') | KeyCode::Left => transport.preview_seek(-step, store),
            KeyCode::Char('l' | 'L') | KeyCode::Right => transport.preview_seek(step, store),
            KeyCode::Enter => transport.commit_seek(store),
            KeyCode::Esc | KeyCode::Char('S') => transport.cancel_seek(store),
            _ => {}
        }
        return false;
    }

    if session.app.search_editing {
        state.pending_gg = false;
        let app = &mut session.app;
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.finish_search(),
            KeyCode::Backspace => app.pop_search_char(),
            KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.next(&session.store)
            }
            KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.prev(&session.store)
            }
            KeyCode::Char(c) if !c.is_control() => app.push_search_char(c),
            _ => {}
        }
        return false;
    }

    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    let Session {
        app,
        store,
        transport,
    } = session;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('1') => app.switch_view(View::Home),
        KeyCode::Char('2') => app.switch_view(View::Library),
        KeyCode::Char('3') => app.switch_view(View::Search),
        KeyCode::Char('4') => app.switch_view(View::Queue),
        KeyCode::Char('n') => app.toggle_now_playing(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') if app.view == View::Library => app.cycle_library_filter(),
        KeyCode::Char('j') | KeyCode::Down => app.next(store),
        KeyCode::Char('k') | KeyCode::Up => app.prev(store),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.select_last(store),
        KeyCode::Esc | KeyCode::Backspace => {
            app.back();
        }
        KeyCode::Enter => {
            if let Some(action) = app.activate(store) {
                apply_action(action, app, store, transport);
            }
        }
        KeyCode::Char('a') => {
            if let Some(action) = app.enqueue_selected(store) {
                apply_action(action, app, store, transport);
            }
        }
        KeyCode::Char('P') => {
            if let Some(action) = app.play_all() {
                apply_action(action, app, store, transport);
            }
        }
        KeyCode::Char('p' | ' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('L') => scrub(store, transport, step),
        KeyCode::Char('H') => scrub(store, transport, -step),
        KeyCode::Char('S') => {
            if store.current_track().is_some() {
                transport.begin_seek(store);
            }
        }
        KeyCode::Char('+' | '=') => {
            let volume = app.nudge_volume(store.volume(), settings.controls.volume_step);
            store.set_volume(volume);
        }
        KeyCode::Char('-') => {
            let volume = app.nudge_volume(store.volume(), -settings.controls.volume_step);
            store.set_volume(volume);
        }
        KeyCode::Char('m') => {
            let volume = app.toggle_mute(store.volume());
            store.set_volume(volume);
        }
        KeyCode::Char('s') => store.toggle_shuffle(),
        KeyCode::Char('r') => store.toggle_repeat(),
        _ => {}
    }

    false
}
