use std::sync::mpsc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::error::Result;
use crate::logging;
use crate::mpris::ControlCmd;
use crate::transport::{Tick, Transport};

mod event_loop;
mod mpris_sync;
mod settings;
mod startup;

pub fn run() -> Result<()> {
    let (settings, settings_err) = settings::load_settings();

    // Keep the guard alive until the terminal is restored so late lines flush.
    let _log_guard = match logging::init(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("spindle: {e}");
            None
        }
    };
    if let Some(e) = settings_err {
        warn!("using default settings: {e}");
    }

    let catalog = startup::load_catalog(&settings.library);
    let store = startup::build_store(&catalog, &settings);
    let app = App::new(catalog, settings.playback.volume);

    let (tick_tx, tick_rx) = mpsc::channel::<Tick>();
    let transport = Transport::new(Duration::from_millis(settings.controls.tick_ms), tick_tx);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());

    let mut session = event_loop::Session {
        app,
        store,
        transport,
    };

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<()> = (|| {
        let mut state = event_loop::EventLoopState::default();

        event_loop::run(
            &mut terminal,
            &settings,
            &mut session,
            &mpris,
            &control_tx,
            &control_rx,
            &tick_rx,
            &mut state,
        )
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("shutting down");
    run_result
}
