use std::env;
use std::path::Path;
use std::sync::mpsc;

use crate::app::App;
use crate::library::{Library, scan};
use crate::mpris::ControlCmd;

mod event_loop;
mod logging;
mod mpris_sync;
mod settings;
mod startup;
mod terminal;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_warning) = settings::load_settings();
    if let Some(path) = logging::init_logging(&settings.logging) {
        tracing::info!(log = %path.display(), "cadenza starting");
    }
    if let Some(warning) = settings_warning {
        tracing::warn!("{warning}");
    }

    let dir = env::args().nth(1).unwrap_or_else(|| {
        env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    let library = Library::new(scan(Path::new(&dir), &settings.library));
    if library.is_empty() {
        tracing::warn!(dir = %dir, "no audio files found");
    }
    let mut app = App::new(library);
    app.set_current_dir(dir);
    if settings.ui.show_queue_panel {
        app.toggle_queue_panel();
    }

    let mut player = startup::build_controller(&settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx.clone());
    mpris_sync::update_mpris(&mpris, &player);

    let mut session = terminal::TerminalSession::enter()?;
    let mut state = event_loop::EventLoopState::new(&settings.playback, &player);
    let run_result = event_loop::run(
        session.terminal(),
        &settings,
        &mut app,
        &mut player,
        &mpris,
        &control_tx,
        &control_rx,
        &mut state,
    );
    drop(session);

    // Dropping the controller shuts the audio thread down.
    drop(player);
    tracing::info!("cadenza exiting");
    run_result
}
