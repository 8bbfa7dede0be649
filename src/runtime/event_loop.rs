use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::{App, Focus, HitAreas};
use crate::config;
use crate::library::TrackId;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Direction, PlaybackController, PlayerCommands};
use crate::queue::{EntryId, InsertMode};
use crate::runtime::mpris_sync::update_mpris;
use crate::runtime::terminal::Term;
use crate::transport::{Clock, SystemClock, Ticker, TransportStatus};
use crate::ui;

/// Longest the loop blocks on input, so redraws keep up with the clock even
/// between samples.
const MAX_WAIT: Duration = Duration::from_millis(50);

/// State tracked by the runtime event loop across iterations.
pub struct EventLoopState {
    clock: SystemClock,
    /// Drives `PlaybackController::tick` at the sampling interval.
    ticker: Ticker,
    /// Internal two-key prefix state used for `gg` handling.
    pending_gg: bool,
    /// Last-known track and status as emitted to MPRIS.
    last_mpris: (Option<TrackId>, TransportStatus),
}

impl EventLoopState {
    pub fn new(playback: &config::PlaybackSettings, player: &PlaybackController) -> Self {
        let clock = SystemClock::new();
        let period = Duration::from_millis(playback.sample_interval_ms);
        let ticker = Ticker::new(period, clock.now());
        Self {
            clock,
            ticker,
            pending_gg: false,
            last_mpris: (player.current().map(|t| t.id), player.status()),
        }
    }
}

/// Main terminal event loop: samples the transport, draws, and dispatches
/// keyboard, mouse and MPRIS input. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Term,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController,
    mpris: &MprisHandle,
    control_tx: &mpsc::Sender<ControlCmd>,
    control_rx: &mpsc::Receiver<ControlCmd>,
    state: &mut EventLoopState,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if state.ticker.poll(state.clock.now()) {
            player.tick();
        }

        // Keep MPRIS in sync even when playback changes come from auto-advance.
        let snapshot = (player.current().map(|t| t.id), player.status());
        if snapshot != state.last_mpris {
            update_mpris(mpris, player);
            state.last_mpris = snapshot;
        }

        app.clamp_queue_selection(player.queue().len());
        let mut hit = HitAreas::default();
        terminal.draw(|f| hit = ui::draw(f, app, player, settings))?;
        app.hit = hit;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, player) {
                return Ok(());
            }
        }

        let wait = state.ticker.until_next(state.clock.now()).min(MAX_WAIT);
        if event::poll(wait)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, app, player, control_tx, state) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, player),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Apply a transport command from MPRIS or the keyboard. Returns `true` on quit.
fn handle_control_cmd(cmd: ControlCmd, player: &mut PlaybackController) -> bool {
    tracing::debug!(?cmd, "control command");
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if player.status() != TransportStatus::Playing {
                player.play_pause();
            }
        }
        // Stopping would lose the queue position; MPRIS Stop pauses instead.
        ControlCmd::Pause | ControlCmd::Stop => {
            if player.status() == TransportStatus::Playing {
                player.play_pause();
            }
        }
        ControlCmd::PlayPause => player.play_pause(),
        ControlCmd::Next => player.skip(Direction::Next),
        ControlCmd::Prev => player.skip(Direction::Previous),
    }
    false
}

fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &mut PlaybackController,
    control_tx: &mpsc::Sender<ControlCmd>,
    state: &mut EventLoopState,
) -> bool {
    let queue_len = player.queue().len();
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => app.next(queue_len),
        KeyCode::Char('k') | KeyCode::Up => app.prev(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.select_first();
            } else {
                state.pending_gg = true;
            }
        }
        KeyCode::Char('G') => app.select_last(queue_len),
        KeyCode::Tab => app.cycle_focus(),
        KeyCode::Enter => match app.focus {
            Focus::Library => {
                if let Some((songs, start)) = app.selected_album() {
                    if let Err(e) = player.play_now(songs, start) {
                        tracing::warn!("play album failed: {e}");
                    }
                }
            }
            Focus::Queue => jump_to_row(player, app.queue_selected),
        },
        KeyCode::Char('a') => {
            if let Some(track) = app.selected_track() {
                player.enqueue(vec![track], InsertMode::Append);
            }
        }
        KeyCode::Char('n') => {
            if let Some(track) = app.selected_track() {
                player.enqueue(vec![track], InsertMode::InsertAfterCurrent);
            }
        }
        KeyCode::Char('A') => {
            if let Some(album) = app.selected_album_tracks() {
                player.enqueue(album, InsertMode::Append);
            }
        }
        KeyCode::Char('N') => {
            if let Some(album) = app.selected_album_tracks() {
                player.enqueue(album, InsertMode::InsertAfterCurrent);
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            if app.show_queue_panel {
                if let Some(entry) = app.selected_entry(player.queue()) {
                    remove_row(player, entry);
                }
                app.clamp_queue_selection(player.queue().len());
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let _ = control_tx.send(ControlCmd::PlayPause);
        }
        KeyCode::Char('l') => {
            let _ = control_tx.send(ControlCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = control_tx.send(ControlCmd::Prev);
        }
        KeyCode::Char('L') => player.scrub(scrub_seconds(settings)),
        KeyCode::Char('H') => player.scrub(-scrub_seconds(settings)),
        KeyCode::Char('s') => toggle_shuffle(player),
        KeyCode::Char('r') => toggle_repeat(player),
        KeyCode::Char('v') => app.toggle_queue_panel(),
        KeyCode::Char('f') => app.toggle_fullscreen(),
        KeyCode::Esc => {
            app.seek.cancel();
            app.fullscreen = false;
        }
        _ => {}
    }

    false
}

fn scrub_seconds(settings: &config::Settings) -> i64 {
    settings.controls.scrub_seconds.min(i64::MAX as u64) as i64
}

fn handle_mouse_event(mouse: MouseEvent, app: &mut App, player: &mut PlaybackController) {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(bar) = app.hit.on_progress(column, row) {
                if matches!(
                    player.status(),
                    TransportStatus::Playing | TransportStatus::Paused
                ) {
                    app.seek.start(bar, column);
                }
            } else if let Some(entry) = app.hit.queue_entry_at(column, row) {
                jump_to_entry(player, entry);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.seek.motion(column),
        MouseEventKind::Up(MouseButton::Left) => {
            app.seek.release(player);
        }
        _ => {}
    }
}

// Queue-panel and toggle actions only need the view command surface.

fn jump_to_row(commands: &mut dyn PlayerCommands, index: usize) {
    if let Err(e) = commands.jump_to(index) {
        tracing::debug!("jump ignored: {e}");
    }
}

fn jump_to_entry(commands: &mut dyn PlayerCommands, entry: EntryId) {
    if let Err(e) = commands.jump_to_entry(entry) {
        tracing::debug!("jump ignored: {e}");
    }
}

fn remove_row(commands: &mut dyn PlayerCommands, entry: EntryId) {
    match commands.remove_entry(entry) {
        Some(track) => tracing::debug!(track = %track.id, "removed from queue"),
        None => tracing::debug!(?entry, "queue entry already gone"),
    }
}

fn toggle_shuffle(commands: &mut dyn PlayerCommands) {
    let on = commands.toggle_shuffle();
    tracing::debug!(on, "shuffle");
}

fn toggle_repeat(commands: &mut dyn PlayerCommands) {
    let on = commands.toggle_repeat();
    tracing::debug!(on, "repeat");
}
