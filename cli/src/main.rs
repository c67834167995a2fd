//! CyberElement CLI - binary entry point and terminal session management.
//!
//! The CLI wires [`cyberelement_config`] (settings), [`cyberelement_engine`]
//! (selection state) and [`cyberelement_tui`] (rendering) together behind an
//! RAII terminal guard.
//!
//! # Event Loop
//!
//! A fixed 8ms render cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`cyberelement_tui::InputPump`])
//! 3. Advance application state (`app.tick()`), which applies finished fetches
//! 4. Render frame

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cyberelement_config::{CyberConfig, Settings, config_path};
use cyberelement_engine::App;
use cyberelement_engine::cyberelement_providers::{ApiConfig, GeminiClient};
use cyberelement_tui::{InputPump, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Writing to stdout/stderr would corrupt the TUI; go without logs instead.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new().create(true).append(true).open(&candidate) {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => warnings.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // ~/.cyberelement/logs/cyberelement.log
    if let Some(path) = config_path()
        && let Some(dir) = path.parent()
    {
        candidates.push(dir.join("logs").join("cyberelement.log"));
    }

    candidates.push(
        PathBuf::from(".cyberelement")
            .join("logs")
            .join("cyberelement.log"),
    );
    candidates
}

fn api_config(settings: &Settings) -> ApiConfig {
    let mut config =
        ApiConfig::new(settings.api_key.clone()).with_model(settings.model.clone());
    if let Some(temperature) = settings.temperature {
        config = config.with_temperature(temperature);
    }
    if let Some(base_url) = settings.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }
    config
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, the alternate screen and mouse capture are all restored on drop,
/// so the terminal stays usable after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
            return Err(err.into());
        }

        match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen);
                Err(err.into())
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match CyberConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::error!(path = %err.path().display(), "Using default settings: {err}");
            CyberConfig::default()
        }
    };
    let settings = config.resolve();
    if settings.api_key.is_none() {
        tracing::warn!("No Gemini API key configured; details will use fallback text");
    }

    let client = GeminiClient::new(api_config(&settings))?;
    let mut app = App::new(Arc::new(client), settings.ui, settings.model.clone());

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app).await
    };

    if let Err(err) = result {
        tracing::error!("Exiting after error: {err:?}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<GeminiClient>,
) -> Result<()> {
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result: Result<()> = loop {
        frames.tick().await;

        let viewport = match terminal.size() {
            Ok(size) => Rect::new(0, 0, size.width, size.height),
            Err(e) => break Err(e.into()),
        };

        // Non-blocking input (drain queue only)
        match handle_events(app, &mut input, viewport) {
            Ok(true) => break Ok(()),
            Ok(false) => {}
            Err(e) => break Err(e),
        }

        app.tick();

        if let Err(e) = terminal.draw(|frame| draw(frame, app)) {
            break Err(e.into());
        }
    };

    input.shutdown().await;
    result
}
