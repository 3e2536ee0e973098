//! Breakout entry point
//!
//! Headless demo: loads the config (first argument, JSON, optional), then lets
//! the autopilot play through the menus and a few games at simulated frame
//! rate, logging what a renderer would show.

use std::path::Path;
use std::process::ExitCode;

use breakout::autopilot::Autopilot;
use breakout::render::{FrameView, LogSink, RenderSink};
use breakout::{App, AppState, BreakoutError, Config};

/// Games the demo plays before asking to quit
const DEMO_GAMES: u32 = 3;
/// Hard stop so a ball bouncing forever can't hang the demo (10 minutes at 30 fps)
const DEMO_FRAME_LIMIT: u64 = 30 * 60 * 10;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout (headless) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), BreakoutError> {
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };
    let mut app = App::new(config)?;
    let dt = app.config().frame_dt();
    let pilot = Autopilot::default();
    let mut sink = LogSink::default();

    let mut games = 0;
    let mut last_state = app.state();
    let mut frames = 0u64;
    while app.is_running() {
        let mut input = pilot.input(&app);
        if games >= DEMO_GAMES || frames >= DEMO_FRAME_LIMIT {
            input.quit = true;
        }

        let state = app.update(dt, &input);
        if state == AppState::GameOver && last_state != AppState::GameOver {
            games += 1;
        }
        last_state = state;
        frames += 1;

        sink.present(&FrameView::capture(&app));
    }

    log::info!(
        "Played {} game(s) in {} frames; bye",
        app.sessions_played(),
        sink.frames()
    );
    Ok(())
}
