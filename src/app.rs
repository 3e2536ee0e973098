//! Game state machine and frame driver
//!
//! `App` owns the screen flow (menu, start screen, play, game over) and the
//! current session. A platform loop calls `update` with elapsed time and an
//! input snapshot; the app turns that into fixed simulation frames.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::BreakoutError;
use crate::sim::{GameEvent, HeldKeys, Key, Outcome, Session, SessionStatus, step};

/// Screens the game can be on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppState {
    Menu,
    StartScreen,
    Playing,
    GameOver,
    /// Terminal: the process should exit
    Quit,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppAction {
    /// Menu: start a game
    Play,
    /// Menu: options (no options exist yet)
    Options,
    /// Menu: leave the game
    Exit,
    /// Any key released (start and game-over screens)
    KeyReleased,
    /// The current session was won or lost
    SessionEnded,
    /// Window close
    QuitRequested,
}

/// Which screen flow to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Start screen before every game; game over returns to it
    #[default]
    StartScreen,
    /// Main menu straight into play; game over returns to the menu
    MainMenu,
}

impl Flow {
    pub fn initial_state(self) -> AppState {
        match self {
            Flow::StartScreen => AppState::StartScreen,
            Flow::MainMenu => AppState::Menu,
        }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: AppState,
    pub to: AppState,
    pub action: AppAction,
}

/// Next state for an action, if the action is valid in `state`
pub fn next_state(flow: Flow, state: AppState, action: AppAction) -> Option<AppState> {
    use AppAction::*;
    use AppState::*;

    match (state, action) {
        // Quitting works everywhere except after quitting
        (Quit, _) => None,
        (_, QuitRequested) => Some(Quit),

        // From Menu
        (Menu, Play) => Some(match flow {
            Flow::StartScreen => StartScreen,
            Flow::MainMenu => Playing,
        }),
        (Menu, Options) => Some(Menu),
        (Menu, Exit) => Some(Quit),

        // From StartScreen
        (StartScreen, KeyReleased) => Some(Playing),

        // From Playing
        (Playing, SessionEnded) => Some(GameOver),

        // From GameOver
        (GameOver, KeyReleased) => Some(match flow {
            Flow::StartScreen => StartScreen,
            Flow::MainMenu => Menu,
        }),

        // Invalid transition
        _ => None,
    }
}

/// Menu buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuChoice {
    Play,
    Options,
    Exit,
}

impl From<MenuChoice> for AppAction {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Play => AppAction::Play,
            MenuChoice::Options => AppAction::Options,
            MenuChoice::Exit => AppAction::Exit,
        }
    }
}

/// Input for one driver update
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Directions currently held
    pub held: HeldKeys,
    /// A key was released since the last update
    pub key_released: bool,
    /// A menu button was clicked
    pub menu: Option<MenuChoice>,
    /// Window close requested
    pub quit: bool,
}

/// Final result shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub score: u32,
    pub outcome: Outcome,
    pub frames: u64,
}

/// Game instance: screen flow plus the current session
pub struct App {
    config: Config,
    state: AppState,
    session: Option<Session>,
    accumulator: f32,
    sessions_played: u32,
    /// Events from the frames run by the latest update
    events: Vec<GameEvent>,
}

impl App {
    /// Validate the config and start on the flow's first screen
    pub fn new(config: Config) -> Result<Self, BreakoutError> {
        config.validate()?;
        let state = config.flow.initial_state();
        log::info!("Starting in {:?} ({:?} flow)", state, config.flow);
        Ok(Self {
            config,
            state,
            session: None,
            accumulator: 0.0,
            sessions_played: 0,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Current or just-finished session
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    /// Game events from the frames simulated by the latest `update` or
    /// `advance_frame` call
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Held directions for the physical keys currently down
    pub fn held_keys<I>(&self, pressed: I) -> HeldKeys
    where
        I: IntoIterator<Item = Key>,
    {
        self.config.key_bindings.resolve(pressed)
    }

    pub fn is_running(&self) -> bool {
        self.state != AppState::Quit
    }

    /// Score and outcome of the finished session, while on the game-over screen
    pub fn summary(&self) -> Option<GameSummary> {
        if self.state != AppState::GameOver {
            return None;
        }
        let session = self.session.as_ref()?;
        Some(GameSummary {
            score: session.score,
            outcome: session.outcome?,
            frames: session.frame,
        })
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: AppAction) -> Transition {
        let from = self.state;
        match next_state(self.config.flow, from, action) {
            Some(to) => {
                if action == AppAction::Options {
                    log::info!("Options selected");
                }
                if to != from {
                    log::info!("{:?} -> {:?} ({:?})", from, to, action);
                }
                self.state = to;
                if to == AppState::Playing {
                    self.begin_session();
                }
                Transition {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => {
                log::debug!("Ignored {:?} in {:?}", action, from);
                Transition {
                    success: false,
                    from,
                    to: from,
                    action,
                }
            }
        }
    }

    fn begin_session(&mut self) {
        self.session = Some(Session::new(&self.config));
        self.accumulator = 0.0;
        self.sessions_played += 1;
    }

    /// Advance by `dt` seconds of wall time
    ///
    /// While playing, runs as many whole frames as fit (at most
    /// `max_substeps`); leftover time carries over to the next call.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> AppState {
        self.events.clear();
        if input.quit {
            self.transition(AppAction::QuitRequested);
            return self.state;
        }

        match self.state {
            AppState::Menu => {
                if let Some(choice) = input.menu {
                    self.transition(choice.into());
                }
            }
            AppState::StartScreen | AppState::GameOver => {
                if input.key_released {
                    self.transition(AppAction::KeyReleased);
                }
            }
            AppState::Playing => self.run_frames(dt, input.held),
            AppState::Quit => {}
        }
        self.state
    }

    /// Run exactly one simulation frame, ignoring wall time
    pub fn advance_frame(&mut self, held: HeldKeys) -> AppState {
        self.events.clear();
        self.step_frame(held)
    }

    fn step_frame(&mut self, held: HeldKeys) -> AppState {
        if self.state != AppState::Playing {
            return self.state;
        }
        let ended = match self.session.as_mut() {
            Some(session) => {
                let status = step(session, held);
                self.events.append(&mut session.events);
                matches!(status, SessionStatus::Ended(_))
            }
            None => false,
        };
        if ended {
            self.transition(AppAction::SessionEnded);
        }
        self.state
    }

    fn run_frames(&mut self, dt: f32, held: HeldKeys) {
        let frame_dt = self.config.frame_dt();
        let max_substeps = self.config.max_substeps;
        // Drop time we could never catch up on
        self.accumulator = (self.accumulator + dt.max(0.0)).min(frame_dt * max_substeps as f32);

        let mut substeps = 0;
        while self.accumulator >= frame_dt && substeps < max_substeps {
            self.accumulator -= frame_dt;
            substeps += 1;
            if self.step_frame(held) != AppState::Playing {
                self.accumulator = 0.0;
                break;
            }
        }
    }
}
