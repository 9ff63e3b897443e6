use tracing::{debug, info, warn};

use crate::command::{
    ActionId, Command, CommandDispatchResult, CommandOutcome, DispatchContext, dispatch,
};
use crate::config::Config;
use crate::content::ContentSource;
use crate::error::AppResult;
use crate::event::AppEvent;
use crate::nav::{PositionStore, Screen, encode_position, persist_screen, restore_screen};
use crate::presenter::{ImagePresenter, create_presenter_with_cache_entries, presenter_kind_for};

use super::state::AppState;

pub struct App {
    pub state: AppState,
    pub content: ContentSource,
    pub config: Config,
    pub(crate) store: Box<dyn PositionStore>,
    pub(crate) presenter: Box<dyn ImagePresenter>,
}

impl App {
    /// Builds the session. `start_at` (a shared position) wins over whatever
    /// the store remembers and is written back immediately.
    pub fn new(
        content: ContentSource,
        config: Config,
        store: Box<dyn PositionStore>,
        start_at: Option<Screen>,
    ) -> AppResult<Self> {
        let presenter = create_presenter_with_cache_entries(
            presenter_kind_for(&config.ui),
            Some(config.ui.image_cache_entries),
        )?;
        Ok(Self::with_presenter(content, config, store, presenter, start_at))
    }

    pub fn with_presenter(
        content: ContentSource,
        config: Config,
        mut store: Box<dyn PositionStore>,
        presenter: Box<dyn ImagePresenter>,
        start_at: Option<Screen>,
    ) -> Self {
        let screen = match start_at {
            Some(screen) => {
                if let Err(err) = persist_screen(store.as_mut(), screen) {
                    warn!(store = %store.describe(), error = %err, "failed to save shared position");
                }
                screen
            }
            None => restore_screen(store.as_ref()),
        };
        info!(
            journal = content.origin(),
            position = %encode_position(screen),
            store = %store.describe(),
            "session started"
        );

        Self {
            state: AppState::with_screen(screen),
            content,
            config,
            store,
            presenter,
        }
    }

    /// The shareable position string for the screen currently shown.
    pub fn position(&self) -> String {
        encode_position(self.state.screen)
    }

    pub fn dispatch_command(&mut self, command: Command) -> AppResult<CommandDispatchResult> {
        dispatch(
            &mut self.state,
            command,
            DispatchContext {
                content: &self.content,
                expand_threshold_chars: self.config.ui.expand_threshold_chars,
            },
        )
    }

    /// Dispatches `command` and consumes what it emitted before returning, so
    /// a screen change is saved even when a quit is already queued behind it.
    pub fn apply_command(&mut self, command: Command) -> AppResult<CommandOutcome> {
        let result = self.dispatch_command(command)?;
        for event in &result.emitted_events {
            self.handle_app_event(event);
        }
        Ok(result.outcome)
    }

    pub fn handle_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::ScreenChanged { from, to } => {
                debug!(from = %from.label(), to = %to.label(), "screen changed");
                if let Err(err) = persist_screen(self.store.as_mut(), *to) {
                    warn!(store = %self.store.describe(), error = %err, "failed to save position");
                    self.state.status.last_action_id = Some(ActionId::PersistPosition);
                    self.state.status.message = format!("position not saved: {err}");
                }
            }
            AppEvent::ModeChanged { from, to } => {
                debug!(from = from.as_str(), to = to.as_str(), "mode changed");
            }
            AppEvent::CommandExecuted { id, outcome } => {
                debug!(command = id.as_str(), outcome = ?outcome, "command executed");
            }
        }
    }
}
