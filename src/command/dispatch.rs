use crate::app::{AppState, Mode};
use crate::content::ContentSource;
use crate::error::AppResult;
use crate::event::AppEvent;
use crate::nav::{Direction, Screen};

use super::core::{close_modal, move_focus, navigate, press_side, scroll_detail, toggle_expansion};
use super::types::{ActionId, Command, CommandOutcome};

#[derive(Debug, Clone, Copy)]
pub struct DispatchContext<'a> {
    pub content: &'a ContentSource,
    pub expand_threshold_chars: usize,
}

#[derive(Debug, Clone)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    pub emitted_events: Vec<AppEvent>,
}

/// Applies one command to the UI state. Side effects of the resulting
/// transitions (persisting the position) are left to whoever consumes the
/// emitted events.
pub fn dispatch(
    app: &mut AppState,
    cmd: Command,
    ctx: DispatchContext<'_>,
) -> AppResult<CommandDispatchResult> {
    let previous_screen = app.screen;
    let prev_mode = app.mode();
    let action_id = cmd.action_id();
    let chapter_count = ctx.content.chapter_count();

    let outcome = if prev_mode == Mode::Modal && !matches!(cmd, Command::CloseModal | Command::Quit)
    {
        app.status.last_action_id = Some(action_id);
        app.status.message = "close the invitation first".to_string();
        CommandOutcome::Noop
    } else {
        match cmd {
            Command::Next => navigate(app, Direction::Next, chapter_count),
            Command::Prev => navigate(app, Direction::Prev, chapter_count),
            Command::FocusNext => move_focus(app, ctx.content, 1),
            Command::FocusPrev => move_focus(app, ctx.content, -1),
            Command::ToggleExpansion => {
                toggle_expansion(app, ctx.content, ctx.expand_threshold_chars)
            }
            Command::ScrollDetail { delta } => scroll_detail(app, ctx.content, delta),
            Command::ActivateSide { side } => press_side(app, side, ActionId::ActivateSide),
            Command::ActivateAffirmative => {
                let side = app.toggle.affirmative();
                press_side(app, side, ActionId::ActivateAffirmative)
            }
            Command::CloseModal => close_modal(app),
            Command::Quit => {
                app.status.last_action_id = Some(ActionId::Quit);
                app.status.message = "quit requested".to_string();
                CommandOutcome::QuitRequested
            }
        }
    };

    let mut emitted_events = collect_transition_events(app, previous_screen, prev_mode);
    emitted_events.push(AppEvent::CommandExecuted {
        id: action_id,
        outcome,
    });

    Ok(CommandDispatchResult {
        outcome,
        emitted_events,
    })
}

fn collect_transition_events(
    app: &AppState,
    previous_screen: Screen,
    prev_mode: Mode,
) -> Vec<AppEvent> {
    let mut events = Vec::new();
    if app.screen != previous_screen {
        events.push(AppEvent::ScreenChanged {
            from: previous_screen,
            to: app.screen,
        });
    }

    let mode = app.mode();
    if mode != prev_mode {
        events.push(AppEvent::ModeChanged {
            from: prev_mode,
            to: mode,
        });
    }
    events
}
