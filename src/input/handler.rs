use crossterm::event::{Event, KeyEventKind};

use crate::command::Command;
use crate::error::AppResult;

use crate::app::App;
use crate::app::terminal_session::TerminalSurface;

use super::keymap::{KeymapPreset, map_key_to_command_with_preset};

#[derive(Debug, Default)]
pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) command: Option<Command>,
}

impl App {
    pub(crate) fn handle_input_event(
        &mut self,
        event: Event,
        session: &mut impl TerminalSurface,
        needs_redraw: &mut bool,
    ) -> AppResult<InputEventOutcome> {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                let preset = KeymapPreset::parse(&self.config.keymap.preset);
                let Some(command) =
                    map_key_to_command_with_preset(key, self.state.mode(), preset)
                else {
                    return Ok(InputEventOutcome::default());
                };
                if matches!(command, Command::Quit) {
                    return Ok(InputEventOutcome {
                        quit_requested: true,
                        command: None,
                    });
                }
                Ok(InputEventOutcome {
                    quit_requested: false,
                    command: Some(command),
                })
            }
            Event::Resize(_, _) => {
                session.clear()?;
                *needs_redraw = true;
                Ok(InputEventOutcome::default())
            }
            _ => Ok(InputEventOutcome::default()),
        }
    }
}
