use crossterm::event::Event;

use crate::app::Mode;
use crate::command::{ActionId, Command, CommandOutcome};
use crate::nav::Screen;
use crate::presenter::ImageLoadResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    CommandExecuted {
        id: ActionId,
        outcome: CommandOutcome,
    },
    /// Emitted for every transition the navigation machine makes.
    /// `App::apply_command` persists `to` before the next event is read.
    ScreenChanged {
        from: Screen,
        to: Screen,
    },
    ModeChanged {
        from: Mode,
        to: Mode,
    },
}

#[derive(Debug)]
pub(crate) enum DomainEvent {
    Input(Event),
    InputError(String),
    Command(Command),
    ImageLoaded(ImageLoadResult),
    Wake,
}
