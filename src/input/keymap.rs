use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::command::Command;
use crate::nav::Side;

const PAGE_SCROLL_LINES: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, mode: Mode) -> Option<Command> {
    map_key_to_command_with_preset(key, mode, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    mode: Mode,
    preset: KeymapPreset,
) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match preset {
        KeymapPreset::Default => map_key_default(key, mode),
        KeymapPreset::Emacs => map_key_emacs(key, mode).or_else(|| map_key_default(key, mode)),
    }
}

fn map_key_default(key: KeyEvent, mode: Mode) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match mode {
        Mode::Modal => match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char(' ') => {
                Some(Command::CloseModal)
            }
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
        Mode::Proposal => match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('1') => {
                Some(Command::ActivateSide { side: Side::Left })
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('2') => {
                Some(Command::ActivateSide { side: Side::Right })
            }
            KeyCode::Enter | KeyCode::Char('y') => Some(Command::ActivateAffirmative),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
        Mode::Browse => match key.code {
            KeyCode::Right
            | KeyCode::Char('l')
            | KeyCode::Char('n')
            | KeyCode::Enter
            | KeyCode::Char(' ') => Some(Command::Next),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') | KeyCode::Backspace => {
                Some(Command::Prev)
            }
            KeyCode::Down | KeyCode::Char('j') => Some(Command::FocusNext),
            KeyCode::Up | KeyCode::Char('k') => Some(Command::FocusPrev),
            KeyCode::Tab | KeyCode::Char('e') => Some(Command::ToggleExpansion),
            KeyCode::PageDown | KeyCode::Char('J') => Some(Command::ScrollDetail {
                delta: PAGE_SCROLL_LINES,
            }),
            KeyCode::PageUp | KeyCode::Char('K') => Some(Command::ScrollDetail {
                delta: -PAGE_SCROLL_LINES,
            }),
            KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        },
    }
}

fn map_key_emacs(key: KeyEvent, mode: Mode) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match (mode, key.code) {
            (Mode::Browse, KeyCode::Char('v')) => Some(Command::ScrollDetail {
                delta: -PAGE_SCROLL_LINES,
            }),
            _ => None,
        };
    }

    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match (mode, key.code) {
        (_, KeyCode::Char('q')) => Some(Command::Quit),
        (Mode::Modal, KeyCode::Char('g')) => Some(Command::CloseModal),
        (Mode::Browse, KeyCode::Char('f')) => Some(Command::Next),
        (Mode::Browse, KeyCode::Char('b')) => Some(Command::Prev),
        (Mode::Browse, KeyCode::Char('n')) => Some(Command::FocusNext),
        (Mode::Browse, KeyCode::Char('p')) => Some(Command::FocusPrev),
        (Mode::Browse, KeyCode::Char('v')) => Some(Command::ScrollDetail {
            delta: PAGE_SCROLL_LINES,
        }),
        (Mode::Proposal, KeyCode::Char('b')) => Some(Command::ActivateSide { side: Side::Left }),
        (Mode::Proposal, KeyCode::Char('f')) => Some(Command::ActivateSide { side: Side::Right }),
        _ => None,
    }
}
