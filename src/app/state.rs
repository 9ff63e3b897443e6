use crate::command::ActionId;
use crate::nav::{ExpansionState, ModalState, Screen, ToggleState};

/// Which key bindings apply right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Proposal,
    Modal,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Browse => "BROWSE",
            Self::Proposal => "PROPOSAL",
            Self::Modal => "MODAL",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

/// Cursor and scroll within the chapter being shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChapterViewState {
    pub focused_event: usize,
    pub detail_scroll: u16,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub toggle: ToggleState,
    pub modal: ModalState,
    pub expansion: ExpansionState,
    pub chapter_view: ChapterViewState,
    pub status: StatusState,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_screen(Screen::Intro)
    }
}

impl AppState {
    pub fn with_screen(screen: Screen) -> Self {
        Self {
            screen,
            toggle: ToggleState::default(),
            modal: ModalState::default(),
            expansion: ExpansionState::default(),
            chapter_view: ChapterViewState::default(),
            status: StatusState::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.modal.is_visible() {
            Mode::Modal
        } else if self.screen == Screen::Final {
            Mode::Proposal
        } else {
            Mode::Browse
        }
    }

    /// Moves to `next`, scoping per-chapter view state to the new screen.
    /// Returns whether the screen actually changed.
    pub fn enter_screen(&mut self, next: Screen) -> bool {
        if self.screen == next {
            return false;
        }
        self.screen = next;
        // Expansion flags are keyed by index within one chapter.
        self.expansion.clear();
        if next.is_chapter() {
            self.chapter_view = ChapterViewState::default();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{AppState, ChapterViewState, Mode};
    use crate::nav::{Screen, Side, activate_side};

    #[test]
    fn enter_screen_resets_chapter_scoped_state() {
        let mut state = AppState::with_screen(Screen::Chapter(0));
        state.expansion.toggle(1);
        state.chapter_view = ChapterViewState {
            focused_event: 2,
            detail_scroll: 9,
        };

        assert!(state.enter_screen(Screen::Chapter(1)));
        assert!(state.expansion.is_empty());
        assert_eq!(state.chapter_view, ChapterViewState::default());
        assert!(!state.enter_screen(Screen::Chapter(1)));
    }

    #[test]
    fn mode_follows_screen_and_modal() {
        let mut state = AppState::default();
        assert_eq!(state.mode(), Mode::Browse);

        state.enter_screen(Screen::Final);
        assert_eq!(state.mode(), Mode::Proposal);

        activate_side(&mut state.toggle, &mut state.modal, Side::Left);
        assert_eq!(state.mode(), Mode::Modal);
    }
}
