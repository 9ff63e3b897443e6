use crate::nav::{Direction, Side};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Next,
    Prev,
    FocusNext,
    FocusPrev,
    ToggleExpansion,
    ScrollDetail { delta: i32 },
    ActivateSide { side: Side },
    ActivateAffirmative,
    CloseModal,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    Next,
    Prev,
    FocusNext,
    FocusPrev,
    ToggleExpansion,
    ScrollDetail,
    ActivateSide,
    ActivateAffirmative,
    CloseModal,
    Quit,
    Input,
    PersistPosition,
    ImageLoad,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Prev => "prev",
            Self::FocusNext => "focus-next",
            Self::FocusPrev => "focus-prev",
            Self::ToggleExpansion => "toggle-expansion",
            Self::ScrollDetail => "scroll-detail",
            Self::ActivateSide => "activate-side",
            Self::ActivateAffirmative => "activate-affirmative",
            Self::CloseModal => "close-modal",
            Self::Quit => "quit",
            Self::Input => "input",
            Self::PersistPosition => "persist-position",
            Self::ImageLoad => "image-load",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::Next => ActionId::Next,
            Self::Prev => ActionId::Prev,
            Self::FocusNext => ActionId::FocusNext,
            Self::FocusPrev => ActionId::FocusPrev,
            Self::ToggleExpansion => ActionId::ToggleExpansion,
            Self::ScrollDetail { .. } => ActionId::ScrollDetail,
            Self::ActivateSide { .. } => ActionId::ActivateSide,
            Self::ActivateAffirmative => ActionId::ActivateAffirmative,
            Self::CloseModal => ActionId::CloseModal,
            Self::Quit => ActionId::Quit,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Next => Some(Direction::Next),
            Self::Prev => Some(Direction::Prev),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}

#[cfg(test)]
mod tests {
    use super::{ActionId, Command};
    use crate::nav::{Direction, Side};

    #[test]
    fn command_action_id_maps_parameterized_variants() {
        assert_eq!(
            Command::ActivateSide { side: Side::Right }.action_id(),
            ActionId::ActivateSide
        );
        assert_eq!(
            Command::ScrollDetail { delta: -3 }.action_id(),
            ActionId::ScrollDetail
        );
        assert_eq!(ActionId::ActivateAffirmative.as_str(), "activate-affirmative");
    }

    #[test]
    fn only_navigation_commands_carry_a_direction() {
        assert_eq!(Command::Next.direction(), Some(Direction::Next));
        assert_eq!(Command::Prev.direction(), Some(Direction::Prev));
        assert_eq!(Command::FocusNext.direction(), None);
    }
}
