use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideOutcome {
    /// The affirmative label moved to the activated side.
    Dodged,
    /// The side already carried the affirmative label; the modal opened.
    Confirmed,
}

/// Which of the two proposal buttons currently reads "yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleState {
    affirmative: Side,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self {
            affirmative: Side::Left,
        }
    }
}

impl ToggleState {
    pub fn affirmative(&self) -> Side {
        self.affirmative
    }

    pub fn is_affirmative(&self, side: Side) -> bool {
        self.affirmative == side
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    visible: bool,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Returns whether the modal was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

/// Only the affirmative side can be confirmed; tapping the other side just
/// moves the affirmative label there.
pub fn activate_side(toggle: &mut ToggleState, modal: &mut ModalState, side: Side) -> SideOutcome {
    if toggle.affirmative == side {
        modal.open();
        SideOutcome::Confirmed
    } else {
        toggle.affirmative = side;
        SideOutcome::Dodged
    }
}

/// Expanded descriptions, keyed by event index within the displayed chapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: BTreeSet<usize>,
}

impl ExpansionState {
    pub fn is_expanded(&self, event_index: usize) -> bool {
        self.expanded.contains(&event_index)
    }

    /// Flips one index and returns its new state.
    pub fn toggle(&mut self, event_index: usize) -> bool {
        if self.expanded.remove(&event_index) {
            false
        } else {
            self.expanded.insert(event_index);
            true
        }
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
