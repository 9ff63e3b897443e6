/// Which top-level view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Intro,
    Chapter(usize),
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Screen {
    pub fn is_chapter(self) -> bool {
        matches!(self, Self::Chapter(_))
    }

    /// The chapter index to draw, or `None` when there is nothing to show
    /// (not a chapter, or an index outside `0..chapter_count`).
    pub fn chapter_index(self, chapter_count: usize) -> Option<usize> {
        match self {
            Self::Chapter(index) if index < chapter_count => Some(index),
            _ => None,
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Intro => "intro".to_string(),
            Self::Chapter(index) => format!("chapter {}", index.saturating_add(1)),
            Self::Final => "final".to_string(),
        }
    }
}

/// The transition function. Pure: the caller persists the result.
///
/// `Final` is terminal in both directions and `Intro` ignores `Prev`. An
/// out-of-range chapter moves forward to `Final` and back one index, like
/// any other chapter.
pub fn advance(current: Screen, direction: Direction, chapter_count: usize) -> Screen {
    match (current, direction) {
        (Screen::Intro, Direction::Next) => {
            if chapter_count == 0 {
                Screen::Final
            } else {
                Screen::Chapter(0)
            }
        }
        (Screen::Intro, Direction::Prev) => Screen::Intro,
        (Screen::Chapter(index), Direction::Next) => {
            if index.saturating_add(1) < chapter_count {
                Screen::Chapter(index + 1)
            } else {
                Screen::Final
            }
        }
        (Screen::Chapter(index), Direction::Prev) => {
            if index > 0 {
                Screen::Chapter(index - 1)
            } else {
                Screen::Intro
            }
        }
        (Screen::Final, _) => Screen::Final,
    }
}
