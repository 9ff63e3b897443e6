use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub body: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    UiLayout {
        body: chunks[0],
        status: chunks[1],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChapterLayout {
    pub(crate) header: Rect,
    pub(crate) list: Rect,
    pub(crate) detail: Rect,
    pub(crate) footer: Rect,
}

/// Header on top, event list beside the detail pane, buttons at the bottom.
/// Narrow terminals stack the list above the detail pane.
pub(crate) fn chapter_layout(body: Rect) -> ChapterLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(body);

    let direction = if rows[1].width >= 72 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let list_share = match direction {
        Direction::Horizontal => Constraint::Percentage(34),
        Direction::Vertical => Constraint::Percentage(30),
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([list_share, Constraint::Min(1)])
        .split(rows[1]);

    ChapterLayout {
        header: rows[0],
        list: panes[0],
        detail: panes[1],
        footer: rows[2],
    }
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
