use crate::app::AppState;
use crate::content::ContentSource;
use crate::nav::{Direction, Screen, Side, SideOutcome, activate_side, advance};

use super::types::{ActionId, CommandOutcome};

pub(crate) fn navigate(
    app: &mut AppState,
    direction: Direction,
    chapter_count: usize,
) -> CommandOutcome {
    let action_id = match direction {
        Direction::Next => ActionId::Next,
        Direction::Prev => ActionId::Prev,
    };
    app.status.last_action_id = Some(action_id);

    let target = advance(app.screen, direction, chapter_count);
    if !app.enter_screen(target) {
        app.status.message = match (target, direction) {
            (Screen::Final, _) => "this is the last page".to_string(),
            (_, Direction::Prev) => "already at the beginning".to_string(),
            _ => "nowhere further to go".to_string(),
        };
        return CommandOutcome::Noop;
    }

    app.status.message = match target {
        Screen::Intro => "intro".to_string(),
        Screen::Chapter(index) => format!("chapter {}/{}", index + 1, chapter_count),
        Screen::Final => "one last question".to_string(),
    };
    CommandOutcome::Applied
}

pub(crate) fn move_focus(app: &mut AppState, content: &ContentSource, delta: isize) -> CommandOutcome {
    let action_id = if delta >= 0 {
        ActionId::FocusNext
    } else {
        ActionId::FocusPrev
    };
    app.status.last_action_id = Some(action_id);

    let Some(event_count) = current_event_count(app, content) else {
        app.status.message = "no chapter on screen".to_string();
        return CommandOutcome::Noop;
    };
    if event_count == 0 {
        app.status.message = "this chapter has no memories".to_string();
        return CommandOutcome::Noop;
    }

    let current = app.chapter_view.focused_event.min(event_count - 1);
    let target = current
        .saturating_add_signed(delta)
        .min(event_count - 1);
    if target == app.chapter_view.focused_event {
        app.status.message = format!("memory {}/{}", target + 1, event_count);
        return CommandOutcome::Noop;
    }

    app.chapter_view.focused_event = target;
    app.chapter_view.detail_scroll = 0;
    app.status.message = format!("memory {}/{}", target + 1, event_count);
    CommandOutcome::Applied
}

/// Flips the focused event's description, but only when it is long enough
/// for the read-more control to be offered.
pub(crate) fn toggle_expansion(
    app: &mut AppState,
    content: &ContentSource,
    threshold_chars: usize,
) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::ToggleExpansion);

    let focused = app.chapter_view.focused_event;
    let event = app
        .screen
        .chapter_index(content.chapter_count())
        .and_then(|index| content.chapter(index))
        .and_then(|chapter| chapter.events.get(focused));
    let Some(event) = event else {
        app.status.message = "no memory selected".to_string();
        return CommandOutcome::Noop;
    };
    if event.desc_len() <= threshold_chars {
        app.status.message = "the whole story is already shown".to_string();
        return CommandOutcome::Noop;
    }

    let expanded = app.expansion.toggle(focused);
    if !expanded {
        app.chapter_view.detail_scroll = 0;
    }
    app.status.message = if expanded {
        "story expanded".to_string()
    } else {
        "story collapsed".to_string()
    };
    CommandOutcome::Applied
}

pub(crate) fn scroll_detail(app: &mut AppState, content: &ContentSource, delta: i32) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::ScrollDetail);
    if current_event_count(app, content).is_none() {
        app.status.message = "no chapter on screen".to_string();
        return CommandOutcome::Noop;
    }

    let current = app.chapter_view.detail_scroll;
    let target = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs().min(u32::from(u16::MAX)) as u16)
    } else {
        current.saturating_add(delta.unsigned_abs().min(u32::from(u16::MAX)) as u16)
    };
    if target == current {
        return CommandOutcome::Noop;
    }
    app.chapter_view.detail_scroll = target;
    CommandOutcome::Applied
}

pub(crate) fn press_side(app: &mut AppState, side: Side, action_id: ActionId) -> CommandOutcome {
    app.status.last_action_id = Some(action_id);
    if app.screen != Screen::Final {
        app.status.message = "the question comes at the end".to_string();
        return CommandOutcome::Noop;
    }

    match activate_side(&mut app.toggle, &mut app.modal, side) {
        SideOutcome::Dodged => {
            app.status.message = format!("the answer moved to the {}", side.as_str());
        }
        SideOutcome::Confirmed => {
            app.status.message = "yes!".to_string();
        }
    }
    CommandOutcome::Applied
}

pub(crate) fn close_modal(app: &mut AppState) -> CommandOutcome {
    app.status.last_action_id = Some(ActionId::CloseModal);
    if app.modal.close() {
        app.status.message = "closed".to_string();
        CommandOutcome::Applied
    } else {
        CommandOutcome::Noop
    }
}

fn current_event_count(app: &AppState, content: &ContentSource) -> Option<usize> {
    app.screen
        .chapter_index(content.chapter_count())
        .and_then(|index| content.chapter(index))
        .map(|chapter| chapter.events.len())
}
