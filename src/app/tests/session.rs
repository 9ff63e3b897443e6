use crate::app::Mode;
use crate::command::{ActionId, Command, CommandOutcome};
use crate::nav::{Screen, Side};

use super::{SharedStore, app_with_store};

fn run(app: &mut crate::app::App, command: Command) -> CommandOutcome {
    app.apply_command(command).expect("command should apply")
}

#[test]
fn session_restores_the_stored_position() {
    let store = SharedStore::with_value("step=chapter&id=1");
    let app = app_with_store(store.clone(), None);

    assert_eq!(app.state.screen, Screen::Chapter(1));
    assert_eq!(store.writes(), 0);
}

#[test]
fn shared_position_overrides_and_replaces_the_stored_one() {
    let store = SharedStore::with_value("step=intro");
    let app = app_with_store(store.clone(), Some(Screen::Final));

    assert_eq!(app.state.screen, Screen::Final);
    assert_eq!(store.value().as_deref(), Some("step=final"));
    assert_eq!(app.position(), "step=final");
}

#[test]
fn garbage_in_the_store_starts_at_intro() {
    let app = app_with_store(SharedStore::with_value("%%%"), None);
    assert_eq!(app.state.screen, Screen::Intro);
}

#[test]
fn every_transition_is_persisted() {
    let store = SharedStore::default();
    let mut app = app_with_store(store.clone(), None);

    run(&mut app, Command::Next);
    assert_eq!(store.value().as_deref(), Some("step=chapter&id=0"));

    run(&mut app, Command::Next);
    run(&mut app, Command::Next);
    assert_eq!(store.value().as_deref(), Some("step=final"));
    assert_eq!(store.writes(), 3);

    assert_eq!(run(&mut app, Command::Next), CommandOutcome::Noop);
    assert_eq!(store.writes(), 3);
}

#[test]
fn failed_save_keeps_the_session_going() {
    let store = SharedStore {
        read_only: true,
        ..SharedStore::default()
    };
    let mut app = app_with_store(store, None);

    assert_eq!(run(&mut app, Command::Next), CommandOutcome::Applied);

    assert_eq!(app.state.screen, Screen::Chapter(0));
    assert_eq!(
        app.state.status.last_action_id,
        Some(ActionId::PersistPosition)
    );
    assert!(app.state.status.message.contains("position not saved"));
}

#[test]
fn proposal_flow_reaches_the_modal_without_persisting_it() {
    let store = SharedStore::with_value("step=final");
    let mut app = app_with_store(store.clone(), None);

    run(&mut app, Command::ActivateSide { side: Side::Right });
    run(&mut app, Command::ActivateAffirmative);

    assert_eq!(app.state.mode(), Mode::Modal);
    assert_eq!(store.writes(), 0);

    run(&mut app, Command::CloseModal);
    assert_eq!(app.state.mode(), Mode::Proposal);
    assert_eq!(app.position(), "step=final");
}

#[test]
fn quitting_right_after_a_transition_keeps_the_new_position() {
    let store = SharedStore::default();
    let mut app = app_with_store(store.clone(), None);

    assert_eq!(run(&mut app, Command::Next), CommandOutcome::Applied);
    assert_eq!(run(&mut app, Command::Quit), CommandOutcome::QuitRequested);

    assert_eq!(store.value().as_deref(), Some("step=chapter&id=0"));
    assert_eq!(app.position(), "step=chapter&id=0");
}
