use crate::app::App;
use crate::config::Config;
use crate::nav::Screen;

use super::{SharedStore, journal};

#[test]
fn new_with_images_disabled_uses_text_only_presenter() {
    let mut config = Config::default();
    config.ui.show_images = false;

    let app = App::new(journal(), config, Box::new(SharedStore::default()), None)
        .expect("app init");

    assert_eq!(app.presenter.status_label(), "text-only");
    assert_eq!(app.state.screen, Screen::Intro);
}

#[test]
fn new_with_images_enabled_starts_on_halfblocks() {
    let app = App::new(
        journal(),
        Config::default(),
        Box::new(SharedStore::default()),
        Some(Screen::Chapter(1)),
    )
    .expect("app init");

    assert_eq!(app.presenter.status_label(), "ratatui-image/halfblocks");
    assert_eq!(app.position(), "step=chapter&id=1");
}
