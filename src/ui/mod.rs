mod chapter;
mod chrome;
mod intro;
mod layout;
mod modal;
mod photo;
mod proposal;
mod text;

use ratatui::Frame;
use ratatui::widgets::Clear;

use crate::app::AppState;
use crate::config::UiConfig;
use crate::content::ContentSource;
use crate::nav::Screen;
use crate::presenter::ImagePresenter;

pub use chrome::{draw_status_bar, status_text};
pub use layout::{UiLayout, split_layout};

/// Everything a frame is drawn from. Borrowed for the duration of one draw.
#[derive(Debug, Clone, Copy)]
pub struct ScreenView<'a> {
    pub state: &'a AppState,
    pub content: &'a ContentSource,
    pub ui: &'a UiConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub photos_pending: bool,
}

pub fn draw_app(
    frame: &mut Frame<'_>,
    view: &ScreenView<'_>,
    presenter: &mut dyn ImagePresenter,
) -> FrameReport {
    let mut report = FrameReport::default();
    let layout = split_layout(frame.area());
    frame.render_widget(Clear, layout.body);

    match view.state.screen {
        Screen::Intro => intro::draw_intro(frame, layout.body, view.content.journal()),
        Screen::Chapter(_) => {
            chapter::draw_chapter(frame, layout.body, view, presenter, &mut report)
        }
        Screen::Final => {
            proposal::draw_proposal(frame, layout.body, view, presenter, &mut report)
        }
    }
    if view.state.modal.is_visible() {
        modal::draw_modal(frame, layout.body, view, presenter, &mut report);
    }

    let presenter_label = presenter.status_label();
    draw_status_bar(
        frame,
        layout.status,
        view.state,
        view.content.chapter_count(),
        &presenter_label,
    );
    report
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
