use crate::error::AppResult;
use crate::ui::{self, FrameReport, ScreenView};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<FrameReport> {
        let view = ScreenView {
            state: &self.state,
            content: &self.content,
            ui: &self.config.ui,
        };
        let presenter = self.presenter.as_mut();
        let mut report = FrameReport::default();
        session.draw(|frame| {
            report = ui::draw_app(frame, &view, presenter);
        })?;
        Ok(report)
    }
}
