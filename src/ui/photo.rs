use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content::ImageRef;
use crate::presenter::{ImageDraw, ImagePresenter};

use super::FrameReport;

/// Draws a framed photo slot. Photos that cannot be shown leave their
/// reference as a link-style caption instead.
pub(crate) fn draw_photo(
    frame: &mut Frame<'_>,
    area: Rect,
    image: Option<&ImageRef>,
    presenter: &mut dyn ImagePresenter,
    report: &mut FrameReport,
) {
    let Some(image) = image else {
        return;
    };
    if area.width < 3 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match presenter.draw(frame, inner, image) {
        ImageDraw::Drawn => {}
        ImageDraw::Pending => {
            report.photos_pending = true;
            frame.render_widget(
                Paragraph::new("loading photo…")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Yellow)),
                inner,
            );
        }
        ImageDraw::Unavailable(reason) => {
            let caption = match image {
                ImageRef::Remote(url) => format!("\u{1f5bc} {url}"),
                ImageRef::Local(_) => format!("\u{1f5bc} {reason}"),
            };
            frame.render_widget(
                Paragraph::new(caption)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .style(
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                inner,
            );
        }
    }
}
