use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::nav::encode_position;

use super::text::truncate_to_width;

pub fn status_text(app: &AppState, chapter_count: usize, presenter_label: &str) -> String {
    let screen = match app.screen.chapter_index(chapter_count) {
        Some(index) => format!("chapter {}/{}", index + 1, chapter_count),
        None => app.screen.label(),
    };
    let message = if app.status.message.is_empty() {
        "-"
    } else {
        app.status.message.as_str()
    };
    format!(
        "?{} | {} | {} | {} | {}",
        encode_position(app.screen),
        screen,
        app.mode().as_str(),
        message,
        presenter_label
    )
}

pub fn draw_status_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    app: &AppState,
    chapter_count: usize,
    presenter_label: &str,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let text = truncate_to_width(
        &status_text(app, chapter_count, presenter_label),
        usize::from(area.width),
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray).bg(Color::Black)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use crate::app::AppState;
    use crate::nav::Screen;

    use super::status_text;

    #[test]
    fn status_text_shows_shareable_position_and_mode() {
        let mut app = AppState::with_screen(Screen::Chapter(1));
        app.status.message = "chapter 2/3".to_string();

        assert_eq!(
            status_text(&app, 3, "text-only"),
            "?step=chapter&id=1 | chapter 2/3 | BROWSE | chapter 2/3 | text-only"
        );
    }

    #[test]
    fn status_text_for_out_of_range_chapter_uses_plain_label() {
        let app = AppState::with_screen(Screen::Chapter(7));
        assert_eq!(
            status_text(&app, 2, "x"),
            "?step=chapter&id=7 | chapter 8 | BROWSE | - | x"
        );
    }
}
