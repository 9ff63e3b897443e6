use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::content::{Labels, ModalContent};
use crate::presenter::ImagePresenter;

use super::layout::centered_rect;
use super::photo::draw_photo;
use super::text::markup_lines;
use super::{FrameReport, ScreenView};

pub(crate) fn draw_modal(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ScreenView<'_>,
    presenter: &mut dyn ImagePresenter,
    report: &mut FrameReport,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup_width = area.width.saturating_sub(4).min(72);
    let popup_height = area.height.saturating_sub(2).max(1);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightMagenta))
        .title(" \u{2665} ")
        .title_bottom(Line::from(" Esc ").right_aligned());
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let modal = &view.content.journal().modal;
    let labels = &view.content.journal().labels;
    let photo = modal
        .img
        .as_deref()
        .and_then(|reference| view.content.resolve_image(reference));
    let photo_height = if photo.is_some() { inner.height / 3 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(photo_height), Constraint::Min(0)])
        .split(inner);
    draw_photo(frame, rows[0], photo.as_ref(), presenter, report);

    frame.render_widget(
        Paragraph::new(modal_lines(modal, labels))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}

fn modal_lines(modal: &ModalContent, labels: &Labels) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !modal.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            modal.subtitle.to_uppercase(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::from(Span::styled(
        modal.title.clone(),
        Style::default()
            .fg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(url) = modal.map_url.as_deref() {
        lines.push(Line::from(Span::styled(
            url.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(format!("{}: ", labels.date), Style::default().fg(Color::Gray)),
        Span::styled(modal.date.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(format!("{}: ", labels.time), Style::default().fg(Color::Gray)),
        Span::styled(modal.time.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::default());
    lines.extend(markup_lines(&modal.desc, Style::default()));
    lines
}
