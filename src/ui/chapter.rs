use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::content::{Chapter, Event, Labels};
use crate::presenter::ImagePresenter;

use super::layout::chapter_layout;
use super::photo::draw_photo;
use super::text::{markup_lines, truncate_to_width};
use super::{FrameReport, ScreenView};

const CURSOR: &str = "\u{25b8} ";
const PIN: &str = "\u{1f4cd}";

pub(crate) fn draw_chapter(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ScreenView<'_>,
    presenter: &mut dyn ImagePresenter,
    report: &mut FrameReport,
) {
    let chapter_count = view.content.chapter_count();
    let Some(index) = view.state.screen.chapter_index(chapter_count) else {
        return;
    };
    let Some(chapter) = view.content.chapter(index) else {
        return;
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let layout = chapter_layout(area);
    let labels = &view.content.journal().labels;
    draw_header(frame, layout.header, chapter);
    draw_event_list(frame, layout.list, chapter, view.state.chapter_view.focused_event);
    if let Some(event) = chapter.events.get(view.state.chapter_view.focused_event) {
        draw_event_detail(frame, layout.detail, event, view, presenter, report);
    }
    draw_footer(frame, layout.footer, labels, index + 1 == chapter_count);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, chapter: &Chapter) {
    let mut volume = format!("Volume {}", chapter.id);
    if !chapter.year.is_empty() {
        volume.push_str(&format!(" | {}", chapter.year));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            volume,
            Style::default().fg(Color::LightMagenta),
        )),
        Line::from(Span::styled(
            chapter.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];
    if !chapter.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", chapter.subtitle),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_event_list(frame: &mut Frame<'_>, area: Rect, chapter: &Chapter, focused: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 || chapter.events.is_empty() {
        return;
    }

    let visible = usize::from(inner.height);
    let start = focused.saturating_sub(visible.saturating_sub(1));
    let width = usize::from(inner.width);
    let lines: Vec<Line<'_>> = chapter
        .events
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(index, event)| event_card_line(event, index == focused, width))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn event_card_line(event: &Event, focused: bool, width: usize) -> Line<'static> {
    let cursor = if focused { CURSOR } else { "  " };
    let badge = if event.month.is_empty() {
        String::new()
    } else {
        format!("[{}] ", event.month)
    };
    let used = cursor.width() + badge.width();
    let title = truncate_to_width(&event.title, width.saturating_sub(used));

    let title_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(cursor, Style::default().fg(Color::LightMagenta)),
        Span::styled(badge, Style::default().fg(Color::Cyan)),
        Span::styled(title, title_style),
    ])
}

fn draw_event_detail(
    frame: &mut Frame<'_>,
    area: Rect,
    event: &Event,
    view: &ScreenView<'_>,
    presenter: &mut dyn ImagePresenter,
    report: &mut FrameReport,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let photo = event
        .img
        .as_deref()
        .and_then(|reference| view.content.resolve_image(reference));
    let photo_height = if photo.is_some() { inner.height * 2 / 5 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(photo_height), Constraint::Min(0)])
        .split(inner);
    draw_photo(frame, rows[0], photo.as_ref(), presenter, report);

    let labels = &view.content.journal().labels;
    let mut head = vec![Line::from(Span::styled(
        event.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if !event.loc_name.is_empty() {
        head.push(Line::from(vec![
            Span::styled(format!("{PIN} {}: ", labels.location), Style::default().fg(Color::Gray)),
            Span::raw(event.loc_name.clone()),
        ]));
    }
    if let Some(url) = event.loc_url.as_deref() {
        head.push(Line::from(Span::styled(
            url.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        )));
    }
    head.push(Line::default());

    let text_area = rows[1];
    let head_height = (head.len() as u16).min(text_area.height);
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(head_height), Constraint::Min(0)])
        .split(text_area);
    frame.render_widget(
        Paragraph::new(head).wrap(Wrap { trim: true }),
        sections[0],
    );
    draw_description(frame, sections[1], event, view);
}

fn draw_description(frame: &mut Frame<'_>, area: Rect, event: &Event, view: &ScreenView<'_>) {
    if area.height == 0 {
        return;
    }

    let focused = view.state.chapter_view.focused_event;
    let expandable = event.desc_len() > view.ui.expand_threshold_chars;
    let expanded = expandable && view.state.expansion.is_expanded(focused);
    let body = Paragraph::new(markup_lines(&event.desc, Style::default()))
        .wrap(Wrap { trim: true });

    if !expandable {
        frame.render_widget(body.scroll((view.state.chapter_view.detail_scroll, 0)), area);
        return;
    }

    let text_height = area.height.saturating_sub(1);
    let text_height = if expanded {
        text_height
    } else {
        text_height.min(view.ui.collapsed_lines.max(1))
    };
    let text_area = Rect::new(area.x, area.y, area.width, text_height);
    let body = if expanded {
        body.scroll((view.state.chapter_view.detail_scroll, 0))
    } else {
        body
    };
    frame.render_widget(body, text_area);

    let labels = &view.content.journal().labels;
    let control = if expanded {
        format!("[e] {} \u{25b2}", labels.read_less)
    } else {
        format!("\u{2026} [e] {} \u{25bc}", labels.read_more)
    };
    let control_area = Rect::new(area.x, area.y + text_height, area.width, 1);
    if control_area.y < area.y + area.height {
        frame.render_widget(
            Paragraph::new(control).style(Style::default().fg(Color::LightMagenta)),
            control_area,
        );
    }
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, labels: &Labels, last_chapter: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let next = if last_chapter {
        &labels.finish
    } else {
        &labels.next
    };
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    frame.render_widget(
        Paragraph::new("[\u{2190}]").style(Style::default().fg(Color::Gray)),
        halves[0],
    );
    frame.render_widget(
        Paragraph::new(format!("[{next} \u{2192}]"))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Black).bg(Color::LightMagenta)),
        halves[1],
    );
}
