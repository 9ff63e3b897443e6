use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::content::Journal;

use super::layout::centered_rect;
use super::text::center_pad;

const HEART: &str = "\u{2665}";
const BUTTON_WIDTH: usize = 24;

pub(crate) fn draw_intro(frame: &mut Frame<'_>, area: Rect, journal: &Journal) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let labels = &journal.labels;
    let accent = Style::default().fg(Color::LightMagenta);
    let lines = vec![
        Line::from(Span::styled(HEART, accent.add_modifier(Modifier::BOLD))),
        Line::default(),
        Line::from(Span::styled(
            labels.kicker.to_uppercase(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", labels.heading),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                labels.heading_accent.clone(),
                accent.add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!(
                "{} & {}",
                journal.people.your_name, journal.people.partner_name
            ),
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("[{}]", center_pad(&format!("{} \u{2192}", labels.start), BUTTON_WIDTH)),
            Style::default().fg(Color::Black).bg(Color::LightMagenta),
        )),
    ];

    let height = lines.len() as u16;
    let block = centered_rect(area, area.width, height);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), block);
}
