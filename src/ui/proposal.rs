use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::content::Proposal;
use crate::nav::{Side, ToggleState};
use crate::presenter::ImagePresenter;

use super::photo::draw_photo;
use super::text::{center_pad, markup_lines};
use super::{FrameReport, ScreenView};

const BUTTON_WIDTH: usize = 18;

/// The label each button carries. The affirmative side always reads "yes".
pub(crate) fn button_labels<'a>(proposal: &'a Proposal, toggle: &ToggleState) -> [&'a str; 2] {
    [Side::Left, Side::Right].map(|side| {
        if toggle.is_affirmative(side) {
            proposal.yes_label.as_str()
        } else {
            proposal.no_label.as_str()
        }
    })
}

pub(crate) fn draw_proposal(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &ScreenView<'_>,
    presenter: &mut dyn ImagePresenter,
    report: &mut FrameReport,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let proposal = &view.content.journal().proposal;
    let hero = view.content.hero_image();
    let hero_height = if hero.is_some() { area.height * 2 / 5 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(hero_height),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let hero_area = Rect::new(
        rows[0].x + rows[0].width / 4,
        rows[0].y,
        rows[0].width / 2,
        rows[0].height,
    );
    draw_photo(frame, hero_area, hero.as_ref(), presenter, report);

    let accent = Style::default().fg(Color::LightMagenta);
    let mut lines = vec![
        Line::from(Span::styled("\u{2665}", accent.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            proposal.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(markup_lines(&proposal.body, Style::default().fg(Color::Gray)));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    draw_buttons(frame, rows[2], proposal, &view.state.toggle);
    frame.render_widget(
        Paragraph::new(proposal.footer.clone())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        rows[4],
    );
}

fn draw_buttons(frame: &mut Frame<'_>, area: Rect, proposal: &Proposal, toggle: &ToggleState) {
    let [left, right] = button_labels(proposal, toggle);
    let yes = Style::default()
        .fg(Color::Black)
        .bg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD);
    let no = Style::default().fg(Color::Gray).bg(Color::DarkGray);
    let style_for = |side: Side| if toggle.is_affirmative(side) { yes } else { no };

    let line = Line::from(vec![
        Span::styled(format!("[{}]", center_pad(left, BUTTON_WIDTH)), style_for(Side::Left)),
        Span::raw("    "),
        Span::styled(format!("[{}]", center_pad(right, BUTTON_WIDTH)), style_for(Side::Right)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
