use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::content::{InlineStyle, Segment, parse_markup};

const ELLIPSIS: &str = "…";

/// Converts author markup into styled lines. Each `<br>` starts a new line.
pub(crate) fn markup_lines(raw: &str, base: Style) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();

    for segment in parse_markup(raw) {
        match segment {
            Segment::Text { text, style } => spans.push(Span::styled(text, apply_inline(base, style))),
            Segment::Break => lines.push(Line::from(std::mem::take(&mut spans))),
        }
    }
    if !spans.is_empty() || lines.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn apply_inline(base: Style, inline: InlineStyle) -> Style {
    let mut style = base;
    if inline.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if inline.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if inline.underline {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    style
}

/// Cuts `text` to at most `max_width` terminal columns without splitting a
/// grapheme, ending with an ellipsis when anything was dropped.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if used + width > budget {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    out.push_str(ELLIPSIS);
    out
}

/// Pads a label on both sides so it sits centred in `width` columns.
pub(crate) fn center_pad(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let free = width.saturating_sub(text.width());
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(free - left))
}
