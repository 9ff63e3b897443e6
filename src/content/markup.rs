//! Inline markup used by event descriptions.
//!
//! Descriptions are author-controlled, so this is an interpreter for a small
//! set of presentational tags rather than a sanitizer. Unknown tags are
//! dropped and their inner text kept. Whitespace collapses the way a browser
//! would collapse it inside a paragraph.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text { text: String, style: InlineStyle },
    Break,
}

#[derive(Default)]
struct StyleDepth {
    bold: usize,
    italic: usize,
    underline: usize,
}

impl StyleDepth {
    fn current(&self) -> InlineStyle {
        InlineStyle {
            bold: self.bold > 0,
            italic: self.italic > 0,
            underline: self.underline > 0,
        }
    }

    fn apply(&mut self, tag: &str, closing: bool) {
        let slot = match tag {
            "b" | "strong" => &mut self.bold,
            "i" | "em" => &mut self.italic,
            "u" => &mut self.underline,
            _ => return,
        };
        if closing {
            *slot = slot.saturating_sub(1);
        } else {
            *slot += 1;
        }
    }
}

struct SegmentBuilder {
    segments: Vec<Segment>,
    pending: String,
    pending_style: InlineStyle,
    last_was_space: bool,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            pending: String::new(),
            pending_style: InlineStyle::default(),
            // Leading whitespace is dropped.
            last_was_space: true,
        }
    }

    fn push_char(&mut self, ch: char, style: InlineStyle) {
        if style != self.pending_style {
            self.flush();
            self.pending_style = style;
        }
        if ch.is_whitespace() && ch != '\u{a0}' {
            if self.last_was_space {
                return;
            }
            self.pending.push(' ');
            self.last_was_space = true;
            return;
        }
        self.pending.push(ch);
        self.last_was_space = false;
    }

    fn push_break(&mut self) {
        self.flush();
        self.segments.push(Segment::Break);
        self.last_was_space = true;
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.segments.push(Segment::Text {
            text: std::mem::take(&mut self.pending),
            style: self.pending_style,
        });
    }

    fn finish(mut self) -> Vec<Segment> {
        if self.pending.ends_with(' ') {
            self.pending.pop();
        }
        self.flush();
        self.segments
    }
}

pub fn parse_markup(input: &str) -> Vec<Segment> {
    let mut builder = SegmentBuilder::new();
    let mut depth = StyleDepth::default();
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch == '<'
            && let Some(end) = rest.find('>')
        {
            let (name, closing) = tag_name(&rest[1..end]);
            match name.as_str() {
                "br" => builder.push_break(),
                "p" | "div" if closing => builder.push_break(),
                _ => depth.apply(&name, closing),
            }
            rest = &rest[end + 1..];
            continue;
        }

        if ch == '&'
            && let Some((decoded, consumed)) = decode_entity(rest)
        {
            builder.push_char(decoded, depth.current());
            rest = &rest[consumed..];
            continue;
        }

        builder.push_char(ch, depth.current());
        rest = &rest[ch.len_utf8()..];
    }

    builder.finish()
}

/// Description text with markup removed; breaks become newlines.
pub fn plain_text(input: &str) -> String {
    let mut out = String::new();
    for segment in parse_markup(input) {
        match segment {
            Segment::Text { text, .. } => out.push_str(&text),
            Segment::Break => out.push('\n'),
        }
    }
    out
}

fn tag_name(inner: &str) -> (String, bool) {
    let inner = inner.trim();
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(stripped) => (true, stripped),
        None => (false, inner),
    };
    let name = inner
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    (name, closing)
}

fn decode_entity(input: &str) -> Option<(char, usize)> {
    let end = input.char_indices().take(10).find(|(_, ch)| *ch == ';')?.0;
    let name = &input[1..end];
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" | "#39" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse::<u32>().ok()?,
            };
            char::from_u32(value)?
        }
    };
    Some((decoded, end + 1))
}
