//! Shareable position strings: `step=chapter&id=2`.
//!
//! Decoding never fails. A missing or unknown `step` means intro and a
//! missing or unparsable `id` means chapter 0, so whatever a user pastes
//! always lands somewhere.

use tracing::debug;

use super::screen::Screen;

const STEP_KEY: &str = "step";
const ID_KEY: &str = "id";

pub fn encode_position(screen: Screen) -> String {
    match screen {
        Screen::Intro => format!("{STEP_KEY}=intro"),
        Screen::Chapter(index) => format!("{STEP_KEY}=chapter&{ID_KEY}={index}"),
        Screen::Final => format!("{STEP_KEY}=final"),
    }
}

pub fn decode_position(raw: &str) -> Screen {
    let query = raw.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut step = None;
    let mut id = None;
    for part in query.split('&') {
        let mut kv = part.splitn(2, '=');
        let key = kv.next().unwrap_or_default().trim();
        let value = kv.next().unwrap_or_default().trim();
        match key {
            // First occurrence wins, as with a URL search-params `get`.
            STEP_KEY if step.is_none() => step = Some(value),
            ID_KEY if id.is_none() => id = Some(value),
            _ => {}
        }
    }

    match step {
        Some("chapter") => Screen::Chapter(id.and_then(parse_leading_index).unwrap_or(0)),
        Some("final") => Screen::Final,
        Some("intro") | None => Screen::Intro,
        Some(other) => {
            debug!(step = other, "unrecognized step in position, defaulting to intro");
            Screen::Intro
        }
    }
}

/// Parses the leading decimal digits of `value` (`"2abc"` is 2), saturating
/// on overflow. `None` when there are no leading digits. A negative number
/// names no chapter, so it maps to `usize::MAX`.
fn parse_leading_index(value: &str) -> Option<usize> {
    if let Some(magnitude) = value.strip_prefix('-') {
        return leading_digits(magnitude).map(|_| usize::MAX);
    }
    leading_digits(value.strip_prefix('+').unwrap_or(value))
}

fn leading_digits(value: &str) -> Option<usize> {
    let mut parsed: Option<usize> = None;
    for ch in value.chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        let current = parsed.unwrap_or(0);
        parsed = Some(
            current
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    if parsed.is_none() {
        debug!(id = value, "unparsable chapter id in position, defaulting to 0");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::{decode_position, encode_position};
    use crate::nav::Screen;

    #[test]
    fn encode_then_decode_reproduces_each_screen() {
        for screen in [
            Screen::Intro,
            Screen::Chapter(0),
            Screen::Chapter(7),
            Screen::Final,
        ] {
            assert_eq!(decode_position(&encode_position(screen)), screen);
        }
    }

    #[test]
    fn encode_matches_url_query_shape() {
        assert_eq!(encode_position(Screen::Chapter(3)), "step=chapter&id=3");
        assert_eq!(encode_position(Screen::Final), "step=final");
    }

    #[test]
    fn decode_accepts_leading_question_mark_and_key_order() {
        assert_eq!(decode_position("?id=2&step=chapter"), Screen::Chapter(2));
    }

    #[test]
    fn decode_falls_back_to_defaults() {
        assert_eq!(decode_position(""), Screen::Intro);
        assert_eq!(decode_position("garbage"), Screen::Intro);
        assert_eq!(decode_position("step=nowhere&id=4"), Screen::Intro);
        assert_eq!(decode_position("step=chapter"), Screen::Chapter(0));
        assert_eq!(decode_position("step=chapter&id=abc"), Screen::Chapter(0));
    }

    #[test]
    fn decode_honours_leading_digits_and_out_of_range_ids() {
        assert_eq!(decode_position("step=chapter&id=2abc"), Screen::Chapter(2));
        assert_eq!(decode_position("step=chapter&id=99"), Screen::Chapter(99));
    }

    #[test]
    fn decode_keeps_negative_ids_out_of_range() {
        let screen = decode_position("step=chapter&id=-1");
        assert!(screen.is_chapter());
        assert_eq!(screen.chapter_index(2), None);
        assert_eq!(decode_position("step=chapter&id=-"), Screen::Chapter(0));
    }

    #[test]
    fn decode_ignores_id_outside_chapter_step() {
        assert_eq!(decode_position("step=final&id=3"), Screen::Final);
    }
}
