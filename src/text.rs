//! Fixed-width text helpers.
//!
//! Widths are counted in characters, and terminal color sequences are
//! never counted, so an emphasized cell lines up with a plain one.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Centers `s` in a field of `width` characters.
///
/// The left side gets `floor(pad / 2)` spaces and the right side the rest,
/// so an odd amount of padding leaves the extra space on the right. When
/// `s` is already at least `width` characters wide it is returned as is.
pub fn center(width: usize, s: &str) -> String {
    let len = s.chars().count();
    if width <= len {
        return s.to_string();
    }
    let total_pad = width - len;
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;
    format!("{}{}{}", " ".repeat(left_pad), s, " ".repeat(right_pad))
}

/// Removes CSI escape sequences (`ESC [` ... final byte) from `s`.
///
/// Borrows `s` unchanged when it holds no escape character.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ESC {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // Parameter and intermediate bytes, then one final byte.
            for p in chars.by_ref() {
                if ('@'..='~').contains(&p) {
                    break;
                }
            }
        }
    }
    Cow::Owned(out)
}

/// Number of characters a terminal will actually display for `s`.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Left-justifies `s` in a field of `width` visible characters.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
