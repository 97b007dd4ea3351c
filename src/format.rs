//! Turning rendered cells into terminal text.

use crate::screen::ScreenKind;
use aalib_sys::Attribute;

const RESET: &str = "\x1B[0m";

/// Escape sequence that introduces `attr` on a screen of `kind`, or `None`
/// when the cell is written as a bare character.
pub fn escape(kind: ScreenKind, attr: Attribute) -> Option<&'static str> {
    match (kind, attr) {
        (ScreenKind::Ansi, Attribute::Bright) => Some("\x1B[1m"),
        (ScreenKind::Linux, Attribute::Bold) => Some("\x1B[1m"),
        (ScreenKind::Linux, Attribute::Dim) => Some("\x1B[30;1m"),
        (ScreenKind::Linux, Attribute::Reverse) => Some("\x1B[7m"),
        _ => None,
    }
}

pub fn push_cell(out: &mut String, kind: ScreenKind, ch: char, attr: Attribute) {
    match escape(kind, attr) {
        Some(start) => {
            out.push_str(start);
            out.push(ch);
            out.push_str(RESET);
        }
        None => out.push(ch),
    }
}

/// Formats rows of cells, joining rows with `\n`. There is no trailing
/// newline.
pub fn format_rows(kind: ScreenKind, rows: &[Vec<(char, Attribute)>]) -> String {
    let capacity = rows.iter().map(|r| r.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for (y, row) in rows.iter().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for &(ch, attr) in row {
            push_cell(&mut out, kind, ch, attr);
        }
    }
    out
}
