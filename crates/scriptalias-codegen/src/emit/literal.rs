//! C# literal syntax.

use std::fmt::Write;

/// Quoted string literal.
pub(crate) fn string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            _ => escape_into(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// Quoted char literal.
pub(crate) fn character(c: char) -> String {
    let mut out = String::with_capacity(4);
    out.push('\'');
    match c {
        '\'' => out.push_str("\\'"),
        _ => escape_into(&mut out, c),
    }
    out.push('\'');
    out
}

/// Floating point literal; always carries a decimal point. `None` if not finite.
pub(crate) fn float(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let mut s = value.to_string();
    if !s.contains('.') {
        s.push_str(".0");
    }
    Some(s)
}

fn escape_into(out: &mut String, c: char) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\0' => out.push_str("\\0"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        c if c.is_control() => {
            let _ = write!(out, "\\u{:04X}", c as u32);
        }
        c => out.push(c),
    }
}
