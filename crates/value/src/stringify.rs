//! Text rendering of [`TreeValue`] trees.

use crate::TreeValue;

/// Render `value` to its text form.
///
/// The grammar is JSON-shaped but intentionally minimal: strings are wrapped
/// in quotes with **no escaping** of embedded quote or control characters,
/// numbers are decimal integers, and object fields render in insertion order.
/// Output containing a literal `"` inside a string is therefore not valid
/// JSON; use [`stringify_escaped`] when conformant output is required.
///
/// Pure and total: two calls on the same tree yield identical strings, and
/// recursion depth equals tree depth, which is always finite.
pub fn stringify(value: &TreeValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value, false);
    out
}

/// Render `value` like [`stringify`], but escape string contents per standard
/// JSON rules (`"`, `\`, and control characters below U+0020).
///
/// For trees whose strings contain none of those characters the output is
/// byte-identical to [`stringify`].
pub fn stringify_escaped(value: &TreeValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value, true);
    out
}

fn write_value(out: &mut String, value: &TreeValue, escape: bool) {
    match value {
        TreeValue::Str(s) => write_str(out, s, escape),
        TreeValue::Num(n) => out.push_str(&n.to_string()),
        TreeValue::Arr(xs) => {
            out.push('[');
            for (i, x) in xs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, x, escape);
            }
            out.push(']');
        }
        TreeValue::Obj(fields) => {
            out.push('{');
            for (i, (k, v)) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_str(out, k, escape);
                out.push(':');
                write_value(out, v, escape);
            }
            out.push('}');
        }
    }
}

fn write_str(out: &mut String, s: &str, escape: bool) {
    out.push('"');
    if escape {
        for ch in s.chars() {
            match ch {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{0008}' => out.push_str("\\b"),
                '\u{000C}' => out.push_str("\\f"),
                c if c < '\u{0020}' => {
                    out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => out.push(c),
            }
        }
    } else {
        out.push_str(s);
    }
    out.push('"');
}
