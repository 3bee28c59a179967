//! Human-readable rendering of arrays
//!
//! Flat arrays print on one line, space-separated. An array with any array
//! child prints multi-line, one element per line, indented two spaces per
//! nesting level, commas between siblings.

use crate::value::{Array, Value};

/// Format a number the way it was most likely written: integral values
/// without a fractional part, everything else via the default float display.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn format_element(elem: &Value) -> String {
    match elem {
        Value::Number(n) => format_number(*n),
        Value::Char(c) => c.to_string(),
        Value::Text(s) => format!("\"{}\"", s),
        Value::Array(sub) => format_array(sub, 0),
    }
}

/// Render an array at the given indentation level (two spaces per level).
pub fn format_array(arr: &Array, indent: usize) -> String {
    let pad = "  ".repeat(indent);
    let mut out = String::new();
    out.push_str(&pad);
    out.push('[');

    if arr.is_empty() {
        out.push(']');
        return out;
    }

    let nested = arr.iter().any(Value::is_array);
    if nested {
        out.push('\n');
        for (i, elem) in arr.iter().enumerate() {
            match elem {
                Value::Array(sub) => out.push_str(&format_array(sub, indent + 1)),
                other => {
                    out.push_str(&"  ".repeat(indent + 1));
                    out.push_str(&format_element(other));
                }
            }
            out.push_str(if i + 1 < arr.len() { ",\n" } else { "\n" });
        }
        out.push_str(&pad);
        out.push(']');
    } else {
        for (i, elem) in arr.iter().enumerate() {
            out.push_str(&format_element(elem));
            if i + 1 < arr.len() {
                out.push(' ');
            }
        }
        out.push(']');
    }
    out
}
