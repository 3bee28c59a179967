//! Literal parsing for SIC - turns a single token into a value
//!
//! Classification order, first match wins: number, quoted string, single
//! code point, bracketed array, fallback text. The fallback is what makes
//! undefined identifiers land on the stack as `Text`.

use crate::value::{Array, Value};

fn is_number(token: &str) -> bool {
    // Full parse only: trailing garbage disqualifies ("5x" is not a number)
    token.parse::<f64>().is_ok()
}

fn is_single_char(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(_), None))
}

fn is_string_literal(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('"') && token.ends_with('"')
}

fn is_array_literal(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('[') && token.ends_with(']')
}

fn trim_spaces(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

/// Split the interior of a bracketed literal on top-level commas,
/// respecting nested quotes and brackets. Each piece is trimmed; empty
/// pieces are dropped.
fn parse_array_tokens(token: &str) -> Vec<String> {
    let interior = &token[1..token.len() - 1];
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut bracket_depth = 0i32;
    let mut in_quotes = false;
    let mut prev: Option<char> = None;

    for c in interior.chars() {
        if c == '"' && prev != Some('\\') {
            in_quotes = !in_quotes;
            current.push(c);
        } else if in_quotes {
            current.push(c);
        } else if c == '[' {
            bracket_depth += 1;
            current.push(c);
        } else if c == ']' {
            bracket_depth -= 1;
            current.push(c);
        } else if c == ',' && bracket_depth == 0 {
            let piece = trim_spaces(&current);
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }
            current.clear();
        } else {
            current.push(c);
        }
        prev = Some(c);
    }
    let piece = trim_spaces(&current);
    if !piece.is_empty() {
        pieces.push(piece.to_string());
    }
    pieces
}

/// Parse one token into a single element.
pub fn parse_element(token: &str) -> Value {
    if let Ok(n) = token.parse::<f64>() {
        Value::Number(n)
    } else if is_string_literal(token) {
        Value::Text(token[1..token.len() - 1].to_string())
    } else if is_single_char(token) {
        // A lone digit was already a number above; a lone letter is a char
        match token.chars().next() {
            Some(c) => Value::Char(c),
            None => Value::Text(String::new()),
        }
    } else if is_array_literal(token) {
        Value::Array(parse_array(token))
    } else {
        Value::Text(token.to_string())
    }
}

/// Parse one token into an array. Non-array classifications are wrapped in
/// a length-1 array, so every stack slot is an array.
pub fn parse_array(token: &str) -> Array {
    if !is_array_literal(token) {
        return vec![parse_element(token)];
    }
    parse_array_tokens(token)
        .iter()
        .map(|piece| parse_element(piece))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number() {
        assert_eq!(parse_array("5"), vec![Value::Number(5.0)]);
        assert_eq!(parse_array("-2.5e1"), vec![Value::Number(-25.0)]);
    }

    #[test]
    fn parse_number_rejects_trailing_garbage() {
        assert_eq!(parse_array("5x"), vec![Value::Text("5x".into())]);
    }

    #[test]
    fn parse_string_literal() {
        assert_eq!(parse_array("\"hi\""), vec![Value::Text("hi".into())]);
        assert_eq!(parse_array("\"\""), vec![Value::Text(String::new())]);
    }

    #[test]
    fn parse_single_char() {
        assert_eq!(parse_array("x"), vec![Value::Char('x')]);
        // A lone digit is a number, not a char
        assert_eq!(parse_array("7"), vec![Value::Number(7.0)]);
    }

    #[test]
    fn parse_flat_array() {
        assert_eq!(
            parse_array("[1,2]"),
            vec![Value::Number(1.0), Value::Number(2.0)]
        );
    }

    #[test]
    fn parse_nested_array() {
        assert_eq!(
            parse_array("[1, [2, 3], \"a b\"]"),
            vec![
                Value::Number(1.0),
                Value::Array(vec![Value::Number(2.0), Value::Number(3.0)]),
                Value::Text("a b".into()),
            ]
        );
    }

    #[test]
    fn parse_array_drops_empty_pieces() {
        assert_eq!(
            parse_array("[1, , 2,]"),
            vec![Value::Number(1.0), Value::Number(2.0)]
        );
        assert_eq!(parse_array("[]"), Vec::<Value>::new());
    }

    #[test]
    fn parse_array_trims_spaces_and_tabs() {
        assert_eq!(
            parse_array("[ 1 ,\t2 ]"),
            vec![Value::Number(1.0), Value::Number(2.0)]
        );
    }

    #[test]
    fn parse_fallback_is_text() {
        assert_eq!(parse_array("frobnicate"), vec![Value::Text("frobnicate".into())]);
        assert_eq!(parse_array(":end"), vec![Value::Text(":end".into())]);
    }

    #[test]
    fn parse_comma_inside_quotes_does_not_split() {
        assert_eq!(
            parse_array("[\"a, b\", 1]"),
            vec![Value::Text("a, b".into()), Value::Number(1.0)]
        );
    }
}
