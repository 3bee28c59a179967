//! Tokenization for SIC
//!
//! A token is either a bracketed array literal (kept whole, including any
//! internal whitespace and commas), or a run of non-whitespace characters.
//! Double quotes suspend all splitting, so `a"b c"d` is a single token.
//!
//! The scanner itself is a small state machine (quote toggle plus bracket
//! depth) exposed as a nom primitive and driven by nom's combinators.

use nom::{
    character::complete::multispace0,
    error::{Error, ErrorKind},
    multi::many0,
    sequence::preceded,
    IResult,
};

/// Consume one token from the front of the input.
///
/// A token ends at whitespace outside quotes at bracket depth 0, at the `]`
/// that returns the depth to 0 (emitted immediately, so `[1,2]x` splits into
/// `[1,2]` and `x`), or at end of input. Unterminated quotes and brackets
/// are not rejected; whatever accumulated is the token.
fn token(input: &str) -> IResult<&str, String> {
    let mut current = String::new();
    let mut in_quotes = false;
    let mut bracket_depth = 0i32;
    let mut prev: Option<char> = None;

    for (idx, c) in input.char_indices() {
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
            if bracket_depth == 0 {
                return Ok((&input[idx + c.len_utf8()..], current));
            }
        } else if c.is_whitespace() && bracket_depth == 0 {
            if !current.is_empty() {
                return Ok((&input[idx..], current));
            }
            // whitespace the surrounding combinator did not strip
        } else {
            current.push(c);
        }
        prev = Some(c);
    }

    if current.is_empty() {
        Err(nom::Err::Error(Error::new(input, ErrorKind::Eof)))
    } else {
        Ok(("", current))
    }
}

/// Tokenize a complete input line. Never fails; no token is ever empty.
pub fn tokenize(input: &str) -> Vec<String> {
    let result: IResult<&str, Vec<String>> = many0(preceded(multispace0, token))(input);
    match result {
        Ok((_, tokens)) => tokens,
        Err(_) => Vec::new(),
    }
}
