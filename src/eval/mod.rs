//! Evaluator for SIC - stack-based execution over a token stream
//!
//! The evaluator walks a token sequence and, per token:
//! - `:dump` prints the stack (works everywhere, even inside a definition)
//! - `:name` at top level opens a definition; tokens accumulate verbatim
//!   until `:end` stores them as the function body
//! - a defined function name re-evaluates its stored body recursively
//! - a builtin name runs against the live stack
//! - anything else parses as a literal and pushes
//!
//! Lookup order is functions, then builtins, then literal, so a user
//! definition shadows a builtin of the same name.
//!
//! Errors never unwind: a failed operation reports one diagnostic line and
//! the evaluator continues with the next token. Operands popped before the
//! failure was detected stay popped.

mod array_ops;
mod broadcast;
mod helpers;
mod stack;
#[cfg(test)]
mod tests;

use crate::lexer::tokenize;
use crate::parser::parse_array;
use crate::value::Array;
use std::collections::HashMap;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("Insufficient stack elements for {0}")]
    StackUnderflow(String),
    #[error("Stack empty for {0}")]
    StackEmpty(String),
    #[error("{0} requires numeric arguments")]
    NumericOperands(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("{0} requires a scalar or arrays of equal shape")]
    ShapeMismatch(String),
    #[error("Invalid function definition")]
    InvalidDefinition,
    #[error("Recursion limit of {0} exceeded")]
    RecursionLimit(usize),
    #[error("{0}")]
    ExecError(String),
}

/// The fixed set of builtin operation names, in dispatch order.
pub const BUILTIN_NAMES: &[&str] = &[
    "+", "-", "*", "/", "^", "cat", ".", "clear", "swap", "dup", "range", "reshape", "dim",
    "matmul",
];

/// One interpreter session: the stack, the function table, and the two
/// output sinks. Instantiate one per session; nothing is shared.
pub struct Interpreter {
    /// The value stack; every slot is an array
    pub(crate) stack: Vec<Array>,
    /// User definitions: name to verbatim token body
    pub(crate) functions: HashMap<String, Vec<String>>,
    /// Where print operations write
    pub(crate) out: Box<dyn Write>,
    /// Where diagnostics write
    pub(crate) err: Box<dyn Write>,
    /// Current user-function call depth
    call_depth: usize,
    /// Ceiling that turns runaway recursion into a reported error
    max_call_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_sinks(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Build a session with explicit output and diagnostic sinks.
    pub fn with_sinks(out: Box<dyn Write>, err: Box<dyn Write>) -> Self {
        Interpreter {
            stack: Vec::new(),
            functions: HashMap::new(),
            out,
            err,
            call_depth: 0,
            max_call_depth: std::env::var("SICLANG_MAX_RECURSION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1000),
        }
    }

    /// The current stack, bottom first (for inspection and tests).
    pub fn stack(&self) -> &[Array] {
        &self.stack
    }

    pub fn is_builtin(name: &str) -> bool {
        BUILTIN_NAMES.contains(&name)
    }

    /// Sole entry point: evaluate one line of input. All output goes to the
    /// session's sinks; this never fails and never terminates the process.
    pub fn process(&mut self, line: &str) {
        let tokens = tokenize(line);
        self.evaluate(&tokens, false);
    }

    pub(crate) fn evaluate(&mut self, tokens: &[String], in_function_body: bool) {
        let mut defining = false;
        let mut func_name = String::new();
        let mut func_body: Vec<String> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if token == ":dump" {
                self.dump_stack();
                continue;
            }

            if !in_function_body && !defining && token.len() > 1 && token.starts_with(':') {
                let name = &token[1..];
                if i + 1 < tokens.len() && is_function_name(name) {
                    func_name = name.to_string();
                    defining = true;
                } else {
                    self.report(&EvalError::InvalidDefinition);
                }
                continue;
            }

            if defining {
                if token == ":end" {
                    self.functions
                        .insert(func_name.clone(), std::mem::take(&mut func_body));
                    defining = false;
                } else {
                    func_body.push(token.clone());
                }
                continue;
            }

            if let Some(body) = self.functions.get(token.as_str()).cloned() {
                if self.call_depth >= self.max_call_depth {
                    self.report(&EvalError::RecursionLimit(self.max_call_depth));
                    continue;
                }
                self.call_depth += 1;
                self.evaluate(&body, true);
                self.call_depth -= 1;
                continue;
            }

            if let Some(result) = self.try_builtin(token) {
                if let Err(e) = result {
                    self.report(&e);
                }
                continue;
            }

            self.stack.push(parse_array(token));
        }
    }

    /// Dispatch a builtin by name. `None` means the token is not a builtin
    /// and should fall through to literal parsing.
    fn try_builtin(&mut self, name: &str) -> Option<Result<(), EvalError>> {
        let result = match name {
            "+" => self.apply_binary_op("+", |x, y| x + y),
            "-" => self.apply_binary_op("-", |x, y| x - y),
            "*" => self.apply_binary_op("*", |x, y| x * y),
            "/" => self.apply_binary_op("/", |x, y| x / y),
            "^" => self.apply_binary_op("^", f64::powf),
            "cat" => self.builtin_cat(),
            "." => self.builtin_print(),
            "clear" => self.builtin_clear(),
            "swap" => self.builtin_swap(),
            "dup" => self.builtin_dup(),
            "range" => self.builtin_range(),
            "reshape" => self.builtin_reshape(),
            "dim" => self.builtin_dim(),
            "matmul" => self.builtin_matmul(),
            _ => return None,
        };
        Some(result)
    }

    /// One diagnostic line per failure; evaluation continues afterwards.
    pub(crate) fn report(&mut self, err: &EvalError) {
        let _ = writeln!(self.err, "Error: {}", err);
    }
}

/// A legal function name: non-empty, composed only of ASCII alphanumerics,
/// underscores, or non-ASCII code points, and not a reserved control token.
fn is_function_name(name: &str) -> bool {
    if name.is_empty() || name == ":end" || name == ":dump" {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || !c.is_ascii())
}

#[cfg(test)]
mod name_tests {
    use super::is_function_name;

    #[test]
    fn legal_names() {
        assert!(is_function_name("inc"));
        assert!(is_function_name("add_2"));
        assert!(is_function_name("über"));
    }

    #[test]
    fn illegal_names() {
        assert!(!is_function_name(""));
        assert!(!is_function_name("a-b"));
        assert!(!is_function_name("a b"));
        assert!(!is_function_name(":end"));
        assert!(!is_function_name(":dump"));
    }
}
