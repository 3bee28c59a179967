//! SIC - Simple Interpreted Concatenative Lang
//!
//! # Overview
//!
//! SIC is a stack-based (concatenative) array language. Every token either
//! pushes a value or names an operation; operations pop their operands from
//! a shared stack and push their result back.
//!
//! # Core Concepts
//!
//! ## Everything is an array
//!
//! ```text
//! # A bare number is a one-element array
//! 5                    # Stack: [5]
//!
//! # Array literals nest arbitrarily
//! [1, 2, [3, 4]]       # Stack: [1 2 [3 4]]
//!
//! # Arithmetic broadcasts scalars across arrays
//! [1, 2, 3] 10 *       # Stack: [10 20 30]
//! ```
//!
//! ## Stack manipulation and inspection
//!
//! ```text
//! [1, 2] [3] cat       # Stack: [1 2 3]
//! dup .                # prints [1 2 3], leaving one copy
//! :dump                # prints the whole stack, top first
//! ```
//!
//! ## User definitions
//!
//! ```text
//! :inc 1 + :end        # defines inc
//! 5 inc .              # prints [6]
//! ```
//!
//! # Example
//!
//! ```rust
//! use siclang::{Interpreter, Value};
//!
//! let mut interp = Interpreter::new();
//! interp.process("[1, 2, 3] 10 *");
//! assert_eq!(
//!     interp.stack().to_vec(),
//!     vec![vec![Value::Number(10.0), Value::Number(20.0), Value::Number(30.0)]]
//! );
//! ```

pub mod display;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod value;

// Re-export commonly used items
pub use display::format_array;
pub use eval::{EvalError, Interpreter};
pub use lexer::tokenize;
pub use parser::{parse_array, parse_element};
pub use value::{Array, Value};

/// Convenience function: evaluate a program on a fresh session and return
/// its final stack. Output and diagnostics go to stdout/stderr.
pub fn eval(input: &str) -> Vec<Array> {
    let mut interp = Interpreter::new();
    for line in input.lines() {
        interp.process(line);
    }
    interp.stack().to_vec()
}
