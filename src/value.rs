//! Value model for SIC - everything on the stack is an array
//!
//! There is no separate scalar case: a bare number is a one-element array
//! holding a `Number`. This keeps the stack's element type uniform, at the
//! cost of one level of indirection for true scalars.

/// A single element of an array
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A single Unicode code point
    Char(char),
    /// An IEEE-754 double
    Number(f64),
    /// A Unicode string
    Text(String),
    /// A nested array
    Array(Array),
}

/// An ordered sequence of values; the sole stack slot type
pub type Array = Vec<Value>;

impl Value {
    /// Numeric payload, if this element is a `Number`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

/// A length-1 array holding a bare `Number` - the broadcast engine's
/// definition of a scalar operand.
pub fn is_scalar(arr: &Array) -> bool {
    matches!(arr.as_slice(), [Value::Number(_)])
}
