use super::{EvalError, Interpreter};
use crate::value::Array;

impl Interpreter {
    /// Pop the top array, or fail with the one-operand "stack empty"
    /// diagnostic. Nothing is popped on failure.
    pub(crate) fn pop_top(&mut self, name: &str) -> Result<Array, EvalError> {
        self.stack
            .pop()
            .ok_or_else(|| EvalError::StackEmpty(name.to_string()))
    }

    /// Pop the top two arrays as (first-pushed, last-pushed). The arity
    /// check runs before anything is popped, so an underflow leaves the
    /// stack exactly as it was.
    pub(crate) fn pop_two(&mut self, name: &str) -> Result<(Array, Array), EvalError> {
        if self.stack.len() < 2 {
            return Err(EvalError::StackUnderflow(name.to_string()));
        }
        let b = self
            .stack
            .pop()
            .ok_or_else(|| EvalError::StackUnderflow(name.to_string()))?;
        let a = self
            .stack
            .pop()
            .ok_or_else(|| EvalError::StackUnderflow(name.to_string()))?;
        Ok((a, b))
    }
}
