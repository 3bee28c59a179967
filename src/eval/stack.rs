use super::{EvalError, Interpreter};
use crate::display::format_array;
use std::io::Write;

impl Interpreter {
    /// Flat concatenation: elements of the first-pushed operand followed by
    /// elements of the second. No nesting is introduced.
    pub(crate) fn builtin_cat(&mut self) -> Result<(), EvalError> {
        let (mut a, mut b) = self.pop_two("cat")?;
        a.append(&mut b);
        self.stack.push(a);
        Ok(())
    }

    /// `.` pops and prints the top array, newline-terminated.
    pub(crate) fn builtin_print(&mut self) -> Result<(), EvalError> {
        let top = self.pop_top(".")?;
        let _ = writeln!(self.out, "{}", format_array(&top, 0));
        Ok(())
    }

    pub(crate) fn builtin_clear(&mut self) -> Result<(), EvalError> {
        self.stack.clear();
        Ok(())
    }

    pub(crate) fn builtin_swap(&mut self) -> Result<(), EvalError> {
        let len = self.stack.len();
        if len < 2 {
            return Err(EvalError::StackUnderflow("swap".into()));
        }
        self.stack.swap(len - 1, len - 2);
        Ok(())
    }

    pub(crate) fn builtin_dup(&mut self) -> Result<(), EvalError> {
        let top = self
            .stack
            .last()
            .cloned()
            .ok_or_else(|| EvalError::StackEmpty("dup".into()))?;
        self.stack.push(top);
        Ok(())
    }

    /// `:dump` prints the whole stack top first, without consuming it.
    pub(crate) fn dump_stack(&mut self) {
        let _ = writeln!(self.out, "Stack:");
        if self.stack.is_empty() {
            let _ = writeln!(self.out, "(empty)");
            return;
        }
        let rendered: Vec<String> = self
            .stack
            .iter()
            .rev()
            .map(|arr| format_array(arr, 0))
            .collect();
        for line in rendered {
            let _ = writeln!(self.out, "{}", line);
        }
    }
}
