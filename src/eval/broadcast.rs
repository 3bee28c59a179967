//! Shape inference and broadcasting for the element-wise arithmetic ops
//!
//! A shape is the per-dimension length list of a rectangular nested array.
//! Shape computation recurses only while every element at the current level
//! is an array of identical length; the first ragged level ends the shape,
//! so deeper ragged structure is invisible here. (`dim` uses its own strict
//! check instead.)

use super::{EvalError, Interpreter};
use crate::value::{is_scalar, Array, Value};

/// Permissive, truncating shape of a nested array.
pub(crate) fn shape_of(arr: &Array) -> Vec<usize> {
    let mut shape = vec![arr.len()];
    if let Some(Value::Array(first)) = arr.first() {
        let uniform = arr
            .iter()
            .all(|e| matches!(e, Value::Array(sub) if sub.len() == first.len()));
        if uniform {
            shape.extend(shape_of(first));
        }
    }
    shape
}

impl Interpreter {
    /// Shared engine behind `+ - * / ^`: pop two operands, broadcast a
    /// scalar across the other operand's full shape, or combine two
    /// equal-shaped arrays element-wise.
    ///
    /// On a shape mismatch (or any leaf error) the two popped operands are
    /// discarded, not restored, and nothing is pushed.
    pub(crate) fn apply_binary_op(
        &mut self,
        op_name: &str,
        op: fn(f64, f64) -> f64,
    ) -> Result<(), EvalError> {
        let (a, b) = self.pop_two(op_name)?;

        let a_scalar = is_scalar(&a);
        let b_scalar = is_scalar(&b);
        let shape_a = shape_of(&a);
        let shape_b = shape_of(&b);

        let result = if a_scalar && !b_scalar {
            broadcast(&a, &b, &shape_b, op_name, op)?
        } else if b_scalar && !a_scalar {
            broadcast(&a, &b, &shape_a, op_name, op)?
        } else if shape_a == shape_b {
            broadcast(&a, &b, &shape_a, op_name, op)?
        } else {
            return Err(EvalError::ShapeMismatch(op_name.to_string()));
        };

        self.stack.push(result);
        Ok(())
    }
}

/// The sub-array of an operand at branch `i` of an intermediate shape
/// level. A scalar operand is re-used unchanged at every branch; a
/// length-1 array operand descends into its sole element.
fn operand_branch<'a>(x: &'a Array, i: usize, op_name: &str) -> Result<&'a Array, EvalError> {
    if x.len() == 1 {
        return match &x[0] {
            Value::Array(sub) => Ok(sub),
            Value::Number(_) => Ok(x),
            _ => Err(EvalError::NumericOperands(op_name.to_string())),
        };
    }
    match x.get(i) {
        Some(Value::Array(sub)) => Ok(sub),
        _ => Err(EvalError::NumericOperands(op_name.to_string())),
    }
}

fn broadcast(
    x: &Array,
    y: &Array,
    shape: &[usize],
    op_name: &str,
    op: fn(f64, f64) -> f64,
) -> Result<Array, EvalError> {
    let mut result = Array::with_capacity(shape[0]);
    if shape.len() == 1 {
        for i in 0..shape[0] {
            let xe = if x.len() == 1 { &x[0] } else { &x[i] };
            let ye = if y.len() == 1 { &y[0] } else { &y[i] };
            let (Value::Number(xv), Value::Number(yv)) = (xe, ye) else {
                return Err(EvalError::NumericOperands(op_name.to_string()));
            };
            if op_name == "/" && *yv == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            result.push(Value::Number(op(*xv, *yv)));
        }
    } else {
        for i in 0..shape[0] {
            let xs = operand_branch(x, i, op_name)?;
            let ys = operand_branch(y, i, op_name)?;
            result.push(Value::Array(broadcast(xs, ys, &shape[1..], op_name, op)?));
        }
    }
    Ok(result)
}
