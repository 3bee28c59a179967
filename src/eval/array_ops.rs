//! Structural array builtins: range, reshape, dim, matmul

use super::broadcast::shape_of;
use super::{EvalError, Interpreter};
use crate::value::{Array, Value};

impl Interpreter {
    /// `n range` pushes `[0, 1, ..., n-1]` for a non-negative integer n.
    pub(crate) fn builtin_range(&mut self) -> Result<(), EvalError> {
        let top = self.pop_top("range")?;
        let n = match top.as_slice() {
            [Value::Number(n)] => *n,
            _ => {
                return Err(EvalError::ExecError(
                    "range requires a scalar numeric argument".into(),
                ))
            }
        };
        if n < 0.0 || n.floor() != n {
            return Err(EvalError::ExecError(
                "range requires a non-negative integer".into(),
            ));
        }
        let result: Array = (0..n as usize).map(|i| Value::Number(i as f64)).collect();
        self.stack.push(result);
        Ok(())
    }

    /// `data shape reshape` rebuilds the flat data as a nested rectangular
    /// array in row-major order. The product of the dimensions must equal
    /// the data length.
    pub(crate) fn builtin_reshape(&mut self) -> Result<(), EvalError> {
        let (data, shape) = self.pop_two("reshape")?;

        if shape.is_empty() {
            return Err(EvalError::ExecError(
                "reshape requires a non-empty shape array".into(),
            ));
        }
        let mut dims = Vec::with_capacity(shape.len());
        let mut total = 1usize;
        for elem in &shape {
            let Some(val) = elem.as_number() else {
                return Err(EvalError::ExecError(
                    "reshape shape must contain numeric values".into(),
                ));
            };
            if val <= 0.0 || val.floor() != val {
                return Err(EvalError::ExecError(
                    "reshape dimensions must be positive integers".into(),
                ));
            }
            let dim = val as usize;
            dims.push(dim);
            total = total.saturating_mul(dim);
        }
        if data.len() != total {
            return Err(EvalError::ExecError(
                "Data size does not match shape dimensions".into(),
            ));
        }

        let mut idx = 0usize;
        let result = build_rows(&dims, &data, &mut idx);
        self.stack.push(result);
        Ok(())
    }

    /// `dim` replaces the top array with its shape as a numeric array.
    /// A true scalar yields `[]`. Unlike the broadcast engine's truncating
    /// shape, the whole tree is checked: any raggedness at any level is an
    /// error, and an empty array is pushed in place of a partial shape.
    pub(crate) fn builtin_dim(&mut self) -> Result<(), EvalError> {
        let arr = self.pop_top("dim")?;
        if arr.len() == 1 && !arr[0].is_array() {
            self.stack.push(Array::new());
            return Ok(());
        }
        match rect_shape(&arr) {
            Ok(dims) => {
                self.stack
                    .push(dims.into_iter().map(|d| Value::Number(d as f64)).collect());
                Ok(())
            }
            Err(e) => {
                self.stack.push(Array::new());
                Err(e)
            }
        }
    }

    /// Standard matrix product of two 2-D numeric arrays.
    pub(crate) fn builtin_matmul(&mut self) -> Result<(), EvalError> {
        let (a, b) = self.pop_two("matmul")?;

        let shape_a = shape_of(&a);
        let shape_b = shape_of(&b);
        if shape_a.len() != 2 || shape_b.len() != 2 {
            return Err(EvalError::ExecError("matmul requires 2D arrays".into()));
        }
        let (m, n) = (shape_a[0], shape_a[1]);
        let (n_b, p) = (shape_b[0], shape_b[1]);
        if n != n_b {
            return Err(EvalError::ExecError(
                "Incompatible dimensions for matmul".into(),
            ));
        }

        let ma = numeric_matrix(&a)?;
        let mb = numeric_matrix(&b)?;

        let mut result = Array::with_capacity(m);
        for i in 0..m {
            let mut row = Array::with_capacity(p);
            for j in 0..p {
                let mut sum = 0.0;
                for k in 0..n {
                    sum += ma[i][k] * mb[k][j];
                }
                row.push(Value::Number(sum));
            }
            result.push(Value::Array(row));
        }
        self.stack.push(result);
        Ok(())
    }
}

fn build_rows(dims: &[usize], data: &[Value], idx: &mut usize) -> Array {
    let mut result = Array::with_capacity(dims[0]);
    if dims.len() == 1 {
        for _ in 0..dims[0] {
            if *idx < data.len() {
                result.push(data[*idx].clone());
                *idx += 1;
            }
        }
    } else {
        for _ in 0..dims[0] {
            result.push(Value::Array(build_rows(&dims[1..], data, idx)));
        }
    }
    result
}

fn non_uniform() -> EvalError {
    EvalError::ExecError("Non-uniform array for dim".into())
}

/// Strict rectangular shape: every level must be either all arrays of one
/// length with identical sub-shapes, or all non-arrays.
fn rect_shape(arr: &Array) -> Result<Vec<usize>, EvalError> {
    if arr.is_empty() {
        return Ok(vec![0]);
    }
    if let Value::Array(first) = &arr[0] {
        let sub_shape = rect_shape(first)?;
        for elem in &arr[1..] {
            let Value::Array(sub) = elem else {
                return Err(non_uniform());
            };
            if rect_shape(sub)? != sub_shape {
                return Err(non_uniform());
            }
        }
        let mut shape = Vec::with_capacity(sub_shape.len() + 1);
        shape.push(arr.len());
        shape.extend(sub_shape);
        Ok(shape)
    } else {
        if arr.iter().any(Value::is_array) {
            return Err(non_uniform());
        }
        Ok(vec![arr.len()])
    }
}

fn numeric_matrix(arr: &Array) -> Result<Vec<Vec<f64>>, EvalError> {
    let mut rows = Vec::with_capacity(arr.len());
    for row in arr {
        let Value::Array(row) = row else {
            return Err(EvalError::ExecError(
                "matmul requires 2D numeric arrays".into(),
            ));
        };
        let mut out = Vec::with_capacity(row.len());
        for elem in row {
            let Some(n) = elem.as_number() else {
                return Err(EvalError::ExecError(
                    "matmul requires numeric elements".into(),
                ));
            };
            out.push(n);
        }
        rows.push(out);
    }
    Ok(rows)
}
