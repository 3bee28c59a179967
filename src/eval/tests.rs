//! Evaluator-level unit tests (output discarded; integration tests cover
//! the printed forms)

use super::Interpreter;
use crate::value::{Array, Value};
use std::io;

fn session() -> Interpreter {
    Interpreter::with_sinks(Box::new(io::sink()), Box::new(io::sink()))
}

fn run(input: &str) -> Vec<Array> {
    let mut interp = session();
    for line in input.lines() {
        interp.process(line);
    }
    interp.stack().to_vec()
}

fn nums(ns: &[f64]) -> Array {
    ns.iter().map(|n| Value::Number(*n)).collect()
}

#[test]
fn literals_push() {
    assert_eq!(
        run("5 x \"hi\""),
        vec![
            nums(&[5.0]),
            vec![Value::Char('x')],
            vec![Value::Text("hi".into())],
        ]
    );
}

#[test]
fn scalar_arithmetic() {
    assert_eq!(run("1 2 +"), vec![nums(&[3.0])]);
    assert_eq!(run("10 3 -"), vec![nums(&[7.0])]);
    assert_eq!(run("2 10 ^"), vec![nums(&[1024.0])]);
}

#[test]
fn scalar_broadcasts_over_array() {
    assert_eq!(run("[1, 2, 3] 10 *"), vec![nums(&[10.0, 20.0, 30.0])]);
    // The scalar side does not reorder the operands: a is still the lhs
    assert_eq!(run("10 [1, 2] -"), vec![nums(&[9.0, 8.0])]);
}

#[test]
fn scalar_broadcasts_into_nested_shape() {
    assert_eq!(
        run("[[1, 2], [3, 4]] 1 +"),
        vec![vec![
            Value::Array(nums(&[2.0, 3.0])),
            Value::Array(nums(&[4.0, 5.0])),
        ]]
    );
}

#[test]
fn equal_shapes_combine_elementwise() {
    assert_eq!(run("[1, 2] [3, 4] +"), vec![nums(&[4.0, 6.0])]);
}

#[test]
fn shape_mismatch_discards_both_operands() {
    // Non-restorative pop: the failed operands are gone
    assert!(run("[1, 2] [1, 2, 3] +").is_empty());
}

#[test]
fn arity_failure_leaves_stack_unchanged() {
    assert!(run("+").is_empty());
    assert_eq!(run("5 +"), vec![nums(&[5.0])]);
    assert!(run("swap").is_empty());
    assert!(run("dup").is_empty());
    assert!(run(".").is_empty());
    assert!(run("cat").is_empty());
}

#[test]
fn division_by_zero_pushes_nothing() {
    assert!(run("[1, 2] [1, 0] /").is_empty());
    assert_eq!(run("10 2 /"), vec![nums(&[5.0])]);
}

#[test]
fn type_error_in_arithmetic() {
    assert!(run("\"hi\" 1 +").is_empty());
}

#[test]
fn cat_concatenates_flat() {
    assert_eq!(run("[1, 2] [3] cat"), vec![nums(&[1.0, 2.0, 3.0])]);
}

#[test]
fn stack_ops() {
    assert_eq!(run("1 2 swap"), vec![nums(&[2.0]), nums(&[1.0])]);
    assert_eq!(run("1 dup"), vec![nums(&[1.0]), nums(&[1.0])]);
    assert!(run("1 2 3 clear").is_empty());
}

#[test]
fn range_produces_prefix_of_naturals() {
    assert_eq!(run("3 range"), vec![nums(&[0.0, 1.0, 2.0])]);
    assert_eq!(run("0 range"), vec![Array::new()]);
}

#[test]
fn range_domain_errors_consume_the_argument() {
    assert!(run("-1 range").is_empty());
    assert!(run("2.5 range").is_empty());
    assert!(run("[1, 2] range").is_empty());
}

#[test]
fn reshape_then_dim_round_trips_the_shape() {
    assert_eq!(run("6 range [2, 3] reshape dim"), vec![nums(&[2.0, 3.0])]);
}

#[test]
fn reshape_builds_row_major() {
    assert_eq!(
        run("[1, 2, 3, 4] [2, 2] reshape"),
        vec![vec![
            Value::Array(nums(&[1.0, 2.0])),
            Value::Array(nums(&[3.0, 4.0])),
        ]]
    );
}

#[test]
fn reshape_size_mismatch_pushes_nothing() {
    assert!(run("[1, 2, 3] [2, 2] reshape").is_empty());
    assert!(run("[1, 2] [0] reshape").is_empty());
    assert!(run("[1, 2] [x, 2] reshape").is_empty());
}

#[test]
fn dim_of_scalar_is_empty() {
    assert_eq!(run("5 dim"), vec![Array::new()]);
}

#[test]
fn dim_of_ragged_array_errors_with_empty_result() {
    assert_eq!(run("[[1, 2], [3]] dim"), vec![Array::new()]);
}

#[test]
fn matmul_two_by_two() {
    assert_eq!(
        run("[[1, 2], [3, 4]] [[5, 6], [7, 8]] matmul"),
        vec![vec![
            Value::Array(nums(&[19.0, 22.0])),
            Value::Array(nums(&[43.0, 50.0])),
        ]]
    );
}

#[test]
fn matmul_rejects_non_2d_and_mismatched_inner_dims() {
    assert!(run("[1, 2] [[1], [2]] matmul").is_empty());
    assert!(run("[[1, 2]] [[1, 2]] matmul").is_empty());
}

#[test]
fn define_and_call_function() {
    assert_eq!(run(":inc 1 + :end\n5 inc"), vec![nums(&[6.0])]);
}

#[test]
fn redefinition_replaces_the_body() {
    assert_eq!(run(":f 1 + :end\n:f 2 + :end\n5 f"), vec![nums(&[7.0])]);
}

#[test]
fn user_definition_shadows_builtin() {
    assert_eq!(run(":dup clear :end\n1 2 dup"), Vec::<Array>::new());
}

#[test]
fn undefined_name_pushes_text() {
    assert_eq!(run("frobnicate"), vec![vec![Value::Text("frobnicate".into())]]);
}

#[test]
fn invalid_definition_reports_and_continues() {
    // Name at end of stream
    assert_eq!(run("5 :inc"), vec![nums(&[5.0])]);
    // Illegal name; the following token still evaluates
    assert_eq!(run("5 :in-c 3"), vec![nums(&[5.0]), nums(&[3.0])]);
    // :end with no open definition is an invalid definition start, not a close
    assert_eq!(run("1 :end"), vec![nums(&[1.0])]);
}

#[test]
fn definitions_do_not_span_lines() {
    // The line ends mid-definition; the body is lost and the name stays
    // undefined, so it falls through to a text literal
    assert_eq!(run(":inc 1 +\ninc"), vec![vec![Value::Text("inc".into())]]);
}

#[test]
fn nested_definition_tokens_are_plain_body_tokens() {
    // ":inner" inside a body is not a definition start when the body runs
    assert_eq!(
        run(":outer :inner 1 :end\nouter"),
        vec![vec![Value::Text(":inner".into())], nums(&[1.0])]
    );
}

#[test]
fn dump_inside_definition_executes_instead_of_accumulating() {
    assert_eq!(run(":f 1 :dump 2 :end\nf"), vec![nums(&[1.0]), nums(&[2.0])]);
}

#[test]
fn self_recursive_function_hits_depth_limit_without_crashing() {
    assert!(run(":loop loop :end\nloop").is_empty());
}

#[test]
fn builtin_name_list_matches_dispatch() {
    let mut interp = session();
    for name in super::BUILTIN_NAMES {
        assert!(interp.try_builtin(name).is_some(), "{name} must dispatch");
    }
    assert!(interp.try_builtin("frobnicate").is_none());
    assert!(Interpreter::is_builtin("matmul"));
    assert!(!Interpreter::is_builtin("inc"));
}

#[test]
fn colon_alone_is_a_char_literal() {
    assert_eq!(run(":"), vec![vec![Value::Char(':')]]);
}
