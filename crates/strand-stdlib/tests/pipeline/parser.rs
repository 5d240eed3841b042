//! Reader and sigil tests through the full pipeline.

use super::{assert_ints, assert_stack_eq, eval_stack};
use strand::{EvalError, Value};

#[test]
fn hex_sigil() {
    assert_ints("0 #ff +", &[255]);
    assert_ints("#dead", &[0xdead]);
}

#[test]
fn float_and_int_literals() {
    assert_stack_eq("2 2.0", &[Value::Int(2), Value::Float(2.0)]);
}

#[test]
fn unknown_words_parse_as_zero() {
    assert_ints("gibberish", &[0]);
}

#[test]
fn line_comments() {
    assert_ints("// 1 2 3", &[]);
}

#[test]
fn block_comments_hide_lines() {
    assert_ints("1\n~~~\n2 3\n~~~\n4", &[1, 4]);
}

#[test]
fn stack_effect_comments_are_ignored() {
    assert_ints("(n--n 5 (more 6", &[5, 6]);
}

#[test]
fn sequences_push_as_values() {
    let stack = eval_stack("[ 1 2 ]");
    assert_eq!(stack.len(), 1);
    assert!(matches!(stack[0], Value::Seq(_)));
}

#[test]
fn sequences_span_lines() {
    assert_ints("[\n1 +\n] 4 swap 1 if", &[5]);
}

#[test]
fn unclosed_sequence_is_reported() {
    assert_eq!(
        strand_stdlib::eval("[ 1 2").unwrap_err(),
        EvalError::UnclosedSequence { depth: 1 }
    );
}

#[test]
fn unterminated_definition_is_reported() {
    assert_eq!(
        strand_stdlib::eval(":inc 1 +").unwrap_err(),
        EvalError::PendingDefinition { word: "inc".into() }
    );
}

#[test]
fn stray_close_bracket_is_harmless() {
    assert_ints("] 5", &[5]);
}

#[test]
fn interleaved_brackets_and_lines() {
    let mut interp = strand_stdlib::interp();
    interp.run_line("[ 1");
    assert_eq!(interp.open_depth(), 1);
    interp.run_line("2 ] [ 3 ]");
    assert_eq!(interp.open_depth(), 0);
    // Both sequences executed immediately as values on the stack.
    assert_eq!(interp.stack().len(), 2);
}
