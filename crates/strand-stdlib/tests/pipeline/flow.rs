//! Control-flow word tests.

use super::assert_ints;

#[test]
fn if_runs_on_true() {
    assert_ints("[ 42 ] 1 if", &[42]);
}

#[test]
fn if_skips_on_false() {
    assert_ints("[ 42 ] 0 if", &[]);
}

#[test]
fn ife_selects_branch() {
    assert_ints("[ 1 ] [ 2 ] 1 ife", &[1]);
    assert_ints("[ 1 ] [ 2 ] 0 ife", &[2]);
}

#[test]
fn loop_ascending() {
    // Each iteration pushes the index, then the body increments it.
    assert_ints("[ 1 + ] 0 4 loop", &[1, 2, 3, 4]);
}

#[test]
fn loop_descending() {
    assert_ints("[ ] 3 0 loop", &[3, 2, 1]);
}

#[test]
fn loop_equal_bounds_runs_nothing() {
    assert_ints("[ 1 + ] 2 2 loop", &[]);
}

#[test]
fn loop_leaves_ten_increments() {
    assert_ints("[ 1 + ] 0 10 loop stack:size", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10]);
}

#[test]
fn repeat_runs_n_times() {
    assert_ints("[ 2 ] 3 repeat", &[2, 2, 2]);
    assert_ints("[ 2 ] 0 repeat", &[]);
}

#[test]
fn nested_sequences() {
    assert_ints("[ [ 7 ] 1 if ] 1 if", &[7]);
}

#[test]
fn conditionals_inside_loops() {
    // Keep even indices only: push index, test, conditionally keep.
    assert_ints("[ dup 2 mod [ drop ] swap 1 eq if ] 0 4 loop", &[0, 2]);
}

#[test]
fn call_by_name() {
    assert_ints("[ 5 5 + ] 'ten def  'ten call", &[10]);
}

#[test]
fn call_with_missing_word_is_noop() {
    assert_ints("'nothing call", &[]);
}
