//! Comparison and logic word tests.

use super::assert_ints;

#[test]
fn equality() {
    assert_ints("3 3 eq", &[1]);
    assert_ints("3 4 eq", &[0]);
    assert_ints("3 4 ne", &[1]);
    assert_ints("3 3 ne", &[0]);
}

#[test]
fn ordering() {
    assert_ints("4 3 gt", &[1]);
    assert_ints("3 4 gt", &[0]);
    assert_ints("3 4 lt", &[1]);
    assert_ints("4 4 ge", &[1]);
    assert_ints("3 4 ge", &[0]);
    assert_ints("4 4 le", &[1]);
    assert_ints("5 4 le", &[0]);
}

#[test]
fn comparisons_coerce_floats_to_int() {
    // Only the integer form exists; 1.9 truncates to 1.
    assert_ints("1.9 1 eq", &[1]);
    assert_ints("1.9 2 lt", &[1]);
}

#[test]
fn and_keeps_first_operand() {
    assert_ints("5 3 and", &[5]);
    assert_ints("5 0 and", &[0]);
    assert_ints("0 3 and", &[0]);
}

#[test]
fn or_keeps_first_nonzero() {
    assert_ints("5 3 or", &[5]);
    assert_ints("0 3 or", &[3]);
    assert_ints("0 0 or", &[0]);
}

#[test]
fn not_inverts() {
    assert_ints("0 not", &[1]);
    assert_ints("7 not", &[0]);
}

#[test]
fn comparisons_broadcast_over_arrays() {
    // [0 1 2 3] gt 1 -> [0 0 1 1]
    assert_ints("4 array identity 1 gt sum", &[2]);
}
