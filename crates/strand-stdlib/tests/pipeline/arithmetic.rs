//! Arithmetic word tests.

use super::{assert_float, assert_ints, assert_stack_eq, eval_stack};
use strand::Value;

#[test]
fn add() {
    assert_ints("3 4 +", &[7]);
}

#[test]
fn sub() {
    assert_ints("10 3 -", &[7]);
}

#[test]
fn mul() {
    assert_ints("6 7 *", &[42]);
}

#[test]
fn div() {
    assert_ints("20 4 /", &[5]);
    assert_ints("7 2 /", &[3]);
}

#[test]
fn div_by_zero_yields_zero() {
    assert_ints("7 0 /", &[0]);
    assert_float("7.0 0 /", 0.0, 0.0);
}

#[test]
fn modulo() {
    assert_ints("17 5 mod", &[2]);
    assert_ints("17 0 mod", &[0]);
}

#[test]
fn float_mod_truncates_quotient() {
    assert_float("7.5 2 mod", 1.5, 1e-9);
}

#[test]
fn mixed_operands_promote_to_float() {
    assert_float("3 0.5 +", 3.5, 1e-9);
    assert_float("1.5 2 *", 3.0, 1e-9);
}

#[test]
fn int_operands_stay_int() {
    assert_stack_eq("3 4 +", &[Value::Int(7)]);
}

#[test]
fn sq_and_sqrt() {
    assert_ints("5 sq", &[25]);
    assert_ints("25 sqrt", &[5]);
    assert_ints("10 sqrt", &[3]);
    assert_float("2.25 sqrt", 1.5, 1e-9);
}

#[test]
fn pythagoras() {
    // dup * swap dup * + sqrt over 3 and 4
    assert_ints("3 dup * 4 dup * + sqrt", &[5]);
}

#[test]
fn pow() {
    assert_ints("2 10 pow", &[1024]);
    assert_float("2.0 0.5 pow", std::f64::consts::SQRT_2, 1e-9);
}

#[test]
fn abs() {
    assert_ints("-5 abs", &[5]);
    assert_float("-2.5 abs", 2.5, 0.0);
}

#[test]
fn min_max() {
    assert_ints("3 7 min", &[3]);
    assert_ints("3 7 max", &[7]);
}

#[test]
fn rounding_family() {
    assert_float("2.5 round", 3.0, 0.0);
    assert_float("2.1 ceil", 3.0, 0.0);
    assert_float("2.9 floor", 2.0, 0.0);
    // Integer forms pass through unchanged.
    assert_ints("7 round 7 ceil 7 floor", &[7, 7, 7]);
}

#[test]
fn constrain_clamps() {
    assert_ints("5 0 10 constrain", &[5]);
    assert_ints("-5 0 10 constrain", &[0]);
    assert_ints("15 0 10 constrain", &[10]);
}

#[test]
fn trig_and_angles() {
    assert_float("0.0 sin", 0.0, 1e-9);
    assert_float("0.0 cos", 1.0, 1e-9);
    assert_float("180.0 rad", std::f64::consts::PI, 1e-9);
    assert_float("3.14159265358979 deg", 180.0, 1e-6);
}

#[test]
fn string_operand_uses_float_form() {
    // A string is neither Int nor Array, so the float form fires.
    match eval_stack("'3 4 +")[0] {
        Value::Float(f) => assert_eq!(f, 7.0),
        ref other => panic!("expected float, got {:?}", other),
    }
}
