//! Comparison and logic words.
//!
//! These provide only the integer form; float operands still reach
//! them through the `as_int` coercion. `and` and `or` keep the value
//! semantics of the original word set rather than collapsing to 0/1:
//! `and` returns `a` when `b` is non-zero, `or` returns the first
//! non-zero of `a` and `b`.

use strand::broadcast::{binary, unary};
use strand::Interp;

/// Register the comparison and logic words.
pub fn install(interp: &mut Interp) {
    interp.register("eq", op_eq);
    interp.register("ne", op_ne);
    interp.register("gt", op_gt);
    interp.register("lt", op_lt);
    interp.register("ge", op_ge);
    interp.register("le", op_le);
    interp.register("and", op_and);
    interp.register("or", op_or);
    interp.register("not", op_not);
}

fn comp(a: i64, b: i64) -> i64 {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

fn op_eq(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) == 0) as i64, None);
}

fn op_ne(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) != 0) as i64, None);
}

fn op_gt(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) == 1) as i64, None);
}

fn op_lt(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) == -1) as i64, None);
}

fn op_ge(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) != -1) as i64, None);
}

fn op_le(interp: &mut Interp) {
    binary(interp, |a, b| (comp(a, b) != 1) as i64, None);
}

fn op_and(interp: &mut Interp) {
    binary(interp, |a, b| if b != 0 { a } else { 0 }, None);
}

fn op_or(interp: &mut Interp) {
    binary(interp, |a, b| if a != 0 { a } else { b }, None);
}

fn op_not(interp: &mut Interp) {
    unary(interp, |a| (a == 0) as i64, None);
}
