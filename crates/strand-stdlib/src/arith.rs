//! Arithmetic words.
//!
//! All of these broadcast over integer arrays through
//! [`strand::broadcast`]: scalars apply once, arrays apply pointwise
//! with zero padding to the longest operand. Integer division and
//! modulo by zero yield 0 rather than trapping; an LED program should
//! never take the appliance down.

use strand::broadcast::{binary, ternary, unary};
use strand::Interp;

/// Register the arithmetic words.
pub fn install(interp: &mut Interp) {
    interp.register("+", op_add);
    interp.register("-", op_sub);
    interp.register("*", op_mul);
    interp.register("/", op_div);
    interp.register("mod", op_mod);
    interp.register("sq", op_sq);
    interp.register("sqrt", op_sqrt);
    interp.register("constrain", op_constrain);
    interp.register("sin", op_sin);
    interp.register("cos", op_cos);
    interp.register("tan", op_tan);
    interp.register("deg", op_deg);
    interp.register("rad", op_rad);
    interp.register("pow", op_pow);
    interp.register("abs", op_abs);
    interp.register("min", op_min);
    interp.register("max", op_max);
    interp.register("round", op_round);
    interp.register("ceil", op_ceil);
    interp.register("floor", op_floor);
}

fn op_add(interp: &mut Interp) {
    binary(interp, |a, b| a.wrapping_add(b), Some(|a, b| a + b));
}

fn op_sub(interp: &mut Interp) {
    binary(interp, |a, b| a.wrapping_sub(b), Some(|a, b| a - b));
}

fn op_mul(interp: &mut Interp) {
    binary(interp, |a, b| a.wrapping_mul(b), Some(|a, b| a * b));
}

fn div_int(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a.wrapping_div(b)
    }
}

fn div_float(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a / b
    }
}

fn op_div(interp: &mut Interp) {
    binary(interp, div_int, Some(div_float));
}

fn mod_int(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a.wrapping_rem(b)
    }
}

fn mod_float(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        0.0
    } else {
        a - (a / b).trunc() * b
    }
}

fn op_mod(interp: &mut Interp) {
    binary(interp, mod_int, Some(mod_float));
}

fn op_sq(interp: &mut Interp) {
    unary(interp, |a| a.wrapping_mul(a), Some(|a| a * a));
}

fn op_sqrt(interp: &mut Interp) {
    unary(interp, |a| (a as f64).sqrt() as i64, Some(f64::sqrt));
}

fn constrain_int(a: i64, lo: i64, hi: i64) -> i64 {
    if a < lo {
        lo
    } else if a > hi {
        hi
    } else {
        a
    }
}

fn constrain_float(a: f64, lo: f64, hi: f64) -> f64 {
    if a < lo {
        lo
    } else if a > hi {
        hi
    } else {
        a
    }
}

fn op_constrain(interp: &mut Interp) {
    ternary(interp, constrain_int, Some(constrain_float));
}

fn op_sin(interp: &mut Interp) {
    unary(interp, |a| (a as f64).sin() as i64, Some(f64::sin));
}

fn op_cos(interp: &mut Interp) {
    unary(interp, |a| (a as f64).cos() as i64, Some(f64::cos));
}

fn op_tan(interp: &mut Interp) {
    unary(interp, |a| (a as f64).tan() as i64, Some(f64::tan));
}

fn deg_float(a: f64) -> f64 {
    a * 180.0 / std::f64::consts::PI
}

fn op_deg(interp: &mut Interp) {
    unary(interp, |a| deg_float(a as f64) as i64, Some(deg_float));
}

fn rad_float(a: f64) -> f64 {
    a * std::f64::consts::PI / 180.0
}

fn op_rad(interp: &mut Interp) {
    unary(interp, |a| rad_float(a as f64) as i64, Some(rad_float));
}

fn op_pow(interp: &mut Interp) {
    binary(
        interp,
        |a, b| (a as f64).powf(b as f64) as i64,
        Some(f64::powf),
    );
}

fn op_abs(interp: &mut Interp) {
    unary(interp, i64::wrapping_abs, Some(f64::abs));
}

fn op_min(interp: &mut Interp) {
    binary(interp, |a, b| a.min(b), Some(f64::min));
}

fn op_max(interp: &mut Interp) {
    binary(interp, |a, b| a.max(b), Some(f64::max));
}

fn op_round(interp: &mut Interp) {
    unary(interp, |a| a, Some(f64::round));
}

fn op_ceil(interp: &mut Interp) {
    unary(interp, |a| a, Some(f64::ceil));
}

fn op_floor(interp: &mut Interp) {
    unary(interp, |a| a, Some(f64::floor));
}
