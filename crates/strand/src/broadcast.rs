//! Array broadcasting for scalar words.
//!
//! Numeric words come in an integer form and usually a float form.
//! These helpers pop the operands, pick a form, and transparently lift
//! the operation over integer arrays:
//!
//! - The float form is used when one exists *and* at least one operand
//!   is neither `Int` nor `Array` (arrays are integer containers).
//! - If any operand is an array, the result is an array as long as the
//!   longest operand; scalars broadcast, shorter arrays read as 0, and
//!   float results truncate for storage.
//!
//! Integer forms take `impl Fn` so words can capture configuration
//! (the color words capture the current channel order); float forms are
//! plain function pointers since none of them need to.

use crate::interp::Interp;
use crate::value::Value;

fn array_len(v: &Value) -> usize {
    match v {
        Value::Array(ia) => ia.len(),
        _ => 1,
    }
}

fn elem_int(interp: &Interp, v: &Value, i: usize) -> i64 {
    match v {
        Value::Array(ia) => ia.get(i).copied().unwrap_or(0) as i64,
        other => interp.as_int(other),
    }
}

fn elem_float(interp: &Interp, v: &Value, i: usize) -> f64 {
    match v {
        Value::Array(ia) => ia.get(i).copied().unwrap_or(0) as f64,
        other => interp.as_float(other),
    }
}

/// Pop one operand and apply a unary word, broadcasting over arrays.
pub fn unary<I>(interp: &mut Interp, int_op: I, float_op: Option<fn(f64) -> f64>)
where
    I: Fn(i64) -> i64,
{
    let a = interp.pop().unwrap_or(Value::Int(0));
    match &a {
        Value::Array(ia) => {
            let rs: Vec<i32> = ia.iter().map(|&n| int_op(n as i64) as i32).collect();
            let arr = interp.new_array(rs);
            interp.push_new(arr);
        }
        Value::Int(n) => {
            let r = int_op(*n);
            interp.push_new(Value::Int(r));
        }
        other => match float_op {
            Some(f) => {
                let r = f(interp.as_float(other));
                interp.push_new(Value::Float(r));
            }
            None => {
                let r = int_op(interp.as_int(other));
                interp.push_new(Value::Int(r));
            }
        },
    }
    interp.free_value(a);
}

/// Pop two operands and apply a binary word, broadcasting over arrays.
pub fn binary<I>(interp: &mut Interp, int_op: I, float_op: Option<fn(f64, f64) -> f64>)
where
    I: Fn(i64, i64) -> i64,
{
    let b = interp.pop().unwrap_or(Value::Int(0));
    let a = interp.pop().unwrap_or(Value::Int(0));

    let use_float = float_op.is_some() && !(a.is_int_like() && b.is_int_like());
    let fop = if use_float { float_op } else { None };

    if matches!(a, Value::Array(_)) || matches!(b, Value::Array(_)) {
        let len = array_len(&a).max(array_len(&b));
        let rs: Vec<i32> = (0..len)
            .map(|i| match fop {
                Some(f) => f(elem_float(interp, &a, i), elem_float(interp, &b, i)) as i32,
                None => int_op(elem_int(interp, &a, i), elem_int(interp, &b, i)) as i32,
            })
            .collect();
        let arr = interp.new_array(rs);
        interp.push_new(arr);
    } else {
        match fop {
            Some(f) => {
                let r = f(interp.as_float(&a), interp.as_float(&b));
                interp.push_new(Value::Float(r));
            }
            None => {
                let r = int_op(interp.as_int(&a), interp.as_int(&b));
                interp.push_new(Value::Int(r));
            }
        }
    }
    interp.free_value(a);
    interp.free_value(b);
}

/// Pop three operands and apply a ternary word, broadcasting over
/// arrays.
pub fn ternary<I>(interp: &mut Interp, int_op: I, float_op: Option<fn(f64, f64, f64) -> f64>)
where
    I: Fn(i64, i64, i64) -> i64,
{
    let c = interp.pop().unwrap_or(Value::Int(0));
    let b = interp.pop().unwrap_or(Value::Int(0));
    let a = interp.pop().unwrap_or(Value::Int(0));

    let use_float =
        float_op.is_some() && !(a.is_int_like() && b.is_int_like() && c.is_int_like());
    let fop = if use_float { float_op } else { None };

    if matches!(a, Value::Array(_))
        || matches!(b, Value::Array(_))
        || matches!(c, Value::Array(_))
    {
        let len = array_len(&a).max(array_len(&b)).max(array_len(&c));
        let rs: Vec<i32> = (0..len)
            .map(|i| match fop {
                Some(f) => f(
                    elem_float(interp, &a, i),
                    elem_float(interp, &b, i),
                    elem_float(interp, &c, i),
                ) as i32,
                None => int_op(
                    elem_int(interp, &a, i),
                    elem_int(interp, &b, i),
                    elem_int(interp, &c, i),
                ) as i32,
            })
            .collect();
        let arr = interp.new_array(rs);
        interp.push_new(arr);
    } else {
        match fop {
            Some(f) => {
                let r = f(
                    interp.as_float(&a),
                    interp.as_float(&b),
                    interp.as_float(&c),
                );
                interp.push_new(Value::Float(r));
            }
            None => {
                let r = int_op(interp.as_int(&a), interp.as_int(&b), interp.as_int(&c));
                interp.push_new(Value::Int(r));
            }
        }
    }
    interp.free_value(a);
    interp.free_value(b);
    interp.free_value(c);
}
