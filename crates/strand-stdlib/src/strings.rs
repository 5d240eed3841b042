//! Numeric formatting and string words.

use strand::{Interp, Value};

/// Register the string words.
pub fn install(interp: &mut Interp) {
    interp.register("num:dec", op_num_dec);
    interp.register("num:sci", op_num_sci);
    interp.register("str:mid", op_str_mid);
}

/// `num:dec ( f width dps — str )`: fixed-point formatting, space
/// padded to the requested width.
fn op_num_dec(interp: &mut Interp) {
    let dps = interp.pop_int().max(0) as usize;
    let width = interp.pop_int().max(0) as usize;
    let num = interp.pop_float();
    interp.push_new(Value::str(format!("{:width$.dps$}", num)));
}

/// `num:sci ( f width dps — str )`: scientific-notation formatting.
fn op_num_sci(interp: &mut Interp) {
    let dps = interp.pop_int().max(0) as usize;
    let width = interp.pop_int().max(0) as usize;
    let num = interp.pop_float();
    interp.push_new(Value::str(format!("{:width$.dps$E}", num)));
}

/// `str:mid ( str start len — str )`: substring by character position.
/// Pushes nothing when `start` is past the end of the string.
fn op_str_mid(interp: &mut Interp) {
    let len = interp.pop_int().max(0) as usize;
    let start = interp.pop_int().max(0) as usize;
    let input = interp.pop_string();
    if start < input.chars().count() {
        let mid: String = input.chars().skip(start).take(len).collect();
        interp.push_new(Value::str(mid));
    }
}
