//! Integer array words.
//!
//! Arrays hold one LED frame apiece, so most of these operate on the
//! array at the top of the stack in place rather than consuming it.
//! Out-of-range element access is permissive: reads yield 0, writes do
//! nothing.

use strand::{Interp, Value};

/// Register the array words.
pub fn install(interp: &mut Interp) {
    interp.register("sum", op_sum);
    interp.register("array", op_array);
    interp.register("identity", op_identity);
    interp.register("index", op_index);
    interp.register("geta", op_geta);
    interp.register("puta", op_puta);
    interp.register("dgeta", op_dgeta);
    interp.register("dputa", op_dputa);
    interp.register("size", op_size);
    interp.register("map", op_map);
}

/// `sum ( arr — n )`: sum of the elements; 0 for non-arrays.
fn op_sum(interp: &mut Interp) {
    let v = interp.pop();
    let total = match &v {
        Some(Value::Array(ia)) => ia.iter().map(|&n| n as i64).sum(),
        _ => 0,
    };
    interp.push_new(Value::int(total));
    if let Some(v) = v {
        interp.free_value(v);
    }
}

/// `array ( n — arr )`: a zero-filled array of length n.
fn op_array(interp: &mut Interp) {
    let n = interp.pop_int().max(0) as usize;
    let arr = interp.new_array(vec![0; n]);
    interp.push_new(arr);
}

/// `identity ( arr — arr )`: overwrite the top array with 0..len.
fn op_identity(interp: &mut Interp) {
    if let Some(Value::Array(ia)) = interp.stack_mut().top_mut() {
        for (i, slot) in ia.iter_mut().enumerate() {
            *slot = i as i32;
        }
    }
}

/// `index ( arr idxs — arr )`: reserved; consumes the index array and
/// leaves the operand unchanged.
fn op_index(interp: &mut Interp) {
    let idxs = interp.pop();
    let operand = interp.pop();
    if let Some(v) = operand {
        interp.push(v);
    }
    if let Some(v) = idxs {
        interp.free_value(v);
    }
}

/// `geta ( arr i — arr n )`: read an element of the top array.
fn op_geta(interp: &mut Interp) {
    let idx = interp.pop_int();
    let n = match interp.stack().top() {
        Some(Value::Array(ia)) if idx >= 0 => {
            ia.get(idx as usize).copied().unwrap_or(0) as i64
        }
        _ => 0,
    };
    interp.push_new(Value::int(n));
}

/// `puta ( arr i n — arr )`: write an element of the top array.
fn op_puta(interp: &mut Interp) {
    let val = interp.pop_int();
    let idx = interp.pop_int();
    if let Some(Value::Array(ia)) = interp.stack_mut().top_mut() {
        if idx >= 0 {
            if let Some(slot) = ia.get_mut(idx as usize) {
                *slot = val as i32;
            }
        }
    }
}

/// `dgeta ( name i — n )`: read an element of a dictionary-bound array.
fn op_dgeta(interp: &mut Interp) {
    let idx = interp.pop_int();
    let word = interp.pop_string();
    let n = match interp.find_word(&word) {
        Some(Value::Array(ia)) if idx >= 0 => {
            ia.get(idx as usize).copied().unwrap_or(0) as i64
        }
        _ => 0,
    };
    interp.push_new(Value::int(n));
}

/// `dputa ( name i n — )`: write an element of a dictionary-bound
/// array.
fn op_dputa(interp: &mut Interp) {
    let val = interp.pop_int();
    let idx = interp.pop_int();
    let word = interp.pop_string();
    if let Some(Value::Array(ia)) = interp.find_word_mut(&word) {
        if idx >= 0 {
            if let Some(slot) = ia.get_mut(idx as usize) {
                *slot = val as i32;
            }
        }
    }
}

/// `size ( arr — arr n )`: length of the top array; 0 for non-arrays.
fn op_size(interp: &mut Interp) {
    let n = match interp.stack().top() {
        Some(Value::Array(ia)) => ia.len() as i64,
        _ => 0,
    };
    interp.push_new(Value::int(n));
}

/// `map ( arr seq — arr )`: run the sequence once per element with the
/// element pushed, storing the popped result back at the same index.
fn op_map(interp: &mut Interp) {
    let block = interp.pop_seq();
    let v = interp.pop();
    match v {
        Some(Value::Array(mut ia)) => {
            for i in 0..ia.len() {
                interp.push_new(Value::int(ia[i] as i64));
                if let Some(block) = block {
                    interp.run_seq(block);
                }
                ia[i] = interp.pop_int() as i32;
            }
            interp.push(Value::Array(ia));
        }
        Some(other) => interp.free_value(other),
        None => {}
    }
}
