//! Control-flow words.
//!
//! Each of these pops the sequences it needs from the stack and
//! re-enters the executor. A null sequence (empty stack, stale
//! reference, or a non-sequence value) runs as nothing.

use strand::{Interp, Value};

/// Register the control-flow words.
pub fn install(interp: &mut Interp) {
    interp.register("if", op_if);
    interp.register("ife", op_ife);
    interp.register("loop", op_loop);
    interp.register("repeat", op_repeat);
}

/// `if ( seq test — )`: run the sequence when the test is non-zero.
fn op_if(interp: &mut Interp) {
    let test = interp.pop_int();
    let block = interp.pop_seq();
    if test != 0 {
        if let Some(block) = block {
            interp.run_seq(block);
        }
    }
}

/// `ife ( tseq eseq test — )`: run the then-sequence when the test is
/// non-zero, the else-sequence otherwise.
fn op_ife(interp: &mut Interp) {
    let test = interp.pop_int();
    let else_block = interp.pop_seq();
    let then_block = interp.pop_seq();
    let chosen = if test != 0 { then_block } else { else_block };
    if let Some(block) = chosen {
        interp.run_seq(block);
    }
}

/// `loop ( seq begin end — )`: push each index and run the sequence,
/// ascending when `begin < end`, descending otherwise, `end` exclusive.
fn op_loop(interp: &mut Interp) {
    let end = interp.pop_int();
    let begin = interp.pop_int();
    let Some(block) = interp.pop_seq() else {
        return;
    };
    if begin < end {
        for i in begin..end {
            interp.push_new(Value::int(i));
            interp.run_seq(block);
        }
    } else {
        let mut i = begin;
        while i > end {
            interp.push_new(Value::int(i));
            interp.run_seq(block);
            i -= 1;
        }
    }
}

/// `repeat ( seq n — )`: run the sequence n times.
fn op_repeat(interp: &mut Interp) {
    let times = interp.pop_int();
    let Some(block) = interp.pop_seq() else {
        return;
    };
    for _ in 0..times {
        interp.run_seq(block);
    }
}
