//! Stack shuffling words.
//!
//! Copies (`dup`, `over`, `aty`..`atw`, `at`) deep-copy the addressed
//! value; permutations move cells without copying. All of them are
//! no-ops when the stack is too shallow. `>>>`, `<<<`, and `<swap>`
//! move values between the primary stack and the stash.

use strand::{Interp, Value};

/// Register the stack words.
pub fn install(interp: &mut Interp) {
    interp.register("dup", op_dup);
    interp.register("over", op_over);
    interp.register("aty", op_aty);
    interp.register("atz", op_atz);
    interp.register("atu", op_atu);
    interp.register("atv", op_atv);
    interp.register("atw", op_atw);
    interp.register("at", op_at);
    interp.register("swap", op_swap);
    interp.register("rot", op_rot);
    interp.register("rup", op_rup);
    interp.register("rot4", op_rot4);
    interp.register("rup4", op_rup4);
    interp.register("rotn", op_rotn);
    interp.register("rupn", op_rupn);
    interp.register("drop", op_drop);
    interp.register("dup2", op_dup2);
    interp.register("drop2", op_drop2);
    interp.register("clst", op_clst);
    interp.register(">>>", op_stash);
    interp.register("<<<", op_unstash);
    interp.register("<swap>", op_swapstash);
    interp.register("stack:size", op_stack_size);
}

fn copy_at(interp: &mut Interp, n: usize) {
    if let Some(v) = interp.stack().at(n).cloned() {
        if let Value::Array(_) = v {
            interp.mem_mut().note_array_alloc();
        }
        interp.push_new(v);
    }
}

fn op_dup(interp: &mut Interp) {
    copy_at(interp, 0);
}

fn op_over(interp: &mut Interp) {
    copy_at(interp, 1);
}

fn op_aty(interp: &mut Interp) {
    copy_at(interp, 1);
}

fn op_atz(interp: &mut Interp) {
    copy_at(interp, 2);
}

fn op_atu(interp: &mut Interp) {
    copy_at(interp, 3);
}

fn op_atv(interp: &mut Interp) {
    copy_at(interp, 4);
}

fn op_atw(interp: &mut Interp) {
    copy_at(interp, 5);
}

fn op_at(interp: &mut Interp) {
    let n = interp.pop_int().max(0) as usize;
    copy_at(interp, n);
}

fn op_swap(interp: &mut Interp) {
    interp.stack_mut().swap();
}

fn op_rot(interp: &mut Interp) {
    interp.stack_mut().rot();
}

fn op_rup(interp: &mut Interp) {
    interp.stack_mut().rup();
}

fn op_rot4(interp: &mut Interp) {
    interp.stack_mut().rot4();
}

fn op_rup4(interp: &mut Interp) {
    interp.stack_mut().rup4();
}

fn op_rotn(interp: &mut Interp) {
    let n = interp.pop_int().max(0) as usize;
    interp.stack_mut().rotn(n);
}

fn op_rupn(interp: &mut Interp) {
    let n = interp.pop_int().max(0) as usize;
    interp.stack_mut().rupn(n);
}

fn op_drop(interp: &mut Interp) {
    if let Some(v) = interp.pop() {
        interp.free_value(v);
    }
}

fn op_dup2(interp: &mut Interp) {
    // (a b -- a b a b)
    copy_at(interp, 1);
    copy_at(interp, 1);
}

fn op_drop2(interp: &mut Interp) {
    op_drop(interp);
    op_drop(interp);
}

fn op_clst(interp: &mut Interp) {
    for v in interp.stack_mut().take() {
        interp.free_value(v);
    }
}

fn op_stash(interp: &mut Interp) {
    if let Some(v) = interp.pop() {
        interp.stash_mut().push(v);
    }
}

fn op_unstash(interp: &mut Interp) {
    if let Some(v) = interp.stash_mut().pop() {
        interp.push(v);
    }
}

fn op_swapstash(interp: &mut Interp) {
    interp.swap_stacks();
}

fn op_stack_size(interp: &mut Interp) {
    let n = interp.stack().len() as i64;
    interp.push_new(Value::int(n));
}
