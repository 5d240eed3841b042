//! Allocation diagnostic words.
//!
//! These expose the interpreter's value-cell and array-payload counters
//! so a host can watch for leaks over a long-running animation. Each
//! counter is sampled before the result cell is allocated.

use strand::{Interp, Value};

/// Register the diagnostic words.
pub fn install(interp: &mut Interp) {
    interp.register("mem:malloc", op_mem_malloc);
    interp.register("mem:alloc", op_mem_alloc);
    interp.register("mem:free", op_mem_free);
    interp.register("mem:calloc", op_mem_calloc);
    interp.register("mem:cfree", op_mem_cfree);
    interp.register("mem:amalloc", op_mem_amalloc);
    interp.register("mem:afree", op_mem_afree);
}

fn op_mem_malloc(interp: &mut Interp) {
    let n = interp.mem().malloc() as i64;
    interp.push_new(Value::int(n));
}

fn op_mem_alloc(interp: &mut Interp) {
    let n = interp.mem().allocated() as i64;
    interp.push_new(Value::int(n));
}

fn op_mem_free(interp: &mut Interp) {
    let n = interp.mem().freed() as i64;
    interp.push_new(Value::int(n));
}

fn op_mem_calloc(interp: &mut Interp) {
    let n = interp.mem().current_allocated();
    interp.push_new(Value::int(n));
}

fn op_mem_cfree(interp: &mut Interp) {
    let n = interp.mem().current_freed();
    interp.push_new(Value::int(n));
}

fn op_mem_amalloc(interp: &mut Interp) {
    let n = interp.mem().array_alloc() as i64;
    interp.push_new(Value::int(n));
}

fn op_mem_afree(interp: &mut Interp) {
    let n = interp.mem().array_freed() as i64;
    interp.push_new(Value::int(n));
}
