//! Core definition words.
//!
//! These are the words the parser compiles sigils against (`def`,
//! `vget`, `call`), plus their immediate relatives. They are registered
//! by [`Interp::new`] so sigils always resolve; the rest of the word set
//! lives in the stdlib crate.

use crate::interp::Interp;
use crate::value::Value;

pub(crate) fn install(interp: &mut Interp) {
    interp.register("def", op_def);
    interp.register("redef", op_redef);
    interp.register("forget", op_forget);
    interp.register("def?", op_defp);
    interp.register("vget", op_vget);
    interp.register("call", op_call);
    interp.register("step", op_step);
}

/// `def ( val name — )`: forget any prior binding, then bind.
fn op_def(interp: &mut Interp) {
    let word = interp.pop_string();
    let value = interp.pop().unwrap_or(Value::Int(0));
    interp.forget_word(&word);
    interp.define_word(&word, value);
}

/// `redef ( val name — )`: bind without forgetting. The prior entry is
/// shadowed but retained; `forget` re-exposes it.
fn op_redef(interp: &mut Interp) {
    let word = interp.pop_string();
    let value = interp.pop().unwrap_or(Value::Int(0));
    interp.define_word(&word, value);
}

/// `forget ( name — )`: unbind the newest entry for a word.
fn op_forget(interp: &mut Interp) {
    let word = interp.pop_string();
    interp.forget_word(&word);
}

/// `def? ( name — 0|1 )`: whether a word is bound.
fn op_defp(interp: &mut Interp) {
    let word = interp.pop_string();
    let defined = interp.is_defined(&word);
    interp.push_new(Value::int(defined as i64));
}

/// `vget ( name — val )`: push a copy of the bound value, or 0.
fn op_vget(interp: &mut Interp) {
    let word = interp.pop_string();
    match interp.find_word(&word).cloned() {
        Some(v) => {
            if let Value::Array(_) = v {
                interp.mem.note_array_alloc();
            }
            interp.push_new(v);
        }
        None => interp.push_new(Value::int(0)),
    }
}

/// `call`: run the implicit sequence parameter if the current word
/// carries one; otherwise pop a word name and run its bound sequence.
fn op_call(interp: &mut Interp) {
    if let Some(body) = interp.current_body() {
        interp.run_seq(body);
        return;
    }
    let word = interp.pop_string();
    let body = match interp.find_word(&word) {
        Some(Value::Seq(id)) => Some(*id),
        _ => None,
    };
    if let Some(id) = body {
        interp.run_seq(id);
    }
}

/// `step`: turn on single-step mode for the host's step callback.
fn op_step(interp: &mut Interp) {
    interp.set_step(true);
}
