//! Strand standard word set.
//!
//! This crate provides the standard words for the Strand language:
//! - Arithmetic with array broadcasting (`+`, `-`, `*`, `/`, `mod`,
//!   transcendentals, rounding)
//! - Comparison and logic (`eq`, `gt`, `and`, ...)
//! - Stack shuffles (`dup`, `swap`, `rot`, the stash words)
//! - Integer array words (`array`, `identity`, `geta`, `map`, ...)
//! - Control flow (`if`, `ife`, `loop`, `repeat`)
//! - Numeric formatting and substrings
//! - Color packing (`rgb>`, `hsv>`, `blend`, `ablend`)
//! - Allocation diagnostics (`mem:*`)
//!
//! The definition words (`def`, `vget`, `call`, ...) come with the core
//! `strand` crate itself.
//!
//! # Example
//!
//! ```
//! let stack = strand_stdlib::eval("3 4 +").unwrap();
//! assert_eq!(stack, vec![strand::Value::int(7)]);
//! ```

pub mod arith;
pub mod arrays;
pub mod color;
pub mod compare;
pub mod flow;
pub mod mem_ops;
pub mod stack_ops;
pub mod strings;

use strand::{EvalError, Interp, Value};

/// Install the whole standard word set into an interpreter.
pub fn install(interp: &mut Interp) {
    arith::install(interp);
    compare::install(interp);
    stack_ops::install(interp);
    arrays::install(interp);
    flow::install(interp);
    strings::install(interp);
    color::install(interp);
    mem_ops::install(interp);
}

/// Create an interpreter with the standard word set installed.
pub fn interp() -> Interp {
    let mut interp = Interp::new();
    install(&mut interp);
    interp
}

/// Evaluate a program with the standard word set and return the
/// resulting stack, bottom to top.
pub fn eval(source: &str) -> Result<Vec<Value>, EvalError> {
    let mut interp = interp();
    interp.eval_lines(source)?;
    Ok(interp.stack().as_slice().to_vec())
}
