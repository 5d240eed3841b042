//! Strand: an embeddable stack language for RGB LED strands.
//!
//! Strand programs are short text lines sent over a serial link or a
//! network packet. Each line is compiled into a sequence of values and
//! executed against a shared operand stack:
//!
//! ```text
//! [ dup * swap dup * + sqrt ] 'pyth def
//! 3 4 pyth
//! ```
//!
//! This crate is the language runtime: the value model, the free-list
//! accounting, the two operand stacks, the dictionary, the sequence
//! arena, the sigil parser, the executor, and the definition words the
//! parser compiles against. The standard word set (arithmetic with
//! array broadcasting, control flow, stack shuffles, color packing)
//! lives in the `strand-stdlib` crate and is installed into an
//! [`Interp`] at startup; hosts add their own words the same way
//! through [`Interp::register`].
//!
//! # Example
//!
//! ```
//! // Bare-core evaluation handles literals, sigils, and definitions.
//! let stack = strand::eval("1 2.5 'three").unwrap();
//! assert_eq!(stack.len(), 3);
//! ```

pub mod broadcast;
pub mod dict;
pub mod interp;
pub mod mem;
pub mod seq;
pub mod stack;
pub mod value;

mod exec;
mod parse;
mod words;

pub use interp::{EvalError, Interp, InterpConfig, StepFn};
pub use seq::{SeqArena, SeqId, Sequence};
pub use stack::Stack;
pub use value::{FuncVal, NativeFn, Value};

/// Evaluate a program with a bare interpreter and return the resulting
/// stack, bottom to top.
///
/// Only the core definition words are available here; for the full word
/// set use `strand_stdlib::eval`.
pub fn eval(source: &str) -> Result<Vec<Value>, EvalError> {
    let mut interp = Interp::new();
    interp.eval_lines(source)?;
    Ok(interp.stack().as_slice().to_vec())
}
