//! Interpreter value types.
//!
//! Strand programs push several value types onto the operand stack:
//! - Numeric: Int, Float
//! - Text: Str (immutable byte string)
//! - Code: Seq (a reference to a compiled sequence), Func (a native word)
//! - Sym: a reference to a dictionary binding, resolved at use time
//! - Array: a fixed-length integer array holding one LED frame
//!
//! A `Seq` value is a non-owning handle into the sequence arena; the
//! sequence itself is owned either by a dictionary entry or by the
//! transient parse context. See [`crate::seq`].

use std::fmt;
use std::sync::Arc;

use crate::interp::Interp;
use crate::seq::SeqId;

/// Signature of a native word.
///
/// Words take no arguments and return nothing; they communicate through
/// the interpreter's operand stacks and the current-word context.
pub type NativeFn = fn(&mut Interp);

/// A native word plus the optional sequence it carries as an implicit
/// parameter. The parser attaches a body when it compiles a reference to
/// a user-defined word.
#[derive(Clone, Copy, Debug)]
pub struct FuncVal {
    /// The native entry point.
    pub f: NativeFn,
    /// Implicit sequence parameter, if any.
    pub body: Option<SeqId>,
}

impl FuncVal {
    /// Wrap a bare native word.
    pub fn native(f: NativeFn) -> Self {
        Self { f, body: None }
    }

    /// Wrap a native word with an attached sequence parameter.
    pub fn with_body(f: NativeFn, body: SeqId) -> Self {
        Self { f, body: Some(body) }
    }
}

impl PartialEq for FuncVal {
    fn eq(&self, other: &Self) -> bool {
        self.f as usize == other.f as usize && self.body == other.body
    }
}

/// A value on the operand stack or inside a compiled sequence.
#[derive(Clone, Debug)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Immutable string.
    Str(Arc<str>),
    /// Reference to a dictionary binding, by word name.
    Sym(Arc<str>),
    /// A native word, optionally carrying a sequence parameter.
    Func(FuncVal),
    /// Non-owning reference to a compiled sequence.
    Seq(SeqId),
    /// Owned fixed-length integer array (one LED frame).
    Array(Vec<i32>),
}

impl Value {
    /// Create an integer value.
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a string value.
    pub fn str(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Create a symbol value referencing a dictionary binding.
    pub fn sym(word: impl Into<Arc<str>>) -> Self {
        Value::Sym(word.into())
    }

    /// Create a native word value.
    pub fn func(f: NativeFn) -> Self {
        Value::Func(FuncVal::native(f))
    }

    /// Create a sequence reference value.
    pub fn seq(id: SeqId) -> Self {
        Value::Seq(id)
    }

    /// Create an array value.
    pub fn array(items: impl Into<Vec<i32>>) -> Self {
        Value::Array(items.into())
    }

    /// Check whether the value is an integer container for the purposes
    /// of the broadcast float/int decision (`Int` or `Array`).
    pub fn is_int_like(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Array(_))
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Sym(_) => "sym",
            Value::Func(_) => "func",
            Value::Seq(_) => "seq",
            Value::Array(_) => "array",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
            Value::Sym(w) => write!(f, "{}", w),
            Value::Func(_) => write!(f, "<fn>"),
            Value::Seq(_) => write!(f, "<seq>"),
            Value::Array(ia) => write!(f, "<int[{}]>", ia.len()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) => (*a as f64) == *b,
            (Value::Float(a), Value::Int(b)) => *a == (*b as f64),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Sym(a), Value::Sym(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            _ => false,
        }
    }
}
