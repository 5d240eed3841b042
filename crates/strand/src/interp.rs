//! The interpreter context.
//!
//! [`Interp`] owns every piece of process state the language needs: the
//! two operand stacks, the dictionary, the sequence arena, the allocation
//! counters, and the parse-in-progress state. It is passed to every
//! native word, which keeps host-registered words as simple as built-in
//! ones.
//!
//! # Embedding
//!
//! ```
//! use strand::Interp;
//!
//! let mut interp = Interp::new();
//! interp.run_line("1 2 3");
//! assert_eq!(interp.stack().len(), 3);
//! ```
//!
//! The core registers only the definition words (`def`, `redef`,
//! `forget`, `def?`, `vget`, `call`, `step`); arithmetic and the rest of
//! the standard word set live in the `strand-stdlib` crate and are
//! installed with its `install` function.

use smallvec::SmallVec;
use thiserror::Error;

use crate::dict::Dict;
use crate::mem::MemStats;
use crate::seq::{SeqArena, SeqId};
use crate::stack::Stack;
use crate::value::{FuncVal, NativeFn, Value};
use crate::words;

/// Callback invoked after each executed element when step mode is on.
pub type StepFn = Box<dyn FnMut(&Value)>;

/// Host-facing configuration.
#[derive(Clone, Copy, Debug)]
pub struct InterpConfig {
    /// Echo incoming lines back to the host transport.
    pub echo: bool,
    /// Initial packed-color channel order (0 = RGB .. 5 = BRG).
    pub rgb_format: u8,
}

impl Default for InterpConfig {
    fn default() -> Self {
        Self {
            echo: false,
            rgb_format: 0,
        }
    }
}

/// Error from batch evaluation: the input ended while a sequence was
/// still being collected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Input ended with unclosed `[` sequences.
    #[error("input ended with {depth} unclosed sequence(s)")]
    UnclosedSequence {
        /// How many sequences were still open.
        depth: usize,
    },
    /// Input ended inside a `:name ... ;` definition.
    #[error("input ended inside the definition of `{word}`")]
    PendingDefinition {
        /// The word being defined.
        word: String,
    },
}

/// The interpreter. One instance holds all language state.
pub struct Interp {
    pub(crate) stack: Stack,
    pub(crate) stash: Stack,
    pub(crate) dict: Dict,
    pub(crate) seqs: SeqArena,
    pub(crate) mem: MemStats,

    // Parse state, persistent across lines for multi-line sequences.
    pub(crate) open: SmallVec<[SeqId; 8]>,
    pub(crate) pending_def: Option<String>,
    pub(crate) await_def_name: bool,
    pub(crate) block_comment: bool,

    // Execution state.
    pub(crate) cur_func: Option<FuncVal>,
    pub(crate) step_on: bool,
    pub(crate) step_fn: Option<StepFn>,

    // Cached bindings the parser compiles sigils against.
    pub(crate) word_call: Option<FuncVal>,
    pub(crate) word_vget: Option<FuncVal>,
    pub(crate) word_def: Option<FuncVal>,

    echo: bool,
    rgb_format: u8,
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

impl Interp {
    /// Create an interpreter with default configuration.
    pub fn new() -> Self {
        Self::with_config(InterpConfig::default())
    }

    /// Create an interpreter with the given configuration.
    pub fn with_config(config: InterpConfig) -> Self {
        let mut interp = Self {
            stack: Stack::new(),
            stash: Stack::new(),
            dict: Dict::new(),
            seqs: SeqArena::new(),
            mem: MemStats::new(),
            open: SmallVec::new(),
            pending_def: None,
            await_def_name: false,
            block_comment: false,
            cur_func: None,
            step_on: false,
            step_fn: None,
            word_call: None,
            word_vget: None,
            word_def: None,
            echo: config.echo,
            rgb_format: config.rgb_format,
        };
        words::install(&mut interp);
        interp.refresh_core_words();
        interp
    }

    // === Stacks ===

    /// The primary operand stack.
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The primary operand stack, mutably.
    pub fn stack_mut(&mut self) -> &mut Stack {
        &mut self.stack
    }

    /// The stash (auxiliary stack).
    pub fn stash(&self) -> &Stack {
        &self.stash
    }

    /// The stash, mutably.
    pub fn stash_mut(&mut self) -> &mut Stack {
        &mut self.stash
    }

    /// Exchange the primary stack and the stash.
    pub fn swap_stacks(&mut self) {
        std::mem::swap(&mut self.stack, &mut self.stash);
    }

    // === Value lifecycle ===

    /// Push a value that already lives on a stack (no allocation is
    /// recorded). Use [`Interp::push_new`] for freshly created values.
    pub fn push(&mut self, v: Value) {
        self.stack.push(v);
    }

    /// Push a freshly created value, recording the cell allocation.
    pub fn push_new(&mut self, v: Value) {
        self.mem.note_alloc();
        self.stack.push(v);
    }

    /// Pop the top value without releasing it.
    pub fn pop(&mut self) -> Option<Value> {
        self.stack.pop()
    }

    /// Release a consumed value, recording the cell (and any array
    /// payload) as freed.
    pub fn free_value(&mut self, v: Value) {
        if let Value::Array(_) = v {
            self.mem.note_array_free();
        }
        self.mem.note_free();
    }

    /// Clone a value, recording a payload allocation for arrays. `Seq`,
    /// `Sym`, and `Func` values share their referents.
    pub fn copy_value(&mut self, v: &Value) -> Value {
        if let Value::Array(_) = v {
            self.mem.note_array_alloc();
        }
        v.clone()
    }

    /// Wrap a freshly built integer array, recording the payload
    /// allocation.
    pub fn new_array(&mut self, ia: Vec<i32>) -> Value {
        self.mem.note_array_alloc();
        Value::Array(ia)
    }

    // === Coercions ===

    /// Coerce to integer. Symbols chase their binding; strings parse
    /// their leading base-10 digits; floats truncate; everything else
    /// is 0.
    pub fn as_int(&self, v: &Value) -> i64 {
        match v {
            Value::Int(n) => *n,
            Value::Float(n) => *n as i64,
            Value::Str(s) => crate::parse::int_prefix(s),
            Value::Sym(w) => self.dict.find(w).map_or(0, |b| self.as_int(b)),
            _ => 0,
        }
    }

    /// Coerce to float. Same rules as [`Interp::as_int`].
    pub fn as_float(&self, v: &Value) -> f64 {
        match v {
            Value::Int(n) => *n as f64,
            Value::Float(n) => *n,
            Value::Str(s) => crate::parse::float_prefix(s),
            Value::Sym(w) => self.dict.find(w).map_or(0.0, |b| self.as_float(b)),
            _ => 0.0,
        }
    }

    /// Coerce to string. Floats format with six decimal places.
    pub fn as_string(&self, v: &Value) -> String {
        match v {
            Value::Int(n) => n.to_string(),
            Value::Float(n) => format!("{:.6}", n),
            Value::Str(s) => s.to_string(),
            Value::Sym(w) => self.dict.find(w).map_or_else(String::new, |b| self.as_string(b)),
            _ => String::new(),
        }
    }

    /// Coerce to a sequence reference, or `None` (the null sequence).
    pub fn as_seq(&self, v: &Value) -> Option<SeqId> {
        match v {
            Value::Seq(id) => Some(*id),
            Value::Sym(w) => self.dict.find(w).and_then(|b| self.as_seq(b)),
            _ => None,
        }
    }

    // === Typed pops (consume and release the popped value) ===

    /// Pop and coerce to integer; 0 on an empty stack.
    pub fn pop_int(&mut self) -> i64 {
        match self.stack.pop() {
            Some(v) => {
                let n = self.as_int(&v);
                self.free_value(v);
                n
            }
            None => 0,
        }
    }

    /// Pop and coerce to float; 0.0 on an empty stack.
    pub fn pop_float(&mut self) -> f64 {
        match self.stack.pop() {
            Some(v) => {
                let n = self.as_float(&v);
                self.free_value(v);
                n
            }
            None => 0.0,
        }
    }

    /// Pop and coerce to string; empty on an empty stack.
    pub fn pop_string(&mut self) -> String {
        match self.stack.pop() {
            Some(v) => {
                let s = self.as_string(&v);
                self.free_value(v);
                s
            }
            None => String::new(),
        }
    }

    /// Pop and coerce to a sequence reference; the null sequence on an
    /// empty stack or a non-sequence value.
    pub fn pop_seq(&mut self) -> Option<SeqId> {
        match self.stack.pop() {
            Some(v) => {
                let id = self.as_seq(&v);
                self.free_value(v);
                id
            }
            None => None,
        }
    }

    // === Dictionary ===

    /// Bind `word` to `value`, shadowing any prior binding.
    pub fn define_word(&mut self, word: &str, value: Value) {
        self.dict.define(word, value, &mut self.seqs, &mut self.mem);
        if matches!(word, "call" | "vget" | "def") {
            self.refresh_core_words();
        }
    }

    /// Unbind the newest entry for `word`.
    pub fn forget_word(&mut self, word: &str) {
        self.dict.forget(word, &mut self.seqs, &mut self.mem);
        if matches!(word, "call" | "vget" | "def") {
            self.refresh_core_words();
        }
    }

    /// Look up the newest binding for `word`.
    pub fn find_word(&self, word: &str) -> Option<&Value> {
        self.dict.find(word)
    }

    /// Look up the newest binding for `word` mutably.
    pub fn find_word_mut(&mut self, word: &str) -> Option<&mut Value> {
        self.dict.find_mut(word)
    }

    /// Check whether `word` is bound.
    pub fn is_defined(&self, word: &str) -> bool {
        self.dict.is_defined(word)
    }

    /// The dictionary itself, for host inspection.
    pub fn dict(&self) -> &Dict {
        &self.dict
    }

    /// Register a host primitive under `name`.
    pub fn register(&mut self, name: &str, f: NativeFn) {
        self.define_word(name, Value::func(f));
    }

    pub(crate) fn refresh_core_words(&mut self) {
        fn cached(dict: &Dict, word: &str) -> Option<FuncVal> {
            match dict.find(word) {
                Some(Value::Func(fv)) => Some(*fv),
                _ => None,
            }
        }
        self.word_call = cached(&self.dict, "call");
        self.word_vget = cached(&self.dict, "vget");
        self.word_def = cached(&self.dict, "def");
    }

    // === Sequences ===

    /// The sequence arena.
    pub fn seqs(&self) -> &SeqArena {
        &self.seqs
    }

    /// The sequence arena, mutably.
    pub fn seqs_mut(&mut self) -> &mut SeqArena {
        &mut self.seqs
    }

    // === Parse state queries ===

    /// How many sequences the parser is still collecting across lines.
    /// 0 means the next line starts fresh.
    pub fn open_depth(&self) -> usize {
        self.open.len().saturating_sub(1)
    }

    /// The word a multi-line `:name ... ;` definition is collecting, if
    /// any.
    pub fn pending_definition(&self) -> Option<&str> {
        self.pending_def.as_deref()
    }

    /// Toggle block-comment state externally (used by hosts to elide
    /// file headers).
    pub fn set_block_comment(&mut self, on: bool) {
        self.block_comment = on;
    }

    /// Current block-comment state.
    pub fn block_comment(&self) -> bool {
        self.block_comment
    }

    // === Step mode ===

    /// Install the callback invoked after each executed element while
    /// step mode is on.
    pub fn set_step_callback(&mut self, f: StepFn) {
        self.step_fn = Some(f);
    }

    /// Turn step mode on or off. The `step` word turns it on from
    /// within a program.
    pub fn set_step(&mut self, on: bool) {
        self.step_on = on;
    }

    /// The sequence parameter attached to the word currently executing,
    /// if any.
    pub fn current_body(&self) -> Option<SeqId> {
        self.cur_func.and_then(|f| f.body)
    }

    // === Host flags ===

    /// Host echo flag.
    pub fn echo(&self) -> bool {
        self.echo
    }

    /// Set the host echo flag.
    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    /// Current packed-color channel order.
    pub fn rgb_format(&self) -> u8 {
        self.rgb_format
    }

    /// Set the packed-color channel order.
    pub fn set_rgb_format(&mut self, format: u8) {
        self.rgb_format = format;
    }

    /// Allocation counters.
    pub fn mem(&self) -> &MemStats {
        &self.mem
    }

    /// Allocation counters, mutably. Words that clone or build payloads
    /// outside the [`Interp`] helpers record them here.
    pub fn mem_mut(&mut self) -> &mut MemStats {
        &mut self.mem
    }

    // === Batch evaluation ===

    /// Feed every line of `source`, then verify nothing was left open.
    pub fn eval_lines(&mut self, source: &str) -> Result<(), EvalError> {
        for line in source.lines() {
            self.run_line(line);
        }
        if self.open_depth() > 0 {
            if let Some(word) = self.pending_def.take() {
                return Err(EvalError::PendingDefinition { word });
            }
            return Err(EvalError::UnclosedSequence {
                depth: self.open_depth(),
            });
        }
        Ok(())
    }
}
