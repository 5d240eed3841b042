//! Compiled sequences and their arena.
//!
//! A sequence is an ordered list of values produced by the parser and
//! consumed by the executor. Sequences live in a process-wide arena and
//! are addressed by generational [`SeqId`] keys; `Seq` values hold keys,
//! never the sequences themselves. A sequence is owned either by a
//! dictionary entry (after `def` deep-copies it) or by the transient
//! parse context, which frees its whole tree after an immediate run.
//!
//! Generational keys make a stale reference observable: looking it up
//! yields `None`, and the executor treats that as the null sequence.

use slotmap::{new_key_type, SlotMap};

use crate::mem::MemStats;
use crate::value::Value;

new_key_type! {
    /// Handle to a sequence in the arena.
    pub struct SeqId;
}

/// An ordered list of values representing a compiled block.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    items: Vec<Value>,
}

impl Sequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value at the tail (execution order).
    pub fn push_tail(&mut self, v: Value) {
        self.items.push(v);
    }

    /// Insert a value at the head, ahead of everything compiled so far.
    pub fn push_head(&mut self, v: Value) {
        self.items.insert(0, v);
    }

    /// Number of values in the sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The values, head to tail.
    pub fn items(&self) -> &[Value] {
        &self.items
    }
}

/// Process-wide arena of sequences.
#[derive(Debug, Default)]
pub struct SeqArena {
    seqs: SlotMap<SeqId, Sequence>,
}

impl SeqArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh empty sequence.
    pub fn alloc(&mut self) -> SeqId {
        self.seqs.insert(Sequence::new())
    }

    /// Look up a sequence. Stale ids yield `None`.
    pub fn get(&self, id: SeqId) -> Option<&Sequence> {
        self.seqs.get(id)
    }

    /// Look up a sequence mutably.
    pub fn get_mut(&mut self, id: SeqId) -> Option<&mut Sequence> {
        self.seqs.get_mut(id)
    }

    /// Check whether an id is still live.
    pub fn contains(&self, id: SeqId) -> bool {
        self.seqs.contains_key(id)
    }

    /// Number of live sequences.
    pub fn len(&self) -> usize {
        self.seqs.len()
    }

    /// Check whether the arena is empty.
    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty()
    }

    /// Free a sequence and, recursively, every sequence referenced by a
    /// `Seq` value inside it. Sequences attached to `Func` values are
    /// word bodies owned by the dictionary and are left alone.
    pub fn free_tree(&mut self, id: SeqId, mem: &mut MemStats) {
        let Some(seq) = self.seqs.remove(id) else {
            return;
        };
        for item in seq.items {
            if let Value::Array(_) = item {
                mem.note_array_free();
            }
            mem.note_free();
            if let Value::Seq(child) = item {
                self.free_tree(child, mem);
            }
        }
    }

    /// Deep-copy a sequence: values are cloned, nested `Seq` references
    /// are recursively copied into fresh arena slots. This is how a
    /// transient parsed sequence becomes a permanent definition.
    pub fn deep_copy(&mut self, id: SeqId, mem: &mut MemStats) -> SeqId {
        let items: Vec<Value> = self
            .seqs
            .get(id)
            .map(|s| s.items.clone())
            .unwrap_or_default();
        let mut copy = Sequence::new();
        for item in items {
            mem.note_alloc();
            let copied = match item {
                Value::Seq(child) => Value::Seq(self.deep_copy(child, mem)),
                Value::Array(ia) => {
                    mem.note_array_alloc();
                    Value::Array(ia)
                }
                other => other,
            };
            copy.push_tail(copied);
        }
        self.seqs.insert(copy)
    }
}
