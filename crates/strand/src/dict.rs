//! The word dictionary.
//!
//! An ordered list of named bindings searched newest-first, so a fresh
//! `redef` shadows older entries and `forget` re-exposes them. An entry
//! owns its value; if the value is a sequence reference the entry owns
//! the sequence tree too, which is why `define` takes a deep copy and
//! `forget` frees one.

use std::sync::Arc;

use tracing::debug;

use crate::mem::MemStats;
use crate::seq::SeqArena;
use crate::value::Value;

/// A named binding.
#[derive(Clone, Debug)]
pub struct SymEntry {
    word: Arc<str>,
    value: Value,
}

impl SymEntry {
    /// The bound word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// The word dictionary. Newest entries win lookup.
#[derive(Debug, Default)]
pub struct Dict {
    // Newest entry last; lookups scan from the end.
    entries: Vec<SymEntry>,
}

impl Dict {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `word` to `value`, shadowing any existing binding. Sequence
    /// values are deep-copied into dictionary ownership.
    pub fn define(
        &mut self,
        word: impl Into<Arc<str>>,
        value: Value,
        arena: &mut SeqArena,
        mem: &mut MemStats,
    ) {
        let word = word.into();
        debug!(word = %word, "define");
        let value = match value {
            Value::Seq(id) => Value::Seq(arena.deep_copy(id, mem)),
            other => other,
        };
        self.entries.push(SymEntry { word, value });
    }

    /// Unbind the newest entry for `word`, freeing its value and any
    /// owned sequence tree. Absent words are ignored.
    pub fn forget(&mut self, word: &str, arena: &mut SeqArena, mem: &mut MemStats) {
        let Some(pos) = self.entries.iter().rposition(|e| &*e.word == word) else {
            return;
        };
        debug!(word = %word, "forget");
        let entry = self.entries.remove(pos);
        if let Value::Array(_) = entry.value {
            mem.note_array_free();
        }
        mem.note_free();
        if let Value::Seq(id) = entry.value {
            arena.free_tree(id, mem);
        }
    }

    /// Look up the newest binding for `word`.
    pub fn find(&self, word: &str) -> Option<&Value> {
        self.entries
            .iter()
            .rev()
            .find(|e| &*e.word == word)
            .map(|e| &e.value)
    }

    /// Look up the newest binding for `word` mutably.
    pub fn find_mut(&mut self, word: &str) -> Option<&mut Value> {
        self.entries
            .iter_mut()
            .rev()
            .find(|e| &*e.word == word)
            .map(|e| &mut e.value)
    }

    /// Check whether `word` is bound.
    pub fn is_defined(&self, word: &str) -> bool {
        self.entries.iter().any(|e| &*e.word == word)
    }

    /// All entries, oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &SymEntry> {
        self.entries.iter()
    }

    /// Number of entries, shadowed ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
