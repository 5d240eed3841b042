//! Line parser and compiler.
//!
//! A line is split on whitespace and each token is dispatched on its
//! first character (the sigil). Tokens compile onto the tail of the
//! current open sequence; `[` and `:name` push a new open sequence onto
//! the parse stack, `]` and `;` pop one. When a line ends with only the
//! root sequence open, the root runs immediately and its whole tree is
//! freed; otherwise the open sequences persist and later lines keep
//! appending to them.

use tracing::trace;

use crate::interp::Interp;
use crate::value::{FuncVal, Value};

enum Binding {
    SeqBody(crate::seq::SeqId),
    Other,
    Unbound,
}

impl Interp {
    /// Feed one line of source text.
    ///
    /// Lines starting with `//` are discarded, and a leading `~~~`
    /// toggles block-comment mode. The line must not contain control
    /// characters; hosts normalize CR/LF/TAB to spaces first.
    pub fn run_line(&mut self, line: &str) {
        trace!(line, "input");
        if line.starts_with("//") {
            return;
        }
        if line.starts_with("~~~") {
            self.block_comment = !self.block_comment;
            return;
        }
        if self.block_comment {
            return;
        }

        if self.open.is_empty() {
            let root = self.seqs.alloc();
            self.open.push(root);
        }
        for word in line.split_whitespace() {
            self.parse_word(word);
        }
        if self.open.len() == 1 {
            if let Some(root) = self.open.pop() {
                self.run_seq(root);
                self.seqs.free_tree(root, &mut self.mem);
            }
        }
    }

    fn parse_word(&mut self, w: &str) {
        if self.await_def_name {
            // A bare `:` sigil takes the following token as the name.
            self.await_def_name = false;
            self.pending_def = Some(w.to_string());
            self.open_inner();
            return;
        }

        let Some(first) = w.chars().next() else {
            return;
        };
        let rest = &w[first.len_utf8()..];
        match first {
            '[' => self.open_inner(),
            ']' => self.close_inner(),
            '@' => {
                self.append(Value::str(rest));
                if let Some(fv) = self.word_vget {
                    self.append(Value::Func(fv));
                }
            }
            '!' => {
                self.append(Value::str(rest));
                if let Some(fv) = self.word_def {
                    self.append(Value::Func(fv));
                }
            }
            '#' => self.append(Value::int(hex_prefix(rest))),
            '\'' => self.append(Value::str(rest)),
            ':' => {
                if rest.is_empty() {
                    self.await_def_name = true;
                } else {
                    self.pending_def = Some(rest.to_string());
                    self.open_inner();
                }
            }
            ';' => self.end_definition(),
            '(' => {
                // Stack comments are for source readability only.
            }
            _ => self.word_or_number(w),
        }
    }

    fn open_inner(&mut self) {
        let inner = self.seqs.alloc();
        self.open.push(inner);
    }

    fn close_inner(&mut self) {
        // The root sequence has no enclosing sequence and stays current.
        if self.open.len() > 1 {
            if let Some(inner) = self.open.pop() {
                self.append(Value::Seq(inner));
            }
        }
    }

    fn end_definition(&mut self) {
        if let Some(name) = self.pending_def.take() {
            self.close_inner();
            self.append(Value::str(name));
            if let Some(fv) = self.word_def {
                self.append(Value::Func(fv));
            }
        }
    }

    fn word_or_number(&mut self, w: &str) {
        let binding = match self.dict.find(w) {
            Some(Value::Seq(id)) => Binding::SeqBody(*id),
            Some(_) => Binding::Other,
            None => Binding::Unbound,
        };
        match binding {
            Binding::SeqBody(body) => match self.word_call {
                // A reference to a sequence-valued word compiles to a
                // `call` carrying the body as its implicit parameter.
                Some(call) => self.append(Value::Func(FuncVal::with_body(call.f, body))),
                None => self.append(Value::sym(w)),
            },
            Binding::Other => self.append(Value::sym(w)),
            Binding::Unbound => {
                if w.contains('.') {
                    self.append(Value::float(float_prefix(w)));
                } else {
                    self.append(Value::int(int_prefix(w)));
                }
            }
        }
    }

    fn append(&mut self, v: Value) {
        if let Some(&cur) = self.open.last() {
            self.mem.note_alloc();
            if let Some(seq) = self.seqs.get_mut(cur) {
                seq.push_tail(v);
            }
        }
    }
}

/// Parse the longest leading base-10 integer; 0 if there is none.
pub(crate) fn int_prefix(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() {
        let b = bytes[end];
        let ok = b.is_ascii_digit() || ((b == b'+' || b == b'-') && end == 0);
        if !ok {
            break;
        }
        end += 1;
    }
    s[..end].parse().unwrap_or(0)
}

/// Parse the longest leading decimal number; 0.0 if there is none.
pub(crate) fn float_prefix(s: &str) -> f64 {
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        let b = bytes[end];
        let ok = b.is_ascii_digit()
            || (b == b'.' && !seen_dot)
            || ((b == b'+' || b == b'-') && end == 0);
        if !ok {
            break;
        }
        if b == b'.' {
            seen_dot = true;
        }
        end += 1;
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Parse the longest leading base-16 integer; 0 if there is none.
pub(crate) fn hex_prefix(s: &str) -> i64 {
    let end = s
        .bytes()
        .take_while(|b| b.is_ascii_hexdigit())
        .count();
    i64::from_str_radix(&s[..end], 16).unwrap_or(0)
}
