//! Sequence executor.
//!
//! Runs a compiled sequence head to tail. Callable elements (native
//! words, and symbols bound to native words) are invoked with the
//! current-word context set so they can read an implicit sequence
//! parameter; every other element pushes a deep copy of itself onto the
//! primary stack. Control-flow words re-enter [`Interp::run_seq`]
//! recursively for the sequences they pop.

use tracing::trace;

use crate::interp::Interp;
use crate::seq::SeqId;
use crate::value::Value;

impl Interp {
    /// Run a sequence to completion.
    ///
    /// A stale or null sequence reference runs as the empty sequence.
    /// Elements are fetched through the arena on every step so a word
    /// that frees its own sequence mid-run ends the run instead of
    /// reading freed storage.
    pub fn run_seq(&mut self, id: SeqId) {
        let mut i = 0;
        loop {
            let item = match self.seqs.get(id).and_then(|s| s.items().get(i)) {
                Some(v) => v.clone(),
                None => break,
            };
            i += 1;
            self.run_item(&item);
        }
    }

    fn run_item(&mut self, item: &Value) {
        match item {
            Value::Func(fv) => {
                let fv = *fv;
                self.cur_func = Some(fv);
                (fv.f)(self);
            }
            Value::Sym(w) => {
                let bound = match self.dict.find(w) {
                    Some(Value::Func(fv)) => Some(*fv),
                    _ => None,
                };
                match bound {
                    Some(fv) => {
                        self.cur_func = Some(fv);
                        (fv.f)(self);
                    }
                    None => {
                        let copy = self.copy_value(item);
                        self.push_new(copy);
                    }
                }
            }
            _ => {
                let copy = self.copy_value(item);
                self.push_new(copy);
            }
        }
        if self.step_on {
            if let Some(mut cb) = self.step_fn.take() {
                cb(item);
                self.step_fn = Some(cb);
            }
        }
    }

    /// Run a value: sequences execute, strings parse and run line by
    /// line, anything else is ignored.
    pub fn run_value(&mut self, v: &Value) {
        match v {
            Value::Seq(id) => self.run_seq(*id),
            Value::Str(s) => {
                trace!("run text value");
                let text = s.clone();
                for line in text.lines() {
                    self.run_line(line);
                }
            }
            _ => {}
        }
    }
}
