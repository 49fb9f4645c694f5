//! In-memory host document that dispatches change notifications synchronously,
//! the way the editor does: `set_line` re-enters the registered listener.

#![allow(dead_code)]

use livesub_rule_engine::{ChangeOutcome, Editor, LiveReplace};
use livesub_store::MemorySettingsStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Listener = Rc<dyn Fn(&Document) -> ChangeOutcome>;

pub struct Document {
    lines: RefCell<Vec<String>>,
    cursor: Cell<usize>,
    writes: Cell<usize>,
    listener: RefCell<Option<Listener>>,
    /// Outcomes of notifications raised from inside `set_line`
    nested: RefCell<Vec<ChangeOutcome>>,
}

impl Document {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: RefCell::new(lines.iter().map(|l| l.to_string()).collect()),
            cursor: Cell::new(0),
            writes: Cell::new(0),
            listener: RefCell::new(None),
            nested: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a session to content-changed notifications
    pub fn subscribe(&self, live: Rc<LiveReplace<MemorySettingsStore>>) {
        *self.listener.borrow_mut() = Some(Rc::new(move |doc: &Document| live.on_content_changed(doc)));
    }

    pub fn set_cursor(&self, line: usize) {
        self.cursor.set(line);
    }

    /// Simulate the user editing the cursor line, then notify
    pub fn type_text(&self, text: &str) -> Option<ChangeOutcome> {
        let line = self.cursor.get();
        self.lines.borrow_mut()[line] = text.to_string();
        self.notify()
    }

    pub fn text(&self, line: usize) -> String {
        self.lines.borrow()[line].clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn nested(&self) -> Vec<ChangeOutcome> {
        self.nested.borrow().clone()
    }

    fn notify(&self) -> Option<ChangeOutcome> {
        let listener = self.listener.borrow().clone();
        listener.map(|listener| listener(self))
    }
}

impl Editor for Document {
    fn cursor_line(&self) -> usize {
        self.cursor.get()
    }

    fn line(&self, line: usize) -> Option<String> {
        self.lines.borrow().get(line).cloned()
    }

    fn set_line(&self, line: usize, text: &str) {
        self.lines.borrow_mut()[line] = text.to_string();
        self.writes.set(self.writes.get() + 1);
        if let Some(outcome) = self.notify() {
            self.nested.borrow_mut().push(outcome);
        }
    }
}
