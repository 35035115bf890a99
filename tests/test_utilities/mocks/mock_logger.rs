use bytecode_guard::prelude::*;
use std::cell::RefCell;

/// Mock DiagnosticLogger recording messages for assertions
#[derive(Default)]
pub struct MockLogger {
    pub debug_messages: RefCell<Vec<String>>,
    pub error_messages: RefCell<Vec<String>>,
}

impl MockLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticLogger for MockLogger {
    fn debug(&self, message: &str) {
        self.debug_messages.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.error_messages.borrow_mut().push(message.to_string());
    }
}
