use std::sync::Arc;

use crate::{
    casing::{self, CaseFn},
    command::Command,
    document::Document,
};

/// Command that rewrites its bound document into upper case.
pub struct UpperCaseCommand {
    document: Arc<Document>,
    case_fn: CaseFn,
}

impl UpperCaseCommand {
    /// Creates a new UpperCaseCommand bound to the provided document.
    pub fn new(document: Arc<Document>) -> Self {
        Self {
            document,
            case_fn: casing::upper_case,
        }
    }

    /// Creates an UpperCaseCommand that uses a caller-supplied casing
    /// function instead of the built-in one.
    pub fn with_case_fn(document: Arc<Document>, case_fn: CaseFn) -> Self {
        Self { document, case_fn }
    }
}

impl Command for UpperCaseCommand {
    fn execute(&self) {
        self.document.transform(self.case_fn);
    }
}
