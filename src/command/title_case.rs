use std::sync::Arc;

use crate::{
    casing::{self, CaseFn},
    command::Command,
    document::Document,
};

/// Command that rewrites its bound document into title case.
///
/// On execution, the first letter of each whitespace-delimited word is
/// upper-cased and the remaining letters of the word are lower-cased.
pub struct TitleCaseCommand {
    /// Shared handle to the document this command rewrites.
    document: Arc<Document>,
    case_fn: CaseFn,
}

impl TitleCaseCommand {
    /// Creates a new TitleCaseCommand bound to the provided document.
    ///
    /// Uses the crate's built-in title-casing primitive. The binding is
    /// fixed for the command's lifetime.
    pub fn new(document: Arc<Document>) -> Self {
        Self {
            document,
            case_fn: casing::title_case,
        }
    }

    /// Creates a TitleCaseCommand that uses a caller-supplied casing
    /// function instead of the built-in one.
    pub fn with_case_fn(document: Arc<Document>, case_fn: CaseFn) -> Self {
        Self { document, case_fn }
    }
}

impl Command for TitleCaseCommand {
    fn execute(&self) {
        self.document.transform(self.case_fn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_document_text() {
        let document = Arc::new(Document::new("great expectations"));
        let command = TitleCaseCommand::new(document.clone());

        command.execute();

        assert_eq!(document.text(), "Great Expectations");
    }

    #[test]
    fn custom_case_fn_is_used() {
        let document = Arc::new(Document::new("abc"));
        let command = TitleCaseCommand::with_case_fn(document.clone(), |text| {
            text.chars().rev().collect()
        });

        command.execute();

        assert_eq!(document.text(), "cba");
    }
}
