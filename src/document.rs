//! Shared mutable document that commands operate on.

use std::sync::{PoisonError, RwLock};

/// A text document shared between the client and the commands bound to it.
///
/// The document is the receiver side of the command system: commands hold an
/// `Arc<Document>` and rewrite its text in place when executed, while the
/// client reads the text back to observe cumulative effects. Interior
/// mutability lives behind an `RwLock` so a shared handle is enough to
/// mutate; the intended usage is still strictly sequential.
#[derive(Debug)]
pub struct Document {
    text: RwLock<String>,
}

impl Document {
    /// Creates a document holding `initial` as its text.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(initial.into()),
        }
    }

    /// Returns a copy of the current text.
    pub fn text(&self) -> String {
        self.text
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the current text with `text`.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.write().unwrap_or_else(PoisonError::into_inner) = text.into();
    }

    /// Rewrites the text in place as `f(current)`.
    ///
    /// The read-compute-write cycle happens under a single write lock, so no
    /// intermediate state is observable.
    pub fn transform(&self, f: impl FnOnce(&str) -> String) {
        let mut guard = self.text.write().unwrap_or_else(PoisonError::into_inner);
        let updated = f(&guard);
        *guard = updated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_and_returns_text() {
        let document = Document::new("hello");
        assert_eq!(document.text(), "hello");

        document.set_text("goodbye");
        assert_eq!(document.text(), "goodbye");
    }

    #[test]
    fn transform_rewrites_in_place() {
        let document = Document::new("abc");
        document.transform(|text| text.repeat(2));
        assert_eq!(document.text(), "abcabc");
    }
}
