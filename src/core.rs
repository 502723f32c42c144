use thiserror::Error;

/// Errors surfaced by the command registry.
///
/// All variants are caller errors: nothing here is transient or retried
/// internally. The registry distinguishes "you registered something twice"
/// from "you asked for something that was never registered" so clients can
/// tell a bad registration sequence apart from a bad lookup.
#[derive(Error, Debug)]
pub enum TextopsError {
    /// A command was registered under a name that is already taken.
    ///
    /// The existing binding is left untouched; the caller must pick a
    /// different name.
    #[error("Command already registered under name '{0}'")]
    DuplicateCommand(String),

    /// A run was requested for a name with no registered command.
    #[error("Command not found: '{0}'")]
    CommandNotFound(String),

    /// A command was registered under an empty name.
    #[error("Invalid command name: {0}")]
    InvalidName(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, TextopsError>;
