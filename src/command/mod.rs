//! Deferred text transformation commands and their registry.
//!
//! A [`Command`] packages one transformation together with the document it
//! targets, so the work can be triggered later by name without the caller
//! knowing anything about the transformation itself. The [`CommandRegistry`]
//! is the invoker side: a flat name-to-command dispatch table that new
//! command types can join without the registry or any existing command
//! changing.

mod registry;
mod title_case;
mod upper_case;

use std::sync::Arc;

pub use registry::CommandRegistry;
pub use title_case::TitleCaseCommand;
pub use upper_case::UpperCaseCommand;

use crate::{core::Result, document::Document};

/// Trait defining the interface for all registrable commands.
///
/// Each command closes over everything it needs at construction time,
/// typically a shared handle to the document it rewrites. Execution takes no
/// arguments, returns nothing, and never fails; the only observable effect
/// is the command's documented mutation of its bound document.
pub trait Command: Send + Sync {
    /// Applies this command's transformation to its bound document.
    ///
    /// Safe to call any number of times. Each call operates on the
    /// document's text as it stands at that moment, so repeated execution
    /// is only a no-op when the transformation itself is idempotent.
    fn execute(&self);
}

/// Registers the built-in casing commands with the command registry.
///
/// Binds a [`TitleCaseCommand`] and an [`UpperCaseCommand`] to `document`
/// and registers them under their canonical names, `"title-case"` and
/// `"upper-case"`.
///
/// # Errors
/// Returns `TextopsError::DuplicateCommand` if either name is already taken
/// in `registry`.
pub fn register_builtins(registry: &mut CommandRegistry, document: &Arc<Document>) -> Result<()> {
    registry.register(
        "title-case",
        Box::new(TitleCaseCommand::new(document.clone())),
    )?;

    registry.register(
        "upper-case",
        Box::new(UpperCaseCommand::new(document.clone())),
    )?;

    Ok(())
}
