use std::collections::{HashMap, hash_map::Entry};

use tracing::debug;

use crate::core::{Result, TextopsError};

use super::Command;

/// Registry for named commands.
///
/// The CommandRegistry maps human-readable names to command instances and
/// dispatches execution by name. It is intentionally ignorant of both
/// command semantics and document structure: it never inspects what a
/// command does or what state it touches, it only holds the binding and
/// triggers it. New command types can be introduced and registered without
/// modifying the registry or any previously-registered command.
///
/// Names are unique per registry instance. Registration grows the mapping
/// monotonically; there is no unregister operation.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a command under the given name.
    ///
    /// # Arguments
    ///
    /// * `name` - Non-empty name the command becomes retrievable under
    /// * `command` - The command implementation to register
    ///
    /// # Errors
    ///
    /// * `TextopsError::InvalidName` - If `name` is empty
    /// * `TextopsError::DuplicateCommand` - If `name` is already registered;
    ///   the existing binding is not replaced
    pub fn register(&mut self, name: &str, command: Box<dyn Command>) -> Result<()> {
        if name.is_empty() {
            return Err(TextopsError::InvalidName(
                "command names must be non-empty".to_string(),
            ));
        }

        match self.commands.entry(name.to_string()) {
            Entry::Occupied(_) => Err(TextopsError::DuplicateCommand(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(command);
                debug!(name, "Registered command");
                Ok(())
            }
        }
    }

    /// Executes the command registered under the given name.
    ///
    /// The command runs exactly once, synchronously, before this method
    /// returns; its side effect is whatever the underlying command does to
    /// its bound document.
    ///
    /// # Errors
    ///
    /// Returns `TextopsError::CommandNotFound` if no command is registered
    /// under `name`. No document is mutated in that case.
    pub fn run(&self, name: &str) -> Result<()> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| TextopsError::CommandNotFound(name.to_string()))?;

        debug!(name, "Dispatching command");
        command.execute();

        Ok(())
    }

    /// Returns the names of all registered commands.
    ///
    /// Every successfully registered name appears exactly once; no ordering
    /// is guaranteed.
    pub fn names(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands have been registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
