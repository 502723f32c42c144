//! Textops - Named, deferred text transformation commands.
//!
//! Textops packages text transformations as reusable command objects that
//! are registered under human-readable names and executed on demand against
//! a shared document. The main pieces include:
//!
//! - A shared mutable [`Document`](document::Document) receiver
//! - A [`Command`](command::Command) trait with title-case and upper-case
//!   implementations
//! - A [`CommandRegistry`](command::CommandRegistry) dispatching commands
//!   by name
//! - Pure, locale-independent casing primitives
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use textops::{
//!     command::{self, CommandRegistry},
//!     document::Document,
//! };
//!
//! # fn main() -> textops::Result<()> {
//! let document = Arc::new(Document::new("great expectations"));
//!
//! let mut registry = CommandRegistry::new();
//! command::register_builtins(&mut registry, &document)?;
//!
//! registry.run("title-case")?;
//! assert_eq!(document.text(), "Great Expectations");
//!
//! registry.run("upper-case")?;
//! assert_eq!(document.text(), "GREAT EXPECTATIONS");
//! # Ok(())
//! # }
//! ```

/// Core error types and result aliases.
pub mod core;

/// Pure casing primitives injected into commands.
pub mod casing;

/// Shared mutable document that commands operate on.
pub mod document;

/// Command trait, concrete commands, and the name-based registry.
pub mod command;

/// Re-exported core types for convenience.
pub use core::{Result, TextopsError};
