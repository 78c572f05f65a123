//! Context configuration.
//!
//! Options are plain values built with [`ContextOptionsBuilder`] and handed to
//! a provider facade. There is no process-wide state.
//!
//! # Usage
//!
//! ```
//! use nulltx::config::{in_memory_events, ContextOptions, InMemoryOptionsExt, WarningBehavior};
//!
//! let options = ContextOptions::builder()
//!     .enable_in_memory_transaction_support()
//!     .build();
//!
//! assert_eq!(
//!     options.warnings().behavior_for(in_memory_events::TRANSACTION_IGNORED_WARNING),
//!     WarningBehavior::Ignore,
//! );
//! ```

mod in_memory;
mod options;
mod warnings;

pub use in_memory::{enable_in_memory_transaction_support, in_memory_events, InMemoryOptionsExt};
pub use options::{ContextOptions, ContextOptionsBuilder};
pub use warnings::{EventId, WarningAsError, WarningBehavior, WarningsConfiguration};
