//! Provider detection and safe transaction begin.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │            begin_transaction_safe* / DatabaseFacadeExt      │
//! │   (Validate handle, classify, substitute or delegate)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//!       ┌───────────────┐             ┌───────────────┐
//!       │  classifier   │             │DatabaseFacade │
//!       │ (name match)  │             │ (native begin)│
//!       └───────────────┘             └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use nulltx::provider::{DatabaseFacadeExt, InMemoryFacade};
//! use nulltx::transaction::{DbTransaction, IsolationLevel};
//!
//! let db = InMemoryFacade::default();
//! let mut tx = db
//!     .begin_transaction_safe_with_isolation(IsolationLevel::Serializable)
//!     .unwrap();
//! assert!(tx.is_null());
//! tx.commit().unwrap();
//! tx.dispose();
//! ```

mod classifier;
mod dispatch;
mod facade;
mod in_memory;

#[cfg(test)]
pub(crate) mod testing;

pub use classifier::{is_in_memory_provider, provider_name_is_in_memory, IN_MEMORY_PROVIDER_MARKER};
pub use dispatch::{
    begin_transaction_safe, begin_transaction_safe_async, begin_transaction_safe_with_isolation,
    begin_transaction_safe_with_isolation_async, BeginTransactionFuture, DatabaseFacadeExt,
};
pub use facade::DatabaseFacade;
pub use in_memory::{InMemoryFacade, IN_MEMORY_PROVIDER_NAME};
