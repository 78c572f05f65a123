//! nulltx - provider-aware transactions for in-memory database providers
//!
//! In-memory substitutes for a real database cannot honor transactions. This
//! crate detects such a provider by name and hands out a [`NullTransaction`]
//! instead of calling the provider's native begin, so application code that
//! asks for a transaction works unchanged in tests.
//!
//! # Example
//!
//! ```
//! use nulltx::provider::{DatabaseFacadeExt, InMemoryFacade};
//! use nulltx::transaction::DbTransaction;
//!
//! let db = InMemoryFacade::default();
//! let mut tx = db.begin_transaction_safe().unwrap();
//! tx.commit().unwrap();
//! ```
//!
//! [`NullTransaction`]: transaction::NullTransaction

pub mod config;
mod error;
pub mod provider;
pub mod transaction;

pub use error::InvalidArgument;
