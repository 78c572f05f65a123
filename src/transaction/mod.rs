//! Transactions as seen by calling code.
//!
//! A caller asking for a transaction gets a [`TransactionHandle`]: either the
//! provider's own transaction or a [`NullTransaction`] when the provider is
//! the in-memory substitute. Both sides implement [`DbTransaction`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  TransactionHandle<T>                       │
//! │   (What safe begin returns; implements DbTransaction)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//!       ┌───────────────┐             ┌───────────────┐
//!       │   Native(T)   │             │     Null      │
//!       │ (provider tx) │             │ (all no-ops)  │
//!       └───────────────┘             └───────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use nulltx::provider::DatabaseFacadeExt;
//! use nulltx::transaction::{DbTransaction, IsolationLevel};
//!
//! let mut tx = db.begin_transaction_safe_with_isolation(IsolationLevel::Serializable)?;
//! // ... work ...
//! tx.commit()?;
//! tx.dispose();
//! ```

mod capability;
mod error;
mod handle;
mod isolation;
mod null;

pub use capability::{DbTransaction, TransactionId};
pub use error::{TransactionError, TransactionResult};
pub use handle::TransactionHandle;
pub use isolation::IsolationLevel;
pub use null::NullTransaction;
