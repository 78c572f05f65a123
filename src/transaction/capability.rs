//! The transaction capability interface.
//!
//! Anything handed out by the dispatcher, native or null, implements
//! [`DbTransaction`]. Calling code depends on this trait only.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use ulid::Ulid;

/// Unique identifier of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionId(Ulid);

impl TransactionId {
    /// Generate a fresh identifier.
    pub fn generate() -> Self {
        Self(Ulid::new())
    }

    /// Wrap an existing ULID, e.g. one assigned by a provider.
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    /// The underlying ULID.
    pub fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// Check if this is the all-zero identifier.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_string().to_lowercase())
    }
}

impl FromStr for TransactionId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

/// Operations every transaction-like object supports.
///
/// Async methods take a [`CancellationToken`] to match the calling
/// convention of real providers; implementations that never wait may
/// ignore it.
#[async_trait]
pub trait DbTransaction: Send {
    /// Error type of the failing operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Identifier of this transaction.
    fn transaction_id(&self) -> TransactionId;

    /// Whether savepoints are supported.
    fn supports_savepoints(&self) -> bool;

    /// Commit all changes made in the transaction.
    fn commit(&mut self) -> Result<(), Self::Error>;

    async fn commit_async(&mut self, cancel: CancellationToken) -> Result<(), Self::Error>;

    /// Discard all changes made in the transaction.
    fn rollback(&mut self) -> Result<(), Self::Error>;

    async fn rollback_async(&mut self, cancel: CancellationToken) -> Result<(), Self::Error>;

    /// Create a savepoint with the given name.
    fn create_savepoint(&mut self, name: &str) -> Result<(), Self::Error>;

    async fn create_savepoint_async(
        &mut self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<(), Self::Error>;

    /// Roll back to a previously created savepoint.
    fn rollback_to_savepoint(&mut self, name: &str) -> Result<(), Self::Error>;

    async fn rollback_to_savepoint_async(
        &mut self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<(), Self::Error>;

    /// Release a previously created savepoint.
    fn release_savepoint(&mut self, name: &str) -> Result<(), Self::Error>;

    async fn release_savepoint_async(
        &mut self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<(), Self::Error>;

    /// Release resources held by the transaction.
    fn dispose(&mut self);

    async fn dispose_async(&mut self);
}
