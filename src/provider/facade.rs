//! The database facade consumed by the dispatcher.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::transaction::{DbTransaction, IsolationLevel};

/// A data context's handle on its database provider.
///
/// Implemented by provider integrations. The dispatcher only reads
/// [`provider_name`](Self::provider_name) and calls the native begin
/// operations; it never inspects the transaction or error types.
#[async_trait]
pub trait DatabaseFacade: Send + Sync {
    /// The provider's transaction type.
    type Transaction: DbTransaction;

    /// Error raised when a transaction cannot be started.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Name the provider reports for itself, if any.
    fn provider_name(&self) -> Option<&str>;

    /// Begin a transaction at the provider's default isolation level.
    fn begin_transaction(&self) -> Result<Self::Transaction, Self::Error>;

    /// Begin a transaction at the given isolation level.
    fn begin_transaction_with_isolation(
        &self,
        isolation: IsolationLevel,
    ) -> Result<Self::Transaction, Self::Error>;

    /// Begin a transaction at the provider's default isolation level.
    async fn begin_transaction_async(
        &self,
        cancel: CancellationToken,
    ) -> Result<Self::Transaction, Self::Error>;

    /// Begin a transaction at the given isolation level.
    async fn begin_transaction_with_isolation_async(
        &self,
        isolation: IsolationLevel,
        cancel: CancellationToken,
    ) -> Result<Self::Transaction, Self::Error>;
}
