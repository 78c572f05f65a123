//! Native-or-null transaction handle.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::transaction::capability::{DbTransaction, TransactionId};
use crate::transaction::null::NullTransaction;

/// The transaction returned by safe begin.
///
/// Both variants implement [`DbTransaction`] through this type, so callers
/// use the handle directly and never need to match on it.
#[derive(Debug)]
pub enum TransactionHandle<T> {
    /// A transaction started by the real provider.
    Native(T),
    /// A stand-in for the in-memory provider.
    Null(NullTransaction),
}

impl<T> TransactionHandle<T> {
    /// Check if this is a null transaction.
    pub fn is_null(&self) -> bool {
        matches!(self, TransactionHandle::Null(_))
    }

    /// Borrow the provider's transaction, if there is one.
    pub fn as_native(&self) -> Option<&T> {
        match self {
            TransactionHandle::Native(tx) => Some(tx),
            TransactionHandle::Null(_) => None,
        }
    }

    /// Take the provider's transaction, if there is one.
    pub fn into_native(self) -> Option<T> {
        match self {
            TransactionHandle::Native(tx) => Some(tx),
            TransactionHandle::Null(_) => None,
        }
    }
}

impl<T> From<NullTransaction> for TransactionHandle<T> {
    fn from(tx: NullTransaction) -> Self {
        TransactionHandle::Null(tx)
    }
}

#[async_trait]
impl<T: DbTransaction> DbTransaction for TransactionHandle<T> {
    type Error = T::Error;

    fn transaction_id(&self) -> TransactionId {
        match self {
            TransactionHandle::Native(tx) => tx.transaction_id(),
            TransactionHandle::Null(tx) => tx.transaction_id(),
        }
    }

    fn supports_savepoints(&self) -> bool {
        match self {
            TransactionHandle::Native(tx) => tx.supports_savepoints(),
            TransactionHandle::Null(tx) => tx.supports_savepoints(),
        }
    }

    fn commit(&mut self) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.commit(),
            TransactionHandle::Null(tx) => tx.commit().map_err(|never| match never {}),
        }
    }

    async fn commit_async(&mut self, cancel: CancellationToken) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.commit_async(cancel).await,
            TransactionHandle::Null(tx) => {
                tx.commit_async(cancel).await.map_err(|never| match never {})
            }
        }
    }

    fn rollback(&mut self) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.rollback(),
            TransactionHandle::Null(tx) => tx.rollback().map_err(|never| match never {}),
        }
    }

    async fn rollback_async(&mut self, cancel: CancellationToken) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.rollback_async(cancel).await,
            TransactionHandle::Null(tx) => {
                tx.rollback_async(cancel).await.map_err(|never| match never {})
            }
        }
    }

    fn create_savepoint(&mut self, name: &str) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.create_savepoint(name),
            TransactionHandle::Null(tx) => {
                tx.create_savepoint(name).map_err(|never| match never {})
            }
        }
    }

    async fn create_savepoint_async(
        &mut self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.create_savepoint_async(name, cancel).await,
            TransactionHandle::Null(tx) => {
                tx.create_savepoint_async(name, cancel).await.map_err(|never| match never {})
            }
        }
    }

    fn rollback_to_savepoint(&mut self, name: &str) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.rollback_to_savepoint(name),
            TransactionHandle::Null(tx) => {
                tx.rollback_to_savepoint(name).map_err(|never| match never {})
            }
        }
    }

    async fn rollback_to_savepoint_async(
        &mut self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.rollback_to_savepoint_async(name, cancel).await,
            TransactionHandle::Null(tx) => tx
                .rollback_to_savepoint_async(name, cancel)
                .await
                .map_err(|never| match never {}),
        }
    }

    fn release_savepoint(&mut self, name: &str) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.release_savepoint(name),
            TransactionHandle::Null(tx) => {
                tx.release_savepoint(name).map_err(|never| match never {})
            }
        }
    }

    async fn release_savepoint_async(
        &mut self,
        name: &str,
        cancel: CancellationToken,
    ) -> Result<(), T::Error> {
        match self {
            TransactionHandle::Native(tx) => tx.release_savepoint_async(name, cancel).await,
            TransactionHandle::Null(tx) => {
                tx.release_savepoint_async(name, cancel).await.map_err(|never| match never {})
            }
        }
    }

    fn dispose(&mut self) {
        match self {
            TransactionHandle::Native(tx) => tx.dispose(),
            TransactionHandle::Null(tx) => tx.dispose(),
        }
    }

    async fn dispose_async(&mut self) {
        match self {
            TransactionHandle::Native(tx) => tx.dispose_async().await,
            TransactionHandle::Null(tx) => tx.dispose_async().await,
        }
    }
}
