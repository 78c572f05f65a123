//! A transaction that does nothing.

use std::convert::Infallible;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::transaction::capability::{DbTransaction, TransactionId};

/// Stand-in transaction for providers that cannot honor real ones.
///
/// Every operation succeeds without doing anything, including after
/// [`dispose`](DbTransaction::dispose) and in any order. Only the identifier
/// is real: each instance gets a fresh one.
#[derive(Debug)]
pub struct NullTransaction {
    id: TransactionId,
}

impl NullTransaction {
    /// Create a null transaction with a fresh identifier.
    pub fn new() -> Self {
        Self {
            id: TransactionId::generate(),
        }
    }

    fn ignore(&self, op: &'static str) {
        trace!(target: "nulltx::null", tx_id = %self.id, op, "operation ignored");
    }
}

impl Default for NullTransaction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DbTransaction for NullTransaction {
    type Error = Infallible;

    fn transaction_id(&self) -> TransactionId {
        self.id
    }

    fn supports_savepoints(&self) -> bool {
        false
    }

    fn commit(&mut self) -> Result<(), Infallible> {
        self.ignore("commit");
        Ok(())
    }

    async fn commit_async(&mut self, _cancel: CancellationToken) -> Result<(), Infallible> {
        self.commit()
    }

    fn rollback(&mut self) -> Result<(), Infallible> {
        self.ignore("rollback");
        Ok(())
    }

    async fn rollback_async(&mut self, _cancel: CancellationToken) -> Result<(), Infallible> {
        self.rollback()
    }

    fn create_savepoint(&mut self, _name: &str) -> Result<(), Infallible> {
        self.ignore("create_savepoint");
        Ok(())
    }

    async fn create_savepoint_async(
        &mut self,
        name: &str,
        _cancel: CancellationToken,
    ) -> Result<(), Infallible> {
        self.create_savepoint(name)
    }

    fn rollback_to_savepoint(&mut self, _name: &str) -> Result<(), Infallible> {
        self.ignore("rollback_to_savepoint");
        Ok(())
    }

    async fn rollback_to_savepoint_async(
        &mut self,
        name: &str,
        _cancel: CancellationToken,
    ) -> Result<(), Infallible> {
        self.rollback_to_savepoint(name)
    }

    fn release_savepoint(&mut self, _name: &str) -> Result<(), Infallible> {
        self.ignore("release_savepoint");
        Ok(())
    }

    async fn release_savepoint_async(
        &mut self,
        name: &str,
        _cancel: CancellationToken,
    ) -> Result<(), Infallible> {
        self.release_savepoint(name)
    }

    fn dispose(&mut self) {
        self.ignore("dispose");
    }

    async fn dispose_async(&mut self) {
        self.dispose()
    }
}
