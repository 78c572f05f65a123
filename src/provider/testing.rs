//! Recording test doubles for provider facades and transactions.

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::provider::facade::DatabaseFacade;
use crate::transaction::{DbTransaction, IsolationLevel, TransactionId};

#[derive(Debug, Error)]
pub enum MockError {
    #[error("provider unavailable")]
    Unavailable,

    #[error("begin cancelled")]
    Cancelled,

    #[error("commit rejected by provider")]
    CommitRejected,
}

/// A native begin the facade received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    Begin,
    BeginWithIsolation(IsolationLevel),
    BeginAsync {
        cancelled: bool,
    },
    BeginWithIsolationAsync {
        isolation: IsolationLevel,
        cancelled: bool,
    },
}

/// Facade that records every native begin.
pub struct RecordingFacade {
    provider_name: Option<String>,
    fail: bool,
    calls: Mutex<Vec<NativeCall>>,
    issued: Mutex<Vec<TransactionId>>,
}

impl RecordingFacade {
    pub fn new(provider_name: Option<&str>) -> Self {
        Self {
            provider_name: provider_name.map(str::to_string),
            fail: false,
            calls: Mutex::new(Vec::new()),
            issued: Mutex::new(Vec::new()),
        }
    }

    /// A facade whose native begins always fail.
    pub fn failing(provider_name: Option<&str>) -> Self {
        Self {
            fail: true,
            ..Self::new(provider_name)
        }
    }

    pub fn calls(&self) -> Vec<NativeCall> {
        self.calls.lock().clone()
    }

    /// Ids of the transactions handed out so far.
    pub fn issued(&self) -> Vec<TransactionId> {
        self.issued.lock().clone()
    }

    fn begin(&self, call: NativeCall) -> Result<RecordingTransaction, MockError> {
        let cancelled = matches!(
            call,
            NativeCall::BeginAsync { cancelled: true }
                | NativeCall::BeginWithIsolationAsync { cancelled: true, .. }
        );
        self.calls.lock().push(call);

        if self.fail {
            return Err(MockError::Unavailable);
        }
        if cancelled {
            return Err(MockError::Cancelled);
        }

        let tx = RecordingTransaction::new();
        self.issued.lock().push(tx.transaction_id());
        Ok(tx)
    }
}

#[async_trait]
impl DatabaseFacade for RecordingFacade {
    type Transaction = RecordingTransaction;
    type Error = MockError;

    fn provider_name(&self) -> Option<&str> {
        self.provider_name.as_deref()
    }

    fn begin_transaction(&self) -> Result<RecordingTransaction, MockError> {
        self.begin(NativeCall::Begin)
    }

    fn begin_transaction_with_isolation(
        &self,
        isolation: IsolationLevel,
    ) -> Result<RecordingTransaction, MockError> {
        self.begin(NativeCall::BeginWithIsolation(isolation))
    }

    async fn begin_transaction_async(
        &self,
        cancel: CancellationToken,
    ) -> Result<RecordingTransaction, MockError> {
        self.begin(NativeCall::BeginAsync {
            cancelled: cancel.is_cancelled(),
        })
    }

    async fn begin_transaction_with_isolation_async(
        &self,
        isolation: IsolationLevel,
        cancel: CancellationToken,
    ) -> Result<RecordingTransaction, MockError> {
        self.begin(NativeCall::BeginWithIsolationAsync {
            isolation,
            cancelled: cancel.is_cancelled(),
        })
    }
}

/// An operation a [`RecordingTransaction`] received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxOp {
    Commit,
    Rollback,
    CreateSavepoint(String),
    RollbackToSavepoint(String),
    ReleaseSavepoint(String),
    Dispose,
}

/// Native transaction that records the operations applied to it.
#[derive(Debug)]
pub struct RecordingTransaction {
    id: TransactionId,
    fail_commit: bool,
    ops: Vec<TxOp>,
}

impl RecordingTransaction {
    pub fn new() -> Self {
        Self {
            id: TransactionId::generate(),
            fail_commit: false,
            ops: Vec::new(),
        }
    }

    /// A transaction whose commits are rejected.
    pub fn failing() -> Self {
        Self {
            fail_commit: true,
            ..Self::new()
        }
    }

    pub fn ops(&self) -> Vec<TxOp> {
        self.ops.clone()
    }

    fn record(&mut self, op: TxOp) -> Result<(), MockError> {
        let rejected = self.fail_commit && op == TxOp::Commit;
        self.ops.push(op);
        if rejected {
            return Err(MockError::CommitRejected);
        }
        Ok(())
    }
}

#[async_trait]
impl DbTransaction for RecordingTransaction {
    type Error = MockError;

    fn transaction_id(&self) -> TransactionId {
        self.id
    }

    fn supports_savepoints(&self) -> bool {
        true
    }

    fn commit(&mut self) -> Result<(), MockError> {
        self.record(TxOp::Commit)
    }

    async fn commit_async(&mut self, _cancel: CancellationToken) -> Result<(), MockError> {
        self.record(TxOp::Commit)
    }

    fn rollback(&mut self) -> Result<(), MockError> {
        self.record(TxOp::Rollback)
    }

    async fn rollback_async(&mut self, _cancel: CancellationToken) -> Result<(), MockError> {
        self.record(TxOp::Rollback)
    }

    fn create_savepoint(&mut self, name: &str) -> Result<(), MockError> {
        self.record(TxOp::CreateSavepoint(name.to_string()))
    }

    async fn create_savepoint_async(
        &mut self,
        name: &str,
        _cancel: CancellationToken,
    ) -> Result<(), MockError> {
        self.record(TxOp::CreateSavepoint(name.to_string()))
    }

    fn rollback_to_savepoint(&mut self, name: &str) -> Result<(), MockError> {
        self.record(TxOp::RollbackToSavepoint(name.to_string()))
    }

    async fn rollback_to_savepoint_async(
        &mut self,
        name: &str,
        _cancel: CancellationToken,
    ) -> Result<(), MockError> {
        self.record(TxOp::RollbackToSavepoint(name.to_string()))
    }

    fn release_savepoint(&mut self, name: &str) -> Result<(), MockError> {
        self.record(TxOp::ReleaseSavepoint(name.to_string()))
    }

    async fn release_savepoint_async(
        &mut self,
        name: &str,
        _cancel: CancellationToken,
    ) -> Result<(), MockError> {
        self.record(TxOp::ReleaseSavepoint(name.to_string()))
    }

    fn dispose(&mut self) {
        self.ops.push(TxOp::Dispose);
    }

    async fn dispose_async(&mut self) {
        self.ops.push(TxOp::Dispose);
    }
}
