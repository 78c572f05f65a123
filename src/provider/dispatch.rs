//! Provider-aware transaction begin.
//!
//! On the in-memory provider every variant hands back a fresh
//! [`NullTransaction`] without touching the provider; isolation levels and
//! cancellation tokens are accepted and ignored. On any other provider the
//! call goes to the matching native begin, and its result, error or
//! cancellation comes back unchanged.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::require;
use crate::provider::classifier::provider_name_is_in_memory;
use crate::provider::facade::DatabaseFacade;
use crate::transaction::{
    IsolationLevel, NullTransaction, TransactionError, TransactionHandle, TransactionResult,
};

type NativeBegin<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// Future returned by the async safe-begin variants.
///
/// Already completed when the in-memory provider was detected or the
/// handle was absent; otherwise drives the provider's native begin.
#[must_use = "futures do nothing unless polled"]
pub struct BeginTransactionFuture<'a, T, E> {
    state: BeginState<'a, T, E>,
}

enum BeginState<'a, T, E> {
    Ready(Option<TransactionResult<TransactionHandle<T>, E>>),
    Native(NativeBegin<'a, T, E>),
}

impl<'a, T, E> BeginTransactionFuture<'a, T, E> {
    fn ready(result: TransactionResult<TransactionHandle<T>, E>) -> Self {
        Self {
            state: BeginState::Ready(Some(result)),
        }
    }

    fn native(fut: NativeBegin<'a, T, E>) -> Self {
        Self {
            state: BeginState::Native(fut),
        }
    }

    /// Check if the result was decided without waiting on the provider.
    pub fn is_completed(&self) -> bool {
        matches!(self.state, BeginState::Ready(_))
    }
}

// No field is ever structurally pinned.
impl<T, E> Unpin for BeginTransactionFuture<'_, T, E> {}

impl<T, E> Future for BeginTransactionFuture<'_, T, E> {
    type Output = TransactionResult<TransactionHandle<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            BeginState::Ready(result) => Poll::Ready(
                result
                    .take()
                    .expect("`BeginTransactionFuture` polled after completion"),
            ),
            BeginState::Native(fut) => fut
                .as_mut()
                .poll(cx)
                .map(|result| result.map(TransactionHandle::Native).map_err(TransactionError::Provider)),
        }
    }
}

/// Classify `db` and record the decision.
fn use_null_transaction<D: DatabaseFacade>(
    db: &D,
    op: &'static str,
    isolation: Option<IsolationLevel>,
) -> bool {
    let provider = db.provider_name();
    let in_memory = provider_name_is_in_memory(provider);
    debug!(
        target: "nulltx::dispatch",
        provider = provider.unwrap_or_default(),
        op,
        isolation = ?isolation,
        null_transaction = in_memory,
        "beginning transaction"
    );
    in_memory
}

fn null_handle<T>() -> TransactionHandle<T> {
    TransactionHandle::Null(NullTransaction::new())
}

/// Begin a transaction at the provider's default isolation level.
pub fn begin_transaction_safe<D: DatabaseFacade>(
    db: Option<&D>,
) -> TransactionResult<TransactionHandle<D::Transaction>, D::Error> {
    let db = require(db, "database")?;
    if use_null_transaction(db, "begin_transaction", None) {
        return Ok(null_handle());
    }
    db.begin_transaction()
        .map(TransactionHandle::Native)
        .map_err(TransactionError::Provider)
}

/// Begin a transaction at the given isolation level.
pub fn begin_transaction_safe_with_isolation<D: DatabaseFacade>(
    db: Option<&D>,
    isolation: IsolationLevel,
) -> TransactionResult<TransactionHandle<D::Transaction>, D::Error> {
    let db = require(db, "database")?;
    if use_null_transaction(db, "begin_transaction", Some(isolation)) {
        return Ok(null_handle());
    }
    db.begin_transaction_with_isolation(isolation)
        .map(TransactionHandle::Native)
        .map_err(TransactionError::Provider)
}

/// Begin a transaction asynchronously at the provider's default isolation level.
///
/// Without a `cancel` token the native begin gets one that is never cancelled.
pub fn begin_transaction_safe_async<D: DatabaseFacade>(
    db: Option<&D>,
    cancel: Option<CancellationToken>,
) -> BeginTransactionFuture<'_, D::Transaction, D::Error> {
    let db = match require(db, "database") {
        Ok(db) => db,
        Err(e) => return BeginTransactionFuture::ready(Err(e.into())),
    };
    if use_null_transaction(db, "begin_transaction_async", None) {
        return BeginTransactionFuture::ready(Ok(null_handle()));
    }
    BeginTransactionFuture::native(
        db.begin_transaction_async(cancel.unwrap_or_else(CancellationToken::new)),
    )
}

/// Begin a transaction asynchronously at the given isolation level.
pub fn begin_transaction_safe_with_isolation_async<D: DatabaseFacade>(
    db: Option<&D>,
    isolation: IsolationLevel,
    cancel: Option<CancellationToken>,
) -> BeginTransactionFuture<'_, D::Transaction, D::Error> {
    let db = match require(db, "database") {
        Ok(db) => db,
        Err(e) => return BeginTransactionFuture::ready(Err(e.into())),
    };
    if use_null_transaction(db, "begin_transaction_async", Some(isolation)) {
        return BeginTransactionFuture::ready(Ok(null_handle()));
    }
    BeginTransactionFuture::native(db.begin_transaction_with_isolation_async(
        isolation,
        cancel.unwrap_or_else(CancellationToken::new),
    ))
}

/// Safe-begin operations as methods on any facade.
pub trait DatabaseFacadeExt: DatabaseFacade + Sized {
    /// Check whether this facade is backed by the in-memory provider.
    fn is_in_memory(&self) -> bool {
        provider_name_is_in_memory(self.provider_name())
    }

    fn begin_transaction_safe(
        &self,
    ) -> TransactionResult<TransactionHandle<Self::Transaction>, Self::Error> {
        begin_transaction_safe(Some(self))
    }

    fn begin_transaction_safe_with_isolation(
        &self,
        isolation: IsolationLevel,
    ) -> TransactionResult<TransactionHandle<Self::Transaction>, Self::Error> {
        begin_transaction_safe_with_isolation(Some(self), isolation)
    }

    fn begin_transaction_safe_async(
        &self,
        cancel: Option<CancellationToken>,
    ) -> BeginTransactionFuture<'_, Self::Transaction, Self::Error> {
        begin_transaction_safe_async(Some(self), cancel)
    }

    fn begin_transaction_safe_with_isolation_async(
        &self,
        isolation: IsolationLevel,
        cancel: Option<CancellationToken>,
    ) -> BeginTransactionFuture<'_, Self::Transaction, Self::Error> {
        begin_transaction_safe_with_isolation_async(Some(self), isolation, cancel)
    }
}

impl<D: DatabaseFacade> DatabaseFacadeExt for D {}
