//! A facade for the in-memory provider.
//!
//! The in-memory store has no transactions. Its native begin raises
//! [`TRANSACTION_IGNORED_WARNING`], which is configured to throw unless the
//! application chose otherwise, and then hands out a [`NullTransaction`].

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::config::in_memory_events::TRANSACTION_IGNORED_WARNING;
use crate::config::{ContextOptions, WarningAsError, WarningBehavior};
use crate::provider::facade::DatabaseFacade;
use crate::transaction::{IsolationLevel, NullTransaction};

/// Name the in-memory facade reports by default.
pub const IN_MEMORY_PROVIDER_NAME: &str = "nulltx.InMemory";

/// Database facade backed by the in-memory provider.
#[derive(Debug)]
pub struct InMemoryFacade {
    provider_name: String,
    options: ContextOptions,
}

impl InMemoryFacade {
    /// Create a facade using `options`.
    ///
    /// The transaction warning becomes an error unless `options` already
    /// configures it.
    pub fn new(mut options: ContextOptions) -> Self {
        options
            .warnings_mut()
            .try_with_explicit(TRANSACTION_IGNORED_WARNING, WarningBehavior::Throw);
        Self {
            provider_name: IN_MEMORY_PROVIDER_NAME.to_string(),
            options,
        }
    }

    /// Report a different provider name.
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    /// Get the effective options.
    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    fn transaction_ignored(&self, api: &str) -> Result<NullTransaction, WarningAsError> {
        self.options.warnings().raise(
            TRANSACTION_IGNORED_WARNING,
            &format!("{} was called, but the in-memory store does not support transactions", api),
        )?;
        Ok(NullTransaction::new())
    }
}

impl Default for InMemoryFacade {
    fn default() -> Self {
        Self::new(ContextOptions::default())
    }
}

#[async_trait]
impl DatabaseFacade for InMemoryFacade {
    type Transaction = NullTransaction;
    type Error = WarningAsError;

    fn provider_name(&self) -> Option<&str> {
        Some(&self.provider_name)
    }

    fn begin_transaction(&self) -> Result<NullTransaction, WarningAsError> {
        self.transaction_ignored("begin_transaction")
    }

    fn begin_transaction_with_isolation(
        &self,
        _isolation: IsolationLevel,
    ) -> Result<NullTransaction, WarningAsError> {
        self.transaction_ignored("begin_transaction")
    }

    async fn begin_transaction_async(
        &self,
        _cancel: CancellationToken,
    ) -> Result<NullTransaction, WarningAsError> {
        self.transaction_ignored("begin_transaction_async")
    }

    async fn begin_transaction_with_isolation_async(
        &self,
        _isolation: IsolationLevel,
        _cancel: CancellationToken,
    ) -> Result<NullTransaction, WarningAsError> {
        self.transaction_ignored("begin_transaction_async")
    }
}
