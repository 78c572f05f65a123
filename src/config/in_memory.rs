//! In-memory provider events and the option that quiets them.

use crate::config::options::ContextOptionsBuilder;
use crate::config::warnings::EventId;
use crate::error::{require, InvalidArgument};

/// Events raised by the in-memory provider.
pub mod in_memory_events {
    use super::EventId;

    /// A transaction API was used, but the in-memory provider has no transactions.
    pub const TRANSACTION_IGNORED_WARNING: EventId =
        EventId::new(30600, "InMemory.TransactionIgnoredWarning");
}

/// Ignore the in-memory provider's transaction warning on `builder`.
///
/// This only silences the diagnostic. Transactions still have to be begun
/// through the safe dispatcher to get a [`NullTransaction`] on the in-memory
/// provider.
///
/// [`NullTransaction`]: crate::transaction::NullTransaction
pub fn enable_in_memory_transaction_support<C>(
    builder: Option<ContextOptionsBuilder<C>>,
) -> Result<ContextOptionsBuilder<C>, InvalidArgument> {
    let builder = require(builder, "options_builder")?;
    Ok(builder.configure_warnings(|w| w.ignore([in_memory_events::TRANSACTION_IGNORED_WARNING])))
}

/// Fluent form of [`enable_in_memory_transaction_support`].
pub trait InMemoryOptionsExt: Sized {
    fn enable_in_memory_transaction_support(self) -> Self;
}

impl<C> InMemoryOptionsExt for ContextOptionsBuilder<C> {
    fn enable_in_memory_transaction_support(self) -> Self {
        self.configure_warnings(|w| w.ignore([in_memory_events::TRANSACTION_IGNORED_WARNING]))
    }
}
