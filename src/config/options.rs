//! Context options and their builder.

use std::fmt;
use std::marker::PhantomData;

use crate::config::warnings::WarningsConfiguration;

/// Options a data context is configured with.
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    warnings: WarningsConfiguration,
}

impl ContextOptions {
    /// Start building options for an untyped context.
    pub fn builder() -> ContextOptionsBuilder {
        ContextOptionsBuilder::new()
    }

    /// Get the warnings configuration.
    pub fn warnings(&self) -> &WarningsConfiguration {
        &self.warnings
    }

    pub(crate) fn warnings_mut(&mut self) -> &mut WarningsConfiguration {
        &mut self.warnings
    }
}

/// Builder for [`ContextOptions`].
///
/// `C` marks the context type the options are meant for. The plain form is
/// `ContextOptionsBuilder<()>`; configuration steps are generic over `C` so
/// they apply to both.
pub struct ContextOptionsBuilder<C = ()> {
    options: ContextOptions,
    _context: PhantomData<fn() -> C>,
}

impl<C> ContextOptionsBuilder<C> {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            options: ContextOptions::default(),
            _context: PhantomData,
        }
    }

    /// Adjust the warnings configuration.
    pub fn configure_warnings<F>(mut self, f: F) -> Self
    where
        F: FnOnce(WarningsConfiguration) -> WarningsConfiguration,
    {
        let warnings = std::mem::take(&mut self.options.warnings);
        self.options.warnings = f(warnings);
        self
    }

    /// Get the warnings configured so far.
    pub fn warnings(&self) -> &WarningsConfiguration {
        &self.options.warnings
    }

    /// Finish building.
    pub fn build(self) -> ContextOptions {
        self.options
    }
}

impl<C> Default for ContextOptionsBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for ContextOptionsBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextOptionsBuilder")
            .field("context", &std::any::type_name::<C>())
            .field("options", &self.options)
            .finish()
    }
}
