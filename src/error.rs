//! Argument validation errors.

use thiserror::Error;

/// A required handle or builder was absent.
///
/// This is the only error kind the crate raises on its own. Everything else
/// is passed through from the provider untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid argument: `{name}` must not be absent")]
pub struct InvalidArgument {
    /// Name of the offending parameter.
    pub name: &'static str,
}

impl InvalidArgument {
    pub(crate) fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Unwrap a required argument or fail with [`InvalidArgument`].
pub(crate) fn require<T>(value: Option<T>, name: &'static str) -> Result<T, InvalidArgument> {
    value.ok_or(InvalidArgument::new(name))
}
