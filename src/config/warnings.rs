//! Diagnostic events and how to react to them.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;
use tracing::warn;

/// Identifies a diagnostic event a provider may raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId {
    /// Numeric code, unique per event.
    pub code: u32,
    /// Stable symbolic name.
    pub name: &'static str,
}

impl EventId {
    pub const fn new(code: u32, name: &'static str) -> Self {
        Self { code, name }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// What to do when a warning event is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WarningBehavior {
    /// Emit the warning through `tracing`.
    #[default]
    Log,
    /// Drop the warning silently.
    Ignore,
    /// Turn the warning into an error.
    Throw,
}

/// A warning configured with [`WarningBehavior::Throw`] was raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("warning {event} was configured to throw: {message}")]
pub struct WarningAsError {
    /// The event that was raised.
    pub event: EventId,
    /// The provider's explanation.
    pub message: String,
}

/// Per-event warning behaviors.
#[derive(Debug, Clone, Default)]
pub struct WarningsConfiguration {
    default_behavior: WarningBehavior,
    explicit: HashMap<EventId, WarningBehavior>,
}

impl WarningsConfiguration {
    /// Create a configuration that logs every warning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the behavior for events without an explicit entry.
    pub fn default_behavior(mut self, behavior: WarningBehavior) -> Self {
        self.default_behavior = behavior;
        self
    }

    /// Ignore the given events.
    pub fn ignore(self, events: impl IntoIterator<Item = EventId>) -> Self {
        self.with_behavior(events, WarningBehavior::Ignore)
    }

    /// Log the given events.
    pub fn log(self, events: impl IntoIterator<Item = EventId>) -> Self {
        self.with_behavior(events, WarningBehavior::Log)
    }

    /// Turn the given events into errors.
    pub fn throw(self, events: impl IntoIterator<Item = EventId>) -> Self {
        self.with_behavior(events, WarningBehavior::Throw)
    }

    fn with_behavior(
        mut self,
        events: impl IntoIterator<Item = EventId>,
        behavior: WarningBehavior,
    ) -> Self {
        for event in events {
            self.explicit.insert(event, behavior);
        }
        self
    }

    /// Set a behavior only if none was configured for this event.
    ///
    /// Providers use this for their own defaults so that user choices win.
    pub fn try_with_explicit(&mut self, event: EventId, behavior: WarningBehavior) -> bool {
        if self.explicit.contains_key(&event) {
            return false;
        }
        self.explicit.insert(event, behavior);
        true
    }

    /// Get the effective behavior for an event.
    pub fn behavior_for(&self, event: EventId) -> WarningBehavior {
        self.explicit
            .get(&event)
            .copied()
            .unwrap_or(self.default_behavior)
    }

    /// Raise a warning event according to its configured behavior.
    pub fn raise(&self, event: EventId, message: &str) -> Result<(), WarningAsError> {
        match self.behavior_for(event) {
            WarningBehavior::Ignore => Ok(()),
            WarningBehavior::Log => {
                warn!(target: "nulltx::warnings", event = %event, "{}", message);
                Ok(())
            }
            WarningBehavior::Throw => Err(WarningAsError {
                event,
                message: message.to_string(),
            }),
        }
    }
}
