//! Error taxonomy for bridge calls.

use thiserror::Error;

/// Failure reported by the host runtime's dialog facility.
///
/// The message is carried verbatim so callers see exactly what the host reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DialogError {
    message: String,
}

impl DialogError {
    /// Wraps a host-reported failure message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the host-reported message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Error returned by bridge operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// A dialog was requested before the host delivered the execution context.
    #[error("bridge is not ready: startup hook has not run")]
    NotReady,
    /// The host dialog facility failed.
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

#[cfg(test)]
mod tests {
    use super::{BridgeError, DialogError};

    #[test]
    fn dialog_errors_display_the_host_message_unchanged() {
        let err = BridgeError::from(DialogError::new("dialog subsystem unavailable"));
        assert_eq!(err.to_string(), "dialog subsystem unavailable");
    }
}
