// SPDX-FileCopyrightText: 2026 Bizhelper Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared by the gateway and the backend.

use thiserror::Error;

/// The primary error type used across all Bizhelper collaborator traits.
#[derive(Debug, Error)]
pub enum BizError {
    /// The request carried nothing routable or violated a protocol constraint.
    ///
    /// Terminal: callers must not retry.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Persistence backend errors (connection, query failure, migration).
    #[error("storage error: {message}")]
    Storage {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Outbound delivery errors (Telegram unreachable or rejected the call).
    #[error("delivery error: {message}")]
    Delivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Backend link transport errors.
    #[error("rpc error: {message}")]
    Rpc {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration errors (missing token, malformed URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BizError {
    /// Builds a [`BizError::Storage`] wrapping the given source error.
    pub fn storage(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns `true` for errors the caller caused and must not retry.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = BizError::InvalidArgument("no message or callback provided".into());
        assert_eq!(
            err.to_string(),
            "invalid argument: no message or callback provided"
        );

        let err = BizError::storage("insert failed", std::io::Error::other("disk full"));
        assert_eq!(err.to_string(), "storage error: insert failed");
    }

    #[test]
    fn only_invalid_argument_is_terminal() {
        assert!(BizError::InvalidArgument("x".into()).is_invalid_argument());
        assert!(!BizError::Internal("x".into()).is_invalid_argument());
        assert!(
            !BizError::Timeout {
                duration: std::time::Duration::from_secs(1)
            }
            .is_invalid_argument()
        );
    }
}
