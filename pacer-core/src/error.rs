// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the pacer timing combinators
//!
//! The combinators themselves never invent failures: what they report is either
//! an error raised by the wrapped action, an invalid configuration, or a failure
//! travelling through one of the time-based stream operators.
//!
//! # Examples
//!
//! ```
//! use pacer_core::{PacerError, Result};
//!
//! fn load() -> Result<()> {
//!     Err(PacerError::config_error("throttle_interval_ms is missing"))
//! }
//! ```

/// Root error type for all pacer operations
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// The wrapped action failed
    ///
    /// Used for fallible actions whose invocation was deferred by a timer, where
    /// there is no caller left to return the error to.
    #[error("Action error: {0}")]
    Action(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration could not be parsed or is inconsistent
    #[error("Configuration error: {context}")]
    Config {
        /// What was wrong with the configuration
        context: String,
    },

    /// A failure carried through a stream as `StreamItem::Error`
    #[error("Stream processing error: {context}")]
    StreamProcessing {
        /// Description of what went wrong during stream processing
        context: String,
    },
}

impl PacerError {
    /// Wrap an error raised by a user action
    pub fn action_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Action(Box::new(error))
    }

    /// Create a configuration error with the given context
    pub fn config_error(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }

    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessing {
            context: context.into(),
        }
    }

    /// Errors raised by user actions are the only ones that say nothing about
    /// the combinator itself.
    #[must_use]
    pub const fn is_action_error(&self) -> bool {
        matches!(self, Self::Action(_))
    }
}

/// Specialized Result type for pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;

impl Clone for PacerError {
    fn clone(&self) -> Self {
        match self {
            // The boxed source cannot be cloned, keep its message
            Self::Action(e) => Self::StreamProcessing {
                context: format!("Action error: {e}"),
            },
            Self::Config { context } => Self::Config {
                context: context.clone(),
            },
            Self::StreamProcessing { context } => Self::StreamProcessing {
                context: context.clone(),
            },
        }
    }
}
