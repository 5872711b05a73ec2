// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for Cascade pipelines
//!
//! Every operation on a stage or a chain returns [`Result`], whose error side is
//! [`CascadeError`]. Errors always surface to the immediate caller; the pipeline
//! never retries and never swallows a failure.
//!
//! # Examples
//!
//! ```
//! use cascade_core::{CascadeError, Result};
//!
//! fn build() -> Result<()> {
//!     Err(CascadeError::configuration("a chain needs at least one stage"))
//! }
//!
//! assert!(build().unwrap_err().is_usage_error());
//! ```

use core::fmt;

use crate::stage::StageState;

/// Lifecycle operation that was refused by a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// One-time preparation performed by the chain builder
    Prime,
    /// Delivery of one unit of input
    Push,
    /// End-of-stream signal
    Finalize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prime => write!(f, "prime"),
            Self::Push => write!(f, "push into"),
            Self::Finalize => write!(f, "finalize"),
        }
    }
}

/// Root error type for all Cascade operations
#[derive(Debug, thiserror::Error)]
pub enum CascadeError {
    /// The pipeline was wired or parameterised incorrectly
    ///
    /// Raised when a chain is built from zero stages, when a stage rejects its
    /// parameters while being primed, or when a terminal stage tries to emit.
    #[error("Configuration error: {context}")]
    ConfigurationError {
        /// What was misconfigured
        context: String,
    },

    /// An operation was invoked on a stage in a state that does not allow it
    ///
    /// Pushing before priming, and pushing into a finished or failed stage,
    /// both end up here. Nothing is emitted downstream when this is returned.
    #[error("Invalid state: cannot {operation} stage '{stage}' while it is {state}")]
    InvalidState {
        /// Name of the stage that refused the operation
        stage: String,
        /// The refused operation
        operation: Operation,
        /// The state the stage was in
        state: StageState,
    },

    /// A stage's transformation rule failed on its input
    #[error("Transformation error in stage '{stage}': {context}")]
    TransformationError {
        /// Name of the failing stage
        stage: String,
        /// Description of the failure
        context: String,
    },

    /// Reading from a source or writing to a sink target failed
    #[error("Source error: {0}")]
    SourceError(#[from] std::io::Error),

    /// Custom error from user code
    ///
    /// Wraps errors produced by user-provided closures. Use
    /// [`ResultExt::in_stage`] to attribute them to a stage.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CascadeError {
    /// Create a configuration error with the given context
    pub fn configuration(context: impl Into<String>) -> Self {
        Self::ConfigurationError {
            context: context.into(),
        }
    }

    /// Create an invalid-state error for `stage`
    pub fn invalid_state(stage: impl Into<String>, operation: Operation, state: StageState) -> Self {
        Self::InvalidState {
            stage: stage.into(),
            operation,
            state,
        }
    }

    /// Create a transformation error raised by `stage`
    pub fn transformation(stage: impl Into<String>, context: impl Into<String>) -> Self {
        Self::TransformationError {
            stage: stage.into(),
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Check if this error was caused by misuse of the pipeline API
    /// rather than by the data flowing through it.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError { .. } | Self::InvalidState { .. }
        )
    }
}

/// Specialized Result type for Cascade operations
pub type Result<T> = std::result::Result<T, CascadeError>;

/// Helper trait for attributing errors to a stage
pub trait ResultExt<T> {
    /// Turn a user error into a [`CascadeError::TransformationError`] of `stage`.
    ///
    /// Errors that already carry pipeline meaning are passed through untouched.
    ///
    /// # Errors
    /// Returns `Err(CascadeError)` if the underlying result is `Err`.
    fn in_stage(self, stage: &str) -> Result<T>;

    /// Prefix a transformation error's description with `context`.
    ///
    /// # Errors
    /// Returns `Err(CascadeError)` if the underlying result is `Err`.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CascadeError>,
{
    fn in_stage(self, stage: &str) -> Result<T> {
        self.map_err(|e| match e.into() {
            CascadeError::UserError(inner) => CascadeError::transformation(stage, inner.to_string()),
            other => other,
        })
    }

    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CascadeError::TransformationError { stage, context: inner } => {
                CascadeError::TransformationError {
                    stage,
                    context: format!("{}: {inner}", context.into()),
                }
            }
            other => other,
        })
    }
}
