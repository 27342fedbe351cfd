//! Error types.
//!
//! - `PipelineError`: typed failures of the computation itself (bad data, a
//!   regression that cannot produce a valid estimate).
//! - `AppError`: what the binary reports; carries the process exit code.

use thiserror::Error;

/// Result alias for pipeline stages.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Failures raised by the aggregator, model, and fitter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// Malformed or physically invalid measurement data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The regression did not produce a finite, valid estimate.
    #[error("fit did not converge: {0}")]
    FitDidNotConverge(String),
}

impl PipelineError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn no_convergence(message: impl Into<String>) -> Self {
        Self::FitDidNotConverge(message.into())
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let exit_code = match err {
            PipelineError::InvalidInput(_) => 3,
            PipelineError::FitDidNotConverge(_) => 4,
        };
        AppError::new(exit_code, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
