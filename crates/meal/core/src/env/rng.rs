//! Random draw oracle.
//!
//! Each battle consumes exactly one draw in `[0, 1)`. Production draws come
//! from a remote service; tests and offline play replay a fixed script.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{DomainError, ErrorSeverity};

/// Source of the decimal fraction a battle is decided against.
pub trait RandomOracle: Send + Sync {
    /// Draw one decimal fraction.
    fn random_fraction(&self) -> Result<f64, RandomError>;
}

impl<T: RandomOracle + ?Sized> RandomOracle for &T {
    fn random_fraction(&self) -> Result<f64, RandomError> {
        (**self).random_fraction()
    }
}

impl<T: RandomOracle + ?Sized> RandomOracle for Box<T> {
    fn random_fraction(&self) -> Result<f64, RandomError> {
        (**self).random_fraction()
    }
}

/// Errors raised while obtaining a random draw.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    /// The request never produced a response (DNS, refused connection, TLS...).
    #[error("Request to random.org failed: {0}")]
    Request(String),

    #[error("Request to random.org timed out.")]
    Timeout,

    /// The response body was not a decimal number.
    #[error("Invalid response from random.org: {0}")]
    InvalidResponse(String),

    /// A scripted oracle ran out of draws.
    #[error("random draw script exhausted")]
    Exhausted,
}

impl DomainError for RandomError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Request(_) | Self::Timeout => ErrorSeverity::Recoverable,
            Self::InvalidResponse(_) | Self::Exhausted => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Request(_) => "RANDOM_REQUEST_FAILED",
            Self::Timeout => "RANDOM_TIMEOUT",
            Self::InvalidResponse(_) => "RANDOM_INVALID_RESPONSE",
            Self::Exhausted => "RANDOM_EXHAUSTED",
        }
    }
}

/// Oracle that replays a scripted sequence of draws in order.
#[derive(Debug, Default)]
pub struct FixedRandomOracle {
    draws: Mutex<VecDeque<f64>>,
}

impl FixedRandomOracle {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
        }
    }

    /// Number of draws left in the script.
    pub fn remaining(&self) -> usize {
        self.draws.lock().map(|draws| draws.len()).unwrap_or(0)
    }
}

impl RandomOracle for FixedRandomOracle {
    fn random_fraction(&self) -> Result<f64, RandomError> {
        let mut draws = self.draws.lock().map_err(|_| RandomError::Exhausted)?;
        draws.pop_front().ok_or(RandomError::Exhausted)
    }
}
