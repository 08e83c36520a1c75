use alloy::primitives::Address;
use thiserror::Error;

use crate::config::ConfigValidationError;
use crate::services::provider::ProviderError;

/// Errors surfaced by the validator facade.
///
/// Quorum shortfall is a distinct variant so retry loops can tell "wait for
/// more signatures" apart from transport failure.
#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Invalid configuration: {0}")]
    Configuration(#[from] ConfigValidationError),

    #[error("Underlying provider error: {0}")]
    UnderlyingProvider(#[from] ProviderError),

    #[error("Failed to get account of {address}: {source}")]
    AccountLookup {
        address: Address,
        #[source]
        source: ProviderError,
    },

    #[error("Failed to decode {operation} response: {message}")]
    Decode { operation: String, message: String },

    #[error("Insufficient witness signatures: {valid} valid of {active} active witnesses")]
    InsufficientWitnesses { valid: usize, active: usize },

    #[error("State inconsistency: {0}")]
    StateInconsistency(String),
}

impl ValidatorError {
    pub fn decode(operation: &str, err: impl std::fmt::Display) -> Self {
        ValidatorError::Decode {
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    /// True when the submission failed only because quorum was not met yet.
    /// The caller can retry once more attestations have been collected.
    pub fn is_quorum_shortfall(&self) -> bool {
        matches!(self, ValidatorError::InsufficientWitnesses { .. })
    }
}
