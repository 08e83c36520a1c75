//! Validator configuration: gas parameters for settlement submissions and
//! pagination for witness registry reads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_SUBMISSION_GAS_LIMIT, DEFAULT_SUBMISSION_GAS_PRICE, DEFAULT_WITNESS_PAGE_SIZE,
};

#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Gas and pagination settings for the validator facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Gas price in the chain's smallest unit.
    #[serde(default = "default_gas_price")]
    pub gas_price: u128,
    /// Fixed gas limit for settlement submissions.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
    /// Page size for paginated witness registry reads.
    #[serde(default = "default_witness_page_size")]
    pub witness_page_size: u8,
}

fn default_gas_price() -> u128 {
    DEFAULT_SUBMISSION_GAS_PRICE
}

fn default_gas_limit() -> u64 {
    DEFAULT_SUBMISSION_GAS_LIMIT
}

fn default_witness_page_size() -> u8 {
    DEFAULT_WITNESS_PAGE_SIZE
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            gas_price: default_gas_price(),
            gas_limit: default_gas_limit(),
            witness_page_size: default_witness_page_size(),
        }
    }
}

impl ValidatorConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gas_limit == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "gas_limit must be greater than zero".to_string(),
            ));
        }
        if self.witness_page_size == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "witness_page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
