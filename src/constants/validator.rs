//! Default constants for settlement submission and witness registry reads.

/// Fixed gas limit for settlement submission transactions.
pub const DEFAULT_SUBMISSION_GAS_LIMIT: u64 = 2_000_000;

/// Default gas price in the chain's smallest unit (10^12, one micro-token
/// on chains with 18 decimals).
pub const DEFAULT_SUBMISSION_GAS_PRICE: u128 = 1_000_000_000_000;

/// Number of witness addresses requested per registry page.
pub const DEFAULT_WITNESS_PAGE_SIZE: u8 = 10;
