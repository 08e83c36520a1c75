//! Chain transport abstraction.
//!
//! The validator core never talks to an RPC endpoint directly; it consumes
//! this trait. Calls are one-shot: no internal retries and no caching, so a
//! failure here surfaces to the caller immediately.

use alloy::primitives::{Address, Bytes, B256};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[cfg(test)]
use mockall::automock;

use crate::models::AccountMeta;

#[derive(Error, Debug, Serialize)]
pub enum ProviderError {
    #[error("Request timeout")]
    Timeout,
    #[error("Rate limited (HTTP 429)")]
    RateLimited,
    #[error("JSON-RPC error (code {code}): {message}")]
    RpcErrorCode { code: i64, message: String },
    #[error("Transport error: {0}")]
    TransportError(String),
    #[error("Other provider error: {0}")]
    Other(String),
}

/// Receipt of a prior settlement submission attempt, as resolved by the
/// chain client for a given transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementReceipt {
    pub tx_hash: B256,
    pub block_number: u64,
    /// On-chain execution status of the attempt.
    pub success: bool,
}

/// Interface to the chain this validator settles on.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait ChainClientTrait: Send + Sync {
    /// Performs a read-only contract call. `data` is the ABI-encoded call;
    /// the raw ABI-encoded return data is handed back undecoded.
    async fn read_contract(&self, contract: Address, data: Bytes) -> Result<Bytes, ProviderError>;

    /// Dispatches a state-mutating contract call signed by the relayer and
    /// returns the transaction hash.
    async fn execute_contract(
        &self,
        contract: Address,
        data: Bytes,
        gas_price: u128,
        gas_limit: u64,
        nonce: u64,
    ) -> Result<B256, ProviderError>;

    /// Fetches the current nonce and balance of an account.
    async fn get_account(&self, address: Address) -> Result<AccountMeta, ProviderError>;

    /// Looks up the receipt correlated with this relayer's prior submission
    /// attempt for a transfer, if one has resolved on chain.
    async fn get_transaction_receipt(
        &self,
        transfer_id: B256,
    ) -> Result<Option<SettlementReceipt>, ProviderError>;
}
