use alloy::primitives::{Address, B256, U256};

/// A pending cross-chain asset move, produced by the upstream transfer
/// watcher. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Chain-assigned identifier of the transfer.
    pub id: B256,
    /// Cashier contract the transfer originated from.
    pub cashier: Address,
    /// Token being moved.
    pub token: Address,
    /// Monotonically increasing index of the transfer within the cashier.
    pub index: u64,
    pub sender: Address,
    pub recipient: Address,
    pub amount: U256,
    /// Relayer transaction nonce assigned to the pending submission attempt
    /// for this transfer; compared against the on-chain account nonce to
    /// detect an overwritten nonce slot.
    pub nonce: u64,
}

/// A witness attestation: the signer's address plus the raw signature bytes
/// it produced over a transfer. Supplied per submission call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    pub address: Address,
    pub signature: Vec<u8>,
}

/// Outcome of a successful settlement submission, returned so the caller
/// can correlate later receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub tx_hash: B256,
    /// Transaction nonce the submission was dispatched with.
    pub nonce: u64,
}
