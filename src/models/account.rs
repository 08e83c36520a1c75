use serde::{Deserialize, Serialize};

/// Relayer account metadata as reported by the chain. Fetched fresh on
/// every call; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMeta {
    /// Current on-chain account nonce.
    pub nonce: u64,
    /// Native-token balance as a base-10 decimal string in the chain's
    /// smallest unit.
    pub balance: String,
}
