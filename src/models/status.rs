use serde::{Deserialize, Serialize};

/// On-chain status of a transfer as classified by a status check.
/// Exactly one applies per check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusOnChain {
    /// The status could not be determined; the check surfaced an error.
    Unknown,
    /// The transfer has a settlement height recorded on chain.
    Settled,
    /// A receipt for a prior submission attempt exists. Any resolved
    /// receipt, including a failed one, is treated as final.
    Rejected,
    /// Another submission already consumed the intended nonce slot.
    NonceOverwritten,
    /// No decisive signal yet.
    NotConfirmed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_round_trip() {
        let json = serde_json::to_string(&StatusOnChain::NonceOverwritten).unwrap();
        assert_eq!(json, r#""nonce_overwritten""#);
        let status: StatusOnChain = serde_json::from_str(&json).unwrap();
        assert_eq!(status, StatusOnChain::NonceOverwritten);
    }
}
