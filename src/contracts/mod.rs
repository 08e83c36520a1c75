//! ABI bindings for the on-chain witness registry and the settlement
//! validator contract.

use alloy::sol;

sol! {
    /// Paginated registry of chain-authorized witness addresses.
    interface WitnessList {
        /// Total number of items in the list, active or not.
        function count() external view returns (uint256);

        /// Returns up to `limit` active addresses starting at `offset`,
        /// together with how many of the returned slots are populated.
        /// The last page may carry fewer items than `limit`.
        function getActiveItems(uint256 offset, uint8 limit)
            external
            view
            returns (uint256 returned, address[] memory items);
    }

    /// Settlement validator contract.
    interface TransferValidator {
        /// Address of the witness registry the validator trusts.
        function witnessList() external view returns (address);

        /// Block height at which a transfer id was settled; zero when the
        /// transfer has not been settled.
        function settles(bytes32 id) external view returns (uint256);

        /// Settles a transfer, backed by the concatenated signatures of the
        /// attesting witnesses.
        function submit(
            address cashier,
            address token,
            uint256 index,
            address sender,
            address recipient,
            uint256 amount,
            bytes memory signatures
        ) external;
    }
}
