//! The set of chain-authorized witness addresses, rebuilt in full from the
//! on-chain registry by paginated reads.

use std::collections::HashMap;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use log::debug;

use crate::contracts::WitnessList;
use crate::models::ValidatorError;
use crate::services::provider::ChainClientTrait;

/// Witness directory backed by the registry contract.
///
/// The active set is replaced atomically: a refresh either installs a fully
/// rebuilt map or leaves the previous one untouched. Addresses absent from
/// the map are implicitly inactive.
pub struct WitnessDirectory<C: ChainClientTrait> {
    client: Arc<C>,
    registry_address: Address,
    page_size: u8,
    active: HashMap<Address, bool>,
}

impl<C: ChainClientTrait> WitnessDirectory<C> {
    pub fn new(client: Arc<C>, registry_address: Address, page_size: u8) -> Self {
        Self {
            client,
            registry_address,
            page_size,
            active: HashMap::new(),
        }
    }

    /// Rebuilds the active set from the registry.
    pub async fn refresh(&mut self) -> Result<(), ValidatorError> {
        let fresh = self.fetch_active_set().await?;
        debug!("refreshed witness directory: {} active witnesses", fresh.len());
        self.active = fresh;
        Ok(())
    }

    async fn fetch_active_set(&self) -> Result<HashMap<Address, bool>, ValidatorError> {
        let raw = self
            .client
            .read_contract(
                self.registry_address,
                WitnessList::countCall {}.abi_encode().into(),
            )
            .await?;
        let count = WitnessList::countCall::abi_decode_returns(&raw, true)
            .map_err(|e| ValidatorError::decode("count", e))?
            ._0;

        let mut active = HashMap::new();
        let mut offset = U256::ZERO;
        while offset < count {
            let call = WitnessList::getActiveItemsCall {
                offset,
                limit: self.page_size,
            };
            let raw = self
                .client
                .read_contract(self.registry_address, call.abi_encode().into())
                .await?;
            let page = WitnessList::getActiveItemsCall::abi_decode_returns(&raw, true)
                .map_err(|e| ValidatorError::decode("getActiveItems", e))?;
            let returned = usize::try_from(page.returned).map_err(|_| {
                ValidatorError::StateInconsistency(format!(
                    "registry page count {} does not fit in usize",
                    page.returned
                ))
            })?;
            // only the populated slots of the page are meaningful
            for witness in page.items.iter().take(returned) {
                active.insert(*witness, true);
            }
            offset += U256::from(self.page_size);
        }
        Ok(active)
    }

    /// Whether an address is in the currently installed active set.
    /// Unknown addresses are inactive, never an error.
    pub fn is_active(&self, address: &Address) -> bool {
        self.active.get(address).copied().unwrap_or(false)
    }

    /// Size of the installed active set; the quorum denominator.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}
