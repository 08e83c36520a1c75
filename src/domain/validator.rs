//! Transfer validator facade: settlement-status checks and quorum-gated
//! settlement submission against the on-chain validator contract.
//!
//! One read/write lock guards the witness directory. Status checks take the
//! shared side and run concurrently with each other; submissions take the
//! exclusive side, so at most one refresh and one submission are in flight
//! at a time and two submissions can never race on the relayer nonce.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use log::{info, warn};
use tokio::sync::RwLock;

#[cfg(test)]
use mockall::automock;

use crate::config::ValidatorConfig;
use crate::contracts::TransferValidator;
use crate::domain::WitnessDirectory;
use crate::models::{AccountMeta, StatusOnChain, Submission, Transfer, ValidatorError, Witness};
use crate::services::notification::AlertHandlerTrait;
use crate::services::provider::ChainClientTrait;

/// Externally visible contract of the validator facade.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait TransferValidatorTrait: Send + Sync {
    /// Address of the on-chain validator contract.
    fn address(&self) -> Address;

    /// Classifies the on-chain status of a transfer. An error means the
    /// status could not be determined; nothing is guessed.
    async fn check(&self, transfer: &Transfer) -> Result<StatusOnChain, ValidatorError>;

    /// Submits a settlement transaction for a transfer once strictly more
    /// than two thirds of the active witnesses have signed it.
    async fn submit(
        &self,
        transfer: &Transfer,
        witnesses: &[Witness],
    ) -> Result<Submission, ValidatorError>;
}

/// Validator facade for an EVM-style destination chain.
pub struct EvmTransferValidator<C: ChainClientTrait, A: AlertHandlerTrait> {
    config: ValidatorConfig,
    #[allow(dead_code)]
    signer: PrivateKeySigner,
    relayer_address: Address,
    validator_contract_address: Address,
    client: Arc<C>,
    alert_handler: Arc<A>,
    directory: RwLock<WitnessDirectory<C>>,
}

impl<C, A> std::fmt::Debug for EvmTransferValidator<C, A>
where
    C: ChainClientTrait,
    A: AlertHandlerTrait,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvmTransferValidator")
            .field("relayer_address", &self.relayer_address)
            .field("validator_contract_address", &self.validator_contract_address)
            .finish_non_exhaustive()
    }
}

impl<C, A> EvmTransferValidator<C, A>
where
    C: ChainClientTrait,
    A: AlertHandlerTrait,
{
    /// Connects the facade to the validator contract, resolving the witness
    /// registry address the contract publishes.
    pub async fn new(
        client: Arc<C>,
        alert_handler: Arc<A>,
        signer: PrivateKeySigner,
        validator_contract_address: Address,
        config: ValidatorConfig,
    ) -> Result<Self, ValidatorError> {
        config.validate()?;
        let raw = client
            .read_contract(
                validator_contract_address,
                TransferValidator::witnessListCall {}.abi_encode().into(),
            )
            .await?;
        let registry_address = TransferValidator::witnessListCall::abi_decode_returns(&raw, true)
            .map_err(|e| ValidatorError::decode("witnessList", e))?
            ._0;
        let relayer_address = signer.address();
        let directory = RwLock::new(WitnessDirectory::new(
            Arc::clone(&client),
            registry_address,
            config.witness_page_size,
        ));
        Ok(Self {
            config,
            signer,
            relayer_address,
            validator_contract_address,
            client,
            alert_handler,
            directory,
        })
    }

    /// Address the relayer signs and submits from.
    pub fn relayer_address(&self) -> Address {
        self.relayer_address
    }

    async fn relayer_account(&self) -> Result<AccountMeta, ValidatorError> {
        self.client
            .get_account(self.relayer_address)
            .await
            .map_err(|source| ValidatorError::AccountLookup {
                address: self.relayer_address,
                source,
            })
    }
}

#[async_trait]
impl<C, A> TransferValidatorTrait for EvmTransferValidator<C, A>
where
    C: ChainClientTrait,
    A: AlertHandlerTrait,
{
    fn address(&self) -> Address {
        self.validator_contract_address
    }

    async fn check(&self, transfer: &Transfer) -> Result<StatusOnChain, ValidatorError> {
        let _directory = self.directory.read().await;

        let account = self.relayer_account().await?;

        let call = TransferValidator::settlesCall { id: transfer.id };
        let raw = self
            .client
            .read_contract(self.validator_contract_address, call.abi_encode().into())
            .await?;
        let settle_height = TransferValidator::settlesCall::abi_decode_returns(&raw, true)
            .map_err(|e| ValidatorError::decode("settles", e))?
            ._0;
        if settle_height > U256::ZERO {
            return Ok(StatusOnChain::Settled);
        }

        if let Some(receipt) = self.client.get_transaction_receipt(transfer.id).await? {
            // Any resolved receipt finalizes the attempt, even a failed one.
            // A confirmed-success receipt that was never inspected lands
            // here too; callers must treat Rejected as final, not retryable.
            warn!(
                "prior submission for transfer {} resolved in tx {}",
                transfer.id, receipt.tx_hash
            );
            return Ok(StatusOnChain::Rejected);
        }

        if transfer.nonce <= account.nonce {
            return Ok(StatusOnChain::NonceOverwritten);
        }

        Ok(StatusOnChain::NotConfirmed)
    }

    async fn submit(
        &self,
        transfer: &Transfer,
        witnesses: &[Witness],
    ) -> Result<Submission, ValidatorError> {
        let mut directory = self.directory.write().await;
        directory.refresh().await?;

        let mut signatures: Vec<u8> = Vec::new();
        let mut valid = 0usize;
        for witness in witnesses {
            if !directory.is_active(&witness.address) {
                warn!("witness {} is inactive, skipping its signature", witness.address);
                continue;
            }
            signatures.extend_from_slice(&witness.signature);
            valid += 1;
        }
        let active = directory.active_count();
        if valid * 3 <= active * 2 {
            return Err(ValidatorError::InsufficientWitnesses { valid, active });
        }

        let account = self.relayer_account().await?;
        let balance = U256::from_str_radix(&account.balance, 10).map_err(|e| {
            ValidatorError::StateInconsistency(format!(
                "failed to parse balance {} of account {}: {}",
                account.balance, self.relayer_address, e
            ))
        })?;
        let submission_cost = U256::from(self.config.gas_price) * U256::from(self.config.gas_limit);
        if balance < submission_cost {
            self.alert_handler
                .alert(&format!(
                    "relayer balance has dropped to {}, please refill account {} for gas",
                    balance, self.relayer_address
                ))
                .await;
        }

        let call = TransferValidator::submitCall {
            cashier: transfer.cashier,
            token: transfer.token,
            index: U256::from(transfer.index),
            sender: transfer.sender,
            recipient: transfer.recipient,
            amount: transfer.amount,
            signatures: signatures.into(),
        };
        let nonce = account.nonce + 1;
        let tx_hash = self
            .client
            .execute_contract(
                self.validator_contract_address,
                call.abi_encode().into(),
                self.config.gas_price,
                self.config.gas_limit,
                nonce,
            )
            .await?;
        info!(
            "submitted settlement for transfer {} with nonce {}: {}",
            transfer.id, nonce, tx_hash
        );

        Ok(Submission { tx_hash, nonce })
    }
}
