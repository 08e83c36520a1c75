//! Settlement validator for a cross-chain asset transfer relay.
//!
//! Given a pending transfer, this crate decides whether it has already been
//! settled on the destination chain and, once enough authorized witnesses
//! have attested to it, submits the settlement transaction with correct
//! nonce and gas bookkeeping. The chain transport and the alert sink are
//! consumed as traits; the witness signing subsystem is out of scope.

pub mod config;
pub mod constants;
pub mod contracts;
pub mod domain;
pub mod logging;
pub mod models;
pub mod services;
