//! The traits module contains the boundary traits implemented by the
//! application surrounding the lifecycle core.

use crate::{ArbiterStatus, BeefState, TxHash};
use alloy_primitives::{Address, U256};
use anyhow::Result;

/// The [BeefReader] trait describes the on-chain read collaborator. It is the
/// only source of [BeefState] snapshots; the lifecycle core never queries the
/// chain itself.
///
/// Implementations are free to batch, cache, or multicall under the hood, but
/// every snapshot they hand out must be internally consistent - a single
/// point-in-time read of the contract's storage.
#[async_trait::async_trait]
pub trait BeefReader {
    /// Returns a snapshot of the beef contract at the given address.
    async fn beef_state(&self, beef: Address) -> Result<BeefState>;

    /// Returns the status of a single arbiter on the given beef's panel.
    async fn arbiter_status(&self, beef: Address, arbiter: Address) -> Result<ArbiterStatus>;
}

/// The [NameResolver] trait describes the collaborator that maps an address
/// to a human-readable handle, if one is registered.
#[async_trait::async_trait]
pub trait NameResolver {
    /// Resolves an address to its registered handle, or [None] if the
    /// address has no registration.
    async fn resolve_name(&self, address: Address) -> Result<Option<String>>;
}

/// The [TransactionSubmitter] trait is a narrow signing capability: the
/// ability to submit a transaction as one specific account.
///
/// Operations that dispatch transactions take an implementation of this
/// trait as an explicit argument. There is no ambient "current signer" -
/// whoever holds a [TransactionSubmitter] holds exactly the capability to
/// act as [TransactionSubmitter::address] and nothing more.
#[async_trait::async_trait]
pub trait TransactionSubmitter {
    /// Returns the address this capability submits transactions as.
    fn address(&self) -> Address;

    /// Submits a transaction to the given contract, returning its hash once
    /// it has been accepted by the underlying transport.
    async fn submit(&self, to: Address, value: U256, calldata: Vec<u8>) -> Result<TxHash>;
}
