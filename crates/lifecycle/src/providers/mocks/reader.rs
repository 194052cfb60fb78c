//! This module contains a [BeefReader] implementation backed by in-memory
//! tables, standing in for the chain-reading collaborator in tests.

use alloy_primitives::Address;
use anyhow::{anyhow, Result};
use beef_primitives::{ArbiterStatus, BeefReader, BeefState};
use std::collections::HashMap;

/// The [MockBeefReader] is a [BeefReader] that serves snapshots out of
/// in-memory tables. Registered state is cloned out on every read, so each
/// fetch behaves like an independent point-in-time snapshot.
#[derive(Debug, Default)]
pub struct MockBeefReader {
    beefs: HashMap<Address, BeefState>,
    statuses: HashMap<(Address, Address), ArbiterStatus>,
}

impl MockBeefReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a beef snapshot under the given contract address.
    pub fn insert_beef(&mut self, address: Address, state: BeefState) {
        self.beefs.insert(address, state);
    }

    /// Registers an arbiter's status on the given beef.
    pub fn insert_arbiter_status(
        &mut self,
        beef: Address,
        arbiter: Address,
        status: ArbiterStatus,
    ) {
        self.statuses.insert((beef, arbiter), status);
    }
}

#[async_trait::async_trait]
impl BeefReader for MockBeefReader {
    async fn beef_state(&self, beef: Address) -> Result<BeefState> {
        tracing::debug!(%beef, "fetching beef snapshot");
        self.beefs
            .get(&beef)
            .cloned()
            .ok_or_else(|| anyhow!("No beef registered at {beef}"))
    }

    async fn arbiter_status(&self, beef: Address, arbiter: Address) -> Result<ArbiterStatus> {
        tracing::debug!(%beef, %arbiter, "fetching arbiter status");
        self.statuses
            .get(&(beef, arbiter))
            .cloned()
            .ok_or_else(|| anyhow!("Arbiter {arbiter} has no status on beef {beef}"))
    }
}
