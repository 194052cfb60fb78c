//! This module contains a [NameResolver] implementation backed by an
//! in-memory table, standing in for the name-registry collaborator in tests.

use alloy_primitives::Address;
use anyhow::Result;
use beef_primitives::NameResolver;
use std::collections::HashMap;

/// The [MockNameResolver] is a [NameResolver] that answers from a fixed
/// table. Unregistered addresses resolve to [None], never to an error -
/// having no handle is an ordinary outcome, not a failure.
#[derive(Debug, Default)]
pub struct MockNameResolver {
    names: HashMap<Address, String>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handle for the given address.
    pub fn insert_name(&mut self, address: Address, name: impl Into<String>) {
        self.names.insert(address, name.into());
    }
}

#[async_trait::async_trait]
impl NameResolver for MockNameResolver {
    async fn resolve_name(&self, address: Address) -> Result<Option<String>> {
        Ok(self.names.get(&address).cloned())
    }
}
