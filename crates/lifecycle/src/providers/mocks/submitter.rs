//! This module contains a [TransactionSubmitter] implementation that records
//! submissions instead of broadcasting them.

use alloy_primitives::{keccak256, Address, U256};
use anyhow::Result;
use beef_primitives::{TransactionSubmitter, TxHash};
use std::sync::Mutex;

/// A transaction recorded by a [MockTransactionSubmitter].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedTransaction {
    pub to: Address,
    pub value: U256,
    pub calldata: Vec<u8>,
}

/// The [MockTransactionSubmitter] is a [TransactionSubmitter] that accepts
/// every transaction, records it, and returns the hash of its calldata.
///
/// Handing a test double of the signing capability to an operation is the
/// whole wiring: there is no ambient signer to stub out.
#[derive(Debug, Default)]
pub struct MockTransactionSubmitter {
    address: Address,
    submitted: Mutex<Vec<RecordedTransaction>>,
}

impl MockTransactionSubmitter {
    /// Creates a submitter acting as the given address.
    pub fn new(address: Address) -> Self {
        Self {
            address,
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Returns the transactions submitted so far, in order.
    pub fn submitted(&self) -> Vec<RecordedTransaction> {
        self.submitted.lock().expect("submitter lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl TransactionSubmitter for MockTransactionSubmitter {
    fn address(&self) -> Address {
        self.address
    }

    async fn submit(&self, to: Address, value: U256, calldata: Vec<u8>) -> Result<TxHash> {
        let hash = keccak256(&calldata);
        tracing::debug!(%to, %hash, "recording mock transaction");
        self.submitted
            .lock()
            .expect("submitter lock poisoned")
            .push(RecordedTransaction { to, value, calldata });
        Ok(hash)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn submissions_are_recorded_in_order() {
        let signer = Address::repeat_byte(0x0a);
        let beef = Address::repeat_byte(0xbe);
        let submitter = MockTransactionSubmitter::new(signer);
        assert_eq!(submitter.address(), signer);

        submitter
            .submit(beef, U256::ZERO, vec![0xde, 0xad])
            .await
            .unwrap();
        submitter
            .submit(beef, U256::from(7u64), vec![0xbe, 0xef])
            .await
            .unwrap();

        let submitted = submitter.submitted();
        assert_eq!(submitted.len(), 2);
        assert_eq!(submitted[0].calldata, vec![0xde, 0xad]);
        assert_eq!(submitted[1].value, U256::from(7u64));
    }
}
