#![doc = include_str!("../README.md")]

//! Primitives for the Beef protocol, a library for mirroring staked
//! disputes judged by an arbiter panel within fixed time windows.

mod beef;
pub use beef::{ArbiterStatus, BeefState, Timestamp, TxHash, Verdict};

mod traits;
pub use traits::{BeefReader, NameResolver, TransactionSubmitter};
