//! Mock implementations of the [beef_primitives::BeefReader],
//! [beef_primitives::NameResolver], and
//! [beef_primitives::TransactionSubmitter] boundaries for testing.

mod reader;
pub use self::reader::MockBeefReader;

mod names;
pub use self::names::MockNameResolver;

mod submitter;
pub use self::submitter::{MockTransactionSubmitter, RecordedTransaction};
