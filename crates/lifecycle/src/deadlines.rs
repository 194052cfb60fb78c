//! The deadlines module holds the deadline engine: the arithmetic that turns
//! a snapshot's stored timestamps into the three decision boundaries of a
//! beef's lifecycle.

use beef_primitives::{BeefState, Timestamp};

/// The settlement window of current deployments, in seconds (30 days).
///
/// Readers that mirror a contract which does not expose its window fill
/// [BeefState::settle_duration] with this value; the resolver itself always
/// takes the duration from the snapshot.
pub const DEFAULT_SETTLE_DURATION: u64 = 60 * 60 * 24 * 30;

/// The [Deadlines] struct holds the three decision boundaries derived from a
/// [BeefState] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    /// The shared cutoff for full panel attendance and the challenger
    /// joining.
    pub join: Timestamp,
    /// The earliest instant arbiters may cast a verdict.
    pub settle_start: Timestamp,
    /// The last instant at which the beef can still be settled;
    /// `settle_start + settle_duration`.
    pub settle_end: Timestamp,
}

impl Deadlines {
    /// Computes the decision boundaries of the given snapshot. Pure
    /// arithmetic; total over well-formed snapshots.
    pub fn of(beef: &BeefState) -> Self {
        Self {
            join: beef.join_deadline,
            settle_start: beef.settle_start,
            settle_end: beef.settle_start + beef.settle_duration,
        }
    }
}
