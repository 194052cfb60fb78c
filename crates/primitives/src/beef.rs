//! Types related to the on-chain state of a beef and its arbiter panel.

use alloy_primitives::{Address, B256, U256};
use anyhow::{bail, Error};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// The [Timestamp] type is an alias to [u64], used to deliniate a unix
/// timestamp (in seconds, the resolution of on-chain clocks) from a regular
/// integer.
pub type Timestamp = u64;

/// The [TxHash] type is an alias to [B256], used to deliniate a transaction
/// hash from a regular hash.
pub type TxHash = B256;

/// The [Verdict] enum mirrors an arbiter's settlement word in the beef
/// contract's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The arbiter has not cast a verdict yet.
    Pending = 0,
    /// The arbiter sided with the beef's owner.
    For = 1,
    /// The arbiter sided with the challenger.
    Against = 2,
}

impl TryFrom<u8> for Verdict {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verdict::Pending),
            1 => Ok(Verdict::For),
            2 => Ok(Verdict::Against),
            _ => bail!("Invalid verdict"),
        }
    }
}

/// The [ArbiterStatus] struct mirrors the per-arbiter state of a beef: their
/// attendance confirmation, their verdict, and their reputation score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbiterStatus {
    /// Whether the arbiter has confirmed their willingness to judge the beef.
    pub has_attended: bool,
    /// The arbiter's verdict, [Verdict::Pending] until cast.
    pub verdict: Verdict,
    /// The arbiter's street credit. Not every deployment tracks it, and it
    /// carries no lifecycle meaning; it is display-only.
    pub street_credit: Option<U256>,
}

/// The [BeefState] struct is a read-only mirror of a beef contract's state,
/// fetched by an external collaborator via chain read calls.
///
/// A [BeefState] is a snapshot: it may be stale relative to the authoritative
/// contract by the time it is inspected, and everything derived from it must
/// be recomputed from a fresh fetch rather than cached.
///
/// Callers guarantee two invariants that are not re-validated here:
/// `attend_count <= arbiter_count()` and
/// `result_yes + result_no <= arbiter_count()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeefState {
    /// The address that packaged the beef and staked the initial wager.
    pub owner: Address,
    /// The address challenged to join the beef.
    pub challenger: Address,
    /// The wager staked by each party, in wei.
    pub wager: U256,
    /// The title of the beef.
    pub title: String,
    /// The description of the disputed claim.
    pub description: String,
    /// The addresses empowered to cast a verdict.
    pub arbiters: Vec<Address>,
    /// How many arbiters have confirmed attendance.
    pub attend_count: u64,
    /// The shared cutoff for both full panel attendance and the challenger
    /// joining.
    pub join_deadline: Timestamp,
    /// Whether the challenger has staked and joined, putting the beef on
    /// the stove.
    pub is_cooking: bool,
    /// The earliest instant arbiters may cast a verdict.
    pub settle_start: Timestamp,
    /// The length of the settlement window in seconds. Carried on the
    /// snapshot rather than baked in, so deployments with a different window
    /// still resolve to the correct deadline.
    pub settle_duration: u64,
    /// Verdicts cast for the owner so far.
    pub result_yes: u64,
    /// Verdicts cast against the owner so far.
    pub result_no: u64,
    /// Whether the wager is parked in the staking pool while the beef cooks.
    pub staking: bool,
    /// Whether the stake has already been withdrawn, closing the beef out.
    pub beef_gone: bool,
}

impl BeefState {
    /// Returns the size of the judging panel.
    pub fn arbiter_count(&self) -> u64 {
        self.arbiters.len() as u64
    }
}

#[cfg(test)]
mod test {
    use super::Verdict;

    #[test]
    fn verdict_from_settlement_word() {
        assert_eq!(Verdict::try_from(0u8).unwrap(), Verdict::Pending);
        assert_eq!(Verdict::try_from(1u8).unwrap(), Verdict::For);
        assert_eq!(Verdict::try_from(2u8).unwrap(), Verdict::Against);
        assert!(Verdict::try_from(3u8).is_err());
    }
}
