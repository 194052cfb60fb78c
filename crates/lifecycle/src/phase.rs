//! The phase module holds the canonical lifecycle state machine for a beef
//! and the decision tree that projects a snapshot onto it.

use crate::{
    Deadlines, Step, ARBITERS_ABSENT_PATH, CHALLENGER_ABSENT_PATH, HAPPY_PATH, UNSETTLED_PATH,
};
use beef_primitives::{BeefState, Timestamp};

/// The [BeefPhase] enum is the canonical state machine of a beef's
/// lifecycle, one variant per branch of the decision tree. Every question
/// about a beef's progress is answered from this single enumeration; display
/// sequences and step indices hang off it as a rendering concern.
///
/// The phases split into three groups:
///
/// - In-progress phases, each with an upcoming deadline:
///   [BeefPhase::ArbitersAttending], [BeefPhase::ChallengerJoining],
///   [BeefPhase::Cooking], [BeefPhase::Settling].
/// - The positive terminal phase: [BeefPhase::Settled].
/// - The rotten terminal phases, from which no positive resolution is
///   reachable: [BeefPhase::ArbitersAbsent], [BeefPhase::ChallengerAbsent],
///   [BeefPhase::Unsettled].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeefPhase {
    /// The panel has not fully attended and the join deadline has not
    /// passed.
    ArbitersAttending,
    /// The join deadline passed before the panel fully attended.
    ArbitersAbsent,
    /// The panel is full but the challenger has not joined, and the join
    /// deadline has not passed.
    ChallengerJoining,
    /// The join deadline passed before the challenger joined.
    ChallengerAbsent,
    /// Both parties and the full panel are in; arbiters cannot vote until
    /// the settlement window opens.
    Cooking,
    /// The settlement window is open and no majority has formed yet.
    Settling,
    /// A strict majority of the panel voted the same way.
    Settled,
    /// The settlement window elapsed without a majority verdict.
    Unsettled,
}

impl BeefPhase {
    /// Derives the phase of a beef from a snapshot and the current time.
    ///
    /// The branches are evaluated in a fixed order and are mutually
    /// exclusive by construction; the first match wins. The function is
    /// total over well-formed snapshots and performs no I/O, so it can be
    /// re-run against the same snapshot at any cadence - each call stands
    /// alone.
    pub fn of(beef: &BeefState, now: Timestamp) -> Self {
        let deadlines = Deadlines::of(beef);

        // The panel must fully attend before the join deadline, regardless
        // of what the challenger has done.
        if beef.attend_count < beef.arbiter_count() {
            if now < deadlines.join {
                Self::ArbitersAttending
            } else {
                Self::ArbitersAbsent
            }
        } else if !beef.is_cooking {
            // Panel is full; the same deadline governs the challenger.
            if now < deadlines.join {
                Self::ChallengerJoining
            } else {
                Self::ChallengerAbsent
            }
        } else if now < deadlines.settle_start {
            Self::Cooking
        } else if majority_reached(beef) {
            // A formed majority settles the beef even if the window has
            // since closed.
            Self::Settled
        } else if now > deadlines.settle_end {
            // Strict: at the deadline instant itself the beef can still be
            // settled.
            Self::Unsettled
        } else {
            Self::Settling
        }
    }

    /// Whether the beef can no longer reach a positive resolution.
    pub fn is_rotten(&self) -> bool {
        matches!(
            self,
            Self::ArbitersAbsent | Self::ChallengerAbsent | Self::Unsettled
        )
    }

    /// Returns the phase sequence the viewer should render for the path
    /// this phase sits on.
    pub fn sequence(&self) -> &'static [Step] {
        match self {
            Self::ArbitersAbsent => ARBITERS_ABSENT_PATH,
            Self::ChallengerAbsent => CHALLENGER_ABSENT_PATH,
            Self::Unsettled => UNSETTLED_PATH,
            _ => HAPPY_PATH,
        }
    }

    /// Returns the 0-based index of the active step within
    /// [BeefPhase::sequence].
    ///
    /// For terminal phases whose stake has been withdrawn (`beef_gone`), the
    /// index is one past the last step: every step of the sequence is
    /// complete and nothing remains active. [BeefPhase::Unsettled] is the
    /// exception - the failure point stays highlighted whether or not the
    /// parties have reclaimed their stakes.
    pub fn active_index(&self, beef_gone: bool) -> usize {
        match self {
            Self::ArbitersAttending => 1,
            Self::ArbitersAbsent => {
                if beef_gone {
                    3
                } else {
                    2
                }
            }
            Self::ChallengerJoining => 2,
            Self::ChallengerAbsent => {
                if beef_gone {
                    4
                } else {
                    3
                }
            }
            Self::Cooking => 3,
            Self::Settling => 4,
            Self::Settled => {
                if beef_gone {
                    7
                } else {
                    6
                }
            }
            Self::Unsettled => 4,
        }
    }

    /// Returns the next boundary the viewer should count down to, or [None]
    /// once no timed transition remains.
    pub fn deadline(&self, deadlines: &Deadlines) -> Option<Timestamp> {
        match self {
            Self::ArbitersAttending | Self::ChallengerJoining => Some(deadlines.join),
            Self::Cooking => Some(deadlines.settle_start),
            Self::Settling => Some(deadlines.settle_end),
            Self::ArbitersAbsent | Self::ChallengerAbsent | Self::Settled | Self::Unsettled => None,
        }
    }
}

/// Whether a strict majority of the panel has voted the same way. Strictly
/// more than half: a panel of 4 needs 3 votes on one side, and an even
/// panel split exactly in half has not decided anything.
fn majority_reached(beef: &BeefState) -> bool {
    let panel = beef.arbiter_count();
    2 * beef.result_yes > panel || 2 * beef.result_no > panel
}
