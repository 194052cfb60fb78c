//! The progress module assembles the output of the deadline engine and the
//! phase resolver into the value the display layer renders.

use crate::{BeefPhase, Deadlines, Step};
use beef_primitives::{BeefState, Timestamp};

/// The [BeefProgress] struct is the rendering projection of a beef: the
/// phase sequence to draw, the active step within it, whether the beef is
/// terminally rotten, and the next deadline to count down to.
///
/// A [BeefProgress] is ephemeral - freshly constructed on every call and
/// discarded after one render. `active_index` ranges over
/// `0..=sequence.len()`; the one-past-the-end value marks a terminal beef
/// whose stake has been withdrawn, with every step complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeefProgress {
    /// The lifecycle phase the beef is in.
    pub phase: BeefPhase,
    /// The full phase sequence for the path the beef is on.
    pub sequence: &'static [Step],
    /// The 0-based position of the active step within `sequence`.
    pub active_index: usize,
    /// Whether the beef can no longer reach a positive resolution.
    pub is_rotten: bool,
    /// The next boundary to count down to, absent once no timed transition
    /// remains.
    pub deadline: Option<Timestamp>,
}

impl BeefProgress {
    /// Resolves the progress of a beef from a snapshot and the current
    /// time.
    ///
    /// The snapshot may be stale by the time it is resolved; the result is
    /// defined purely in terms of the given `(snapshot, now)` pair, and the
    /// caller refetches and re-resolves to pick up newer chain state.
    pub fn of(beef: &BeefState, now: Timestamp) -> Self {
        let deadlines = Deadlines::of(beef);
        let phase = BeefPhase::of(beef, now);

        Self {
            phase,
            sequence: phase.sequence(),
            active_index: phase.active_index(beef.beef_gone),
            is_rotten: phase.is_rotten(),
            deadline: phase.deadline(&deadlines),
        }
    }
}

/// Resolves the progress of a beef from a snapshot and the current time.
/// Convenience alias for [BeefProgress::of].
pub fn resolve(beef: &BeefState, now: Timestamp) -> BeefProgress {
    BeefProgress::of(beef, now)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DEFAULT_SETTLE_DURATION, HAPPY_PATH};
    use alloy_primitives::{Address, U256};
    use proptest::prelude::*;

    #[test]
    fn fresh_votes_count_down_to_the_settlement_deadline() {
        let settle_start = 1_700_000_000;
        let beef = BeefState {
            owner: Address::repeat_byte(0x0a),
            challenger: Address::repeat_byte(0x0b),
            wager: U256::from(5_000_000_000_000_000_000u128),
            title: "the movie was fine".to_string(),
            description: "it was not".to_string(),
            arbiters: vec![
                Address::repeat_byte(0x11),
                Address::repeat_byte(0x12),
                Address::repeat_byte(0x13),
            ],
            attend_count: 3,
            join_deadline: settle_start - 3_600,
            is_cooking: true,
            settle_start,
            settle_duration: DEFAULT_SETTLE_DURATION,
            result_yes: 0,
            result_no: 0,
            staking: true,
            beef_gone: false,
        };

        let progress = resolve(&beef, settle_start + 1);
        assert_eq!(progress.phase, BeefPhase::Settling);
        assert_eq!(progress.sequence, HAPPY_PATH);
        assert_eq!(progress.active_index, 4);
        assert!(!progress.is_rotten);
        assert_eq!(
            progress.deadline,
            Some(settle_start + DEFAULT_SETTLE_DURATION)
        );
    }

    /// Snapshots drawn from the resolver's whole input domain, respecting
    /// the caller invariants (`attend_count <= panel`, votes sum to at most
    /// the panel size).
    fn arb_beef() -> impl Strategy<Value = (BeefState, Timestamp)> {
        (0u64..=7)
            .prop_flat_map(|panel| {
                let votes =
                    (0..=panel).prop_flat_map(move |yes| (Just(yes), 0..=panel - yes));
                (
                    Just(panel),
                    0..=panel,
                    votes,
                    (any::<bool>(), any::<bool>(), any::<bool>()),
                    (0u64..10_000, 0u64..10_000, 0u64..50_000),
                    0u64..100_000,
                )
            })
            .prop_map(
                |(panel, attend, (yes, no), (cooking, staking, gone), times, now)| {
                    let (join_deadline, settle_start, settle_duration) = times;
                    let beef = BeefState {
                        owner: Address::repeat_byte(0xaa),
                        challenger: Address::repeat_byte(0xbb),
                        wager: U256::from(1u64),
                        title: "beef".to_string(),
                        description: String::new(),
                        arbiters: vec![Address::repeat_byte(0xcc); panel as usize],
                        attend_count: attend,
                        join_deadline,
                        is_cooking: cooking,
                        settle_start,
                        settle_duration,
                        result_yes: yes,
                        result_no: no,
                        staking,
                        beef_gone: gone,
                    };
                    (beef, now)
                },
            )
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent((beef, now) in arb_beef()) {
            prop_assert_eq!(resolve(&beef, now), resolve(&beef, now));
        }

        #[test]
        fn active_index_stays_within_the_sequence((beef, now) in arb_beef()) {
            let progress = resolve(&beef, now);
            prop_assert!(progress.active_index <= progress.sequence.len());
            // One-past-the-end only ever marks a collected beef.
            if progress.active_index == progress.sequence.len() {
                prop_assert!(beef.beef_gone);
            }
        }

        #[test]
        fn rotten_beefs_have_no_deadline((beef, now) in arb_beef()) {
            let progress = resolve(&beef, now);
            if progress.is_rotten {
                prop_assert!(progress.deadline.is_none());
            }
        }

        #[test]
        fn deadlines_never_lie_in_the_past((beef, now) in arb_beef()) {
            let progress = resolve(&beef, now);
            if let Some(deadline) = progress.deadline {
                prop_assert!(deadline >= now);
            }
        }

        #[test]
        fn rotten_and_phase_agree((beef, now) in arb_beef()) {
            let progress = resolve(&beef, now);
            prop_assert_eq!(progress.is_rotten, progress.phase.is_rotten());
            prop_assert_eq!(progress.sequence, progress.phase.sequence());
        }
    }
}
