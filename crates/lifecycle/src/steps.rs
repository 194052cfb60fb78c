//! The steps module holds the display tables for every path a beef's
//! lifecycle can take.
//!
//! Each failure path is a literal sequence of its own, substituted wholesale
//! for the happy path when its branch fires - not the happy path with steps
//! removed. The trailing entries of each failure sequence are what tell the
//! viewer how the beef went wrong.

/// The [Step] struct is one entry of a phase sequence: an icon and a label,
/// rendered by the display layer as a single step of a progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The icon shown for the step.
    pub icon: &'static str,
    /// The label shown under the step.
    pub label: &'static str,
}

/// The sequence a beef follows when every party does their part: packaged,
/// judged, and the winnings served.
pub const HAPPY_PATH: &[Step] = &[
    Step { icon: "🥩", label: "Beef creation" },
    Step { icon: "🧑‍⚖️", label: "Arbiters attendance" },
    Step { icon: "🤺", label: "Challenger joining" },
    Step { icon: "👨‍🍳", label: "Beef cooking" },
    Step { icon: "🧑‍⚖️", label: "Beef settling" },
    Step { icon: "🍽️", label: "Beef ready to serve" },
    Step { icon: "😋", label: "Beef served" },
];

/// The sequence shown when the panel failed to fully attend before the join
/// deadline.
pub const ARBITERS_ABSENT_PATH: &[Step] = &[
    Step { icon: "🥩", label: "Beef creation" },
    Step { icon: "🤦", label: "Arbiters didn't attend" },
    Step { icon: "🤢", label: "Beef raw forever" },
];

/// The sequence shown when the challenger failed to join before the join
/// deadline.
pub const CHALLENGER_ABSENT_PATH: &[Step] = &[
    Step { icon: "🥩", label: "Beef creation" },
    Step { icon: "🧑‍⚖️", label: "Arbiters attendance" },
    Step { icon: "🤦", label: "Challenger didn't join" },
    Step { icon: "🤢", label: "Beef raw forever" },
];

/// The sequence shown when the settlement window elapsed without a majority
/// verdict.
pub const UNSETTLED_PATH: &[Step] = &[
    Step { icon: "🥩", label: "Beef creation" },
    Step { icon: "🧑‍⚖️", label: "Arbiters attendance" },
    Step { icon: "🤺", label: "Challenger joining" },
    Step { icon: "👨‍🍳", label: "Beef cooking" },
    Step { icon: "🤦", label: "Beef wasn't settled" },
    Step { icon: "🤢", label: "Beef rotten" },
];
