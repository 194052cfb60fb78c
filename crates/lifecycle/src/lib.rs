#![doc = include_str!("../README.md")]

//! The lifecycle crate contains the deadline engine, the canonical phase
//! state machine, and the display tables for the Beef protocol.

mod deadlines;
pub use deadlines::{Deadlines, DEFAULT_SETTLE_DURATION};

mod steps;
pub use steps::{
    Step, ARBITERS_ABSENT_PATH, CHALLENGER_ABSENT_PATH, HAPPY_PATH, UNSETTLED_PATH,
};

mod phase;
pub use phase::BeefPhase;

mod progress;
pub use progress::{resolve, BeefProgress};

pub mod providers;
