//! This module contains implementations of the boundary traits in
//! [beef_primitives] for consumers of the lifecycle core.
//!
//! Production read access goes through the surrounding application's own
//! [beef_primitives::BeefReader]; what lives here are the in-memory
//! implementations used by this crate's tests and by downstream test suites.

pub mod mocks;
