//! Dispatcher crate for the ReedNReels console.
//!
//! This crate wires catalogs and recommenders together for one query,
//! according to the mode the user selected.

pub mod orchestrator;
pub mod mode;

pub use orchestrator::{Dispatcher, Outcome, PipelineReport};
pub use mode::{DispatchError, Mode};
