//! rsedr: endpoint-activity simulator.
//!
//! Performs one simulated host action per invocation -- spawn a process,
//! create, delete or modify a file, or transmit bytes over TCP -- and
//! persists the outcome as a flat activity record for endpoint-detection
//! tooling to pick up.
//!
//! Control flow: raw arguments -> [`cli::resolve`] -> [`ops::OperationRequest`]
//! -> [`cli::execute_request`] -> [`ops::ActivityRecord`] -> [`sink::ActivityLog`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod ops;
pub mod sink;
pub mod util;
