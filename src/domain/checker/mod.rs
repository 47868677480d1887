//! Checker domain — per-lane request lifecycle and the shared display slot.

pub mod state;

pub use state::{CheckerState, LaneId, RequestLane, RequestState, Submission};
