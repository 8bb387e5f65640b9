//! Recording lifecycle state machine
//!
//! This module provides the `RecordingController` that owns:
//! - The active session handle and at most one in-flight recording
//! - The observable `RecordingState` and audio-level readout
//! - Reconciliation of asynchronous engine events against tracked state,
//!   dropping anything stale
//! - Forwarding of informational events (interruptions, duration warnings)

pub mod controller;
pub mod state;

pub use controller::{ControllerError, RecordingController};
pub use state::{ControllerNotice, RecordingState};
