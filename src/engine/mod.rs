//! Boundary to the external capture/upload engine
//!
//! The engine owns audio capture and the upload pipeline; this crate only
//! drives it. The engine is injected as an [`CaptureEngine`] handle rather
//! than reached through a process-wide singleton, so tests can substitute a
//! scripted double. Lifecycle outcomes come back asynchronously as
//! [`EngineEvent`] values on a single ordered stream.

pub mod events;
pub mod session;

use thiserror::Error;

pub use events::{EngineEvent, InterruptionReason, UploadEvent};
pub use session::{RecordingHandle, SessionHandle};

/// Errors the engine can return when a request is rejected at the protocol
/// level, before any asynchronous confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine rejected start request: {0}")]
    StartRejected(String),

    #[error("engine rejected stop request: {0}")]
    StopRejected(String),
}

/// The capture/upload engine's control surface.
///
/// None of these calls suspend: they accept or reject a request
/// synchronously, and the actual outcome (started, failed to start,
/// stopped) arrives later as an [`EngineEvent`].
pub trait CaptureEngine: Send + Sync {
    /// Obtain a session handle for the given correlation identifier.
    ///
    /// Sessions sharing an identifier are merged engine-side into one
    /// document, so reusing an identifier groups recordings together.
    fn open_session(
        &self,
        identifier: &str,
        contextual_data: Option<serde_json::Value>,
    ) -> SessionHandle;

    /// Request that a recording start on the given session.
    ///
    /// Acceptance only means the request is in flight; wait for
    /// [`EngineEvent::StartConfirmed`] or [`EngineEvent::StartFailed`].
    fn start_recording(&self, session: &SessionHandle) -> Result<RecordingHandle, EngineError>;

    /// Request that an in-flight recording stop.
    ///
    /// Must be issued at most once per recording handle.
    fn stop_recording(&self, recording: &RecordingHandle) -> Result<(), EngineError>;
}
