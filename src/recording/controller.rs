use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::state::{ControllerNotice, RecordingState};
use crate::engine::{CaptureEngine, EngineError, EngineEvent, RecordingHandle, SessionHandle};

/// Caller-contract violations and forwarded engine rejections.
///
/// The session/recording variants indicate a logic bug in the integrating
/// application rather than an environmental failure; they are logged loudly
/// and returned, never swallowed, and never corrupt the tracked state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("no active session to record in")]
    NoActiveSession,

    #[error("a recording is already pending or active")]
    RecordingInProgress,

    #[error("no active recording to stop")]
    NoActiveRecording,

    #[error("stop was already requested for this recording")]
    StopAlreadyRequested,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// The one live start→stop cycle, if any.
struct ActiveRecording {
    handle: RecordingHandle,

    /// Engine-assigned identifier, known only after the start confirmation.
    recording_id: Option<String>,

    /// A stop request is single-use per recording instance.
    stop_requested: bool,
}

/// Owns the recording lifecycle for one session at a time.
///
/// The controller is the single writer of [`RecordingState`] and the
/// session/recording references; engine callbacks are applied through
/// [`RecordingController::handle_event`], so all updates flow through one
/// `&mut self` path and cannot race. Events that no longer match the
/// tracked identifiers are dropped rather than applied.
pub struct RecordingController {
    engine: Arc<dyn CaptureEngine>,
    state: RecordingState,
    active_session: Option<SessionHandle>,
    recording: Option<ActiveRecording>,
    audio_level: f32,
    notices: mpsc::UnboundedSender<ControllerNotice>,
}

impl RecordingController {
    /// Create a controller around an injected engine handle.
    ///
    /// Returns the controller plus the receiving half of the notice
    /// channel; informational events are dropped if the receiver goes away.
    pub fn new(
        engine: Arc<dyn CaptureEngine>,
    ) -> (Self, mpsc::UnboundedReceiver<ControllerNotice>) {
        let (notices, notice_rx) = mpsc::unbounded_channel();

        (
            Self {
                engine,
                state: RecordingState::Idle,
                active_session: None,
                recording: None,
                audio_level: 0.0,
                notices,
            },
            notice_rx,
        )
    }

    /// Open a new session, replacing any previously held one.
    ///
    /// A random correlation identifier is generated when none is supplied;
    /// a real integration should pass the identifier its backend will use
    /// to correlate the delivered document. Reusing an identifier groups
    /// recordings into the same engine-side document.
    pub fn open_new_session(
        &mut self,
        identifier: Option<String>,
        contextual_data: Option<serde_json::Value>,
    ) -> &SessionHandle {
        if self.state != RecordingState::Idle {
            // Not forbidden here, but the engine is expected to reject
            // overlapping use.
            warn!("Opening a new session while {:?}", self.state);
        }

        let identifier = identifier.unwrap_or_else(|| Uuid::new_v4().to_string());
        info!("Opening session: {}", identifier);

        let session = self.engine.open_session(&identifier, contextual_data);
        self.active_session.insert(session)
    }

    /// Request that a recording start on the open session.
    ///
    /// On success the state moves to `Starting`; the actual outcome arrives
    /// later as a start-confirmed or start-failed event. Never call this
    /// again until the previous recording has failed to start or stopped.
    pub fn start_recording(&mut self) -> Result<(), ControllerError> {
        if self.state != RecordingState::Idle {
            error!("Start requested while {:?}; a recording is already in flight", self.state);
            return Err(ControllerError::RecordingInProgress);
        }

        let session = match self.active_session.as_ref() {
            Some(session) => session,
            None => {
                error!("Start requested with no active session to record in");
                return Err(ControllerError::NoActiveSession);
            }
        };

        match self.engine.start_recording(session) {
            Ok(handle) => {
                info!("Start requested on session {}", session.identifier);
                self.recording = Some(ActiveRecording {
                    handle,
                    recording_id: None,
                    stop_requested: false,
                });
                self.state = RecordingState::Starting;
                Ok(())
            }
            Err(e) => {
                error!("Failed to start recording: {}", e);
                Err(e.into())
            }
        }
    }

    /// Request that the in-flight recording stop.
    ///
    /// Single-use per recording: the request is marked issued before the
    /// engine call, so a failed forward cannot be retried on the same
    /// recording. The state stays unchanged until the engine confirms.
    pub fn stop_recording(&mut self) -> Result<(), ControllerError> {
        let recording = match self.recording.as_mut() {
            Some(recording) => recording,
            None => {
                error!("Stop requested with no active recording");
                return Err(ControllerError::NoActiveRecording);
            }
        };

        if recording.stop_requested {
            error!("Stop already requested for this recording");
            return Err(ControllerError::StopAlreadyRequested);
        }
        recording.stop_requested = true;

        if let Err(e) = self.engine.stop_recording(&recording.handle) {
            error!("Failed to stop recording: {}", e);
            return Err(e.into());
        }

        info!("Stop requested on session {}", recording.handle.session_id);
        Ok(())
    }

    /// Apply one engine event to the tracked state.
    ///
    /// This is the only path that reacts to engine callbacks; the caller is
    /// responsible for feeding events in the order they were delivered.
    pub fn handle_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::StartConfirmed {
                recording_id,
                session_id,
            } => {
                if self.state != RecordingState::Starting || !self.tracks_session(&session_id) {
                    warn!(
                        "Ignoring stale start confirmation for session {} (recording {})",
                        session_id, recording_id
                    );
                    return;
                }

                if let Some(recording) = self.recording.as_mut() {
                    recording.recording_id = Some(recording_id.clone());
                }
                self.state = RecordingState::Recording;
                info!("Recording started: {}", recording_id);
            }

            EngineEvent::StartFailed { session_id, reason } => {
                if self.state != RecordingState::Starting || !self.tracks_session(&session_id) {
                    warn!("Ignoring stale start failure for session {}", session_id);
                    return;
                }

                error!("Failed to start recording on session {}: {}", session_id, reason);
                self.recording = None;
                self.state = RecordingState::Idle;
                self.notices
                    .send(ControllerNotice::StartFailed { reason })
                    .ok();
            }

            EngineEvent::StopConfirmed {
                recording_id,
                session_id,
                duration_secs,
            } => {
                if !self.tracks_recording(&recording_id, &session_id) {
                    warn!(
                        "Ignoring stale stop confirmation for recording {} (session {})",
                        recording_id, session_id
                    );
                    return;
                }

                info!("Recording stopped after {:.1} seconds", duration_secs);
                self.recording = None;
                self.state = RecordingState::Idle;
                self.audio_level = 0.0;
            }

            EngineEvent::Interrupted { reason } => {
                info!("Recording interrupted: {:?}", reason);
                self.notices
                    .send(ControllerNotice::Interrupted { reason })
                    .ok();
            }

            EngineEvent::WarnDurationReached { time_left_secs } => {
                info!("Recording will stop in {:.0} seconds", time_left_secs);
                self.notices
                    .send(ControllerNotice::ApproachingLimit { time_left_secs })
                    .ok();
            }

            EngineEvent::Metered { level, .. } => {
                if self.state == RecordingState::Recording {
                    self.audio_level = level;
                }
            }

            EngineEvent::SilenceDetected => {
                info!("Digital silence detected");
                self.notices.send(ControllerNotice::SilenceDetected).ok();
            }
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    /// Latest audio-level sample; 0 outside an active recording.
    pub fn audio_level(&self) -> f32 {
        self.audio_level
    }

    pub fn active_session(&self) -> Option<&SessionHandle> {
        self.active_session.as_ref()
    }

    /// Whether the in-flight recording belongs to the given session.
    fn tracks_session(&self, session_id: &str) -> bool {
        self.recording
            .as_ref()
            .is_some_and(|r| r.handle.session_id == session_id)
    }

    /// Whether a stop confirmation matches the tracked recording.
    ///
    /// Before the start confirmation no recording identifier exists, so an
    /// engine-initiated stop racing the confirmation is matched on the
    /// session identifier instead.
    fn tracks_recording(&self, recording_id: &str, session_id: &str) -> bool {
        self.recording.as_ref().is_some_and(|r| match &r.recording_id {
            Some(id) => id == recording_id,
            None => r.handle.session_id == session_id,
        })
    }
}
