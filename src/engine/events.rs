use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Why an in-flight recording was interrupted.
///
/// Interruptions are informational: the recording continues (or is stopped
/// separately by the engine) and no state transition happens on receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptionReason {
    /// Another process took the audio system (e.g., a phone call)
    AudioInterruption,
    /// Input route changed (headphones or a bluetooth microphone)
    RouteChange,
    /// The platform audio system reset underneath the engine
    SystemReset,
    /// The session hit its maximum recording duration; no further
    /// recordings can be made on it
    MaxDurationReached,
}

/// Recording lifecycle events reported by the engine.
///
/// Delivered as one ordered stream and consumed by the recording
/// controller, which guards each transition against the identifiers it is
/// currently tracking and drops anything stale.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// The recording actually started; audio is flowing.
    StartConfirmed {
        recording_id: String,
        session_id: String,
    },

    /// The start request failed after being accepted (audio system busy,
    /// startup timeout, no audio packets). The caller decides whether to
    /// try again.
    StartFailed { session_id: String, reason: String },

    /// The recording stopped, whether requested by the caller or initiated
    /// by the engine.
    StopConfirmed {
        recording_id: String,
        session_id: String,
        duration_secs: f64,
    },

    /// Informational; the recording keeps going.
    Interrupted { reason: InterruptionReason },

    /// The session is approaching its maximum recording duration.
    WarnDurationReached { time_left_secs: f64 },

    /// Periodic audio-level sample. Cadence is not uniform; consumers must
    /// not assume a fixed rate.
    Metered { duration_secs: f64, level: f32 },

    /// The engine detected digital silence on the input.
    SilenceDetected,
}

/// Upload-pipeline notifications from the engine.
///
/// This crate observes these for diagnostics only; retries and session
/// finalization are entirely the engine's business.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    UploadStarted {
        recording_id: String,
        session_id: String,
    },
    UploadSucceeded {
        recording_id: String,
        session_id: String,
    },
    UploadFailed {
        recording_id: String,
        session_id: String,
        error: String,
        will_retry: bool,
    },
    AllUploadsFinished,
    SessionCompleted {
        session_id: String,
    },
    SessionFailed {
        session_id: String,
        error: String,
    },
    /// Locales the engine currently supports for recording and for the
    /// produced report.
    SupportedLocales {
        recording: Vec<String>,
        report: Vec<String>,
    },
    RecordingPermission {
        granted: bool,
    },
}

/// Drain upload notifications and log each one.
///
/// Spawn this with the receiving half of the channel handed to the engine;
/// it runs until the engine drops its sender.
pub async fn forward_upload_events(mut rx: mpsc::UnboundedReceiver<UploadEvent>) {
    while let Some(event) = rx.recv().await {
        match event {
            UploadEvent::UploadStarted {
                recording_id,
                session_id,
            } => {
                info!("Upload started: recording={} session={}", recording_id, session_id);
            }
            UploadEvent::UploadSucceeded {
                recording_id,
                session_id,
            } => {
                info!("Upload succeeded: recording={} session={}", recording_id, session_id);
            }
            UploadEvent::UploadFailed {
                recording_id,
                session_id,
                error,
                will_retry,
            } => {
                if will_retry {
                    warn!(
                        "Upload failed (engine will retry): recording={} session={}: {}",
                        recording_id, session_id, error
                    );
                } else {
                    error!(
                        "Upload failed permanently: recording={} session={}: {}",
                        recording_id, session_id, error
                    );
                }
            }
            UploadEvent::AllUploadsFinished => {
                info!("All uploads finished");
            }
            UploadEvent::SessionCompleted { session_id } => {
                info!("Session completed: {}", session_id);
            }
            UploadEvent::SessionFailed { session_id, error } => {
                error!("Session failed: {}: {}", session_id, error);
            }
            UploadEvent::SupportedLocales { recording, report } => {
                info!(
                    "Supported locales: recording={:?} report={:?}",
                    recording, report
                );
            }
            UploadEvent::RecordingPermission { granted } => {
                info!("Recording permission granted: {}", granted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn forwarder_drains_until_sender_drops() {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(forward_upload_events(rx));

        tx.send(UploadEvent::UploadStarted {
            recording_id: "R1".to_string(),
            session_id: "S1".to_string(),
        })
        .unwrap();
        tx.send(UploadEvent::UploadFailed {
            recording_id: "R1".to_string(),
            session_id: "S1".to_string(),
            error: "network".to_string(),
            will_retry: true,
        })
        .unwrap();
        tx.send(UploadEvent::SessionCompleted {
            session_id: "S1".to_string(),
        })
        .unwrap();
        drop(tx);

        // The forwarder terminates once the engine side goes away.
        task.await.unwrap();
    }
}
