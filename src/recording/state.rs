/// Observable recording state, driven only by explicit caller intent and
/// confirmed engine events, never by caller-side timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not recording; the initial state
    Idle,
    /// Start requested, waiting for the engine's confirmation
    Starting,
    /// The engine confirmed that audio is flowing
    Recording,
}

/// Informational events forwarded to the application layer.
///
/// None of these change [`RecordingState`]; they exist so the application
/// can notify the user (e.g., show a time-remaining warning).
#[derive(Debug, Clone)]
pub enum ControllerNotice {
    /// A start request failed after being accepted; the application decides
    /// whether to try again.
    StartFailed { reason: String },

    /// The recording was interrupted (other audio, route change, reset, or
    /// the session duration cap).
    Interrupted {
        reason: crate::engine::InterruptionReason,
    },

    /// The session is approaching its maximum recording duration.
    ApproachingLimit { time_left_secs: f64 },

    /// Digital silence detected on the input.
    SilenceDetected,
}
