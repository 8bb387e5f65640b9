use uuid::Uuid;

/// Handle for one logical recording session obtained from the engine.
///
/// The contextual data is opaque to this crate (e.g., an external-record
/// linkage blob) and is attached write-once when the session is opened.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub identifier: String,
    pub contextual_data: Option<serde_json::Value>,
}

impl SessionHandle {
    pub fn new(identifier: impl Into<String>, contextual_data: Option<serde_json::Value>) -> Self {
        Self {
            identifier: identifier.into(),
            contextual_data,
        }
    }
}

/// Handle for one start→stop recording cycle, issued by the engine when a
/// start request is accepted at the protocol level.
///
/// The engine-assigned recording identifier is not known yet at this point;
/// it arrives with the start confirmation. The request id exists so the
/// engine can correlate a later stop request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingHandle {
    pub request_id: Uuid,
    pub session_id: String,
}

impl RecordingHandle {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            session_id: session_id.into(),
        }
    }
}
