pub mod auth;
pub mod config;
pub mod engine;
pub mod recording;

pub use auth::{
    validate, ClientCredentialsProvider, Credential, CredentialError, CredentialFetcher,
    TokenProvider, ValidationError,
};
pub use config::{AuthConfig, Config, MetadataConfig};
pub use engine::{
    CaptureEngine, EngineError, EngineEvent, InterruptionReason, RecordingHandle, SessionHandle,
    UploadEvent,
};
pub use recording::{ControllerError, ControllerNotice, RecordingController, RecordingState};
