//! Credential pipeline for the capture engine's token requests
//!
//! This module provides:
//! - Pure validation of token endpoint responses (`validator`)
//! - The single-round-trip client-credentials exchange (`fetcher`)
//! - The `TokenProvider` seam the engine calls whenever it needs to
//!   authenticate an upload (`provider`)

pub mod fetcher;
pub mod provider;
pub mod validator;

pub use fetcher::{CredentialError, CredentialFetcher};
pub use provider::{ClientCredentialsProvider, TokenProvider};
pub use validator::{validate, Credential, ValidationError};
