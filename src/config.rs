use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

/// Client-credentials parameters for the token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Token endpoint URL (e.g., "https://tenant.auth.example.com/oauth/token")
    pub token_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub audience: String,
}

/// App/device identification strings, used only for diagnostics.
///
/// Every field has an explicit fallback so a missing value degrades to a
/// placeholder instead of failing startup.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_app_id")]
    pub app_id: String,

    #[serde(default = "default_app_version")]
    pub app_version: String,

    #[serde(default = "default_device_id")]
    pub device_id: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            app_version: default_app_version(),
            device_id: default_device_id(),
        }
    }
}

fn default_app_id() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_device_id() -> String {
    "unknown".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_with_full_metadata() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
            [service]
            name = "scribe-client"

            [auth]
            token_url = "https://auth.example.com/oauth/token"
            client_id = "id"
            client_secret = "secret"
            audience = "aud"

            [metadata]
            app_id = "com.example.app"
            app_version = "2.1.0"
            device_id = "device-123"
            "#
        )
        .unwrap();

        let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.service.name, "scribe-client");
        assert_eq!(cfg.auth.client_id, "id");
        assert_eq!(cfg.metadata.app_id, "com.example.app");
        assert_eq!(cfg.metadata.device_id, "device-123");
    }

    #[test]
    fn metadata_falls_back_to_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
            [service]
            name = "scribe-client"

            [auth]
            token_url = "https://auth.example.com/oauth/token"
            client_id = "id"
            client_secret = "secret"
            audience = "aud"
            "#
        )
        .unwrap();

        let cfg = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(cfg.metadata.app_id, env!("CARGO_PKG_NAME"));
        assert_eq!(cfg.metadata.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(cfg.metadata.device_id, "unknown");
    }
}
