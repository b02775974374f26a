//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use validator::{Validate, ValidationError};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Regex for validating a hex-encoded secp256k1 private key
static SIGNER_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{64}$").expect("valid regex"));

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Signer credential, wiped from memory on drop and never printed
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct SignerKey(String);

impl SignerKey {
    /// Access the raw credential
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

// Validation errors record the offending value as a parameter
impl Serialize for SignerKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("<redacted>")
    }
}

impl std::fmt::Debug for SignerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SignerKey(<redacted>)")
    }
}

/// Values handed to the application by its deployment environment
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EnvironmentConfig {
    #[serde(default)]
    #[validate(custom(function = "validate_base_url"))]
    pub api_base_url: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_signer_key"))]
    pub signer_private_key: Option<SignerKey>,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    #[validate(nested)]
    pub environment: EnvironmentConfig,
}

/// Validates the API base URL (must be http:// or https:// with a host)
fn validate_base_url(url: &str) -> Result<(), ValidationError> {
    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or("");

    if host.is_empty() || host.starts_with('/') {
        let mut error = ValidationError::new("url");
        error.message = Some("api_base_url must be an http:// or https:// URL with a host".into());
        return Err(error);
    }

    Ok(())
}

/// Validates the signer credential format without echoing it
fn validate_signer_key(key: &SignerKey) -> Result<(), ValidationError> {
    if SIGNER_KEY_REGEX.is_match(key.expose()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("signer_private_key");
        error.message = Some("signer_private_key must be 0x followed by 64 hex characters".into());
        Err(error)
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Override with environment variables (e.g., APP__ENVIRONMENT__API_BASE_URL)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Whether a signer credential was supplied
    #[must_use]
    pub fn has_signer(&self) -> bool {
        self.environment.signer_private_key.is_some()
    }
}
