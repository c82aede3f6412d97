//! Proofer configuration

use serde::{Deserialize, Serialize};

use crate::error::ProoferError;

/// Proofer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProoferConfig {
    /// Endpoint verification requests are posted to
    pub verification_url: String,

    /// Per-request timeout in seconds
    pub verification_request_timeout_secs: u64,

    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for ProoferConfig {
    fn default() -> Self {
        Self {
            verification_url: "https://verificationservices-cert.aamva.org:18449/dldv/2.1/online"
                .to_string(),
            verification_request_timeout_secs: 20,
            user_agent: format!("aamva-proofer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ProoferConfig {
    /// Create a new config with a custom verification endpoint
    pub fn with_verification_url(url: impl Into<String>) -> Self {
        Self {
            verification_url: url.into(),
            ..Default::default()
        }
    }

    /// Load configuration from `aamva.toml` (optional) and `AAMVA_*`
    /// environment variables, on top of the defaults.
    pub fn load() -> Result<Self, ProoferError> {
        Self::load_from("aamva")
    }

    /// Like [`ProoferConfig::load`] with a custom config file name (the
    /// extension is inferred).
    pub fn load_from(file: &str) -> Result<Self, ProoferError> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let settings = ::config::Config::builder()
            .set_default("verification_url", defaults.verification_url)?
            .set_default(
                "verification_request_timeout_secs",
                defaults.verification_request_timeout_secs as i64,
            )?
            .set_default("user_agent", defaults.user_agent)?
            .add_source(::config::File::with_name(file).required(false))
            .add_source(::config::Environment::with_prefix("AAMVA").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;

        if config.verification_request_timeout_secs == 0 {
            return Err(ProoferError::Config(
                "verification_request_timeout_secs must be positive".to_string(),
            ));
        }

        Ok(config)
    }
}
