//! CLI configuration loading
//!
//! Sources, lowest precedence first: built-in defaults, the TOML file
//! (`geocoder.toml` or `--config`), then `GEOCODER__*` environment
//! variables, e.g. `GEOCODER__GEOCODING__AUTH__SCHEME=api_token`.

use std::path::Path;

use integration_geocoding::GeocodingConfig;
use serde::Deserialize;

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Geocoding client settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("geocoder").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., GEOCODER__GEOCODING__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix("GEOCODER")
                    .prefix_separator("__")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }
}
