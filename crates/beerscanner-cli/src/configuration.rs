use std::{
    convert::{TryFrom, TryInto},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context as _;
use beerscanner_shared::const_config::client::CLIENT_DEFAULT_API_BASE_URL;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    pub base_url: String,
    /// Zero means requests never time out
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// File the token is kept in between runs
    pub path: PathBuf,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LoggingSettings {
    pub folder: PathBuf,
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Loads the configuration from the `configuration` folder in the current
/// directory
pub fn get_configuration() -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir().context("failed to determine the current directory")?;
    get_configuration_from(&base_path.join("configuration"))
}

/// Layers, each overriding the one before: built in defaults, `base.toml`, the
/// file for the environment then `APP_` environment variables. Both files are
/// optional so the binary still runs outside of the repo.
pub fn get_configuration_from(configuration_directory: &Path) -> anyhow::Result<Configuration> {
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("failed to parse APP_ENVIRONMENT")?;
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .set_default("api.base_url", CLIENT_DEFAULT_API_BASE_URL)?
        .set_default("api.timeout_secs", 30)?
        .set_default("storage.path", "beerscanner_session.ron")?
        .set_default("logging.folder", "traces")?
        .add_source(config::File::from(configuration_directory.join("base.toml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_API__BASE_URL=https://example.com` would set `Configuration.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings
        .try_deserialize::<Configuration>()
        .context("invalid configuration")
}

/// The possible runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
