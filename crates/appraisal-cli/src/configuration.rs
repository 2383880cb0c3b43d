use std::path::{Path, PathBuf};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub api: ApiSettings,
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApiSettings {
    /// Scheme, host and port of the backend, without the `/api` path
    pub base_url: String,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct StorageSettings {
    /// Where the remembered session is kept
    pub directory: PathBuf,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LoggingSettings {
    pub default_filter: String,
    pub directory: PathBuf,
}

pub fn get_configuration() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir().expect("failed to determine the current directory");
    get_configuration_from(&base_path.join("configuration"))
}

/// Layers `base.toml`, then the file for `APP_ENVIRONMENT` (default `local`),
/// then `APP_` prefixed environment variables
pub fn get_configuration_from(
    configuration_directory: &Path,
) -> Result<Configuration, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.toml"),
        ))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        // E.g. `APP_API__BASE_URL=http://10.0.0.5:8080` would set `Configuration.api.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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
