use crate::error::config::ConfigError;

static DEFAULT_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            address: std::env::var("HOLOCRON_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_ADDRESS.to_string()),
        })
    }
}

fn require_env(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
