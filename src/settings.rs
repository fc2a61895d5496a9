use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub cors_origin: String,
}

impl Settings {
    /// Reads `HOST`, `PORT`, `STORAGE`, `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`
    /// and `CORS_ORIGIN` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default().try_parsing(true))
    }

    fn from_source(environment: Environment) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000)?
            .set_default("storage", "postgres")?
            .set_default("database_max_connections", 10)?
            .set_default("cors_origin", "http://localhost:5173")?
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        if settings.storage == StorageBackend::Postgres && settings.database_url.is_none() {
            return Err(ConfigError::Message(
                "DATABASE_URL must be set when STORAGE=postgres".to_string(),
            ));
        }

        Ok(settings)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Environment {
        let source: config::Map<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().try_parsing(true).source(Some(source))
    }

    #[test]
    fn defaults_apply_for_memory_storage() {
        let settings = Settings::from_source(env(&[("STORAGE", "memory")])).unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.storage, StorageBackend::Memory);
        assert_eq!(settings.cors_origin, "http://localhost:5173");
        assert_eq!(settings.database_max_connections, 10);
        assert!(settings.database_url.is_none());
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = Settings::from_source(env(&[
            ("PORT", "3001"),
            ("DATABASE_URL", "postgres://localhost/dashboard"),
            ("CORS_ORIGIN", "http://localhost:3000"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 3001);
        assert_eq!(settings.storage, StorageBackend::Postgres);
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/dashboard")
        );
        assert_eq!(settings.bind_address(), ("0.0.0.0".to_string(), 3001));
    }

    #[test]
    fn postgres_requires_a_database_url() {
        assert!(Settings::from_source(env(&[])).is_err());
    }

    #[test]
    fn unknown_storage_is_rejected() {
        assert!(Settings::from_source(env(&[("STORAGE", "mongo")])).is_err());
    }
}
