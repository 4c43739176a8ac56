use std::env;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/the_acme_store";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::from_lookup(|key| env::var(key).ok()))
    }

    /// Builds the config from any key lookup, so tests don't have to touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            database_url,
            host,
        }
    }
}
