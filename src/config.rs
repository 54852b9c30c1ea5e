use anyhow::Context;

/// Runtime configuration, sourced from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        // Best-effort: a missing .env file is not an error
        let _ = dotenvy::dotenv();

        let database_url = std::env::var("DATABASE_URL")
            // Development-time default; production should set DATABASE_URL
            .unwrap_or_else(|_| "sqlite://todos.db".to_string());
        let port = match std::env::var("PORT") {
            Ok(p) => p.parse::<u16>().context("PORT is not a valid port number")?,
            Err(_) => 3000,
        };

        Ok(Self { database_url, port })
    }
}
