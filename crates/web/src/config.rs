use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub token_secret: String,
    pub token_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            token_secret: std::env::var("TOKEN_SECRET")
                .context("Cannot load TOKEN_SECRET env variable")?,
            token_ttl_minutes: std::env::var("TOKEN_TTL_MINUTES")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("TOKEN_TTL_MINUTES must be a number")?,
        })
    }
}
