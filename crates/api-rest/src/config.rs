//! Command-line configuration overrides.

use clap::Parser;
use std::path::PathBuf;
use trivia_common::AppConfig;

/// Trivia API server
#[derive(Debug, Clone, Parser)]
#[command(name = "trivia-api", version, about = "REST API serving trivia questions and quizzes")]
pub struct CliArgs {
    /// Configuration file (TOML)
    #[arg(short, long, env = "TRIVIA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// PostgreSQL connection URL; the in-memory store is used without one
    #[arg(long)]
    pub database_url: Option<String>,
}

impl CliArgs {
    /// Load layered configuration and apply the flags on top
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply flags that were given to `config`
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(url) = self.database_url.as_ref().filter(|u| !u.trim().is_empty()) {
            config.database.url = Some(url.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = CliArgs::parse_from([
            "trivia-api",
            "--host",
            "127.0.0.1",
            "--port",
            "5000",
            "--database-url",
            "postgres://localhost/trivia",
        ]);

        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.address(), "127.0.0.1:5000");
        assert_eq!(config.database.url.as_deref(), Some("postgres://localhost/trivia"));
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let args = CliArgs::parse_from(["trivia-api"]);
        let mut config = AppConfig::default();
        args.apply(&mut config);

        assert_eq!(config.server.port, 8080);
        assert!(config.database.url.is_none());
    }
}
