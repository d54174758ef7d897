use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid listen address {}:{}: {e}", self.host, self.port))?;
        Ok(addr)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 4000

[database]
url = "sqlite://target/db/calculator.db?mode=rwc"
"#;

/// Load configuration
///
/// Search order:
/// 1. config.toml next to the executable
/// 2. Falls back to embedded default config
///
/// `PORT` and `DATABASE_URL` from the environment override whatever was loaded.
pub fn load_config() -> anyhow::Result<Config> {
    let config = load_file_or_default()?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

fn load_file_or_default() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok(toml::from_str(&contents)?);
            }
            tracing::debug!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Apply `PORT` / `DATABASE_URL` overrides using the given variable lookup
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> anyhow::Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT").filter(|v| !v.trim().is_empty()) {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number, got {port:?}: {e}"))?;
    }
    if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
        config.database.url = url;
    }
    Ok(config)
}
