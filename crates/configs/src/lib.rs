use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4), log_format: LogFormat::Compact }
    }
}

/// SQLite storage. `url` wins over `name`; `name = "restaurant"` maps to
/// `sqlite://./restaurant.db?mode=rwc`.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> u64 {
    30
}

fn default_idle_timeout() -> u64 {
    600
}

fn default_max_lifetime() -> u64 {
    3600
}

fn default_acquire_timeout() -> u64 {
    30
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            name: None,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Where HTTP clients of the restaurant API should point.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:8000".into() }
    }
}

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn default_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&default_path())
}

/// `None` when the file does not exist; read and parse errors are returned.
pub fn load_optional(path: &str) -> Result<Option<AppConfig>> {
    match std::fs::read_to_string(path) {
        Ok(content) => load_from_str(&content)
            .map(Some)
            .map_err(|e| anyhow!("invalid config file {path}: {e}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(anyhow!("cannot read config file {path}: {e}")),
    }
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            client: ClientConfig::from_env(),
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_without_database()?;
        self.database.normalize_from_env();
        self.database.validate()
    }

    /// Server and client sections only, for services that never open a database.
    pub fn normalize_and_validate_without_database(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.client.validate()
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            host: std::env::var("SERVER_HOST").unwrap_or(d.host),
            port: std::env::var("SERVER_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(d.port),
            worker_threads: std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse().ok()).or(d.worker_threads),
            log_format: match std::env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Compact,
            },
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 {
                self.worker_threads = Some(4);
            }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL").unwrap_or_default(),
            name: std::env::var("DATABASE_NAME").ok(),
            ..Self::default()
        }
    }

    /// Fill `url` from `DATABASE_URL`, then from `name`.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
        if self.url.trim().is_empty() {
            if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
                self.url = sqlite_url_for_name(name.trim());
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set database.url or database.name in config.toml, or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must use the sqlite: scheme"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0
            || self.acquire_timeout_secs == 0
            || self.idle_timeout_secs == 0
            || self.max_lifetime_secs == 0
        {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

/// `sqlite://./<name>.db?mode=rwc`, creating the file on first connect.
pub fn sqlite_url_for_name(name: &str) -> String {
    format!("sqlite://./{name}.db?mode=rwc")
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self { base_url: std::env::var("BASE_URL").unwrap_or(Self::default().base_url) }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(anyhow!("client.base_url must start with http:// or https://"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            log_format = "json"

            [database]
            url = "sqlite://./orders.db?mode=rwc"
            max_connections = 3

            [client]
            base_url = "http://localhost:9000"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.log_format, LogFormat::Json);
        assert_eq!(cfg.database.max_connections, 3);
        assert_eq!(cfg.database.min_connections, 1);
        assert_eq!(cfg.client.base_url, "http://localhost:9000");
    }

    #[test]
    fn name_maps_to_sqlite_file() {
        let mut db = DatabaseConfig { name: Some("restaurant".into()), ..DatabaseConfig::default() };
        if std::env::var("DATABASE_URL").is_ok() { return; }
        db.normalize_from_env();
        assert_eq!(db.url, "sqlite://./restaurant.db?mode=rwc");
        db.validate().unwrap();
    }

    #[test]
    fn rejects_non_sqlite_url() {
        let db = DatabaseConfig { url: "postgres://localhost/db".into(), ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_zero_min_connections() {
        let db = DatabaseConfig { url: "sqlite::memory:".into(), min_connections: 0, ..DatabaseConfig::default() };
        assert!(db.validate().is_err());
    }

    #[test]
    fn rejects_zero_idle_or_lifetime() {
        let idle = DatabaseConfig { url: "sqlite::memory:".into(), idle_timeout_secs: 0, ..DatabaseConfig::default() };
        assert!(idle.validate().is_err());
        let lifetime = DatabaseConfig { url: "sqlite::memory:".into(), max_lifetime_secs: 0, ..DatabaseConfig::default() };
        assert!(lifetime.validate().is_err());
    }

    #[test]
    fn missing_file_is_none() {
        let path = std::env::temp_dir().join("configs-test-does-not-exist.toml");
        assert!(load_optional(path.to_str().unwrap()).unwrap().is_none());
    }

    #[test]
    fn unparsable_file_is_error() {
        let path = std::env::temp_dir().join(format!("configs-test-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        let res = load_optional(path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn rejects_bad_client_url() {
        let c = ClientConfig { base_url: "localhost:8000".into() };
        assert!(c.validate().is_err());
    }

    #[test]
    fn zero_worker_threads_normalized() {
        let mut s = ServerConfig { worker_threads: Some(0), ..ServerConfig::default() };
        s.normalize().unwrap();
        assert_eq!(s.worker_threads, Some(4));
    }
}
