use std::{net::SocketAddr, path::Path};

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::{RestaurantState, UniversityState};

/// Directory holding the restaurant landing page images.
pub const ASSETS_DIR: &str = "images";

/// The three services shipped by this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum App {
    Hello,
    University,
    Restaurant,
}

impl App {
    pub fn name(self) -> &'static str {
        match self {
            App::Hello => "hello",
            App::University => "university",
            App::Restaurant => "restaurant",
        }
    }

    /// SQLite file name used when neither `database.url` nor `database.name`
    /// is set. `None` for services without a database.
    fn default_db_name(self) -> Option<&'static str> {
        match self {
            App::Hello => None,
            App::Restaurant => Some("restaurant"),
            App::University => Some("university"),
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file at `CONFIG_PATH` (default `config.toml`), or the environment
/// when that file does not exist; validated.
pub fn load_config(app: App) -> anyhow::Result<AppConfig> {
    load_config_from(app, &configs::default_path())
}

/// A file that exists but does not parse is an error, never an env fallback.
pub fn load_config_from(app: App, path: &str) -> anyhow::Result<AppConfig> {
    let mut cfg = configs::load_optional(path)?.unwrap_or_else(AppConfig::from_env);
    if cfg.database.url.trim().is_empty() && cfg.database.name.is_none() {
        cfg.database.name = app.default_db_name().map(str::to_string);
    }
    if app == App::Hello {
        cfg.normalize_and_validate_without_database()?;
    } else {
        cfg.normalize_and_validate()?;
    }
    Ok(cfg)
}

async fn open_database(cfg: &configs::DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    common::env::ensure_sqlite_parent(&cfg.url).await?;
    let db = models::db::connect_with_config(cfg).await?;
    models::db::migrate(&db).await?;
    info!(url = %cfg.url, "database ready");
    Ok(db)
}

/// Build the router for `app`, opening and migrating its database when it has one.
pub async fn build_app(app: App, cfg: &AppConfig) -> anyhow::Result<Router> {
    let cors = build_cors();
    let router = match app {
        App::Hello => routes::build_hello_router(cors),
        App::University => {
            let db = open_database(&cfg.database).await?;
            routes::build_university_router(UniversityState::seaorm(db), cors)
        }
        App::Restaurant => {
            common::env::ensure_assets(ASSETS_DIR).await;
            let db = open_database(&cfg.database).await?;
            routes::build_restaurant_router(RestaurantState::seaorm(db), Path::new(ASSETS_DIR), cors)
        }
    };
    Ok(router)
}

fn bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Serve `app` until Ctrl+C.
pub async fn run(app: App, cfg: AppConfig) -> anyhow::Result<()> {
    let router = build_app(app, &cfg).await?;
    let addr = bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, service = app.name(), "listening");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_config() {
        let s = configs::ServerConfig { host: "0.0.0.0".into(), port: 8001, ..Default::default() };
        assert_eq!(bind_addr(&s).unwrap().to_string(), "0.0.0.0:8001");
    }

    fn write_config(content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("startup-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn default_database_per_app() {
        assert_eq!(App::University.default_db_name(), Some("university"));
        assert_eq!(App::Restaurant.default_db_name(), Some("restaurant"));
        assert_eq!(App::Hello.default_db_name(), None);
    }

    #[test]
    fn unparsable_config_file_is_an_error() {
        let path = write_config("[server]\nport = \"not a number\"\n\n[database]\nurl = \"sqlite://./custom.db\"\n");
        let res = load_config_from(App::Restaurant, path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert!(res.is_err());
    }

    #[test]
    fn config_file_database_url_is_used() {
        let path = write_config("[server]\nhost = \"127.0.0.1\"\nport = 8100\n\n[database]\nurl = \"sqlite://./custom.db\"\n");
        let res = load_config_from(App::Restaurant, path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        let cfg = res.unwrap();
        assert_eq!(cfg.database.url, "sqlite://./custom.db");
        assert_eq!(cfg.server.port, 8100);
    }

    #[test]
    fn hello_loads_without_database_settings() {
        let path = write_config("[server]\nhost = \"127.0.0.1\"\nport = 8100\n");
        let res = load_config_from(App::Hello, path.to_str().unwrap());
        std::fs::remove_file(&path).ok();
        assert_eq!(res.unwrap().server.port, 8100);
    }

    #[tokio::test]
    async fn hello_app_needs_no_database() -> anyhow::Result<()> {
        let cfg = AppConfig {
            database: configs::DatabaseConfig { url: "postgres://unused".into(), ..Default::default() },
            ..Default::default()
        };
        build_app(App::Hello, &cfg).await?;
        Ok(())
    }
}
