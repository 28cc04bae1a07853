//! Process entry shared by the service binaries: logging, panic hook,
//! runtime sizing and exit codes.

use std::process::ExitCode;

use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use crate::startup::{self, App};

pub fn launch(app: App) -> ExitCode {
    let service = app.name();
    // .env first so RUST_LOG and friends apply
    dotenv().ok();

    let cfg = startup::load_config(app);
    let log_format = cfg.as_ref().map(|c| c.server.log_format).unwrap_or_default();
    common::utils::logging::init_logging(log_format);
    info!(service, event = "logger_init", "tracing subscriber initialized");

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service, event = "config_invalid", error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    // Ctrl+C is handled inside `run` via graceful shutdown.
    match rt.block_on(startup::run(app, cfg)) {
        Ok(()) => {
            info!(service, event = "stop", %service_id, pid, "service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", error = %e, "service exited with error");
            ExitCode::FAILURE
        }
    }
}
