use configs::AppConfig;
use dotenvy::dotenv;
use server::errors::StartupError;
use tracing::{error, info};
use uuid::Uuid;

/// Load `.env`, then configuration, then start the subscriber in the configured format.
fn init() -> Result<AppConfig, StartupError> {
    dotenv().ok();
    let cfg = AppConfig::load_and_validate();
    let format = cfg.as_ref().map(|c| c.logging.format.as_str()).unwrap_or("compact");
    common::utils::logging::init_logging(format);
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");
    cfg.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn main() -> std::process::ExitCode {
    let cfg = match init() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = %e, "cannot start");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "employees service starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
