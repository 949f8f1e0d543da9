use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env first so RUST_LOG and CONFIG_PATH apply
    dotenv().ok();
    // an unreadable config still gets compact logs; run() reports the config error
    let format = configs::AppConfig::load_and_validate()
        .map(|cfg| cfg.logging.format)
        .unwrap_or_default();
    format.init();
    info!(service = "servicehub", event = "logger_init", ?format, "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let session_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "servicehub",
            event = "panic",
            %session_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "servicehub", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(service = "servicehub", event = "start", %session_id, pid, version, "servicehub starting");

    rt.block_on(async move {
        tokio::select! {
            res = cli::run() => match res {
                Ok(()) => {
                    info!(service = "servicehub", event = "stop", %session_id, pid, "command finished");
                    std::process::ExitCode::SUCCESS
                }
                Err(e) => {
                    error!(service = "servicehub", event = "run_failed", error = %e, "cli::run returned error");
                    std::process::ExitCode::FAILURE
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!(service = "servicehub", event = "shutdown_signal", %session_id, pid, "received Ctrl+C, exiting");
                std::process::ExitCode::from(130)
            }
        }
    })
}
