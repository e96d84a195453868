use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ferrovias_server::config::ServerConfig;
use ferrovias_server::stations::StationDirectory;
use ferrovias_server::upstream::{FerroviasClient, MockTimetable, TimetableSource};
use ferrovias_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "ferrovias_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let directory = StationDirectory::belgrano_norte();
    info!(stations = directory.len(), "Loaded station directory");

    // Saved pages stand in for the upstream when a mock directory is set
    let served = match &config.mock_dir {
        Some(dir) => match MockTimetable::from_dir(dir) {
            Ok(mock) => {
                info!(
                    dir = %dir.display(),
                    pages = mock.available_stations().len(),
                    "Serving saved timetable pages"
                );
                serve(config.bind_addr, AppState::new(directory, mock)).await
            }
            Err(e) => {
                error!(error = %e, "Failed to load saved timetable pages");
                return ExitCode::FAILURE;
            }
        },
        None => match FerroviasClient::new(config.upstream.clone()) {
            Ok(client) => {
                info!(
                    upstream = %config.upstream.base_url,
                    timeout_secs = config.upstream.timeout_secs,
                    "Using live upstream"
                );
                serve(config.bind_addr, AppState::new(directory, client)).await
            }
            Err(e) => {
                error!(error = %e, "Failed to create upstream client");
                return ExitCode::FAILURE;
            }
        },
    };

    match served {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

/// Bind and serve until Ctrl-C.
async fn serve<S: TimetableSource + 'static>(
    addr: SocketAddr,
    state: AppState<S>,
) -> std::io::Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Ferrovias Train API listening on http://{addr}");
    info!("  GET  /                     - API info");
    info!("  GET  /stations             - List stations");
    info!("  GET  /stations/{{name}}      - Arrivals (?direction=retiro|other)");
    info!("  GET  /stations/all/status  - Arrivals for every station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
