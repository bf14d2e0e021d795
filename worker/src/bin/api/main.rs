use push_contact_reconciler::environment::Environment;
use push_contact_reconciler::shutdown::Shutdown;
use push_contact_reconciler_worker::infra::logging::Logging;
use push_contact_reconciler_worker::routes::Routes;
use push_contact_reconciler_worker::state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = Logging::init();

    info!("Starting...");

    let app_state = AppState::from_env()?;
    let port = Environment::u16("SERVER_PORT", 9095)?;

    let routes = Routes::routes(&app_state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "Running http server...");
    axum::serve(listener, routes).with_graceful_shutdown(Shutdown::signal("Stopping http server...")).await?;

    info!("Stopped!");

    Ok(())
}
