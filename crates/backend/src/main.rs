pub mod domain;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;
pub mod usecases;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::domain::a001_operation_log::{OperationLogStore, SeaOrmOperationLogStore};
use crate::handlers::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    // Без БД сервис продолжает считать, журнал просто недоступен
    let store: Arc<dyn OperationLogStore> =
        match shared::data::db::initialize_database(&config.database.url).await {
            Ok(conn) => Arc::new(SeaOrmOperationLogStore::new(conn)),
            Err(e) => {
                tracing::error!("Database connection error: {}", e);
                Arc::new(SeaOrmOperationLogStore::disconnected())
            }
        };

    let app = routes::configure_routes(AppState::new(store));

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    tracing::info!("Calculator microservice running on port {}", addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
