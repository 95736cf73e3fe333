use poem::{listener::TcpListener, Server};

use crate::api::build_app;
use crate::app_data::AppData;
use crate::config::AppSettings;

/// Connect, migrate and serve the API until Ctrl-C
pub async fn run_server(settings: AppSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Loaded settings: {:?}", settings);

    let address = settings.server_address();
    let app_data = AppData::init(settings).await?;
    let app = build_app(&app_data);

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/docs", address);

    Server::new(TcpListener::bind(address))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
                tracing::info!("Shutdown signal received");
            },
            None,
        )
        .await?;

    Ok(())
}
