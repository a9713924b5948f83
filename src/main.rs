// src/main.rs

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Declaraciones de módulos
mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod rocketfy;
mod routes;
mod state;

use crate::config::Settings;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // Inicialización del sistema de logs (tracing)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "certificados_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Inicializando el servidor...");

    // --- Carga de la configuración ---
    // Sin configuración completa el proceso no arranca.
    let settings = match Settings::load() {
        Ok(settings) => {
            tracing::info!("Configuración cargada correctamente");
            settings
        }
        Err(e) => {
            tracing::error!("Error al cargar la configuración: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = Arc::new(AppState { settings });
    let app = routes::create_router(app_state);

    // Dirección y puerto fijos del servidor
    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("Servidor iniciado en http://localhost:8080");

    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("No se pudo enlazar la dirección {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        tracing::error!("Error del servidor: {}", e);
    }
}
