// src/handlers.rs
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use std::sync::Arc;

use crate::db;
use crate::errors::AppError;
use crate::models::CertificateData;
use crate::rocketfy;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CertificateParams {
    // El nombre del parámetro en la query string viene fijado por el frontend.
    #[serde(rename = "certificateNumber", default)]
    certificate_number: Option<String>,
}

/// Respuesta al preflight CORS: 200 sin cuerpo y sin tocar la base de datos.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// GET /obtener_certificado?certificateNumber=...
///
/// Abre su propia conexión, ejecuta el join y devuelve la fila como JSON.
/// Cada invocación es una transacción lineal petición → respuesta, sin
/// estado compartido entre peticiones.
pub async fn get_certificate(
    State(app_state): State<Arc<AppState>>,
    Query(params): Query<CertificateParams>,
) -> Result<Json<CertificateData>, AppError> {
    let certificate_number = params.certificate_number.unwrap_or_default();
    if certificate_number.is_empty() {
        return Err(AppError::BadRequest(
            "Número de certificado requerido".to_string(),
        ));
    }

    tracing::info!("Consultando el certificado: {}", certificate_number);

    // Una conexión por petición; se libera al salir del handler.
    let mut conn = db::connect(&app_state.settings.db).await?;
    let data = db::fetch_certificate(&mut conn, &certificate_number).await?;

    Ok(Json(data))
}

/// GET /obtener_productos
///
/// Retransmite el catálogo externo tal cual llega; cualquier fallo viaja
/// al cliente como 500 con el detalle en el cuerpo.
pub async fn get_products(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<rocketfy::Product>>, AppError> {
    let products = rocketfy::fetch_products(&app_state.settings.rocketfy).await?;

    tracing::info!("Catálogo obtenido: {} productos", products.len());

    Ok(Json(products))
}
