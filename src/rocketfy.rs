// src/rocketfy.rs

use reqwest::{Client, StatusCode};
use serde_json::{Map, Value};

use crate::config::RocketfySettings;
use crate::errors::AppError;

/// Endpoint fijo del catálogo público de Rocketfy.
const PRODUCTS_URL: &str = "https://ms-public-api.rocketfy.com/rocketfy/api/v1/products";

/// Cada producto es un objeto JSON opaco: este servicio nunca inspecciona
/// sus campos, solo los retransmite.
pub type Product = Map<String, Value>;

/// Consulta el catálogo de productos y lo devuelve sin modificar.
///
/// Una sola solicitud GET autenticada con las credenciales estáticas de la
/// configuración; sin reintentos ni caché.
pub async fn fetch_products(config: &RocketfySettings) -> Result<Vec<Product>, AppError> {
    let client = Client::new();
    let response = client
        .get(PRODUCTS_URL)
        .header("accept", "application/json")
        .header("x-secret", &config.x_secret)
        .header("x-api-key", &config.x_api_key)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        tracing::error!("Rocketfy respondió con código de estado: {}", status);
        return Err(AppError::UpstreamStatus(status));
    }

    let body = response.text().await?;
    decode_products(&body)
}

fn decode_products(body: &str) -> Result<Vec<Product>, AppError> {
    let products: Vec<Product> = serde_json::from_str(body)?;
    Ok(products)
}
