use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error al cargar la configuración: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Solicitud incorrecta: {0}")]
    BadRequest(String),

    #[error("Error al conectar a la base de datos: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Certificado no encontrado")]
    NotFound,

    #[error("Error al consultar la base de datos: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Error al hacer la solicitud: {0}")]
    UpstreamRequest(#[from] reqwest::Error),

    #[error("Error en la solicitud, código de estado: {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("Error al deserializar los datos: {0}")]
    Decode(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Config(ref e) => {
                tracing::error!("Error de configuración: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error de configuración del servidor".to_string(),
                )
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Connection(ref e) => {
                tracing::error!("Error al conectar a la base de datos: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error al conectar a la base de datos".to_string(),
                )
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "Certificado no encontrado".to_string(),
            ),
            AppError::Query(ref e) => {
                tracing::error!("Error al consultar la base de datos: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error al consultar la base de datos".to_string(),
                )
            }
            // Los fallos del catálogo externo viajan al cliente con el
            // detalle incluido (código de estado, error de red o de decodificación).
            err @ (AppError::UpstreamRequest(_)
            | AppError::UpstreamStatus(_)
            | AppError::Decode(_)) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error al obtener productos: {}", err),
                )
            }
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
