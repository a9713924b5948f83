// src/routes.rs

use std::sync::Arc;

use axum::http::{Method, header};
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{get_certificate, get_products, preflight};
use crate::state::AppState;

/// Construye el router completo de la aplicación.
///
/// Todas las respuestas llevan cabeceras CORS permisivas (origen comodín,
/// método GET, cabecera Content-Type); no se autentica ninguna petición
/// entrante.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/obtener_certificado",
            get(get_certificate).options(preflight),
        )
        .route("/obtener_productos", get(get_products))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::{DbSettings, RocketfySettings, Settings};

    /// Estado con credenciales ficticias: los casos cubiertos aquí nunca
    /// deben llegar a abrir una conexión.
    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            settings: Settings {
                db: DbSettings {
                    host: "host-inexistente.invalid".to_string(),
                    port: 5432,
                    user: "test".to_string(),
                    password: "test".to_string(),
                    dbname: "test".to_string(),
                },
                rocketfy: RocketfySettings {
                    x_secret: "secreto".to_string(),
                    x_api_key: "clave".to_string(),
                },
            },
        })
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn options_on_certificate_route_returns_200_with_empty_body() {
        let app = create_router(test_state());
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/obtener_certificado")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn missing_certificate_number_returns_400() {
        let app = create_router(test_state());

        let response = app
            .oneshot(get_request("/obtener_certificado"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Número de certificado requerido");
    }

    #[tokio::test]
    async fn empty_certificate_number_returns_400() {
        let app = create_router(test_state());

        let response = app
            .oneshot(get_request("/obtener_certificado?certificateNumber="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn other_query_parameters_do_not_replace_the_certificate_number() {
        let app = create_router(test_state());

        let response = app
            .oneshot(get_request("/obtener_certificado?otro=CERT-001"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_routes_return_404() {
        let app = create_router(test_state());

        let response = app.oneshot(get_request("/no_existe")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
