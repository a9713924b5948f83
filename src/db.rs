// src/db.rs

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{ConnectOptions, Connection, PgConnection};

use crate::config::DbSettings;
use crate::errors::AppError;
use crate::models::CertificateData;

/// Consulta única del certificado: certificado → compra → cliente →
/// detalle de compra → producto, filtrada por igualdad exacta del número
/// de certificado. Las fechas se convierten a texto en el propio SELECT
/// para que la fila se decodifique como cadenas.
const CERTIFICATE_QUERY: &str = r#"
    SELECT
        c.nombre AS nombre_cliente,
        c.apellido AS apellido_cliente,
        c.email AS email_cliente,
        p.nombre AS nombre_producto,
        p.descripcion AS descripcion_producto,
        p.tipo_cabello,
        p.color,
        p.longitud,
        p.imagen_url,
        com.fecha_compra::text AS fecha_compra,
        cer.fecha_emision::text AS fecha_emision,
        cer.numero_certificado,
        com.estado_pago
    FROM Certificados cer
    JOIN Compras com ON cer.certificado_id = com.certificado_id
    JOIN Clientes c ON com.cliente_id = c.cliente_id
    JOIN DetallesCompra dc ON com.compra_id = dc.compra_id
    JOIN Productos p ON dc.producto_id = p.producto_id
    WHERE cer.numero_certificado = $1
"#;

fn connect_options(db: &DbSettings) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&db.host)
        .port(db.port)
        .username(&db.user)
        .password(&db.password)
        .database(&db.dbname)
        .ssl_mode(PgSslMode::Disable)
}

/// Abre una conexión nueva y comprueba con un ping que responde antes de
/// entregarla. La conexión se libera al soltarla, en cualquier camino de
/// salida del handler.
pub async fn connect(db: &DbSettings) -> Result<PgConnection, AppError> {
    let mut conn = connect_options(db)
        .connect()
        .await
        .map_err(AppError::Connection)?;

    conn.ping().await.map_err(AppError::Connection)?;

    Ok(conn)
}

/// Ejecuta el join y lee la única fila que coincide con el número de
/// certificado. La cardinalidad la garantiza el modelo de datos; si el
/// join produjera más de una fila, solo se devuelve una arbitraria.
pub async fn fetch_certificate(
    conn: &mut PgConnection,
    certificate_number: &str,
) -> Result<CertificateData, AppError> {
    let row = sqlx::query_as::<_, CertificateData>(CERTIFICATE_QUERY)
        .bind(certificate_number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(AppError::Query)?;

    match row {
        Some(data) => Ok(data),
        None => {
            tracing::warn!(
                "No se encontró certificado con número: {}",
                certificate_number
            );
            Err(AppError::NotFound)
        }
    }
}
