// src/models.rs
use serde::Serialize;
use sqlx::FromRow;

/// Proyección plana del join
/// certificado → compra → cliente → detalle de compra → producto.
///
/// Todos los campos son texto plano: las fechas y el estado de pago se
/// transportan como cadenas opacas, nunca se interpretan.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CertificateData {
    pub nombre_cliente: String,
    pub apellido_cliente: String,
    pub email_cliente: String,
    pub nombre_producto: String,
    pub descripcion_producto: String,
    pub tipo_cabello: String,
    pub color: String,
    pub longitud: String,
    pub imagen_url: String,
    pub fecha_compra: String,
    pub fecha_emision: String,
    pub numero_certificado: String,
    pub estado_pago: String,
}
