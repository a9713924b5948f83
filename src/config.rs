// src/config.rs

use serde::Deserialize;

use crate::errors::AppError;

/// Configuración completa del proceso, leída una sola vez al arranque.
/// Nunca se modifica después de cargarse.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db: DbSettings,
    pub rocketfy: RocketfySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
}

/// Credenciales estáticas para la API pública de Rocketfy.
#[derive(Debug, Clone, Deserialize)]
pub struct RocketfySettings {
    pub x_secret: String,
    pub x_api_key: String,
}

impl Settings {
    /// Carga la configuración desde `config.yml` (o `config.toml`, etc.)
    /// en el directorio de trabajo. Cualquier clave ausente o con tipo
    /// incorrecto hace fallar la carga completa.
    pub fn load() -> Result<Self, AppError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name("config"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    #[cfg(test)]
    fn from_yaml(contents: &str) -> Result<Self, AppError> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Yaml))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_YAML: &str = r#"
db:
  host: "localhost"
  port: 5432
  user: "postgres"
  password: "secreto"
  dbname: "certificados"

rocketfy:
  x_secret: "abc123"
  x_api_key: "def456"
"#;

    #[test]
    fn parses_a_complete_file() {
        let settings = Settings::from_yaml(VALID_YAML).expect("la configuración debería cargarse");

        assert_eq!(settings.db.host, "localhost");
        assert_eq!(settings.db.port, 5432);
        assert_eq!(settings.db.user, "postgres");
        assert_eq!(settings.db.password, "secreto");
        assert_eq!(settings.db.dbname, "certificados");
        assert_eq!(settings.rocketfy.x_secret, "abc123");
        assert_eq!(settings.rocketfy.x_api_key, "def456");
    }

    #[test]
    fn a_load_failure_is_a_config_error() {
        let result = Settings::from_yaml("db: [esto, no, es, un, bloque]");

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_a_file_without_db_block() {
        let result = Settings::from_yaml(
            r#"
rocketfy:
  x_secret: "abc123"
  x_api_key: "def456"
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_a_missing_key() {
        // Falta `password` dentro de `db`.
        let result = Settings::from_yaml(
            r#"
db:
  host: "localhost"
  port: 5432
  user: "postgres"
  dbname: "certificados"

rocketfy:
  x_secret: "abc123"
  x_api_key: "def456"
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn rejects_a_non_numeric_port() {
        let result = Settings::from_yaml(
            r#"
db:
  host: "localhost"
  port: "no-es-un-puerto"
  user: "postgres"
  password: "secreto"
  dbname: "certificados"

rocketfy:
  x_secret: "abc123"
  x_api_key: "def456"
"#,
        );

        assert!(result.is_err());
    }
}
