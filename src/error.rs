//! Tipos de error compartidos por el cliente.

use thiserror::Error;

/// Errores de una llamada HTTP al servidor de tests.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("no se pudo conectar con el servidor: {0}")]
    Network(String),
    #[error("el servidor devolvió HTTP {0}")]
    Status(u16),
    #[error("el cuerpo de la respuesta no es JSON: {0}")]
    Body(String),
    #[error("respuesta JSON inesperada: {0}")]
    Decode(String),
    #[error("no se pudo serializar la petición: {0}")]
    Encode(String),
}

impl ApiError {
    /// `true` si el fallo es de transporte (red, HTTP no 2xx o cuerpo que no es JSON),
    /// `false` si llegó JSON pero no tiene la forma esperada.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::Network(_) | ApiError::Status(_) | ApiError::Body(_) | ApiError::Encode(_)
        )
    }
}

/// Errores del almacenamiento efímero de sesión.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("el almacenamiento de sesión no está disponible")]
    Unavailable,
    #[error("no se pudo escribir la clave {key}")]
    Write { key: String },
}

/// Errores al cargar la configuración embebida.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error("la configuración no define el endpoint {0}")]
    MissingEndpoint(&'static str),
}

/// Errores al arrancar una sesión de test.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no hay asignatura seleccionada")]
    MissingSubject,
}
