//! Composition of classifier input at network failure sites.
//!
//! Every failed call in the client turns into one line of text before it
//! is classified. HTTP failures become `"Error: <status> - <body>"`,
//! transport failures become `"Error: <exception text>"`. The login flow
//! pre-translates a few statuses and exceptions into Spanish phrases that
//! the classifier recognizes.

use std::fmt;

use super::classifier::{ErrorCategory, classify};

const UNKNOWN_BODY: &str = "Error desconocido";
const CONNECTION_ERROR: &str = "Error de conexión";
const AUTHENTICATION_ERROR: &str = "Error de autenticación";
const EMPTY_LOGIN_RESPONSE: &str = "Respuesta vacía del servidor";

/// A raw diagnostic string ready for classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorSignal(String);

impl ErrorSignal {
    /// A non-2xx response from any endpoint.
    pub fn http(status: u16, body: Option<&str>) -> Self {
        let body = body.unwrap_or(UNKNOWN_BODY);
        Self(format!("Error: {status} - {body}"))
    }

    /// A request that failed before a response arrived.
    pub fn transport(message: Option<&str>) -> Self {
        let message = message.unwrap_or(CONNECTION_ERROR);
        Self(format!("Error: {message}"))
    }

    /// A non-2xx response from the login endpoint.
    pub fn login_http(status: u16, body: Option<&str>) -> Self {
        let text = match status {
            401 => "Credenciales incorrectas",
            404 => "Usuario no encontrado",
            500 => "Error del servidor",
            _ => body.unwrap_or(AUTHENTICATION_ERROR),
        };
        Self(text.to_string())
    }

    /// A login request that failed before a response arrived.
    pub fn login_transport(message: Option<&str>) -> Self {
        let text = match message {
            Some(m) if m.contains("timeout") => "Tiempo de espera agotado",
            Some(m) if m.contains("Unable to resolve host") => "Sin conexión a internet",
            Some(m) => m,
            None => CONNECTION_ERROR,
        };
        Self(text.to_string())
    }

    /// A successful login response that carried no token.
    pub fn login_empty_body() -> Self {
        Self(EMPTY_LOGIN_RESPONSE.to_string())
    }

    /// The diagnostic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the signal, returning the diagnostic text.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Classify this signal.
    pub fn classify(&self) -> ErrorCategory {
        classify(&self.0)
    }
}

impl From<String> for ErrorSignal {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for ErrorSignal {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl fmt::Display for ErrorSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
