//! API error classification.
//!
//! Maps a raw diagnostic string (exception text, or `"<status> - <body>"`)
//! to a fixed set of user-facing categories. Rules are tested in table
//! order and the first match wins, so narrower rules must stay ahead of
//! broader ones that share a substring.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use tracing::trace;

/// Maximum number of characters of the raw message kept by [`ErrorCategory::Generic`].
pub const GENERIC_MESSAGE_LIMIT: usize = 80;

/// Marker appended to a truncated generic message.
const ELLIPSIS: &str = "...";

/// User-facing failure category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", content = "message", rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The request timed out; retrying may help.
    ConnectionRetry,
    /// Wrong username or password.
    InvalidCredentials,
    /// Registration for a username that already exists.
    DuplicateUser,
    /// The municipality failed server-side validation.
    InvalidMunicipality,
    /// The province failed server-side validation.
    InvalidProvince,
    /// The geographic lookup service did not know the municipality.
    MunicipalityNotFound,
    /// The geographic lookup service did not know the province.
    ProvinceNotFound,
    /// Any other failure from the geographic lookup service.
    GeoValidationError,
    /// The device could not reach the server at all.
    NoInternet,
    /// HTTP 500.
    ServerError,
    /// HTTP 403.
    AccessDenied,
    /// HTTP 404.
    ServiceUnavailable,
    /// Nothing more specific matched. Carries the raw message, cut to
    /// [`GENERIC_MESSAGE_LIMIT`] characters plus `"..."` when longer.
    Generic(String),
}

impl ErrorCategory {
    /// Stable snake_case code for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConnectionRetry => "connection_retry",
            Self::InvalidCredentials => "invalid_credentials",
            Self::DuplicateUser => "duplicate_user",
            Self::InvalidMunicipality => "invalid_municipality",
            Self::InvalidProvince => "invalid_province",
            Self::MunicipalityNotFound => "municipality_not_found",
            Self::ProvinceNotFound => "province_not_found",
            Self::GeoValidationError => "geo_validation_error",
            Self::NoInternet => "no_internet",
            Self::ServerError => "server_error",
            Self::AccessDenied => "access_denied",
            Self::ServiceUnavailable => "service_unavailable",
            Self::Generic(_) => "generic",
        }
    }

    /// Localized text shown to the user.
    pub fn user_message(&self) -> Cow<'static, str> {
        let text = match self {
            Self::ConnectionRetry => "Conexión fallida, inténtelo de nuevo",
            Self::InvalidCredentials => "Usuario o contraseñas incorrectos",
            Self::DuplicateUser => "Usuario ya registrado",
            Self::InvalidMunicipality => "El municipio ingresado no es válido",
            Self::InvalidProvince => "La provincia ingresada no es válida",
            Self::MunicipalityNotFound => "Municipio no encontrado",
            Self::ProvinceNotFound => "Provincia no encontrada",
            Self::GeoValidationError => "Error de validación geográfica",
            Self::NoInternet => "Error de conexión, compruebe su internet",
            Self::ServerError => "Error del servidor, inténtelo más tarde",
            Self::AccessDenied => "Acceso denegado",
            Self::ServiceUnavailable => "Servicio no disponible",
            Self::Generic(message) => return Cow::Owned(format!("Error: {message}")),
        };
        Cow::Borrowed(text)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.user_message())
    }
}

/// How a rule tests a message.
enum Matcher {
    /// At least one needle is contained, case-sensitive.
    AnyOf(&'static [&'static str]),
    /// Every needle is contained, case-sensitive.
    AllOf(&'static [&'static str]),
    /// Every needle is contained in the lowercased message. Needles are
    /// written in lowercase.
    AllOfIgnoreCase(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, message: &str, lowered: &str) -> bool {
        match self {
            Self::AnyOf(needles) => needles.iter().any(|n| message.contains(n)),
            Self::AllOf(needles) => needles.iter().all(|n| message.contains(n)),
            Self::AllOfIgnoreCase(needles) => needles.iter().all(|n| lowered.contains(n)),
        }
    }
}

struct Rule {
    matcher: Matcher,
    category: ErrorCategory,
}

/// Classification rules in precedence order.
static RULES: [Rule; 13] = [
    Rule {
        matcher: Matcher::AnyOf(&["Tiempo de espera agotado"]),
        category: ErrorCategory::ConnectionRetry,
    },
    Rule {
        matcher: Matcher::AnyOf(&["401", "Unauthorized", "Credenciales"]),
        category: ErrorCategory::InvalidCredentials,
    },
    Rule {
        matcher: Matcher::AllOf(&["400", "ya está registrado"]),
        category: ErrorCategory::DuplicateUser,
    },
    Rule {
        matcher: Matcher::AllOfIgnoreCase(&["400", "municipio", "incorrecto"]),
        category: ErrorCategory::InvalidMunicipality,
    },
    Rule {
        matcher: Matcher::AllOfIgnoreCase(&["400", "provincia", "no encontrada"]),
        category: ErrorCategory::InvalidProvince,
    },
    Rule {
        matcher: Matcher::AllOf(&["502", "municipio"]),
        category: ErrorCategory::MunicipalityNotFound,
    },
    Rule {
        matcher: Matcher::AllOf(&["502", "provincia"]),
        category: ErrorCategory::ProvinceNotFound,
    },
    Rule {
        matcher: Matcher::AnyOf(&["502"]),
        category: ErrorCategory::GeoValidationError,
    },
    Rule {
        matcher: Matcher::AnyOf(&["timeout", "timed out"]),
        category: ErrorCategory::ConnectionRetry,
    },
    Rule {
        matcher: Matcher::AnyOf(&[
            "Unable to resolve host",
            "Failed to connect",
            "No address associated",
        ]),
        category: ErrorCategory::NoInternet,
    },
    Rule {
        matcher: Matcher::AnyOf(&["500"]),
        category: ErrorCategory::ServerError,
    },
    Rule {
        matcher: Matcher::AnyOf(&["403"]),
        category: ErrorCategory::AccessDenied,
    },
    Rule {
        matcher: Matcher::AnyOf(&["404"]),
        category: ErrorCategory::ServiceUnavailable,
    },
];

/// Classify a raw error message. Always returns exactly one category.
pub fn classify(message: &str) -> ErrorCategory {
    let lowered = message.to_lowercase();

    for (index, rule) in RULES.iter().enumerate() {
        if rule.matcher.matches(message, &lowered) {
            trace!(
                rule = index + 1,
                category = rule.category.as_str(),
                "error message matched"
            );
            return rule.category.clone();
        }
    }

    trace!("no rule matched, falling back to generic");
    ErrorCategory::Generic(truncate_message(message))
}

/// Cut `message` to [`GENERIC_MESSAGE_LIMIT`] characters, marking the cut.
fn truncate_message(message: &str) -> String {
    match message.char_indices().nth(GENERIC_MESSAGE_LIMIT) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &message[..cut]),
        None => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_in_spanish_is_connection_retry() {
        assert_eq!(
            classify("Tiempo de espera agotado"),
            ErrorCategory::ConnectionRetry
        );
    }

    #[test]
    fn test_unauthorized_variants_are_invalid_credentials() {
        assert_eq!(
            classify("401 Unauthorized"),
            ErrorCategory::InvalidCredentials
        );
        assert_eq!(classify("Unauthorized"), ErrorCategory::InvalidCredentials);
        assert_eq!(
            classify("Credenciales incorrectas"),
            ErrorCategory::InvalidCredentials
        );
        assert_eq!(classify("Error: 401 - "), ErrorCategory::InvalidCredentials);
    }

    #[test]
    fn test_duplicate_user() {
        assert_eq!(
            classify("Error: 400 - El usuario ya está registrado"),
            ErrorCategory::DuplicateUser
        );
    }

    #[test]
    fn test_duplicate_user_requires_status() {
        assert!(matches!(
            classify("El usuario ya está registrado"),
            ErrorCategory::Generic(_)
        ));
    }

    #[test]
    fn test_invalid_municipality_ignores_case() {
        assert_eq!(
            classify("Error: 400 - Municipio INCORRECTO"),
            ErrorCategory::InvalidMunicipality
        );
        assert_eq!(
            classify("400 municipio incorrecto"),
            ErrorCategory::InvalidMunicipality
        );
    }

    #[test]
    fn test_invalid_province_ignores_case() {
        assert_eq!(
            classify("Error: 400 - Provincia No Encontrada"),
            ErrorCategory::InvalidProvince
        );
    }

    #[test]
    fn test_geo_service_failures() {
        assert_eq!(
            classify("502 municipio not found"),
            ErrorCategory::MunicipalityNotFound
        );
        assert_eq!(
            classify("Error: 502 - provincia desconocida"),
            ErrorCategory::ProvinceNotFound
        );
        assert_eq!(
            classify("Error: 502 - Bad Gateway"),
            ErrorCategory::GeoValidationError
        );
    }

    #[test]
    fn test_geo_service_rules_are_case_sensitive() {
        assert_eq!(classify("502 Municipio"), ErrorCategory::GeoValidationError);
    }

    #[test]
    fn test_english_timeouts_are_connection_retry() {
        assert_eq!(
            classify("java.net.SocketTimeoutException: timeout"),
            ErrorCategory::ConnectionRetry
        );
        assert_eq!(classify("read timed out"), ErrorCategory::ConnectionRetry);
    }

    #[test]
    fn test_unreachable_host_is_no_internet() {
        assert_eq!(
            classify("Unable to resolve host \"api.example.com\""),
            ErrorCategory::NoInternet
        );
        assert_eq!(
            classify("Failed to connect to /10.0.0.1:443"),
            ErrorCategory::NoInternet
        );
        assert_eq!(
            classify("No address associated with hostname"),
            ErrorCategory::NoInternet
        );
    }

    #[test]
    fn test_plain_status_codes() {
        assert_eq!(classify("Error: 500 - boom"), ErrorCategory::ServerError);
        assert_eq!(classify("Error: 403 - nope"), ErrorCategory::AccessDenied);
        assert_eq!(
            classify("Error: 404 - missing"),
            ErrorCategory::ServiceUnavailable
        );
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(classify("401 then 500"), ErrorCategory::InvalidCredentials);
        assert_eq!(
            classify("Tiempo de espera agotado 401"),
            ErrorCategory::ConnectionRetry
        );
        assert_eq!(classify("502 timeout"), ErrorCategory::GeoValidationError);
        assert_eq!(classify("timeout 500"), ErrorCategory::ConnectionRetry);
        assert_eq!(
            classify("400 municipio incorrecto ya está registrado"),
            ErrorCategory::DuplicateUser
        );
    }

    #[test]
    fn test_municipality_rules_precede_province_rules() {
        assert_eq!(
            classify("400 municipio incorrecto provincia no encontrada"),
            ErrorCategory::InvalidMunicipality
        );
        assert_eq!(
            classify("502 provincia municipio"),
            ErrorCategory::MunicipalityNotFound
        );
    }

    #[test]
    fn test_generic_keeps_short_message() {
        assert_eq!(
            classify("random upstream failure"),
            ErrorCategory::Generic("random upstream failure".to_string())
        );
    }

    #[test]
    fn test_generic_keeps_message_at_limit() {
        let message = "x".repeat(GENERIC_MESSAGE_LIMIT);
        assert_eq!(classify(&message), ErrorCategory::Generic(message));
    }

    #[test]
    fn test_generic_truncates_long_message() {
        let message = "y".repeat(GENERIC_MESSAGE_LIMIT + 1);
        let ErrorCategory::Generic(text) = classify(&message) else {
            panic!("expected generic category");
        };
        assert_eq!(text, format!("{}...", "y".repeat(GENERIC_MESSAGE_LIMIT)));
    }

    #[test]
    fn test_generic_truncation_counts_characters_not_bytes() {
        let message = "ñ".repeat(GENERIC_MESSAGE_LIMIT + 5);
        let ErrorCategory::Generic(text) = classify(&message) else {
            panic!("expected generic category");
        };
        assert_eq!(text.chars().count(), GENERIC_MESSAGE_LIMIT + 3);
        assert!(text.ends_with("..."));
    }

    #[test]
    fn test_empty_message_is_generic() {
        assert_eq!(classify(""), ErrorCategory::Generic(String::new()));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let message = "Error: 502 - provincia";
        assert_eq!(classify(message), classify(message));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ErrorCategory::InvalidCredentials.user_message(),
            "Usuario o contraseñas incorrectos"
        );
        assert_eq!(
            ErrorCategory::Generic("boom".to_string()).user_message(),
            "Error: boom"
        );
        assert_eq!(ErrorCategory::AccessDenied.to_string(), "Acceso denegado");
    }

    #[test]
    fn test_codes_are_snake_case() {
        assert_eq!(ErrorCategory::NoInternet.as_str(), "no_internet");
        assert_eq!(
            ErrorCategory::MunicipalityNotFound.as_str(),
            "municipality_not_found"
        );
        assert_eq!(ErrorCategory::Generic(String::new()).as_str(), "generic");
    }

    #[test]
    fn test_serialize_tags_category() {
        let json = serde_json::to_value(ErrorCategory::ServerError).unwrap();
        assert_eq!(json, serde_json::json!({"category": "server_error"}));

        let json = serde_json::to_value(ErrorCategory::Generic("boom".to_string())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"category": "generic", "message": "boom"})
        );
    }
}
