//! Human-readable and JSON renderings of command results.

use serde_json::json;
use taskclient_core::{Claims, ErrorCategory};

/// Shown in place of an empty subject.
const NO_SUBJECT: &str = "(none)";

/// Render decoded claims.
///
/// JSON output is an object with `subject`, `role` and `routing_role`.
pub fn render_claims(claims: &Claims, as_json: bool) -> String {
    if as_json {
        let value = json!({
            "subject": claims.subject,
            "role": claims.role,
            "routing_role": claims.routing_role(),
        });
        return format!("{value:#}");
    }

    let subject = if claims.subject.is_empty() {
        NO_SUBJECT
    } else {
        claims.subject.as_str()
    };
    format!(
        "Subject:      {subject}\nRole:         {}\nRouting role: {}",
        claims.role,
        claims.routing_role()
    )
}

/// Render a classified error.
///
/// JSON output is an object with the `category` code and the user-facing
/// `message`.
pub fn render_category(category: &ErrorCategory, as_json: bool) -> String {
    let message = category.user_message();
    if as_json {
        let value = json!({
            "category": category.as_str(),
            "message": message,
        });
        return format!("{value:#}");
    }
    format!("Category: {}\nMessage:  {message}", category.as_str())
}
