//! Rendering helpers shared by the web and terminal front-ends.

use serde_json::Value;

use crate::models::Session;

/// Formats a greeting result with two-space indentation.
#[must_use]
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// One-line summary of a signed-in user, e.g. `Ada Lovelace <ada@example.com>`.
#[must_use]
pub fn session_summary(session: &Session) -> String {
    match (session.name.is_empty(), session.email.is_empty()) {
        (false, false) => format!("{} <{}>", session.name, session.email),
        (false, true) => session.name.clone(),
        (true, false) => session.email.clone(),
        (true, true) => "unknown user".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pretty_json_indents_two_spaces() {
        assert_eq!(pretty_json(&json!({"msg": "hi"})), "{\n  \"msg\": \"hi\"\n}");
        assert_eq!(pretty_json(&json!("plain")), "\"plain\"");
    }

    #[test]
    fn summary_uses_available_fields() {
        let mut session = Session {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            picture: String::new(),
        };
        assert_eq!(session_summary(&session), "Ada <ada@example.com>");

        session.name.clear();
        assert_eq!(session_summary(&session), "ada@example.com");

        session.email.clear();
        assert_eq!(session_summary(&session), "unknown user");
    }
}
