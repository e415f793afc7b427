use serde::{Deserialize, Serialize};
use std::fmt;

/// Body sent with `POST /api/hello`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GreetingRequest {
    pub message: String,
}

impl GreetingRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Which of the two demonstration endpoints an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GreetingKind {
    Get,
    Post,
}

impl GreetingKind {
    /// Human-readable operation label used in error messages and headings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Get => "GET /api/hello",
            Self::Post => "POST /api/hello",
        }
    }
}

impl fmt::Display for GreetingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GreetingRequest::new("hello")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hello" }));
    }

    #[test]
    fn labels_name_method_and_path() {
        assert_eq!(GreetingKind::Get.label(), "GET /api/hello");
        assert_eq!(GreetingKind::Post.to_string(), "POST /api/hello");
    }
}
