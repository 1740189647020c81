use serde::Serialize;

/// Uniform response wrapper shared by every item endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl Envelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Health probe body; deliberately not an [`Envelope`].
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_omits_message() {
        let value = serde_json::to_value(Envelope::ok(7)).unwrap();
        assert_eq!(value, json!({ "success": true, "data": 7 }));
    }

    #[test]
    fn failure_omits_data() {
        let value = serde_json::to_value(Envelope::failure("nope")).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "nope" }));
    }

    #[test]
    fn message_kept_alongside_data() {
        let value = serde_json::to_value(Envelope::ok("x").with_message("done")).unwrap();
        assert_eq!(value, json!({ "success": true, "data": "x", "message": "done" }));
    }
}
