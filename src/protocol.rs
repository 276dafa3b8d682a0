use serde::Serialize;

/// Body for endpoints that have nothing to return besides a human-readable
/// outcome (register, deletes).
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<S: ToString>(message: S) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_message_field() {
        let body = serde_json::to_value(MessageResponse::new("hall deleted")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hall deleted" }));
    }
}
