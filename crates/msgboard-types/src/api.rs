use serde::{Deserialize, Serialize};

/// Body text inserted by `POST /`. The request payload is never read.
pub const DEFAULT_MESSAGE: &str = "Hello World";

/// Body text of every 500 response. Error detail stays in the server log.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

// -- Messages --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub message: Option<String>,
}

/// Envelope for both endpoints. `POST /` always carries exactly one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

// -- Errors --

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn internal() -> Self {
        Self {
            error: INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_shape() {
        let body = MessagesResponse {
            messages: vec![Message {
                id: 1,
                message: Some(DEFAULT_MESSAGE.into()),
            }],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"messages":[{"id":1,"message":"Hello World"}]}"#
        );
    }

    #[test]
    fn test_null_message_serializes_as_null() {
        let msg = Message { id: 7, message: None };
        assert_eq!(serde_json::to_string(&msg).unwrap(), r#"{"id":7,"message":null}"#);
    }

    #[test]
    fn test_empty_and_error_bodies() {
        let empty = MessagesResponse { messages: vec![] };
        assert_eq!(serde_json::to_string(&empty).unwrap(), r#"{"messages":[]}"#);
        assert_eq!(
            serde_json::to_string(&ErrorResponse::internal()).unwrap(),
            r#"{"error":"Internal Server Error"}"#
        );
    }
}
