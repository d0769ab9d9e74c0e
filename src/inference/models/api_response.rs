use reqwest::StatusCode;
use serde_json::{json, Map, Value};

use crate::app::models::api_error::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub data: Map<String, Value>,
}

impl ApiResponse {
    /// Synthetic response standing in for a request that never produced one.
    /// Always a 500, whatever code the error carries.
    pub fn from_error(e: &ApiError) -> Self {
        let message = match e.message.trim().is_empty() {
            true => "request failed".to_string(),
            false => e.message.to_string(),
        };

        let mut data = Map::new();
        data.insert("error".to_string(), json!(message));

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_error_message_gets_placeholder() {
        let response = ApiResponse::from_error(&ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "".to_string(),
        });

        assert_eq!(response.status, 500);
        assert_eq!(response.data.get("error"), Some(&json!("request failed")));
    }

    #[test]
    fn error_response_is_always_500() {
        let response = ApiResponse::from_error(&ApiError {
            code: StatusCode::BAD_GATEWAY,
            message: "connection reset".to_string(),
        });

        assert_eq!(response.status, 500);
        assert_eq!(response.data.get("error"), Some(&json!("connection reset")));
        assert_eq!(response.data.len(), 1);
    }
}
