use reqwest::StatusCode;

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    RequestFailed,
    InvalidResponseBody,
    NonObjectResponseBody,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::RequestFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "request failed".to_string(),
            },
            Self::InvalidResponseBody => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "response body is not valid JSON".to_string(),
            },
            Self::NonObjectResponseBody => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "response body is not a JSON object".to_string(),
            },
        }
    }
}
