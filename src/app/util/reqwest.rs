use reqwest::{header, StatusCode};
use serde_json::Value;

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

/// Sends `payload` as a JSON body and decodes the full response body as JSON.
/// The status code is returned as-is, non-2xx included.
pub async fn post_json(
    client: &reqwest::Client,
    url: &str,
    payload: &Value,
) -> Result<(StatusCode, Value), ApiError> {
    let body = match serde_json::to_vec(payload) {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("post_json (1): {:?}", e);
            return Err(request_failed(e.to_string()));
        }
    };

    let result = client
        .post(url)
        .header(header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
        .body(body)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();
            match res.text().await {
                Ok(text) => match serde_json::from_str::<Value>(&text) {
                    Ok(value) => Ok((status, value)),
                    Err(e) => {
                        tracing::warn!("post_json (2): {:?}", text);
                        Err(ApiError {
                            message: format!(
                                "{}: {}",
                                DefaultApiError::InvalidResponseBody.value().message,
                                e
                            ),
                            ..DefaultApiError::InvalidResponseBody.value()
                        })
                    }
                },
                Err(e) => {
                    tracing::warn!("post_json (3): {:?}", e);
                    Err(request_failed(e.to_string()))
                }
            }
        }
        Err(e) => {
            tracing::warn!("post_json (4): {:?}", e);
            Err(request_failed(e.to_string()))
        }
    }
}

fn request_failed(message: String) -> ApiError {
    if message.trim().is_empty() {
        return DefaultApiError::RequestFailed.value();
    }

    ApiError {
        code: StatusCode::INTERNAL_SERVER_ERROR,
        message,
    }
}
