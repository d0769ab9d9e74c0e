use std::time::Instant;

use serde_json::Value;

use crate::{
    app::{errors::DefaultApiError, util::time},
    forms::{enums::mode::Mode, models::form_state::FormState},
};

use super::{
    config::SIGNATURE_FIELD,
    dtos::{creative_request_dto::CreativeRequestDto, verified_request_dto::VerifiedRequestDto},
    models::{api_response::ApiResponse, signature_digest::SignatureDigest},
    transport::Transport,
};

pub fn endpoint_url(base_url: &str, mode: Mode) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), mode.endpoint())
}

pub fn build_payload(form: &FormState) -> Value {
    let result = match form.mode {
        Mode::Creative => serde_json::to_value(CreativeRequestDto::from_form(form)),
        Mode::Verified => serde_json::to_value(VerifiedRequestDto::from_form(form)),
    };

    // Only plain strings, numbers and bools go in; non-finite floats are
    // already replaced during extraction.
    result.unwrap_or_else(|e| {
        tracing::error!("build_payload: {:?}", e);
        Value::Null
    })
}

/// Sends the form to the endpoint for its mode. Never fails: transport and
/// decoding problems come back as a 500 response with an `error` message.
pub async fn dispatch(transport: &dyn Transport, base_url: &str, form: &FormState) -> ApiResponse {
    let url = endpoint_url(base_url, form.mode);
    let payload = build_payload(form);
    let started = Instant::now();

    tracing::info!(mode = %form.mode, %url, "dispatching request");

    let result = match transport.post_json(&url, &payload).await {
        Ok((status, Value::Object(data))) => Ok(ApiResponse {
            status: status.as_u16(),
            data,
        }),
        Ok((status, body)) => {
            tracing::warn!(status = status.as_u16(), "dispatch: non-object body {:?}", body);
            Err(DefaultApiError::NonObjectResponseBody.value())
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(response) => {
            tracing::info!(
                status = response.status,
                elapsed_ms = time::elapsed_in_millis(started) as u64,
                "request completed"
            );
            log_signature(&response);
            response
        }
        Err(e) => {
            tracing::warn!(
                elapsed_ms = time::elapsed_in_millis(started) as u64,
                "request failed: {}",
                e
            );
            ApiResponse::from_error(&e)
        }
    }
}

fn log_signature(response: &ApiResponse) {
    let Some(value) = response.data.get(SIGNATURE_FIELD) else {
        return;
    };
    let Some(digest) = SignatureDigest::from_value(value) else {
        tracing::debug!("signature present but not in the known layout");
        return;
    };

    let seal = digest.proof_cert.as_ref().and_then(|cert| cert.seal.as_deref());
    tracing::info!(
        input_hash = digest.input_hash.as_deref().unwrap_or_default(),
        axiom_hash = digest.axiom_hash.as_deref().unwrap_or_default(),
        seal = seal.unwrap_or_default(),
        "response carries signature"
    );
}
