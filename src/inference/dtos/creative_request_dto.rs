use serde::Serialize;

use crate::forms::models::form_state::FormState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreativeRequestDto {
    pub prompt: String,
    pub media: Vec<String>,
    pub temperature: f64,
    pub top_k: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lightning_invoice: Option<String>,
}

impl CreativeRequestDto {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            prompt: form.prompt.to_string(),
            media: form.media.clone(),
            temperature: form.temperature,
            top_k: form.top_k,
            lightning_invoice: form.lightning_invoice.clone(),
        }
    }
}
