use serde::Serialize;

use crate::{forms::models::form_state::FormState, inference::config::DEFAULT_AXIOM_SET};

use super::creative_request_dto::CreativeRequestDto;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedRequestDto {
    #[serde(flatten)]
    pub base: CreativeRequestDto,
    pub axiom_set: String,
    pub max_steps: i64,
    pub free_local: bool,
    pub allow_network: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_token: Option<String>,
}

impl VerifiedRequestDto {
    pub fn from_form(form: &FormState) -> Self {
        let axiom_set = match form.axiom_set.is_empty() {
            true => DEFAULT_AXIOM_SET.to_string(),
            false => form.axiom_set.to_string(),
        };

        Self {
            base: CreativeRequestDto::from_form(form),
            axiom_set,
            max_steps: form.max_steps,
            free_local: form.free_local,
            allow_network: form.allow_network,
            payment_token: form.payment_token.clone(),
        }
    }
}
