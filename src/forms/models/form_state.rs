use serde::Serialize;

use crate::forms::enums::mode::Mode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormState {
    pub mode: Mode,
    pub prompt: String,
    pub media: Vec<String>,
    pub temperature: f64,
    pub top_k: i64,
    pub max_steps: i64,
    pub lightning_invoice: Option<String>,
    pub free_local: bool,
    pub allow_network: bool,
    pub axiom_set: String,
    pub payment_token: Option<String>,
}
