#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResponse {
    pub response_text: String,
    pub signature_text: String,
}
