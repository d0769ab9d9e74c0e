use serde::Deserialize;

pub static DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub api_base_url: Option<String>,
    pub form_layout: Option<String>,
}

impl Envy {
    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
