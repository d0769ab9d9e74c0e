use std::str::FromStr;

/// Names of the inputs a form exposes, plus the numeric defaults that go with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIds {
    pub mode_group: &'static str,
    pub prompt: &'static str,
    pub media: &'static str,
    pub temperature: &'static str,
    pub top_k: &'static str,
    pub max_steps: &'static str,
    pub lightning_invoice: &'static str,
    pub free_local: &'static str,
    pub allow_network: &'static str,
    pub axiom_set: &'static str,
    pub payment_token: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormLayout {
    #[default]
    Standard,
    Extended,
}

impl FormLayout {
    pub const DEFAULT_TEMPERATURE: f64 = 0.9;
    pub const DEFAULT_TOP_K: i64 = 64;

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Standard => "standard",
            Self::Extended => "extended",
        }
    }

    pub fn field_ids(&self) -> FieldIds {
        match *self {
            Self::Standard => FieldIds {
                mode_group: "mode",
                prompt: "prompt",
                media: "media",
                temperature: "temperature",
                top_k: "topK",
                max_steps: "maxSteps",
                lightning_invoice: "invoice",
                free_local: "freeLocal",
                allow_network: "allowNetwork",
                axiom_set: "axiomSet",
                payment_token: None,
            },
            Self::Extended => FieldIds {
                mode_group: "mode",
                prompt: "prompt",
                media: "media",
                temperature: "temperature",
                top_k: "top_k",
                max_steps: "max_steps",
                lightning_invoice: "lightning_invoice",
                free_local: "freeLocal",
                allow_network: "allowNetwork",
                axiom_set: "axioms",
                payment_token: Some("paymentToken"),
            },
        }
    }

    pub fn default_max_steps(&self) -> i64 {
        match *self {
            Self::Standard => 1024,
            Self::Extended => 2048,
        }
    }
}

impl FromStr for FormLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!("unknown form layout: {}", other)),
        }
    }
}
