pub static DEFAULT_AXIOM_SET: &str = r#"{"name":"default","version":"1","rules":[]}"#;

pub static SIGNATURE_FIELD: &str = "c0_signature";
