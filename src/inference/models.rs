pub mod api_response;
pub mod signature_digest;
