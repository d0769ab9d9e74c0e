pub mod rendered_response;
