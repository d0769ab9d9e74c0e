pub mod handle;
pub mod service;
