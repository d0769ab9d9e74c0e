pub mod config;
pub mod dtos;
pub mod models;
pub mod service;
pub mod transport;
