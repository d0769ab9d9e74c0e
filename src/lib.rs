#[macro_use]
extern crate lazy_static;

pub mod app;
pub mod console;
pub mod forms;
pub mod inference;
pub mod render;
