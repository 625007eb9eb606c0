pub mod error;
pub mod hello;
