pub mod config;
pub mod logging;

pub mod error;
pub mod fetch;
pub mod manifest;
pub mod processor;
pub mod resolver;
