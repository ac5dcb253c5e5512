pub mod cli;
pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod services;
pub mod telemetry;
