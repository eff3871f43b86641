//! Shared configuration for Kawase.
//!
//! This crate provides configuration loading used by the server binary.

pub mod config;

pub use config::{AppConfig, ServerConfig};
