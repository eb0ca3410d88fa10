//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Horoscope: Outbound API client
//! - Adapters: Platform integrations (Discord, console)

pub mod config;
pub mod horoscope;
pub mod adapters;
