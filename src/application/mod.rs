//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: Business logic orchestration
//! - Errors: Domain-specific errors
//! - Messaging: Command classification and reply formatting

pub mod errors;
pub mod services;
pub mod messaging;
