//! Domain layer - Core business objects and abstractions
//!
//! This layer contains:
//! - Entities: Core business objects (User, IncomingMessage, Command, ZodiacSign)
//! - Traits: Abstractions for infrastructure (ChatPlatform)

pub mod entities;
pub mod traits;
