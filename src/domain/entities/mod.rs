//! Domain entities - Core business objects

pub mod user;
pub mod message;
pub mod command;
pub mod sign;
pub mod horoscope;

pub use user::User;
pub use message::IncomingMessage;
pub use command::Command;
pub use sign::ZodiacSign;
pub use horoscope::HoroscopeData;
