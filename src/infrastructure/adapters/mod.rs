//! Platform adapters - Discord for production, console for development

pub mod console;
pub mod discord;

pub use console::ConsoleAdapter;
pub use discord::DiscordAdapter;
