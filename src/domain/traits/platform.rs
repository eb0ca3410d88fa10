use async_trait::async_trait;
use crate::application::errors::BotError;

/// ChatPlatform trait - abstraction for the hosting chat service
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Send a reply to a channel, optionally referencing the message that
    /// triggered it. Returns the platform id of the sent message.
    async fn send_reply(
        &self,
        channel_id: &str,
        text: &str,
        reply_to: Option<&str>,
    ) -> Result<String, BotError>;

    /// Number of servers the bot is currently joined to
    fn guild_count(&self) -> usize;
}
