use super::User;
use chrono::{DateTime, Utc};

/// One inbound message event from the chat platform.
///
/// The message id doubles as the reply reference: every reply the bot
/// sends points back at the message that triggered it.
#[derive(Debug, Clone)]
pub struct IncomingMessage {
    pub id: String,
    pub channel_id: String,
    pub author: User,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl IncomingMessage {
    pub fn new(
        id: impl Into<String>,
        channel_id: impl Into<String>,
        author: User,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            author,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}
