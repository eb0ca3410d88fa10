//! Console adapter for development/testing

use async_trait::async_trait;
use std::io::Write;

use crate::application::errors::BotError;
use crate::domain::traits::ChatPlatform;

/// Console platform for local development
pub struct ConsoleAdapter;

impl ConsoleAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Read one trimmed line from stdin; None when stdin is closed
    pub async fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        std::io::stdout().flush().ok()?;

        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_string()),
        }
    }
}

impl Default for ConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatPlatform for ConsoleAdapter {
    async fn send_reply(
        &self,
        _channel_id: &str,
        text: &str,
        _reply_to: Option<&str>,
    ) -> Result<String, BotError> {
        println!("[BOT] {}", text);
        Ok("console_msg".to_string())
    }

    fn guild_count(&self) -> usize {
        1
    }
}
