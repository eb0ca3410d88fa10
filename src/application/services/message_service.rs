use crate::application::errors::FetchError;
use crate::application::messaging::formatter;
use crate::application::messaging::Classifier;
use crate::domain::entities::{Command, HoroscopeData, IncomingMessage, ZodiacSign};
use crate::domain::traits::ChatPlatform;
use crate::infrastructure::horoscope::{self, HoroscopeClient};

/// Service for answering incoming messages
pub struct MessageService {
    classifier: Classifier,
    horoscope: HoroscopeClient,
}

impl MessageService {
    pub fn new(prefix: impl Into<String>, horoscope: HoroscopeClient) -> Self {
        Self {
            classifier: Classifier::new(prefix),
            horoscope,
        }
    }

    /// Handle one incoming message end to end.
    ///
    /// Sends one reply per classified command, each referencing the
    /// triggering message. Delivery failures are logged and swallowed;
    /// there is no user-visible fallback for them.
    pub async fn handle(&self, platform: &dyn ChatPlatform, message: &IncomingMessage) {
        let commands = self.classifier.classify(&message.content);
        if commands.is_empty() {
            return;
        }

        tracing::debug!(
            "[{}] {} command(s) from {}",
            message.channel_id,
            commands.len(),
            message.author
        );

        for command in commands {
            let reply = self.render(platform, command, message).await;
            if let Err(e) = platform
                .send_reply(&message.channel_id, &reply, Some(&message.id))
                .await
            {
                tracing::error!("Failed to reply in {}: {}", message.channel_id, e);
            }
        }
    }

    /// Build the reply text for a single command
    async fn render(
        &self,
        platform: &dyn ChatPlatform,
        command: Command,
        message: &IncomingMessage,
    ) -> String {
        let author = message.author.username.as_str();
        let prefix = self.classifier.prefix();

        match command {
            Command::Help => formatter::help(author, prefix),
            Command::Site => formatter::site(author),
            Command::Support => formatter::support(author),
            Command::Version => formatter::version(),
            Command::Stats => {
                let guilds = platform.guild_count();
                tracing::debug!("Joined to {} guilds", guilds);
                formatter::stats(guilds)
            }
            Command::Invite => formatter::invite(author),
            Command::MalformedSign => formatter::malformed_sign(author, prefix),
            Command::SignLookup(sign) => match self.lookup(sign).await {
                Ok(data) => formatter::horoscope(sign, &data, author),
                Err(e) => {
                    tracing::error!("Horoscope lookup for {} failed: {}", sign, e);
                    formatter::unknown_error()
                }
            },
        }
    }

    async fn lookup(&self, sign: ZodiacSign) -> Result<HoroscopeData, FetchError> {
        let body = self.horoscope.fetch_today(sign).await?;
        horoscope::decode(&body)
    }
}
