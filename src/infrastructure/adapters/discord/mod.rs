//! Discord adapter - Gateway session and reply delivery

use std::sync::Arc;

use serenity::async_trait;
use serenity::builder::CreateMessage;
use serenity::cache::Cache;
use serenity::client::{Client, Context, EventHandler};
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id::{ChannelId, MessageId};

use crate::application::errors::BotError;
use crate::application::services::MessageService;
use crate::domain::entities::{IncomingMessage, User};
use crate::domain::traits::ChatPlatform;

/// Gateway-facing view of Discord handed to the message service
pub struct DiscordPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn send_reply(
        &self,
        channel_id: &str,
        text: &str,
        reply_to: Option<&str>,
    ) -> Result<String, BotError> {
        let channel = channel_id
            .parse::<u64>()
            .map(ChannelId::new)
            .map_err(|e| BotError::ReplyDeliver(format!("bad channel id {}: {}", channel_id, e)))?;

        let mut builder = CreateMessage::new().content(text);
        if let Some(reply_to) = reply_to {
            let message = reply_to
                .parse::<u64>()
                .map(MessageId::new)
                .map_err(|e| BotError::ReplyDeliver(format!("bad message id {}: {}", reply_to, e)))?;
            builder = builder.reference_message((channel, message));
        }

        let sent = channel
            .send_message(&*self.http, builder)
            .await
            .map_err(|e| BotError::ReplyDeliver(e.to_string()))?;

        Ok(sent.id.to_string())
    }

    fn guild_count(&self) -> usize {
        self.cache.guild_count()
    }
}

/// Forwards gateway message events into the message service
struct Handler {
    service: MessageService,
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        // Ignore the bot's own messages
        if msg.author.id == ctx.cache.current_user().id {
            return;
        }

        let author = User::new(msg.author.id.to_string(), msg.author.name.clone())
            .with_bot(msg.author.bot);
        let incoming = IncomingMessage::new(
            msg.id.to_string(),
            msg.channel_id.to_string(),
            author,
            msg.content.clone(),
        );

        let platform = DiscordPlatform::new(ctx.http.clone(), ctx.cache.clone());
        self.service.handle(&platform, &incoming).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!("Connected to Discord as {}", ready.user.name);
    }
}

/// Discord bot adapter
pub struct DiscordAdapter {
    token: String,
    service: MessageService,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>, service: MessageService) -> Self {
        Self {
            token: token.into(),
            service,
        }
    }

    /// Open the gateway session and block until it shuts down
    pub async fn run(self) -> Result<(), BotError> {
        let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

        let mut client = Client::builder(&self.token, intents)
            .event_handler(Handler {
                service: self.service,
            })
            .await
            .map_err(|e| BotError::Session(e.to_string()))?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutting down Discord session");
                shard_manager.shutdown_all().await;
            }
        });

        tracing::info!("Bot is now running. Press CTRL-C to exit.");
        client
            .start()
            .await
            .map_err(|e| BotError::Session(e.to_string()))
    }
}
