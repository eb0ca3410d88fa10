use clap::{Parser, Subcommand};

use horoscope_bot::application::services::MessageService;
use horoscope_bot::domain::entities::{IncomingMessage, User};
use horoscope_bot::infrastructure::adapters::{ConsoleAdapter, DiscordAdapter};
use horoscope_bot::infrastructure::config::Config;
use horoscope_bot::infrastructure::horoscope::HoroscopeClient;

#[derive(Parser)]
#[command(name = "horoscope-bot")]
#[command(about = "A Discord bot that replies with daily horoscopes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config)
    #[arg(short, long)]
    token: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the bot
    Run,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run => {
            run_bot(cli.config, cli.token);
        }
        Commands::Version => {
            println!("horoscope-bot v{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::InitConfig => {
            init_config();
        }
    }
}

fn run_bot(config_path: String, token_override: Option<String>) {
    // Load config
    let config = if std::path::Path::new(&config_path).exists() {
        Config::load(&config_path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        })
    } else {
        Config::load_env()
    };

    tracing::info!("Starting {}", config.bot.name);

    let api_key = match config.horoscope_api_key() {
        Ok(key) => key,
        Err(e) => {
            tracing::error!("{}. Set HOROSCOPE_API_KEY or horoscope.api-key.", e);
            return;
        }
    };

    let horoscope = HoroscopeClient::new(&config.horoscope.host, api_key);
    let service = MessageService::new(&config.bot.prefix, horoscope);

    // Select adapter
    let rt = tokio::runtime::Runtime::new().unwrap();

    if let Some(token) = token_override.or_else(|| config.discord_token()) {
        rt.block_on(async {
            let bot = DiscordAdapter::new(token, service);
            if let Err(e) = bot.run().await {
                tracing::error!("Discord session failed: {}", e);
            }
        });
    } else {
        // Run console bot (dev mode)
        rt.block_on(run_console_bot(service));
    }
}

async fn run_console_bot(service: MessageService) {
    let console = ConsoleAdapter::new();
    tracing::info!("No Discord token configured, running in console mode");

    loop {
        let Some(input) = console.read_line("> ").await else {
            break;
        };
        if input.is_empty() {
            continue;
        }

        let author = User::new("console", "console");
        let message =
            IncomingMessage::new(uuid::Uuid::new_v4().to_string(), "console", author, input);
        service.handle(&console, &message).await;
    }
}

fn init_config() {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
}
