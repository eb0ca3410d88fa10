//! Reply formatter - Fixed reply templates
//!
//! Every function here is a pure template over its inputs. The horoscope
//! block's field order and the exact whitespace of each template are part
//! of the bot's contract with its users.

use crate::domain::entities::{HoroscopeData, ZodiacSign};

/// Command listing and usage notes
pub fn help(author: &str, prefix: &str) -> String {
    let title = "Looks like you need a hand. Check out my goodies below... \n \n";

    let notes = concat!(
        "- Bot will return a Horoscope based on cosmic events. \n",
        "- Commands are case-sensitive. They must be in lower-case (except the sign name, that is optional) :) \n",
        "- Dev: Narsiq#5638. DM me for requests/questions/love. \n",
    );

    let command_help = format!("❔  {prefix}help : Provides a list of my commands. \n");
    let command_horoscope = format!(
        "🦶🏽  {prefix} <Sign> : Return your Horoscope based on cosmic events. Do not include '<>' in the command. \n"
    );
    let command_invite = format!("🔗  {prefix}invite : Invite link for the Horoscope Bot. \n");
    let command_site = format!("🔗  {prefix}site : Link to the Horoscope website. \n");
    let command_support = format!("✨  {prefix}support : Link to the Horoscope Patreon. \n");
    let command_stats = format!("📊  {prefix}stats : Check out Horoscope stats. \n");
    let command_version = format!("🤖  {prefix}version : Current Horoscope version. \n");

    let commands = format!("{command_help}{command_horoscope}");
    let others =
        format!("{command_invite}{command_site}{command_support}{command_stats}{command_version}");

    format!(
        "Whats up {author}\n \n{title}NOTES: \n \n{notes}\nCOMMANDS: \n \n{commands}\nOTHER: \n \n{others}\n \nhttps://www.patreon.com/BotVoteTo"
    )
}

/// Nudge sent when the prefix shows up without a sign token
pub fn malformed_sign(author: &str, prefix: &str) -> String {
    format!(
        "Yo {author}...looks like you forgot to add a sign. (example: {prefix} Aquarius). Give it another try, you got this."
    )
}

pub fn site(author: &str) -> String {
    format!("Here ya go {author}...\nhttps://discordbots.dev/")
}

pub fn support(author: &str) -> String {
    format!("Thanks for thinking of me {author} 💖.\nhttps://www.patreon.com/BotVoteTo")
}

pub fn version() -> String {
    format!(
        "Horoscope is currently running version {}",
        env!("CARGO_PKG_VERSION")
    )
}

pub fn stats(guild_count: usize) -> String {
    format!("Horoscope is currently on {guild_count} servers. Such wow!")
}

pub fn invite(author: &str) -> String {
    format!(
        "Wow! Such nice {author}. Thanks for spreading the 💖. Here is an invite link made just for you... \n \nhttps://discord.com/api/oauth2/authorize?client_id=921254599913013320&permissions=274878036032&scope=bot"
    )
}

/// Fixed apology sent whenever the horoscope fetch pipeline fails
pub fn unknown_error() -> String {
    "Horoscope bot encountered an unknown error. Development team has been notified. Sorry we suck..."
        .to_string()
}

/// The code-block-wrapped daily horoscope.
///
/// Field order: greeting, title, current date, description, mood, color,
/// compatibility, lucky number, lucky time, date range.
pub fn horoscope(sign: ZodiacSign, data: &HoroscopeData, author: &str) -> String {
    let greeting = format!("{author}, \n \n");
    let title = format!("{} {} \n", sign.symbol(), sign.name());
    let current_date = format!("{}\n \n", data.current_date);
    let description = format!("{}\n \n", data.description);
    let mood = format!("🧠 Mood: {}\n", data.mood);
    let color = format!("🎨 Color: {}\n", data.color);
    let compatibility = format!("❤️ Compatibility: {}\n", data.compatibility);
    let lucky_number = format!("🍀 Lucky Number: {}\n", data.lucky_number);
    let lucky_time = format!("🕰️ Lucky Time: {}\n \n", data.lucky_time);
    let date_range = format!("📆 Date Range: {}", data.date_range);

    format!(
        "``` \n{greeting}{title}{current_date}{description}{mood}{color}{compatibility}{lucky_number}{lucky_time}{date_range}\n ```"
    )
}
