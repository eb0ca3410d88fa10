use super::ZodiacSign;

/// A classified command carried by one incoming message.
///
/// Classification is non-exclusive: a single message can match several
/// commands, and the bot answers each one in match order. A message that
/// matches nothing is simply not addressed to the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Command listing and usage notes
    Help,
    /// Link to the bot website
    Site,
    /// Link to the bot Patreon
    Support,
    /// Running bot version
    Version,
    /// Number of servers the bot is joined to
    Stats,
    /// Invite link for adding the bot to a server
    Invite,
    /// Daily horoscope for a recognized zodiac sign
    SignLookup(ZodiacSign),
    /// Prefix present but no sign token followed it
    MalformedSign,
}
