//! Command classifier - Maps raw message text to bot commands

use crate::domain::entities::{Command, ZodiacSign};

/// Keyword suffixes checked against the message, in reply order
const KEYWORDS: [(&str, Command); 6] = [
    ("help", Command::Help),
    ("site", Command::Site),
    ("support", Command::Support),
    ("version", Command::Version),
    ("stats", Command::Stats),
    ("invite", Command::Invite),
];

/// Classifies incoming message text into the commands it triggers
pub struct Classifier {
    command_prefix: String,
    keyword_patterns: Vec<(String, Command)>,
}

impl Classifier {
    pub fn new(prefix: impl Into<String>) -> Self {
        let command_prefix = prefix.into();
        let keyword_patterns = KEYWORDS
            .iter()
            .map(|(keyword, command)| (format!("{}{}", command_prefix, keyword), *command))
            .collect();
        Self {
            command_prefix,
            keyword_patterns,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.command_prefix
    }

    /// Classify a message into the commands it triggers, in check order.
    ///
    /// Checks are independent: a message can match several keywords and
    /// collects one command per match. Keyword matching is case-sensitive
    /// and fires anywhere in the message; sign lookups only fire when the
    /// message starts with the prefix. An empty result means the message
    /// is not addressed to the bot.
    pub fn classify(&self, content: &str) -> Vec<Command> {
        let mut commands = Vec::new();

        let token = title_case(
            content
                .strip_prefix(&self.command_prefix)
                .unwrap_or(content)
                .trim(),
        );

        if content.contains(&self.command_prefix) && token.is_empty() {
            commands.push(Command::MalformedSign);
        }

        for (pattern, command) in &self.keyword_patterns {
            if content.contains(pattern.as_str()) {
                commands.push(*command);
            }
        }

        if content.starts_with(&self.command_prefix) && !token.is_empty() {
            if let Some(sign) = ZodiacSign::from_name(&token) {
                commands.push(Command::SignLookup(sign));
            }
        }

        commands
    }
}

/// Uppercase the first letter of every word, leaving all other characters
/// unchanged. A word starts at any letter not preceded by another letter.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for ch in s.chars() {
        if ch.is_alphabetic() && !prev_is_letter {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_letter = ch.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new("!hs")
    }

    #[test]
    fn test_classifies_all_twelve_signs() {
        let classifier = classifier();
        for sign in ZodiacSign::ALL {
            let message = format!("!hs {}", sign.name().to_lowercase());
            assert_eq!(
                classifier.classify(&message),
                vec![Command::SignLookup(sign)],
                "sign {} did not classify",
                sign
            );
        }
    }

    #[test]
    fn test_sign_token_casing_and_spacing_variants() {
        let classifier = classifier();
        let expected = vec![Command::SignLookup(ZodiacSign::Aries)];
        assert_eq!(classifier.classify("!hs aries"), expected);
        assert_eq!(classifier.classify("!hs Aries"), expected);
        assert_eq!(classifier.classify("!hsAries"), expected);
        assert_eq!(classifier.classify("!hs   aries   "), expected);
    }

    #[test]
    fn test_fully_upper_cased_sign_is_silent() {
        assert_eq!(classifier().classify("!hs ARIES"), vec![]);
        assert_eq!(classifier().classify("!hs aRIES"), vec![]);
    }

    #[test]
    fn test_prefix_alone_is_a_malformed_sign() {
        assert_eq!(classifier().classify("!hs"), vec![Command::MalformedSign]);
        assert_eq!(classifier().classify("!hs   "), vec![Command::MalformedSign]);
    }

    #[test]
    fn test_unknown_sign_token_is_silent() {
        assert_eq!(classifier().classify("!hs Banana"), vec![]);
        assert_eq!(classifier().classify("!hs lucky aries"), vec![]);
    }

    #[test]
    fn test_unprefixed_messages_are_silent() {
        assert_eq!(classifier().classify(""), vec![]);
        assert_eq!(classifier().classify("aries"), vec![]);
        assert_eq!(classifier().classify("hello there"), vec![]);
    }

    #[test]
    fn test_keyword_commands() {
        let classifier = classifier();
        assert_eq!(classifier.classify("!hshelp"), vec![Command::Help]);
        assert_eq!(classifier.classify("!hssite"), vec![Command::Site]);
        assert_eq!(classifier.classify("!hssupport"), vec![Command::Support]);
        assert_eq!(classifier.classify("!hsversion"), vec![Command::Version]);
        assert_eq!(classifier.classify("!hsstats"), vec![Command::Stats]);
        assert_eq!(classifier.classify("!hsinvite"), vec![Command::Invite]);
    }

    #[test]
    fn test_keywords_match_anywhere_in_the_message() {
        assert_eq!(
            classifier().classify("check out !hssite when you can"),
            vec![Command::Site]
        );
    }

    #[test]
    fn test_keyword_matching_is_case_sensitive() {
        assert_eq!(classifier().classify("!hsHelp"), vec![]);
        assert_eq!(classifier().classify("!HShelp"), vec![]);
    }

    #[test]
    fn test_spaced_keyword_gets_no_reply() {
        // "!hs help" title-cases to "Help", which is neither a keyword
        // match nor a sign name
        assert_eq!(classifier().classify("!hs help"), vec![]);
    }

    #[test]
    fn test_one_message_can_match_several_commands() {
        assert_eq!(
            classifier().classify("!hssite and !hssupport"),
            vec![Command::Site, Command::Support]
        );
    }

    #[test]
    fn test_custom_prefix() {
        let classifier = Classifier::new("~zo");
        assert_eq!(
            classifier.classify("~zo leo"),
            vec![Command::SignLookup(ZodiacSign::Leo)]
        );
        assert_eq!(classifier.classify("~zohelp"), vec![Command::Help]);
        assert_eq!(classifier.classify("!hs leo"), vec![]);
    }

    #[test]
    fn test_concurrent_classification_is_independent() {
        let classifier = std::sync::Arc::new(Classifier::new("!hs"));
        let handles: Vec<_> = ZodiacSign::ALL
            .iter()
            .map(|&sign| {
                let classifier = classifier.clone();
                std::thread::spawn(move || classifier.classify(&format!("!hs {}", sign.name())))
            })
            .collect();
        for (handle, sign) in handles.into_iter().zip(ZodiacSign::ALL) {
            assert_eq!(handle.join().unwrap(), vec![Command::SignLookup(sign)]);
        }
    }

    #[test]
    fn test_title_case_word_boundaries() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("aries"), "Aries");
        assert_eq!(title_case("aRies"), "ARies");
        assert_eq!(title_case("ARIES"), "ARIES");
        assert_eq!(title_case("lucky aries"), "Lucky Aries");
        assert_eq!(title_case("!hs"), "!Hs");
    }
}
