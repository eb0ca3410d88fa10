use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// The twelve zodiac signs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Canonical-name lookup table, built once on first use and never mutated
static SIGNS_BY_NAME: Lazy<HashMap<&'static str, ZodiacSign>> =
    Lazy::new(|| ZodiacSign::ALL.iter().map(|sign| (sign.name(), *sign)).collect());

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Canonical display name, also the value sent to the horoscope API
    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    /// Text-presentation symbol shown in the horoscope title line
    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈︎",
            ZodiacSign::Taurus => "♉︎",
            ZodiacSign::Gemini => "♊︎",
            ZodiacSign::Cancer => "♋︎",
            ZodiacSign::Leo => "♌︎",
            ZodiacSign::Virgo => "♍︎",
            ZodiacSign::Libra => "♎︎",
            ZodiacSign::Scorpio => "♏︎",
            ZodiacSign::Sagittarius => "♐︎",
            ZodiacSign::Capricorn => "♑︎",
            ZodiacSign::Aquarius => "♒︎",
            ZodiacSign::Pisces => "♓︎",
        }
    }

    /// Look up a sign by its canonical (title-cased) name
    pub fn from_name(name: &str) -> Option<ZodiacSign> {
        SIGNS_BY_NAME.get(name).copied()
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
