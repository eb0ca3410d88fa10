use serde::Deserialize;

/// Daily horoscope payload returned by the aztro endpoint.
///
/// All eight fields are required: a payload missing any of them is
/// rejected whole rather than patched with empty strings.
#[derive(Debug, Clone, Deserialize)]
pub struct HoroscopeData {
    pub color: String,
    pub compatibility: String,
    pub current_date: String,
    pub date_range: String,
    pub description: String,
    pub lucky_number: String,
    pub lucky_time: String,
    pub mood: String,
}
