//! Horoscope API client - aztro daily horoscopes over RapidAPI

use reqwest::Client;

use crate::application::errors::FetchError;
use crate::domain::entities::{HoroscopeData, ZodiacSign};

/// Default RapidAPI host serving the aztro API
pub const DEFAULT_HOST: &str = "sameer-kumar-aztro-v1.p.rapidapi.com";

/// Client for the daily-horoscope endpoint
pub struct HoroscopeClient {
    client: Client,
    host: String,
    api_key: String,
}

impl HoroscopeClient {
    pub fn new(host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            host: host.into(),
            api_key: api_key.into(),
        }
    }

    fn base_url(&self) -> String {
        format!("https://{}/", self.host)
    }

    /// Fetch today's horoscope for a sign, returning the raw response body.
    ///
    /// One POST per call; no retry, and no timeout beyond the client
    /// default, so a hung endpoint stalls only the message being handled.
    pub async fn fetch_today(&self, sign: ZodiacSign) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .post(self.base_url())
            .query(&[("sign", sign.name()), ("day", "today")])
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", &self.api_key)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Api(format!("status: {}", response.status())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(body.to_vec())
    }
}

/// Decode a raw response body into horoscope data.
///
/// Malformed or incomplete payloads are rejected whole; no field is ever
/// substituted with a default.
pub fn decode(body: &[u8]) -> Result<HoroscopeData, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "current_date": "January 23, 2022",
        "compatibility": "Gemini",
        "lucky_time": "7am",
        "lucky_number": "64",
        "color": "Navy Blue",
        "date_range": "Jan 20 - Feb 18",
        "mood": "Hopeful",
        "description": "A day to keep your head in the clouds."
    }"#;

    #[test]
    fn test_decode_valid_payload() {
        let data = decode(SAMPLE.as_bytes()).unwrap();
        assert_eq!(data.current_date, "January 23, 2022");
        assert_eq!(data.mood, "Hopeful");
        assert_eq!(data.lucky_number, "64");
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        let err = decode(b"not json at all").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_incomplete_payload() {
        let err = decode(br#"{"mood": "Hopeful"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_decode_tolerates_extra_fields() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value["sun_sign"] = "Leo".into();
        let data = decode(value.to_string().as_bytes()).unwrap();
        assert_eq!(data.compatibility, "Gemini");
    }

    #[tokio::test]
    #[ignore] // needs network access and HOROSCOPE_API_KEY
    async fn test_live_fetch_today() {
        let api_key = match std::env::var("HOROSCOPE_API_KEY") {
            Ok(key) => key,
            Err(_) => {
                println!("Skipping test: HOROSCOPE_API_KEY not set");
                return;
            }
        };

        let client = HoroscopeClient::new(DEFAULT_HOST, api_key);
        let body = client.fetch_today(ZodiacSign::Leo).await.unwrap();
        let data = decode(&body).unwrap();
        assert!(!data.description.is_empty());
    }
}
