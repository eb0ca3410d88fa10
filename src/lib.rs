//! Discord horoscope bot: classifies prefixed text commands and replies
//! with daily horoscopes fetched from the aztro API.

pub mod application;
pub mod domain;
pub mod infrastructure;
