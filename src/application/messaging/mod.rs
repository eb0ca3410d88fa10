//! Message handling - Command classification and reply formatting

pub mod classifier;
pub mod formatter;

pub use classifier::Classifier;
