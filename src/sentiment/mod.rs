//! Political sentiment scoring for event descriptions

pub mod analyzer;

pub use analyzer::{PoliticalSentimentAnalyzer, SentimentResult};
