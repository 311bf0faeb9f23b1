//! SentimentEdge
//!
//! Political & economic event analysis: market impact scoring, sector
//! impacts and trading signals for a described event.

pub mod analysis;
pub mod config;
pub mod error;
pub mod narrative;
pub mod report;
pub mod sentiment;
pub mod showcase;
pub mod storage;
pub mod types;
