//! Sector exposure catalog per event type
//!
//! Each entry is a sector and the uniform range its impact is drawn from.

use crate::types::{EventType, Sector};

/// Sector with the closed range `[low, high]` its impact is drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorExposure {
    pub name: &'static str,
    pub symbol: &'static str,
    pub low: f64,
    pub high: f64,
}

impl SectorExposure {
    const fn new(name: &'static str, symbol: &'static str, low: f64, high: f64) -> Self {
        Self {
            name,
            symbol,
            low,
            high,
        }
    }

    pub fn sector(&self) -> Sector {
        Sector::new(self.name, self.symbol)
    }

    pub fn contains(&self, impact: f64) -> bool {
        (self.low..=self.high).contains(&impact)
    }
}

const MONETARY_POLICY: [SectorExposure; 5] = [
    SectorExposure::new("Financials", "XLF", 0.6, 0.9),
    SectorExposure::new("Technology", "XLK", -0.4, 0.2),
    SectorExposure::new("Real Estate", "XLRE", -0.6, -0.2),
    SectorExposure::new("Utilities", "XLU", -0.3, 0.1),
    SectorExposure::new("Energy", "XLE", -0.2, 0.3),
];

const TRADE_POLICY: [SectorExposure; 5] = [
    SectorExposure::new("Manufacturing", "XLI", 0.4, 0.8),
    SectorExposure::new("Technology", "XLK", -0.5, 0.3),
    SectorExposure::new("Materials", "XLB", 0.2, 0.6),
    SectorExposure::new("Consumer Discr.", "XLY", -0.3, 0.2),
    SectorExposure::new("Energy", "XLE", -0.1, 0.4),
];

const GENERAL: [SectorExposure; 5] = [
    SectorExposure::new("Financials", "XLF", -0.3, 0.6),
    SectorExposure::new("Technology", "XLK", -0.4, 0.5),
    SectorExposure::new("Healthcare", "XLV", -0.2, 0.4),
    SectorExposure::new("Consumer Staples", "XLP", -0.1, 0.3),
    SectorExposure::new("Energy", "XLE", -0.4, 0.4),
];

/// Sectors affected by an event type, in display order
pub fn exposures_for(event_type: EventType) -> &'static [SectorExposure] {
    match event_type {
        EventType::MonetaryPolicy => &MONETARY_POLICY,
        EventType::TradePolicy => &TRADE_POLICY,
        _ => &GENERAL,
    }
}
