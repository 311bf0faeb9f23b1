//! Core domain types

use crate::error::{EdgeError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lower-cases and folds separators so "Monetary Policy", "monetary-policy"
/// and "monetary_policy" all compare equal.
fn normalize_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' | '/' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Primary country an event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    China,
    Germany,
    #[serde(rename = "UK")]
    Uk,
    Japan,
    France,
    Canada,
    Other,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Usa,
        Country::China,
        Country::Germany,
        Country::Uk,
        Country::Japan,
        Country::France,
        Country::Canada,
        Country::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::China => "China",
            Country::Germany => "Germany",
            Country::Uk => "UK",
            Country::Japan => "Japan",
            Country::France => "France",
            Country::Canada => "Canada",
            Country::Other => "Other",
        }
    }
}

impl Default for Country {
    fn default() -> Self {
        Country::Usa
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        let alias = match key.as_str() {
            "us" | "united-states" => Some(Country::Usa),
            "united-kingdom" | "gb" => Some(Country::Uk),
            _ => None,
        };
        alias
            .or_else(|| {
                Country::ALL
                    .into_iter()
                    .find(|c| normalize_key(c.label()) == key)
            })
            .ok_or_else(|| EdgeError::UnknownVariant {
                kind: "country",
                value: s.to_string(),
            })
    }
}

/// Category of political/economic event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "Monetary Policy")]
    MonetaryPolicy,
    #[serde(rename = "Fiscal Policy")]
    FiscalPolicy,
    #[serde(rename = "Trade Policy")]
    TradePolicy,
    Regulatory,
    Geopolitical,
    #[serde(rename = "Economic Data")]
    EconomicData,
    #[serde(rename = "Election/Politics")]
    ElectionPolitics,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::MonetaryPolicy,
        EventType::FiscalPolicy,
        EventType::TradePolicy,
        EventType::Regulatory,
        EventType::Geopolitical,
        EventType::EconomicData,
        EventType::ElectionPolitics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventType::MonetaryPolicy => "Monetary Policy",
            EventType::FiscalPolicy => "Fiscal Policy",
            EventType::TradePolicy => "Trade Policy",
            EventType::Regulatory => "Regulatory",
            EventType::Geopolitical => "Geopolitical",
            EventType::EconomicData => "Economic Data",
            EventType::ElectionPolitics => "Election/Politics",
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        EventType::MonetaryPolicy
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventType {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        EventType::ALL
            .into_iter()
            .find(|t| normalize_key(t.label()) == key)
            .ok_or_else(|| EdgeError::UnknownVariant {
                kind: "event type",
                value: s.to_string(),
            })
    }
}

/// Expected time window for the market impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImpactHorizon {
    #[serde(rename = "Immediate (1-7 days)")]
    Immediate,
    #[serde(rename = "Short-term (1-4 weeks)")]
    ShortTerm,
    #[serde(rename = "Medium-term (1-3 months)")]
    MediumTerm,
    #[serde(rename = "Long-term (3+ months)")]
    LongTerm,
}

impl ImpactHorizon {
    pub const ALL: [ImpactHorizon; 4] = [
        ImpactHorizon::Immediate,
        ImpactHorizon::ShortTerm,
        ImpactHorizon::MediumTerm,
        ImpactHorizon::LongTerm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ImpactHorizon::Immediate => "Immediate (1-7 days)",
            ImpactHorizon::ShortTerm => "Short-term (1-4 weeks)",
            ImpactHorizon::MediumTerm => "Medium-term (1-3 months)",
            ImpactHorizon::LongTerm => "Long-term (3+ months)",
        }
    }

    /// First word of the label, shown as the estimated duration
    pub fn short_label(&self) -> &'static str {
        let label = self.label();
        label.split_whitespace().next().unwrap_or(label)
    }
}

impl Default for ImpactHorizon {
    fn default() -> Self {
        ImpactHorizon::Immediate
    }
}

impl fmt::Display for ImpactHorizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ImpactHorizon {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = normalize_key(s);
        ImpactHorizon::ALL
            .into_iter()
            .find(|h| normalize_key(h.label()) == key || normalize_key(h.short_label()) == key)
            .ok_or_else(|| EdgeError::UnknownVariant {
                kind: "impact horizon",
                value: s.to_string(),
            })
    }
}

/// A political or economic event submitted for analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoliticalEvent {
    pub description: String,
    pub country: Country,
    pub event_type: EventType,
    pub date: NaiveDate,
    /// How certain the event is to happen (0.1 to 1.0)
    pub certainty: f64,
    pub horizon: ImpactHorizon,
}

impl PoliticalEvent {
    pub const MIN_CERTAINTY: f64 = 0.1;
    pub const MAX_CERTAINTY: f64 = 1.0;
    pub const DEFAULT_CERTAINTY: f64 = 0.8;

    /// New event dated today with default certainty and horizon
    pub fn new(description: impl Into<String>, country: Country, event_type: EventType) -> Self {
        Self {
            description: description.into(),
            country,
            event_type,
            date: Utc::now().date_naive(),
            certainty: Self::DEFAULT_CERTAINTY,
            horizon: ImpactHorizon::default(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_certainty(mut self, certainty: f64) -> Self {
        self.certainty = certainty;
        self
    }

    pub fn with_horizon(mut self, horizon: ImpactHorizon) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.description.trim().is_empty() {
            return Err(EdgeError::InvalidInput(
                "Please enter an event description to analyze.".into(),
            ));
        }

        if !(Self::MIN_CERTAINTY..=Self::MAX_CERTAINTY).contains(&self.certainty) {
            return Err(EdgeError::InvalidInput(format!(
                "Event certainty must be between {} and {}, got {}",
                Self::MIN_CERTAINTY,
                Self::MAX_CERTAINTY,
                self.certainty
            )));
        }

        Ok(())
    }
}

/// An equity sector, identified by its SPDR sector ETF ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub name: String,
    pub symbol: String,
}

impl Sector {
    pub fn new(name: &str, symbol: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketDirection {
    Bearish,
    Bullish,
}

impl fmt::Display for MarketDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDirection::Bearish => f.write_str("Bearish"),
            MarketDirection::Bullish => f.write_str("Bullish"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactDirection {
    Negative,
    Positive,
}

impl ImpactDirection {
    pub fn marker(&self) -> &'static str {
        match self {
            ImpactDirection::Negative => "🔴",
            ImpactDirection::Positive => "🟢",
        }
    }
}

/// Projected impact of an event on one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorImpact {
    pub sector: Sector,
    /// Signed fractional move (e.g. -0.25 = -25%)
    pub impact: f64,
    pub confidence: f64,
}

impl SectorImpact {
    pub fn direction(&self) -> ImpactDirection {
        if self.impact < 0.0 {
            ImpactDirection::Negative
        } else {
            ImpactDirection::Positive
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalAction {
    StrongBuy,
    Buy,
    Sell,
    StrongSell,
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SignalAction::StrongBuy => "STRONG BUY",
            SignalAction::Buy => "BUY",
            SignalAction::Sell => "SELL",
            SignalAction::StrongSell => "STRONG SELL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Medium => f.write_str("Medium"),
            RiskLevel::High => f.write_str("High"),
        }
    }
}

/// Trading signal derived from a sector impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub symbol: String,
    pub action: SignalAction,
    pub confidence: f64,
    /// Target move, equal to the sector impact
    pub target: f64,
    pub risk: RiskLevel,
}

/// Historical precedent for a class of event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventContext {
    /// Percent of similar events that matched the predicted outcome
    pub historical_correlation: u32,
    /// Market move after the last comparable event (fraction)
    pub market_precedent: f64,
    pub risk_factor: String,
}

/// Lexicon sentiment of the event description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub compound: f64,
    pub label: String,
}

/// Full output of one event analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub id: String,
    pub event: PoliticalEvent,
    pub seed: u64,
    pub impact_score: f64,
    pub direction: MarketDirection,
    /// Volatility increase in whole percent
    pub volatility_impact: u32,
    pub duration: String,
    pub sector_impacts: Vec<SectorImpact>,
    pub signals: Vec<TradingSignal>,
    pub context: EventContext,
    pub sentiment: SentimentSummary,
    pub narrative: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_parsing() {
        assert_eq!("usa".parse::<Country>().unwrap(), Country::Usa);
        assert_eq!("United Kingdom".parse::<Country>().unwrap(), Country::Uk);
        assert_eq!("Japan".parse::<Country>().unwrap(), Country::Japan);
        assert!("Atlantis".parse::<Country>().is_err());
    }

    #[test]
    fn test_event_type_parsing() {
        assert_eq!(
            "Monetary Policy".parse::<EventType>().unwrap(),
            EventType::MonetaryPolicy
        );
        assert_eq!(
            "trade-policy".parse::<EventType>().unwrap(),
            EventType::TradePolicy
        );
        assert_eq!(
            "election-politics".parse::<EventType>().unwrap(),
            EventType::ElectionPolitics
        );
        assert_eq!(
            "Election/Politics".parse::<EventType>().unwrap(),
            EventType::ElectionPolitics
        );
        assert!("weather".parse::<EventType>().is_err());
    }

    #[test]
    fn test_horizon_labels() {
        assert_eq!(ImpactHorizon::Immediate.short_label(), "Immediate");
        assert_eq!(ImpactHorizon::ShortTerm.short_label(), "Short-term");
        assert_eq!(ImpactHorizon::MediumTerm.short_label(), "Medium-term");
        assert_eq!(ImpactHorizon::LongTerm.short_label(), "Long-term");
        assert_eq!(
            "short-term".parse::<ImpactHorizon>().unwrap(),
            ImpactHorizon::ShortTerm
        );
        assert_eq!(
            "Long-term (3+ months)".parse::<ImpactHorizon>().unwrap(),
            ImpactHorizon::LongTerm
        );
    }

    #[test]
    fn test_event_validation() {
        let event = PoliticalEvent::new("Fed cuts rates", Country::Usa, EventType::MonetaryPolicy);
        assert!(event.validate().is_ok());
        assert_eq!(event.certainty, 0.8);

        let blank = PoliticalEvent::new("   ", Country::Usa, EventType::MonetaryPolicy);
        let err = blank.validate().unwrap_err();
        assert!(err.to_string().contains("Please enter an event description"));

        let too_certain = event.clone().with_certainty(1.2);
        assert!(too_certain.validate().is_err());

        let too_unsure = event.with_certainty(0.05);
        assert!(too_unsure.validate().is_err());
    }

    #[test]
    fn test_sector_label() {
        let sector = Sector::new("Real Estate", "XLRE");
        assert_eq!(sector.label(), "Real Estate (XLRE)");
    }

    #[test]
    fn test_impact_direction() {
        let make = |impact| SectorImpact {
            sector: Sector::new("Energy", "XLE"),
            impact,
            confidence: 0.7,
        };
        assert_eq!(make(-0.01).direction(), ImpactDirection::Negative);
        assert_eq!(make(0.0).direction(), ImpactDirection::Positive);
        assert_eq!(make(0.4).direction(), ImpactDirection::Positive);
    }

    #[test]
    fn test_signal_action_serialization() {
        let json = serde_json::to_string(&SignalAction::StrongBuy).unwrap();
        assert_eq!(json, "\"STRONG_BUY\"");
        assert_eq!(SignalAction::StrongSell.to_string(), "STRONG SELL");
    }

    #[test]
    fn test_event_type_serialization() {
        let json = serde_json::to_string(&EventType::ElectionPolitics).unwrap();
        assert_eq!(json, "\"Election/Politics\"");
        let parsed: EventType = serde_json::from_str("\"Trade Policy\"").unwrap();
        assert_eq!(parsed, EventType::TradePolicy);
    }
}
