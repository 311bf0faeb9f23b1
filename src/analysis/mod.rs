//! Event impact analysis
//!
//! Every number in a report is drawn from a pseudo-random stream seeded by
//! the event description, so the same description always yields the same
//! report. Draw order is part of the contract:
//!
//! 1. overall impact score
//! 2. volatility impact
//! 3. one impact per sector
//! 4. one confidence per sector
//! 5. one confidence per generated signal
//! 6. historical correlation, market precedent, risk factor

pub mod sectors;
pub mod signals;

#[cfg(test)]
mod tests;

pub use sectors::{exposures_for, SectorExposure};
pub use signals::SignalGenerator;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::narrative::{NarrativeProvider, TemplateNarrative, TEMPLATE_ASSESSMENT};
use crate::sentiment::PoliticalSentimentAnalyzer;
use crate::types::{EventContext, ImpactReport, MarketDirection, PoliticalEvent, SectorImpact};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

pub const IMPACT_SCORE_RANGE: (f64, f64) = (0.4, 0.9);
pub const VOLATILITY_RANGE: (u32, u32) = (15, 45);
pub const SECTOR_CONFIDENCE_RANGE: (f64, f64) = (0.6, 0.9);
pub const CORRELATION_RANGE: (u32, u32) = (60, 85);
pub const PRECEDENT_RANGE: (f64, f64) = (-0.08, 0.12);
/// Number of distinct seeds; descriptions hash into this many buckets
pub const SEED_SPACE: u64 = 1000;

pub const RISK_FACTORS: [&str; 4] = [
    "Geopolitical uncertainty",
    "Economic data dependency",
    "Policy implementation timeline",
    "Market sentiment shifts",
];

/// Stable seed for an event description (FNV-1a, bucketed into `SEED_SPACE`)
pub fn event_seed(description: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let hash = description
        .bytes()
        .fold(OFFSET, |acc, b| (acc ^ u64::from(b)).wrapping_mul(PRIME));
    hash % SEED_SPACE
}

/// Turns political events into market impact reports
pub struct ImpactAnalyzer {
    config: AnalysisConfig,
    signals: SignalGenerator,
    sentiment: PoliticalSentimentAnalyzer,
    narrator: Box<dyn NarrativeProvider>,
}

impl ImpactAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            signals: SignalGenerator::new(config.clone()),
            config,
            sentiment: PoliticalSentimentAnalyzer::new(),
            narrator: Box::new(TemplateNarrative),
        }
    }

    /// Replace the assessment narrator
    pub fn with_narrator(mut self, narrator: Box<dyn NarrativeProvider>) -> Self {
        self.narrator = narrator;
        self
    }

    pub fn narrator_name(&self) -> &str {
        self.narrator.name()
    }

    /// Compute the report synchronously with the template assessment
    pub fn simulate(&self, event: &PoliticalEvent) -> Result<ImpactReport> {
        event.validate()?;

        let seed = event_seed(&event.description);
        let mut rng = StdRng::seed_from_u64(seed);

        let impact_score = rng.random_range(IMPACT_SCORE_RANGE.0..=IMPACT_SCORE_RANGE.1);
        let volatility_impact = rng.random_range(VOLATILITY_RANGE.0..=VOLATILITY_RANGE.1);

        let exposures = exposures_for(event.event_type);
        let impacts: Vec<f64> = exposures
            .iter()
            .map(|e| rng.random_range(e.low..=e.high))
            .collect();

        let sector_impacts: Vec<SectorImpact> = exposures
            .iter()
            .zip(impacts)
            .map(|(exposure, impact)| SectorImpact {
                sector: exposure.sector(),
                impact,
                confidence: rng
                    .random_range(SECTOR_CONFIDENCE_RANGE.0..=SECTOR_CONFIDENCE_RANGE.1),
            })
            .collect();

        let signals = self.signals.generate(&sector_impacts, &mut rng);
        let context = Self::draw_context(&mut rng);

        let direction = if impact_score > self.config.bearish_cutoff {
            MarketDirection::Bearish
        } else {
            MarketDirection::Bullish
        };

        let sentiment = self.sentiment.analyze(&event.description).summary();

        tracing::info!(
            seed,
            event_type = %event.event_type,
            country = %event.country,
            impact_score,
            %direction,
            signals = signals.len(),
            "Event analyzed"
        );

        Ok(ImpactReport {
            id: Uuid::new_v4().to_string(),
            event: event.clone(),
            seed,
            impact_score,
            direction,
            volatility_impact,
            duration: event.horizon.short_label().to_string(),
            sector_impacts,
            signals,
            context,
            sentiment,
            narrative: TEMPLATE_ASSESSMENT.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Compute the report and ask the narrator for the assessment
    ///
    /// A narrator failure is logged and the template assessment is kept.
    pub async fn analyze(&self, event: &PoliticalEvent) -> Result<ImpactReport> {
        let mut report = self.simulate(event)?;

        match self.narrator.describe(&report.event, &report.context).await {
            Ok(text) => report.narrative = text,
            Err(e) => {
                tracing::warn!(
                    narrator = self.narrator.name(),
                    "Narrative generation failed, using template: {}",
                    e
                );
            }
        }

        Ok(report)
    }

    fn draw_context<R: Rng + ?Sized>(rng: &mut R) -> EventContext {
        let historical_correlation = rng.random_range(CORRELATION_RANGE.0..=CORRELATION_RANGE.1);
        let market_precedent = rng.random_range(PRECEDENT_RANGE.0..=PRECEDENT_RANGE.1);
        let risk_factor = RISK_FACTORS[rng.random_range(0..RISK_FACTORS.len())].to_string();

        EventContext {
            historical_correlation,
            market_precedent,
            risk_factor,
        }
    }
}

impl Default for ImpactAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
