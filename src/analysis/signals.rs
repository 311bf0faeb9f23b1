//! Trading signal generation from sector impacts

use crate::config::AnalysisConfig;
use crate::types::{RiskLevel, SectorImpact, SignalAction, TradingSignal};
use rand::Rng;

/// Range the per-signal confidence is drawn from
pub const SIGNAL_CONFIDENCE: (f64, f64) = (0.65, 0.85);

/// Signal generator based on sector impacts
pub struct SignalGenerator {
    config: AnalysisConfig,
}

impl SignalGenerator {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Action and risk for an impact, or `None` when the impact is too small
    pub fn classify(&self, impact: f64) -> Option<(SignalAction, RiskLevel)> {
        if impact.abs() <= self.config.signal_threshold {
            return None;
        }

        let action = if impact > self.config.strong_threshold {
            SignalAction::StrongBuy
        } else if impact > self.config.signal_threshold {
            SignalAction::Buy
        } else if impact < -self.config.strong_threshold {
            SignalAction::StrongSell
        } else {
            SignalAction::Sell
        };

        let risk = if impact.abs() < self.config.high_risk_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        };

        Some((action, risk))
    }

    /// Generate signals in sector order, drawing one confidence per signal
    pub fn generate<R: Rng + ?Sized>(
        &self,
        impacts: &[SectorImpact],
        rng: &mut R,
    ) -> Vec<TradingSignal> {
        let mut signals = Vec::new();

        for impact in impacts {
            let Some((action, risk)) = self.classify(impact.impact) else {
                continue;
            };

            let confidence = rng.random_range(SIGNAL_CONFIDENCE.0..=SIGNAL_CONFIDENCE.1);

            tracing::debug!(
                symbol = %impact.sector.symbol,
                %action,
                impact = impact.impact,
                "Signal generated"
            );

            signals.push(TradingSignal {
                symbol: impact.sector.symbol.clone(),
                action,
                confidence,
                target: impact.impact,
                risk,
            });
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sector;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_impact(symbol: &str, impact: f64) -> SectorImpact {
        SectorImpact {
            sector: Sector::new("Test", symbol),
            impact,
            confidence: 0.75,
        }
    }

    #[test]
    fn test_classification_thresholds() {
        let gen = SignalGenerator::new(AnalysisConfig::default());

        assert_eq!(gen.classify(0.3), None);
        assert_eq!(gen.classify(-0.3), None);
        assert_eq!(gen.classify(0.1), None);
        assert_eq!(gen.classify(0.35), Some((SignalAction::Buy, RiskLevel::Medium)));
        assert_eq!(gen.classify(0.55), Some((SignalAction::StrongBuy, RiskLevel::Medium)));
        assert_eq!(gen.classify(0.75), Some((SignalAction::StrongBuy, RiskLevel::High)));
        assert_eq!(gen.classify(-0.45), Some((SignalAction::Sell, RiskLevel::Medium)));
        assert_eq!(gen.classify(-0.5), Some((SignalAction::Sell, RiskLevel::Medium)));
        assert_eq!(gen.classify(-0.55), Some((SignalAction::StrongSell, RiskLevel::Medium)));
        assert_eq!(gen.classify(-0.6), Some((SignalAction::StrongSell, RiskLevel::High)));
    }

    #[test]
    fn test_generate_skips_small_impacts() {
        let gen = SignalGenerator::new(AnalysisConfig::default());
        let mut rng = StdRng::seed_from_u64(7);

        let impacts = vec![
            make_impact("XLF", 0.72),
            make_impact("XLK", 0.05),
            make_impact("XLRE", -0.41),
            make_impact("XLU", -0.2),
        ];

        let signals = gen.generate(&impacts, &mut rng);
        assert_eq!(signals.len(), 2);
        assert_eq!(signals[0].symbol, "XLF");
        assert_eq!(signals[0].action, SignalAction::StrongBuy);
        assert_eq!(signals[0].risk, RiskLevel::High);
        assert_eq!(signals[0].target, 0.72);
        assert_eq!(signals[1].symbol, "XLRE");
        assert_eq!(signals[1].action, SignalAction::Sell);

        for s in &signals {
            assert!(s.confidence >= 0.65 && s.confidence <= 0.85);
        }
    }

    #[test]
    fn test_no_signals_for_quiet_event() {
        let gen = SignalGenerator::new(AnalysisConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        let impacts = vec![make_impact("XLP", 0.1), make_impact("XLE", -0.25)];
        assert!(gen.generate(&impacts, &mut rng).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let config = AnalysisConfig {
            signal_threshold: 0.1,
            ..Default::default()
        };
        let gen = SignalGenerator::new(config);
        assert_eq!(gen.classify(0.15), Some((SignalAction::Buy, RiskLevel::Medium)));
    }
}
