//! Unit tests for the impact analyzer

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::EdgeError;
    use crate::narrative::MockNarrativeProvider;
    use crate::types::{Country, EventType, ImpactHorizon, SignalAction};

    const FED_CUT: &str = "Fed announces 0.5% interest rate cut due to inflation concerns";

    fn make_event(description: &str, event_type: EventType) -> PoliticalEvent {
        PoliticalEvent::new(description, Country::Usa, event_type)
    }

    #[test]
    fn test_seed_is_stable_and_bounded() {
        assert_eq!(event_seed(FED_CUT), event_seed(FED_CUT));
        assert!(event_seed(FED_CUT) < SEED_SPACE);
        assert!(event_seed("") < SEED_SPACE);
    }

    #[test]
    fn test_seed_known_value() {
        // FNV-1a 64 of "a" is 0xaf63dc4c8601ec8c
        assert_eq!(event_seed("a"), 0xaf63_dc4c_8601_ec8c % SEED_SPACE);
    }

    #[test]
    fn test_same_description_same_numbers() {
        let analyzer = ImpactAnalyzer::default();
        let a = analyzer
            .simulate(&make_event(FED_CUT, EventType::MonetaryPolicy))
            .unwrap();
        let b = analyzer
            .simulate(
                &make_event(FED_CUT, EventType::MonetaryPolicy)
                    .with_certainty(0.3)
                    .with_horizon(ImpactHorizon::LongTerm),
            )
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.impact_score, b.impact_score);
        assert_eq!(a.volatility_impact, b.volatility_impact);
        assert_eq!(a.sector_impacts, b.sector_impacts);
        assert_eq!(a.signals, b.signals);
        assert_eq!(a.context, b.context);
        assert_eq!(b.duration, "Long-term");
    }

    #[test]
    fn test_country_does_not_change_numbers() {
        let analyzer = ImpactAnalyzer::default();
        let usa = analyzer
            .simulate(&make_event(FED_CUT, EventType::Regulatory))
            .unwrap();
        let mut event = make_event(FED_CUT, EventType::Regulatory);
        event.country = Country::Japan;
        let japan = analyzer.simulate(&event).unwrap();
        assert_eq!(usa.impact_score, japan.impact_score);
        assert_eq!(usa.sector_impacts, japan.sector_impacts);
    }

    #[test]
    fn test_values_within_ranges() {
        let analyzer = ImpactAnalyzer::default();

        for (i, event_type) in EventType::ALL.into_iter().enumerate() {
            for j in 0..20 {
                let description = format!("Event {} variant {}", i, j);
                let report = analyzer
                    .simulate(&make_event(&description, event_type))
                    .unwrap();

                assert!(report.impact_score >= 0.4 && report.impact_score <= 0.9);
                assert!(report.volatility_impact >= 15 && report.volatility_impact <= 45);
                assert_eq!(report.sector_impacts.len(), 5);

                for (impact, exposure) in report
                    .sector_impacts
                    .iter()
                    .zip(exposures_for(event_type))
                {
                    assert_eq!(impact.sector.symbol, exposure.symbol);
                    assert!(exposure.contains(impact.impact));
                    assert!(impact.confidence >= 0.6 && impact.confidence <= 0.9);
                }

                for signal in &report.signals {
                    assert!(signal.target.abs() > 0.3);
                    assert!(signal.confidence >= 0.65 && signal.confidence <= 0.85);
                }

                let ctx = &report.context;
                assert!(ctx.historical_correlation >= 60 && ctx.historical_correlation <= 85);
                assert!(ctx.market_precedent >= -0.08 && ctx.market_precedent <= 0.12);
                assert!(RISK_FACTORS.contains(&ctx.risk_factor.as_str()));
            }
        }
    }

    #[test]
    fn test_direction_follows_impact_score() {
        let analyzer = ImpactAnalyzer::default();
        for j in 0..30 {
            let report = analyzer
                .simulate(&make_event(&format!("headline {}", j), EventType::Geopolitical))
                .unwrap();
            let expected = if report.impact_score > 0.6 {
                MarketDirection::Bearish
            } else {
                MarketDirection::Bullish
            };
            assert_eq!(report.direction, expected);
        }
    }

    #[test]
    fn test_monetary_policy_always_signals_financials() {
        // XLF is drawn from [0.6, 0.9] for monetary events, always a strong buy
        let analyzer = ImpactAnalyzer::default();
        for j in 0..10 {
            let report = analyzer
                .simulate(&make_event(&format!("rate decision {}", j), EventType::MonetaryPolicy))
                .unwrap();
            let xlf = report.signals.iter().find(|s| s.symbol == "XLF").unwrap();
            assert_eq!(xlf.action, SignalAction::StrongBuy);
        }
    }

    #[test]
    fn test_signals_match_sector_order() {
        let analyzer = ImpactAnalyzer::default();
        let report = analyzer
            .simulate(&make_event("Sweeping tariffs on imports", EventType::TradePolicy))
            .unwrap();

        let expected: Vec<_> = report
            .sector_impacts
            .iter()
            .filter(|s| s.impact.abs() > 0.3)
            .map(|s| s.sector.symbol.clone())
            .collect();
        let actual: Vec<_> = report.signals.iter().map(|s| s.symbol.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_blank_description_rejected() {
        let analyzer = ImpactAnalyzer::default();
        let result = analyzer.simulate(&make_event("  ", EventType::MonetaryPolicy));
        assert!(matches!(result, Err(EdgeError::InvalidInput(_))));
    }

    #[test]
    fn test_sentiment_attached() {
        let analyzer = ImpactAnalyzer::default();
        let report = analyzer
            .simulate(&make_event(
                "Sanctions and embargo announced after invasion",
                EventType::Geopolitical,
            ))
            .unwrap();
        assert!(report.sentiment.compound < 0.0);
        assert_eq!(report.narrative, TEMPLATE_ASSESSMENT);
    }

    #[tokio::test]
    async fn test_analyze_uses_narrator() {
        let mut mock = MockNarrativeProvider::new();
        mock.expect_describe()
            .times(1)
            .returning(|_, ctx| Ok(format!("Watch {}", ctx.risk_factor)));

        let analyzer = ImpactAnalyzer::default().with_narrator(Box::new(mock));
        let report = analyzer
            .analyze(&make_event(FED_CUT, EventType::MonetaryPolicy))
            .await
            .unwrap();

        assert_eq!(report.narrative, format!("Watch {}", report.context.risk_factor));
    }

    #[tokio::test]
    async fn test_analyze_falls_back_on_narrator_error() {
        let mut mock = MockNarrativeProvider::new();
        mock.expect_describe()
            .returning(|_, _| Err(EdgeError::Api("timeout".into())));
        mock.expect_name().return_const("mock".to_string());

        let analyzer = ImpactAnalyzer::default().with_narrator(Box::new(mock));
        let report = analyzer
            .analyze(&make_event(FED_CUT, EventType::MonetaryPolicy))
            .await
            .unwrap();

        assert_eq!(report.narrative, TEMPLATE_ASSESSMENT);
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_without_calling_narrator() {
        let mut mock = MockNarrativeProvider::new();
        mock.expect_describe().times(0);

        let analyzer = ImpactAnalyzer::default().with_narrator(Box::new(mock));
        let result = analyzer.analyze(&make_event("", EventType::Regulatory)).await;
        assert!(result.is_err());
    }
}
