//! Terminal rendering for reports and showcase components

use crate::showcase::{
    DemoComponent, LiveTradingSnapshot, PerformanceDashboard, DESCRIPTIVE_NOTICE, FOOTER,
    SYSTEM_HIGHLIGHTS,
};
use crate::types::ImpactReport;
use std::fmt::Write;

/// Fraction as a percentage, e.g. `0.7234` -> `72.3%`
pub fn pct(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Signed fraction as a percentage, e.g. `-0.12` -> `-12.0%`
pub fn signed_pct(value: f64, decimals: usize) -> String {
    format!("{:+.*}%", decimals, value * 100.0)
}

fn rule(out: &mut String, width: usize) {
    let _ = writeln!(out, "{}", "-".repeat(width));
}

pub fn render_report(report: &ImpactReport) -> String {
    let mut out = String::new();
    let event = &report.event;

    let _ = writeln!(out, "\n📊 Impact Analysis Results\n");
    let _ = writeln!(
        out,
        "{:<22} {:<22} {:<22} {:<22}",
        "Overall Impact", "Market Direction", "Volatility Impact", "Duration"
    );
    let _ = writeln!(
        out,
        "{:<22} {:<22} {:<22} {:<22}",
        pct(report.impact_score, 1),
        report.direction,
        format!("+{}%", report.volatility_impact),
        report.duration
    );
    let _ = writeln!(
        out,
        "{:<22} {:<22} {:<22} {:<22}",
        "+0.3%", "High Confidence", "Elevated", "Estimated"
    );

    let _ = writeln!(out, "\n🏭 Sector Impact Analysis\n");
    let _ = writeln!(
        out,
        "{:<28} {:>8} {:>10} {:>11}",
        "Sector", "Impact", "Direction", "Confidence"
    );
    rule(&mut out, 60);
    for s in &report.sector_impacts {
        let _ = writeln!(
            out,
            "{:<28} {:>8} {:>9} {:>11}",
            s.sector.label(),
            signed_pct(s.impact, 1),
            s.direction().marker(),
            pct(s.confidence, 0)
        );
    }

    let _ = writeln!(out, "\n💡 Generated Trading Signals\n");
    if report.signals.is_empty() {
        let _ = writeln!(
            out,
            "No high-confidence trading signals generated from this event."
        );
    } else {
        let _ = writeln!(
            out,
            "{:<8} {:<12} {:>11} {:>8} {:>8}",
            "Symbol", "Action", "Confidence", "Target", "Risk"
        );
        rule(&mut out, 51);
        for signal in &report.signals {
            let _ = writeln!(
                out,
                "{:<8} {:<12} {:>11} {:>8} {:>8}",
                signal.symbol,
                signal.action.to_string(),
                pct(signal.confidence, 0),
                signed_pct(signal.target, 1),
                signal.risk.to_string()
            );
        }
    }

    let ctx = &report.context;
    let _ = writeln!(out, "\n📰 Event Context & Historical Precedent\n");
    let _ = writeln!(out, "Event Analysis:");
    let _ = writeln!(out, "  - Type: {} event from {}", event.event_type, event.country);
    let _ = writeln!(
        out,
        "  - Historical Pattern: Similar events showed {}% correlation with predicted outcomes",
        ctx.historical_correlation
    );
    let _ = writeln!(
        out,
        "  - Market Precedent: Last comparable event resulted in {} market move",
        signed_pct(ctx.market_precedent, 1)
    );
    let _ = writeln!(out, "  - Risk Factors: {}", ctx.risk_factor);
    let _ = writeln!(
        out,
        "  - Political Sentiment: {} ({:+.2})",
        report.sentiment.label, report.sentiment.compound
    );
    let _ = writeln!(out, "\nSentimentEdge™ Assessment:");
    let _ = writeln!(out, "{}", report.narrative);
    let _ = writeln!(out, "\nReport ID: {}", report.id);

    out
}

/// One-line summary used by the history listing
pub fn render_history_row(report: &ImpactReport) -> String {
    let description = &report.event.description;
    let short = if description.chars().count() > 45 {
        format!("{}...", description.chars().take(42).collect::<String>())
    } else {
        description.clone()
    };

    format!(
        "{:<36} {:<16} {:<45} {:>7} {:<8} {:>3}",
        report.id,
        report.created_at.format("%Y-%m-%d %H:%M"),
        short,
        pct(report.impact_score, 1),
        report.direction,
        report.signals.len()
    )
}

pub fn render_live_trading(snapshot: &LiveTradingSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nLive Trading with Political Analysis\n");
    let _ = writeln!(out, "Real-time integration with trading platforms:");
    for item in &snapshot.integrations {
        let _ = writeln!(out, "  - {}", item);
    }

    let _ = writeln!(out, "\nCurrent Trading Performance\n");
    for metric in snapshot.metrics() {
        let _ = writeln!(
            out,
            "{:<18} {:>10}  ({})",
            metric.label, metric.value, metric.delta
        );
    }

    let _ = writeln!(out, "\nRecent Political-Driven Trades\n");
    let _ = writeln!(
        out,
        "{:<12} {:<7} {:<7} {:<24} {:>7}",
        "Date", "Symbol", "Action", "Political Trigger", "Return"
    );
    rule(&mut out, 61);
    for trade in &snapshot.recent_trades {
        let _ = writeln!(
            out,
            "{:<12} {:<7} {:<7} {:<24} {:>6}%",
            trade.date,
            trade.symbol,
            trade.action,
            trade.political_trigger,
            format!("+{}", trade.return_pct)
        );
    }

    out
}

pub fn render_performance(dashboard: &PerformanceDashboard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nSentimentEdge™ Performance Analytics\n");
    let _ = writeln!(out, "Key performance metrics:");
    for (label, value) in &dashboard.headline {
        let _ = writeln!(out, "  - {}: {}", label, value);
    }

    let _ = writeln!(out, "\nPerformance vs Benchmarks\n");
    let _ = writeln!(
        out,
        "{:<12} {:>14} {:>10} {:>16}",
        "Date", "SentimentEdge", "S&P 500", "Political Alpha"
    );
    rule(&mut out, 55);
    for p in &dashboard.curves {
        let _ = writeln!(
            out,
            "{:<12} {:>14.4} {:>10.4} {:>16.4}",
            p.date, p.sentiment_edge, p.sp500, p.political_alpha
        );
    }

    let _ = writeln!(out, "\nSimulated Curve Statistics\n");
    let _ = writeln!(
        out,
        "{:<16} {:>13} {:>13} {:>8}",
        "Series", "Total Return", "Max Drawdown", "Sharpe"
    );
    rule(&mut out, 53);
    for (name, stats) in dashboard.curve_stats() {
        let sharpe = stats
            .sharpe_ratio
            .map(|s| format!("{:.2}", s))
            .unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "{:<16} {:>13} {:>13} {:>8}",
            name,
            signed_pct(stats.total_return, 1),
            signed_pct(-stats.max_drawdown, 1),
            sharpe
        );
    }

    for (title, rows) in [
        ("Risk Metrics", &dashboard.risk_metrics),
        ("Return Metrics", &dashboard.return_metrics),
    ] {
        let _ = writeln!(out, "\n{}\n", title);
        let _ = writeln!(out, "{:<18} {:>14} {:>10}", "Metric", "SentimentEdge", "Benchmark");
        rule(&mut out, 44);
        for row in rows {
            let _ = writeln!(
                out,
                "{:<18} {:>14} {:>10}",
                row.metric, row.sentiment_edge, row.benchmark
            );
        }
    }

    out
}

pub fn render_descriptive(component: DemoComponent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}\n", component.title());
    let _ = writeln!(out, "ℹ️  {}", DESCRIPTIVE_NOTICE);
    if let Some(summary) = component.summary() {
        let _ = writeln!(out, "\n{}", summary);
    }
    out
}

pub fn render_footer() -> String {
    let mut out = String::new();
    rule(&mut out, 80);
    let _ = writeln!(out, "{}", FOOTER);
    let _ = writeln!(out, "\n🚀 System Highlights");
    for (section, items) in SYSTEM_HIGHLIGHTS {
        let _ = writeln!(out, "\n{}:", section);
        for item in *items {
            let _ = writeln!(out, "  - {}", item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ImpactAnalyzer;
    use crate::showcase::PerformanceSimulator;
    use crate::types::{
        Country, EventType, RiskLevel, SignalAction, TradingSignal, PoliticalEvent,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_report() -> ImpactReport {
        let event = PoliticalEvent::new(
            "New tariffs on steel imports",
            Country::Usa,
            EventType::TradePolicy,
        );
        ImpactAnalyzer::default().simulate(&event).unwrap()
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(pct(0.7234, 1), "72.3%");
        assert_eq!(pct(0.756, 0), "76%");
        assert_eq!(signed_pct(0.452, 1), "+45.2%");
        assert_eq!(signed_pct(-0.12, 1), "-12.0%");
    }

    #[test]
    fn test_report_sections() {
        let report = make_report();
        let text = render_report(&report);

        assert!(text.contains("Impact Analysis Results"));
        assert!(text.contains(&pct(report.impact_score, 1)));
        assert!(text.contains("Manufacturing (XLI)"));
        assert!(text.contains("Consumer Discr. (XLY)"));
        assert!(text.contains("Trade Policy event from USA"));
        assert!(text.contains(&report.context.risk_factor));
        assert!(text.contains(&report.id));
    }

    #[test]
    fn test_report_without_signals() {
        let mut report = make_report();
        report.signals.clear();
        let text = render_report(&report);
        assert!(text.contains("No high-confidence trading signals generated from this event."));
    }

    #[test]
    fn test_report_signal_rows() {
        let mut report = make_report();
        report.signals = vec![TradingSignal {
            symbol: "XLI".to_string(),
            action: SignalAction::StrongBuy,
            confidence: 0.8,
            target: 0.65,
            risk: RiskLevel::High,
        }];
        let text = render_report(&report);
        assert!(text.contains("STRONG BUY"));
        assert!(text.contains("+65.0%"));
        assert!(text.contains("80%"));
    }

    #[test]
    fn test_history_row_truncates() {
        let mut report = make_report();
        report.event.description = "x".repeat(80);
        let row = render_history_row(&report);
        assert!(row.contains(&format!("{}...", "x".repeat(42))));
        assert!(!row.contains(&"x".repeat(43)));
    }

    #[test]
    fn test_live_trading_render() {
        let text = render_live_trading(&LiveTradingSnapshot::default());
        assert!(text.contains("$99,324"));
        assert!(text.contains("Tech Regulation News"));
        assert!(text.contains("+3.2%"));
    }

    #[test]
    fn test_performance_render() {
        let dashboard = PerformanceDashboard::build(
            &PerformanceSimulator::default(),
            &mut StdRng::seed_from_u64(5),
        )
        .unwrap();
        let text = render_performance(&dashboard);
        assert!(text.contains("Political prediction accuracy: 76%"));
        assert!(text.contains("2024-01-31"));
        assert!(text.contains("Information Ratio"));
        assert!(text.contains("Simulated Curve Statistics"));
    }

    #[test]
    fn test_descriptive_and_footer() {
        let text = render_descriptive(DemoComponent::GlobalPoliticalEconomy);
        assert!(text.contains("Multi-country political risk assessment"));
        assert!(text.contains("Contact for full technical demonstration"));

        let footer = render_footer();
        assert!(footer.contains("Systematic Trading"));
        assert!(footer.contains("Alpaca + E*Trade"));
    }
}
