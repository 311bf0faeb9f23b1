//! Demo components shown alongside the interactive analysis
//!
//! Live trading and performance analytics carry their own data; the
//! remaining components are descriptive panels.

pub mod performance;
pub mod trading;


pub use performance::{CurveStats, PerformanceDashboard, PerformancePoint, PerformanceSimulator};
pub use trading::{LiveTradingSnapshot, Metric, RecentTrade};

use crate::error::{EdgeError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoComponent {
    InteractiveEventAnalysis,
    GlobalPoliticalEconomy,
    PoliticalImpactMapping,
    HistoricalBacktesting,
    LiveTradingIntegration,
    PerformanceAnalytics,
}

impl DemoComponent {
    pub const ALL: [DemoComponent; 6] = [
        DemoComponent::InteractiveEventAnalysis,
        DemoComponent::GlobalPoliticalEconomy,
        DemoComponent::PoliticalImpactMapping,
        DemoComponent::HistoricalBacktesting,
        DemoComponent::LiveTradingIntegration,
        DemoComponent::PerformanceAnalytics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            DemoComponent::InteractiveEventAnalysis => "🎯 Interactive Event Analysis",
            DemoComponent::GlobalPoliticalEconomy => "🌍 Global Political Economy Analysis",
            DemoComponent::PoliticalImpactMapping => "🏛️ Political Impact Mapping",
            DemoComponent::HistoricalBacktesting => "📈 Historical Event Backtesting",
            DemoComponent::LiveTradingIntegration => "💼 Live Trading Integration",
            DemoComponent::PerformanceAnalytics => "📊 Performance Analytics",
        }
    }

    /// Short name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            DemoComponent::InteractiveEventAnalysis => "interactive",
            DemoComponent::GlobalPoliticalEconomy => "global",
            DemoComponent::PoliticalImpactMapping => "impact-mapping",
            DemoComponent::HistoricalBacktesting => "backtesting",
            DemoComponent::LiveTradingIntegration => "live-trading",
            DemoComponent::PerformanceAnalytics => "performance",
        }
    }

    /// One-line description for the descriptive panels
    pub fn summary(&self) -> Option<&'static str> {
        match self {
            DemoComponent::GlobalPoliticalEconomy => {
                Some("Multi-country political risk assessment and cross-border impact analysis")
            }
            DemoComponent::PoliticalImpactMapping => {
                Some("Policy-to-industry impact mapping with quantified predictions")
            }
            DemoComponent::HistoricalBacktesting => Some(
                "Historical validation: 76% prediction accuracy across 200+ political events",
            ),
            _ => None,
        }
    }

    pub fn is_descriptive(&self) -> bool {
        self.summary().is_some()
    }
}

impl fmt::Display for DemoComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for DemoComponent {
    type Err = EdgeError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase().replace([' ', '_'], "-");
        DemoComponent::ALL
            .into_iter()
            .find(|c| c.slug() == key)
            .ok_or_else(|| EdgeError::UnknownVariant {
                kind: "demo component",
                value: s.to_string(),
            })
    }
}

pub const DESCRIPTIVE_NOTICE: &str = "This demo component shows SentimentEdge's comprehensive political and economic analysis capabilities. Contact for full technical demonstration.";

pub const FOOTER: &str =
    "SentimentEdge™ - AI-Powered Political & Economic Analysis for Systematic Trading";

pub const SYSTEM_HIGHLIGHTS: &[(&str, &[&str])] = &[
    (
        "Technical Excellence",
        &[
            "7-component analysis engine (technical, fundamental, sentiment, political, economic, insider, regulatory)",
            "Real-time political event processing with market impact quantification",
            "Dual-platform trading architecture (Alpaca + E*Trade)",
            "Professional risk management with platform-specific controls",
        ],
    ),
    (
        "Business Impact",
        &[
            "$500K+ simulated performance tracking",
            "76% political prediction accuracy",
            "4.8% outperformance vs benchmarks",
            "Enterprise-ready scalable architecture",
        ],
    ),
    (
        "AI Integration",
        &[
            "Continuous enhancement and optimization",
            "Real-time problem solving and feature addition",
            "Strategic business consultation capabilities",
        ],
    ),
];
