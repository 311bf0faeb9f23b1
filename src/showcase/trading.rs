//! Live trading integration snapshot

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Headline metric with its change indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

impl Metric {
    pub fn new(label: &str, value: impl Into<String>, delta: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            delta: delta.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentTrade {
    pub date: NaiveDate,
    pub symbol: String,
    pub action: String,
    pub political_trigger: String,
    /// Realized return in percent
    pub return_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveTradingSnapshot {
    pub integrations: Vec<String>,
    pub portfolio_value: Decimal,
    pub portfolio_change_pct: Decimal,
    pub political_alpha_pct: Decimal,
    pub political_alpha_change_pct: Decimal,
    pub active_positions: u32,
    pub active_positions_change: i32,
    pub risk_score: String,
    pub recent_trades: Vec<RecentTrade>,
}

impl LiveTradingSnapshot {
    pub fn metrics(&self) -> Vec<Metric> {
        vec![
            Metric::new(
                "Portfolio Value",
                format!("${}", format_thousands(self.portfolio_value.round())),
                &format!("{}%", signed(self.portfolio_change_pct)),
            ),
            Metric::new(
                "Political Alpha",
                format!("{}%", self.political_alpha_pct),
                &format!("{}%", signed(self.political_alpha_change_pct)),
            ),
            Metric::new(
                "Active Positions",
                self.active_positions.to_string(),
                &signed(Decimal::from(self.active_positions_change)),
            ),
            Metric::new("Risk Score", self.risk_score.clone(), "↓"),
        ]
    }

    /// Mean return of the recent trades, in percent
    pub fn average_trade_return(&self) -> Decimal {
        if self.recent_trades.is_empty() {
            return Decimal::ZERO;
        }
        let total: Decimal = self.recent_trades.iter().map(|t| t.return_pct).sum();
        total / Decimal::from(self.recent_trades.len())
    }
}

impl Default for LiveTradingSnapshot {
    fn default() -> Self {
        let trade = |date: (i32, u32, u32), symbol: &str, action: &str, trigger: &str, ret| {
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).map(|date| RecentTrade {
                date,
                symbol: symbol.to_string(),
                action: action.to_string(),
                political_trigger: trigger.to_string(),
                return_pct: ret,
            })
        };

        let recent_trades = [
            trade((2024, 1, 20), "XLF", "BUY", "Fed Policy Shift", dec!(3.2)),
            trade((2024, 1, 18), "XLK", "SELL", "Tech Regulation News", dec!(1.8)),
            trade((2024, 1, 15), "SPY", "BUY", "Economic Data", dec!(2.1)),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            integrations: vec![
                "Alpaca paper trading (active)".to_string(),
                "E*Trade integration (development complete)".to_string(),
                "Automated political event response".to_string(),
                "Risk management with political factors".to_string(),
            ],
            portfolio_value: dec!(99324),
            portfolio_change_pct: dec!(1.2),
            political_alpha_pct: dec!(4.8),
            political_alpha_change_pct: dec!(0.8),
            active_positions: 12,
            active_positions_change: 2,
            risk_score: "Low".to_string(),
            recent_trades,
        }
    }
}

fn signed(value: Decimal) -> String {
    if value.is_sign_negative() {
        value.to_string()
    } else {
        format!("+{}", value)
    }
}

/// Format the integer part of a decimal with thousands separators
pub fn format_thousands(value: Decimal) -> String {
    let raw = value.trunc().abs().to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value.is_sign_negative() && !value.trunc().is_zero() {
        out.insert(0, '-');
    }
    out
}
