//! Political Sentiment Analyzer
//!
//! Lexicon-based scoring tuned for central bank, fiscal and geopolitical
//! headlines. Boosters scale a term, negations within three words flip and
//! dampen it, and the summed score is squashed into [-1, 1].

use crate::types::SentimentSummary;
use std::collections::HashMap;

/// Result of sentiment analysis
#[derive(Debug, Clone)]
pub struct SentimentResult {
    /// Positive sentiment (0.0 to 1.0)
    pub positive: f64,
    /// Negative sentiment (0.0 to 1.0)
    pub negative: f64,
    /// Neutral sentiment (0.0 to 1.0)
    pub neutral: f64,
    /// Compound score (-1.0 to 1.0)
    pub compound: f64,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.compound >= 0.05
    }

    pub fn is_negative(&self) -> bool {
        self.compound <= -0.05
    }

    pub fn is_neutral(&self) -> bool {
        self.compound > -0.05 && self.compound < 0.05
    }

    pub fn label(&self) -> &'static str {
        if self.compound >= 0.5 {
            "very positive"
        } else if self.compound >= 0.05 {
            "positive"
        } else if self.compound <= -0.5 {
            "very negative"
        } else if self.compound <= -0.05 {
            "negative"
        } else {
            "neutral"
        }
    }

    pub fn summary(&self) -> SentimentSummary {
        SentimentSummary {
            compound: self.compound,
            label: self.label().to_string(),
        }
    }
}

/// Sentiment analyzer for political and economic text
pub struct PoliticalSentimentAnalyzer {
    /// General market vocabulary
    lexicon: HashMap<&'static str, f64>,
    /// Policy vocabulary, checked before the general lexicon
    policy_lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
}

const MARKET_TERMS: &[(&str, f64)] = &[
    ("good", 0.5),
    ("strong", 0.5),
    ("stronger", 0.5),
    ("growth", 0.6),
    ("grow", 0.5),
    ("gain", 0.5),
    ("gains", 0.5),
    ("rise", 0.4),
    ("rising", 0.4),
    ("rally", 0.6),
    ("record", 0.4),
    ("beat", 0.5),
    ("beats", 0.5),
    ("surge", 0.6),
    ("boost", 0.5),
    ("boosts", 0.5),
    ("improve", 0.5),
    ("improves", 0.5),
    ("optimism", 0.6),
    ("confidence", 0.4),
    ("recovery", 0.6),
    ("expansion", 0.5),
    ("bad", -0.5),
    ("weak", -0.5),
    ("weaker", -0.5),
    ("loss", -0.6),
    ("losses", -0.6),
    ("fall", -0.4),
    ("falls", -0.4),
    ("drop", -0.4),
    ("drops", -0.4),
    ("decline", -0.5),
    ("slump", -0.6),
    ("crash", -0.7),
    ("miss", -0.5),
    ("misses", -0.5),
    ("fear", -0.5),
    ("fears", -0.5),
    ("concern", -0.4),
    ("concerns", -0.4),
    ("uncertainty", -0.5),
    ("risk", -0.3),
    ("risks", -0.3),
    ("volatility", -0.3),
    ("panic", -0.6),
    ("crisis", -0.7),
];

const POLICY_TERMS: &[(&str, f64)] = &[
    // Accommodative / supportive
    ("cut", 0.4),
    ("cuts", 0.4),
    ("easing", 0.5),
    ("dovish", 0.6),
    ("stimulus", 0.6),
    ("relief", 0.5),
    ("subsidy", 0.3),
    ("subsidies", 0.3),
    ("deal", 0.5),
    ("agreement", 0.5),
    ("ceasefire", 0.6),
    ("truce", 0.5),
    ("deregulation", 0.4),
    ("approval", 0.4),
    ("approves", 0.4),
    ("peace", 0.6),
    ("stability", 0.5),
    ("reform", 0.3),
    // Restrictive / adverse
    ("hike", -0.4),
    ("hikes", -0.4),
    ("tightening", -0.5),
    ("hawkish", -0.6),
    ("inflation", -0.4),
    ("recession", -0.8),
    ("default", -0.8),
    ("shutdown", -0.6),
    ("tariff", -0.5),
    ("tariffs", -0.5),
    ("sanction", -0.6),
    ("sanctions", -0.6),
    ("embargo", -0.7),
    ("ban", -0.5),
    ("bans", -0.5),
    ("war", -0.8),
    ("conflict", -0.6),
    ("invasion", -0.9),
    ("coup", -0.8),
    ("protest", -0.4),
    ("protests", -0.4),
    ("unrest", -0.6),
    ("scandal", -0.6),
    ("impeachment", -0.5),
    ("investigation", -0.4),
    ("antitrust", -0.4),
    ("crackdown", -0.6),
    ("downgrade", -0.6),
    ("layoffs", -0.5),
    ("unemployment", -0.4),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("sharply", 1.4),
    ("significantly", 1.3),
    ("severe", 1.5),
    ("sweeping", 1.4),
    ("massive", 1.5),
    ("major", 1.3),
    ("unexpected", 1.3),
    ("surprise", 1.3),
    ("emergency", 1.5),
    ("aggressive", 1.4),
    ("historic", 1.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "without", "isn't", "aren't", "wasn't", "weren't", "won't",
    "doesn't", "don't", "didn't", "cannot", "can't", "fails", "rejects", "avoids",
];

impl PoliticalSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: MARKET_TERMS.iter().copied().collect(),
            policy_lexicon: POLICY_TERMS.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            negations: NEGATIONS.to_vec(),
        }
    }

    /// Analyze sentiment of text
    pub fn analyze(&self, text: &str) -> SentimentResult {
        let words: Vec<String> = text
            .split_whitespace()
            .map(|w| self.clean_word(w))
            .filter(|w| !w.is_empty())
            .collect();

        let mut scores: Vec<f64> = Vec::new();

        for (i, word) in words.iter().enumerate() {
            let base = self
                .policy_lexicon
                .get(word.as_str())
                .or_else(|| self.lexicon.get(word.as_str()));

            if let Some(&score) = base {
                scores.push(self.apply_modifiers(&words, i, score));
            }
        }

        if scores.is_empty() {
            return SentimentResult::neutral();
        }

        let positive_sum: f64 = scores.iter().filter(|&&s| s > 0.0).sum();
        let negative_sum: f64 = scores.iter().filter(|&&s| s < 0.0).map(|s| s.abs()).sum();
        let total = positive_sum + negative_sum;

        let (positive, negative) = if total > 0.0 {
            (positive_sum / total, negative_sum / total)
        } else {
            (0.0, 0.0)
        };

        let sum: f64 = scores.iter().sum();

        SentimentResult {
            positive,
            negative,
            neutral: (1.0 - positive - negative).max(0.0),
            compound: Self::normalize(sum),
        }
    }

    /// Strip punctuation, keeping apostrophes and hyphens
    fn clean_word(&self, word: &str) -> String {
        word.chars()
            .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
            .collect::<String>()
            .to_lowercase()
    }

    fn apply_modifiers(&self, words: &[String], index: usize, mut score: f64) -> f64 {
        let start = index.saturating_sub(3);

        for prev in &words[start..index] {
            if let Some(&factor) = self.boosters.get(prev.as_str()) {
                score *= factor;
            }
            if self.negations.contains(&prev.as_str()) {
                score *= -0.5;
            }
        }

        score.clamp(-1.0, 1.0)
    }

    fn normalize(score: f64) -> f64 {
        let alpha = 15.0;
        (score / (score * score + alpha).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Default for PoliticalSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
