//! Assessment narratives attached to impact reports

pub mod llm;


pub use llm::{LlmNarrative, LlmProvider};

use crate::error::Result;
use crate::types::{EventContext, PoliticalEvent};
use async_trait::async_trait;

pub const TEMPLATE_ASSESSMENT: &str = "This event analysis combines political sentiment scoring, economic modeling, and historical pattern recognition to generate actionable trading insights with quantified confidence levels.";

/// Produces the free-text assessment for an analyzed event
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    async fn describe(&self, event: &PoliticalEvent, context: &EventContext) -> Result<String>;

    fn name(&self) -> &str;
}

/// Fixed assessment text
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateNarrative;

#[async_trait]
impl NarrativeProvider for TemplateNarrative {
    async fn describe(&self, _event: &PoliticalEvent, _context: &EventContext) -> Result<String> {
        Ok(TEMPLATE_ASSESSMENT.to_string())
    }

    fn name(&self) -> &str {
        "template"
    }
}
