use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring::ComponentScores;

/// Opaque campaign identifier assigned by the campaign directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(pub String);

impl CampaignId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Creative content associated with a campaign; either part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeSnapshot {
    pub ad_text: Option<String>,
    pub image_url: Option<String>,
}

/// Campaign metadata supplied by the directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignContext {
    pub campaign_id: CampaignId,
    pub name: String,
    pub platform: String,
    pub country: Option<String>,
    pub product_category: Option<String>,
    pub creative: CreativeSnapshot,
}

/// Discrete trust tier shown alongside the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeLevel {
    High,
    Medium,
    Low,
    Risk,
}

impl BadgeLevel {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeLevel::High => "high",
            BadgeLevel::Medium => "medium",
            BadgeLevel::Low => "low",
            BadgeLevel::Risk => "risk",
        }
    }
}

/// Fact-check verdict for a single claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Mixed,
    Unverified,
}

/// One claim examined by the fact-check detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckFinding {
    pub claim: String,
    pub verdict: Verdict,
    pub source: String,
}

/// Persisted trust verdict; exactly one live record per campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustRecord {
    pub campaign_id: CampaignId,
    pub composite_score: f64,
    pub component_scores: ComponentScores,
    pub ai_text_probability: Option<f64>,
    pub ai_image_probability: Option<f64>,
    pub fact_check_findings: Vec<FactCheckFinding>,
    pub recommendations: Vec<String>,
    pub badge_level: BadgeLevel,
    pub computed_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
