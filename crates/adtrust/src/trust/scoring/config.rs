use serde::{Deserialize, Serialize};

/// Fixed weights for the five trust components. The defaults sum to 1.0; when
/// a component is missing the aggregator renormalizes the remainder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub authenticity: f64,
    pub factual_accuracy: f64,
    pub source_credibility: f64,
    pub transparency: f64,
    pub ethical_compliance: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            authenticity: 0.30,
            factual_accuracy: 0.25,
            source_credibility: 0.20,
            transparency: 0.15,
            ethical_compliance: 0.10,
        }
    }
}

/// Tunable fusion parameters. The discount factors and fact-check penalties
/// are product defaults carried over as-is, not derived from a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub weights: ComponentWeights,
    /// An observed AI probability above this threshold counts as adverse.
    pub ai_probability_threshold: f64,
    /// Multiplicative authenticity discount for adverse text detection.
    pub ai_text_discount: f64,
    /// Multiplicative authenticity discount for adverse image detection.
    pub ai_image_discount: f64,
    /// Factual-accuracy penalty per fraction of "false" findings.
    pub false_finding_penalty: f64,
    /// Factual-accuracy penalty per fraction of "mixed" findings.
    pub mixed_finding_penalty: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            ai_probability_threshold: 0.5,
            ai_text_discount: 0.7,
            ai_image_discount: 0.8,
            false_finding_penalty: 0.5,
            mixed_finding_penalty: 0.25,
        }
    }
}
