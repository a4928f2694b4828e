mod config;

pub use config::{ComponentWeights, ScoringPolicy};

use serde::{Deserialize, Serialize};

use super::domain::Verdict;
use super::signals::{FactCheckReport, SignalSet};

/// The five named component scores, each in [0, 1]. `None` marks a component
/// that could not be computed at all (no input available), as opposed to a
/// component with no adverse finding, which scores 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub authenticity: Option<f64>,
    pub factual_accuracy: Option<f64>,
    pub source_credibility: Option<f64>,
    pub transparency: Option<f64>,
    pub ethical_compliance: Option<f64>,
}

/// Fuses available signals into component scores and one composite score.
#[derive(Debug, Clone, Default)]
pub struct ScoreAggregator {
    policy: ScoringPolicy,
}

impl ScoreAggregator {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Derive component scores from whatever signals were observed.
    ///
    /// Authenticity starts at full trust and is multiplicatively discounted
    /// by each adverse observed signal so multiple adverse signals compound;
    /// an unavailable or skipped signal contributes no discount. A component
    /// with no observed input at all becomes `None` and is later excluded
    /// from the weighted sum.
    pub fn component_scores(&self, signals: &SignalSet) -> ComponentScores {
        let authenticity = if signals.text.is_observed() || signals.image.is_observed() {
            let mut score = 1.0;
            if let Some(text) = signals.text.observed() {
                if text.ai_probability > self.policy.ai_probability_threshold {
                    score *= self.policy.ai_text_discount;
                }
            }
            if let Some(image) = signals.image.observed() {
                if image.ai_probability > self.policy.ai_probability_threshold {
                    score *= self.policy.ai_image_discount;
                }
            }
            Some(clamp_unit(score))
        } else {
            None
        };

        let factual_accuracy = signals
            .fact_check
            .observed()
            .map(|report| clamp_unit(self.factual_accuracy(report)));

        ComponentScores {
            authenticity,
            factual_accuracy,
            source_credibility: Some(1.0),
            transparency: Some(1.0),
            ethical_compliance: Some(1.0),
        }
    }

    fn factual_accuracy(&self, report: &FactCheckReport) -> f64 {
        if report.findings.is_empty() {
            return 1.0;
        }

        let total = report.findings.len() as f64;
        let false_fraction = fraction_with(report, Verdict::False, total);
        let mixed_fraction = fraction_with(report, Verdict::Mixed, total);

        (1.0 - self.policy.false_finding_penalty * false_fraction
            - self.policy.mixed_finding_penalty * mixed_fraction)
            .max(0.0)
    }

    /// Weighted sum over available components, renormalized so the weights of
    /// the components actually present sum to 1.0, scaled to [0, 100] and
    /// rounded to two decimals.
    pub fn composite(&self, components: &ComponentScores) -> f64 {
        let weights = &self.policy.weights;
        let pairs = [
            (weights.authenticity, components.authenticity),
            (weights.factual_accuracy, components.factual_accuracy),
            (weights.source_credibility, components.source_credibility),
            (weights.transparency, components.transparency),
            (weights.ethical_compliance, components.ethical_compliance),
        ];

        let mut weight_total = 0.0;
        let mut weighted_sum = 0.0;
        for (weight, score) in pairs {
            if let Some(score) = score {
                weight_total += weight;
                weighted_sum += weight * score;
            }
        }

        if weight_total <= 0.0 {
            return 0.0;
        }

        round_two((weighted_sum / weight_total * 100.0).clamp(0.0, 100.0))
    }

    pub fn aggregate(&self, signals: &SignalSet) -> (ComponentScores, f64) {
        let components = self.component_scores(signals);
        let composite = self.composite(&components);
        (components, composite)
    }
}

fn fraction_with(report: &FactCheckReport, verdict: Verdict, total: f64) -> f64 {
    report
        .findings
        .iter()
        .filter(|finding| finding.verdict == verdict)
        .count() as f64
        / total
}

fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trust::domain::FactCheckFinding;
    use crate::trust::signals::{ImageDetection, SignalState, TextDetection};

    fn text_signal(ai_probability: f64) -> SignalState<TextDetection> {
        SignalState::Observed(TextDetection {
            ai_probability,
            confidence: 0.75,
            model_version: "roberta-v1".to_string(),
        })
    }

    fn image_signal(ai_probability: f64) -> SignalState<ImageDetection> {
        SignalState::Observed(ImageDetection {
            ai_probability,
            confidence: 0.8,
            model_version: "vit-v1".to_string(),
        })
    }

    fn finding(verdict: Verdict) -> FactCheckFinding {
        FactCheckFinding {
            claim: "claim".to_string(),
            verdict,
            source: "source".to_string(),
        }
    }

    fn report(verdicts: &[Verdict]) -> SignalState<FactCheckReport> {
        SignalState::Observed(FactCheckReport {
            findings: verdicts.iter().copied().map(finding).collect(),
        })
    }

    #[test]
    fn benign_signals_score_full_trust() {
        let aggregator = ScoreAggregator::default();
        let signals = SignalSet {
            text: text_signal(0.1),
            image: SignalState::Skipped,
            fact_check: report(&[]),
        };

        let (components, composite) = aggregator.aggregate(&signals);

        assert_eq!(components.authenticity, Some(1.0));
        assert_eq!(components.factual_accuracy, Some(1.0));
        assert_eq!(composite, 100.00);
    }

    #[test]
    fn adverse_signals_compound_multiplicatively() {
        let aggregator = ScoreAggregator::default();
        let signals = SignalSet {
            text: text_signal(0.9),
            image: image_signal(0.8),
            fact_check: SignalState::Skipped,
        };

        let components = aggregator.component_scores(&signals);

        let authenticity = components.authenticity.expect("authenticity computed");
        assert!((authenticity - 0.7 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn unavailable_text_signal_contributes_no_discount() {
        let aggregator = ScoreAggregator::default();
        let signals = SignalSet {
            text: SignalState::Unavailable,
            image: image_signal(0.8),
            fact_check: report(&[Verdict::False, Verdict::True]),
        };

        let components = aggregator.component_scores(&signals);

        assert_eq!(components.authenticity, Some(0.8));
        let factual = components.factual_accuracy.expect("factual computed");
        assert!((factual - 0.75).abs() < 1e-9);
    }

    #[test]
    fn factual_accuracy_discounts_false_and_mixed_fractions() {
        let aggregator = ScoreAggregator::default();
        let signals = SignalSet {
            text: SignalState::Skipped,
            image: SignalState::Skipped,
            fact_check: report(&[Verdict::False, Verdict::Mixed, Verdict::True, Verdict::True]),
        };

        let components = aggregator.component_scores(&signals);

        // 1 - 0.5 * 0.25 - 0.25 * 0.25 = 0.8125
        let factual = components.factual_accuracy.expect("factual computed");
        assert!((factual - 0.8125).abs() < 1e-9);
    }

    #[test]
    fn factual_accuracy_floors_at_zero() {
        let aggregator = ScoreAggregator::new(ScoringPolicy {
            false_finding_penalty: 2.0,
            ..ScoringPolicy::default()
        });
        let signals = SignalSet {
            text: SignalState::Skipped,
            image: SignalState::Skipped,
            fact_check: report(&[Verdict::False]),
        };

        let components = aggregator.component_scores(&signals);

        assert_eq!(components.factual_accuracy, Some(0.0));
    }

    #[test]
    fn composite_is_weighted_sum_when_all_components_available() {
        let aggregator = ScoreAggregator::default();
        let components = ComponentScores {
            authenticity: Some(0.8),
            factual_accuracy: Some(0.75),
            source_credibility: Some(1.0),
            transparency: Some(1.0),
            ethical_compliance: Some(1.0),
        };

        let composite = aggregator.composite(&components);

        // 100 * (0.30*0.8 + 0.25*0.75 + 0.20 + 0.15 + 0.10) = 87.75
        assert_eq!(composite, 87.75);
    }

    #[test]
    fn missing_component_renormalizes_remaining_weights() {
        let aggregator = ScoreAggregator::default();
        let components = ComponentScores {
            authenticity: Some(0.5),
            factual_accuracy: Some(1.0),
            source_credibility: None,
            transparency: Some(1.0),
            ethical_compliance: Some(1.0),
        };

        let composite = aggregator.composite(&components);

        // (0.30*0.5 + 0.25 + 0.15 + 0.10) / 0.80 * 100 = 81.25
        assert_eq!(composite, 81.25);
    }

    #[test]
    fn only_factual_accuracy_available_uses_its_weight_alone() {
        let aggregator = ScoreAggregator::default();
        let components = ComponentScores {
            authenticity: None,
            factual_accuracy: Some(0.75),
            source_credibility: None,
            transparency: None,
            ethical_compliance: None,
        };

        assert_eq!(aggregator.composite(&components), 75.00);
    }

    #[test]
    fn no_observed_text_or_image_leaves_authenticity_uncomputed() {
        let aggregator = ScoreAggregator::default();
        let signals = SignalSet {
            text: SignalState::Unavailable,
            image: SignalState::Skipped,
            fact_check: report(&[Verdict::True]),
        };

        let components = aggregator.component_scores(&signals);

        assert_eq!(components.authenticity, None);
        assert_eq!(components.factual_accuracy, Some(1.0));
    }

    #[test]
    fn composite_rounds_to_two_decimals() {
        let aggregator = ScoreAggregator::default();
        let components = ComponentScores {
            authenticity: Some(1.0 / 3.0),
            factual_accuracy: None,
            source_credibility: None,
            transparency: None,
            ethical_compliance: None,
        };

        assert_eq!(aggregator.composite(&components), 33.33);
    }
}
