use super::domain::Verdict;
use super::scoring::ScoringPolicy;
use super::signals::SignalSet;

pub const DISCLOSE_AI_TEXT: &str = "Disclose AI-generated content";
pub const VERIFY_IMAGE_AUTHENTICITY: &str = "Verify image authenticity";
pub const VERIFY_FLAGGED_CLAIMS: &str = "Verify flagged claims";

/// Derive action items from the raw signals, not the discounted component
/// scores. Rule order is stable (text, image, fact-check) and the output
/// carries no duplicates; with nothing adverse the list stays empty.
pub fn derive(signals: &SignalSet, policy: &ScoringPolicy) -> Vec<String> {
    let mut recommendations = Vec::new();

    if let Some(text) = signals.text.observed() {
        if text.ai_probability > policy.ai_probability_threshold {
            push_unique(&mut recommendations, DISCLOSE_AI_TEXT);
        }
    }

    if let Some(image) = signals.image.observed() {
        if image.ai_probability > policy.ai_probability_threshold {
            push_unique(&mut recommendations, VERIFY_IMAGE_AUTHENTICITY);
        }
    }

    if let Some(report) = signals.fact_check.observed() {
        if report
            .findings
            .iter()
            .any(|finding| finding.verdict == Verdict::False)
        {
            push_unique(&mut recommendations, VERIFY_FLAGGED_CLAIMS);
        }
    }

    recommendations
}

fn push_unique(recommendations: &mut Vec<String>, text: &str) {
    if !recommendations.iter().any(|existing| existing == text) {
        recommendations.push(text.to_string());
    }
}
