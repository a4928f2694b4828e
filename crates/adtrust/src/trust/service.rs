use std::sync::Arc;

use tracing::info;

use super::badge;
use super::domain::{CampaignContext, CampaignId, TrustRecord};
use super::recommendations;
use super::scoring::{ScoreAggregator, ScoringPolicy};
use super::signals::{collect_signals, DetectorClient};
use super::store::{StoreError, TrustAssessment, TrustRecordStore};

/// Read-only access to campaign metadata and the associated creative.
pub trait CampaignDirectory: Send + Sync {
    fn fetch(&self, campaign_id: &CampaignId) -> Result<Option<CampaignContext>, DirectoryError>;
}

/// Error enumeration for campaign directory failures.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("campaign directory unavailable: {0}")]
    Unavailable(String),
}

/// Orchestrates one trust computation: load context, fan out detectors,
/// aggregate, classify, derive recommendations, commit the record.
pub struct TrustScoreService<C, D, S> {
    directory: Arc<C>,
    detectors: Arc<D>,
    store: Arc<S>,
    aggregator: ScoreAggregator,
}

impl<C, D, S> TrustScoreService<C, D, S>
where
    C: CampaignDirectory + 'static,
    D: DetectorClient + 'static,
    S: TrustRecordStore + 'static,
{
    pub fn new(directory: Arc<C>, detectors: Arc<D>, store: Arc<S>, policy: ScoringPolicy) -> Self {
        Self {
            directory,
            detectors,
            store,
            aggregator: ScoreAggregator::new(policy),
        }
    }

    /// Recompute the trust record for a campaign and persist it.
    ///
    /// Individual detector failures degrade gracefully; the computation only
    /// fails outright when the campaign is unknown or no signal at all was
    /// observed (nothing meaningful to persist).
    pub async fn recompute(&self, campaign_id: &CampaignId) -> Result<TrustRecord, TrustScoreError> {
        let context = self
            .directory
            .fetch(campaign_id)?
            .ok_or_else(|| TrustScoreError::CampaignNotFound(campaign_id.clone()))?;

        let signals = collect_signals(self.detectors.as_ref(), &context.creative).await;
        if !signals.any_observed() {
            return Err(TrustScoreError::NoSignalsAvailable(campaign_id.clone()));
        }

        let (components, composite) = self.aggregator.aggregate(&signals);
        let badge_level = badge::classify(composite);
        let derived = recommendations::derive(&signals, self.aggregator.policy());

        let assessment = TrustAssessment {
            composite_score: composite,
            component_scores: components,
            ai_text_probability: signals.text.observed().map(|text| text.ai_probability),
            ai_image_probability: signals.image.observed().map(|image| image.ai_probability),
            fact_check_findings: signals
                .fact_check
                .observed()
                .map(|report| report.findings.clone())
                .unwrap_or_default(),
            recommendations: derived,
            badge_level,
        };

        let record = self.store.upsert(campaign_id, assessment)?;

        info!(
            campaign = %campaign_id,
            platform = %context.platform,
            score = record.composite_score,
            badge = record.badge_level.label(),
            "trust score recomputed"
        );

        Ok(record)
    }

    /// Return the persisted record for a campaign.
    pub fn get(&self, campaign_id: &CampaignId) -> Result<TrustRecord, TrustScoreError> {
        self.store
            .fetch(campaign_id)?
            .ok_or_else(|| TrustScoreError::RecordNotFound(campaign_id.clone()))
    }

    /// Drop the record along with its owning campaign (cascade delete).
    pub fn purge(&self, campaign_id: &CampaignId) -> Result<(), TrustScoreError> {
        self.store.remove(campaign_id)?;
        Ok(())
    }
}

/// Error raised by the trust score orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum TrustScoreError {
    #[error("campaign {0} not found")]
    CampaignNotFound(CampaignId),
    #[error("no trust score computed yet for campaign {0}")]
    RecordNotFound(CampaignId),
    #[error("no detector signal available for campaign {0}")]
    NoSignalsAvailable(CampaignId),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
