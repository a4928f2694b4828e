use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};

use super::domain::{BadgeLevel, CampaignId, FactCheckFinding, TrustRecord};
use super::scoring::ComponentScores;

/// Everything a recomputation derives for one campaign; the store turns this
/// into the persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustAssessment {
    pub composite_score: f64,
    pub component_scores: ComponentScores,
    pub ai_text_probability: Option<f64>,
    pub ai_image_probability: Option<f64>,
    pub fact_check_findings: Vec<FactCheckFinding>,
    pub recommendations: Vec<String>,
    pub badge_level: BadgeLevel,
}

/// Error enumeration for trust store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("trust store unavailable: {0}")]
    Unavailable(String),
}

/// Keyed persistence enforcing the one-record-per-campaign invariant.
///
/// `upsert` must be atomic: a concurrent reader observes either the prior
/// record or the new one, never a mixture of fields. Upserts for the same
/// campaign serialize; upserts for different campaigns may run in parallel.
pub trait TrustRecordStore: Send + Sync {
    fn upsert(
        &self,
        campaign_id: &CampaignId,
        assessment: TrustAssessment,
    ) -> Result<TrustRecord, StoreError>;
    fn fetch(&self, campaign_id: &CampaignId) -> Result<Option<TrustRecord>, StoreError>;
    /// Cascade hook: drop the record when its owning campaign is deleted.
    fn remove(&self, campaign_id: &CampaignId) -> Result<(), StoreError>;
}

/// In-memory store with one mutex per campaign so writers for different
/// campaigns never contend; the outer map lock only arbitrates slot creation.
#[derive(Default)]
pub struct InMemoryTrustStore {
    slots: RwLock<HashMap<CampaignId, Arc<Mutex<TrustRecord>>>>,
}

impl InMemoryTrustStore {
    fn slot(&self, campaign_id: &CampaignId) -> Option<Arc<Mutex<TrustRecord>>> {
        let slots = self.slots.read().expect("trust store lock poisoned");
        slots.get(campaign_id).cloned()
    }
}

impl TrustRecordStore for InMemoryTrustStore {
    fn upsert(
        &self,
        campaign_id: &CampaignId,
        assessment: TrustAssessment,
    ) -> Result<TrustRecord, StoreError> {
        let now = Utc::now();

        if let Some(slot) = self.slot(campaign_id) {
            let mut record = slot.lock().expect("trust record mutex poisoned");
            overwrite(&mut record, assessment, now);
            return Ok(record.clone());
        }

        let mut slots = self.slots.write().expect("trust store lock poisoned");
        match slots.entry(campaign_id.clone()) {
            Entry::Occupied(entry) => {
                // Another writer created the slot between our read and write.
                let slot = Arc::clone(entry.get());
                drop(slots);
                let mut record = slot.lock().expect("trust record mutex poisoned");
                overwrite(&mut record, assessment, now);
                Ok(record.clone())
            }
            Entry::Vacant(entry) => {
                let record = new_record(campaign_id.clone(), assessment, now);
                entry.insert(Arc::new(Mutex::new(record.clone())));
                Ok(record)
            }
        }
    }

    fn fetch(&self, campaign_id: &CampaignId) -> Result<Option<TrustRecord>, StoreError> {
        Ok(self.slot(campaign_id).map(|slot| {
            let record = slot.lock().expect("trust record mutex poisoned");
            record.clone()
        }))
    }

    fn remove(&self, campaign_id: &CampaignId) -> Result<(), StoreError> {
        let mut slots = self.slots.write().expect("trust store lock poisoned");
        slots.remove(campaign_id);
        Ok(())
    }
}

fn new_record(
    campaign_id: CampaignId,
    assessment: TrustAssessment,
    now: DateTime<Utc>,
) -> TrustRecord {
    TrustRecord {
        campaign_id,
        composite_score: assessment.composite_score,
        component_scores: assessment.component_scores,
        ai_text_probability: assessment.ai_text_probability,
        ai_image_probability: assessment.ai_image_probability,
        fact_check_findings: assessment.fact_check_findings,
        recommendations: assessment.recommendations,
        badge_level: assessment.badge_level,
        computed_at: now,
        updated_at: now,
    }
}

fn overwrite(record: &mut TrustRecord, assessment: TrustAssessment, now: DateTime<Utc>) {
    record.composite_score = assessment.composite_score;
    record.component_scores = assessment.component_scores;
    record.ai_text_probability = assessment.ai_text_probability;
    record.ai_image_probability = assessment.ai_image_probability;
    record.fact_check_findings = assessment.fact_check_findings;
    record.recommendations = assessment.recommendations;
    record.badge_level = assessment.badge_level;
    record.updated_at = now;
}
