use adtrust::trust::{
    CampaignContext, CampaignDirectory, CampaignId, CreativeSnapshot, DirectoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for the campaign/creative store collaborator.
#[derive(Default)]
pub(crate) struct InMemoryCampaignDirectory {
    campaigns: Mutex<HashMap<CampaignId, CampaignContext>>,
}

impl InMemoryCampaignDirectory {
    pub(crate) fn with_seed_data() -> Self {
        let directory = Self::default();
        for context in seed_campaigns() {
            directory.insert(context);
        }
        directory
    }

    pub(crate) fn insert(&self, context: CampaignContext) {
        let mut guard = self.campaigns.lock().expect("directory mutex poisoned");
        guard.insert(context.campaign_id.clone(), context);
    }
}

impl CampaignDirectory for InMemoryCampaignDirectory {
    fn fetch(&self, campaign_id: &CampaignId) -> Result<Option<CampaignContext>, DirectoryError> {
        let guard = self.campaigns.lock().expect("directory mutex poisoned");
        Ok(guard.get(campaign_id).cloned())
    }
}

pub(crate) fn seed_campaigns() -> Vec<CampaignContext> {
    vec![
        CampaignContext {
            campaign_id: CampaignId::new("cmp-organic-001"),
            name: "Fall footwear launch".to_string(),
            platform: "instagram".to_string(),
            country: Some("US".to_string()),
            product_category: Some("apparel".to_string()),
            creative: CreativeSnapshot {
                ad_text: Some("Handcrafted boots, stitched in Maine since 1982.".to_string()),
                image_url: None,
            },
        },
        CampaignContext {
            campaign_id: CampaignId::new("cmp-synthetic-002"),
            name: "Miracle supplement push".to_string(),
            platform: "facebook".to_string(),
            country: Some("US".to_string()),
            product_category: Some("wellness".to_string()),
            creative: CreativeSnapshot {
                ad_text: Some(
                    "As an AI, I cannot overstate it: clinically proven to double your energy."
                        .to_string(),
                ),
                image_url: Some("https://cdn.example.com/supplement-hero.png".to_string()),
            },
        },
    ]
}
