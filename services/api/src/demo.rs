use crate::infra::{seed_campaigns, InMemoryCampaignDirectory};
use adtrust::error::AppError;
use adtrust::trust::{
    DetectorClient, DetectorError, FactCheckFinding, FactCheckReport, ImageDetection,
    InMemoryTrustStore, ScoringPolicy, TextDetection, TrustScoreService, Verdict,
};
use async_trait::async_trait;
use clap::Args;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit compact JSON instead of pretty-printed records
    #[arg(long)]
    pub(crate) compact: bool,
}

const AI_TELLTALES: [&str; 4] = ["as an ai", "i'm an ai", "i cannot", "i don't have"];

/// Offline detector double echoing the heuristics of the real inference
/// service, so the demo runs without any deployed detectors.
#[derive(Debug, Clone, Default)]
pub(crate) struct CannedDetectorClient;

#[async_trait]
impl DetectorClient for CannedDetectorClient {
    async fn detect_text(&self, text: &str) -> Result<TextDetection, DetectorError> {
        let lowered = text.to_lowercase();
        let ai_probability = if AI_TELLTALES.iter().any(|marker| lowered.contains(marker)) {
            0.9
        } else {
            0.1
        };
        Ok(TextDetection {
            ai_probability,
            confidence: 0.75,
            model_version: "canned-roberta-v1".to_string(),
        })
    }

    async fn detect_image(&self, _image_reference: &str) -> Result<ImageDetection, DetectorError> {
        Ok(ImageDetection {
            ai_probability: 0.15,
            confidence: 0.6,
            model_version: "canned-vit-v1".to_string(),
        })
    }

    async fn check_facts(&self, text: &str) -> Result<FactCheckReport, DetectorError> {
        let findings = if text.to_lowercase().contains("clinically proven") {
            vec![FactCheckFinding {
                claim: "clinically proven".to_string(),
                verdict: Verdict::False,
                source: "demo-fact-check".to_string(),
            }]
        } else {
            Vec::new()
        };
        Ok(FactCheckReport { findings })
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let directory = Arc::new(InMemoryCampaignDirectory::with_seed_data());
    let detectors = Arc::new(CannedDetectorClient);
    let store = Arc::new(InMemoryTrustStore::default());
    let service = TrustScoreService::new(directory, detectors, store, ScoringPolicy::default());

    for context in seed_campaigns() {
        let record = service.recompute(&context.campaign_id).await?;
        let rendered = if args.compact {
            serde_json::to_string(&record)
        } else {
            serde_json::to_string_pretty(&record)
        }
        .map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    }

    Ok(())
}
