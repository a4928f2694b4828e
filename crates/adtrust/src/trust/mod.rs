//! Campaign trust scoring: collects authenticity signals from detector
//! services, fuses them into a composite score with a badge tier and
//! recommendations, and keeps exactly one up-to-date record per campaign.

pub mod badge;
pub mod domain;
pub mod recommendations;
pub mod scoring;
pub mod service;
pub mod signals;
pub mod store;

pub use domain::{
    BadgeLevel, CampaignContext, CampaignId, CreativeSnapshot, FactCheckFinding, TrustRecord,
    Verdict,
};
pub use scoring::{ComponentScores, ComponentWeights, ScoreAggregator, ScoringPolicy};
pub use service::{CampaignDirectory, DirectoryError, TrustScoreError, TrustScoreService};
pub use signals::{
    collect_signals, DetectorClient, DetectorError, FactCheckReport, HttpDetectorClient,
    ImageDetection, SignalKind, SignalSet, SignalState, TextDetection,
};
pub use store::{InMemoryTrustStore, StoreError, TrustAssessment, TrustRecordStore};
