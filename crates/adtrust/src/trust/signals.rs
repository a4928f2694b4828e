use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::config::DetectorConfig;

use super::domain::{CreativeSnapshot, FactCheckFinding};

/// The three detector kinds the collector knows how to invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Text,
    Image,
    FactCheck,
}

impl SignalKind {
    pub fn label(&self) -> &'static str {
        match self {
            SignalKind::Text => "text",
            SignalKind::Image => "image",
            SignalKind::FactCheck => "fact_check",
        }
    }
}

/// Text-AI detector response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDetection {
    pub ai_probability: f64,
    pub confidence: f64,
    pub model_version: String,
}

/// Image-AI detector response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetection {
    pub ai_probability: f64,
    pub confidence: f64,
    pub model_version: String,
}

/// Fact-check detector response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactCheckReport {
    pub findings: Vec<FactCheckFinding>,
}

/// Failure reported by a single detector call. Never fatal for the pipeline;
/// the collector downgrades it to an unavailable signal.
#[derive(Debug, thiserror::Error)]
pub enum DetectorError {
    #[error("detector transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("detector returned status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Uniform contract over the independently deployed detector services.
#[async_trait]
pub trait DetectorClient: Send + Sync {
    async fn detect_text(&self, text: &str) -> Result<TextDetection, DetectorError>;
    async fn detect_image(&self, image_reference: &str) -> Result<ImageDetection, DetectorError>;
    async fn check_facts(&self, text: &str) -> Result<FactCheckReport, DetectorError>;
}

/// Availability of one signal after an orchestration run settled.
///
/// `Unavailable` means the detector was attempted and failed; `Skipped` means
/// the required input was absent and the call was never issued. Both are
/// excluded from aggregation rather than defaulted to a value.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalState<T> {
    Observed(T),
    Unavailable,
    Skipped,
}

impl<T> SignalState<T> {
    pub fn observed(&self) -> Option<&T> {
        match self {
            SignalState::Observed(value) => Some(value),
            SignalState::Unavailable | SignalState::Skipped => None,
        }
    }

    pub fn is_observed(&self) -> bool {
        self.observed().is_some()
    }
}

/// All signals for one orchestration run, every call settled.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSet {
    pub text: SignalState<TextDetection>,
    pub image: SignalState<ImageDetection>,
    pub fact_check: SignalState<FactCheckReport>,
}

impl SignalSet {
    pub fn any_observed(&self) -> bool {
        self.text.is_observed() || self.image.is_observed() || self.fact_check.is_observed()
    }
}

/// Fan out one detector call per kind with input present and fan in once every
/// call has settled. A failed call degrades that one signal without failing
/// the others.
pub async fn collect_signals<D>(client: &D, creative: &CreativeSnapshot) -> SignalSet
where
    D: DetectorClient + ?Sized,
{
    let ad_text = creative
        .ad_text
        .as_deref()
        .filter(|text| !text.trim().is_empty());
    let image_url = creative
        .image_url
        .as_deref()
        .filter(|url| !url.trim().is_empty());

    let text_call = async {
        match ad_text {
            Some(text) => settle(SignalKind::Text, client.detect_text(text).await),
            None => SignalState::Skipped,
        }
    };
    let image_call = async {
        match image_url {
            Some(url) => settle(SignalKind::Image, client.detect_image(url).await),
            None => SignalState::Skipped,
        }
    };
    let fact_call = async {
        match ad_text {
            Some(text) => settle(SignalKind::FactCheck, client.check_facts(text).await),
            None => SignalState::Skipped,
        }
    };

    let (text, image, fact_check) = tokio::join!(text_call, image_call, fact_call);

    SignalSet {
        text,
        image,
        fact_check,
    }
}

fn settle<T>(kind: SignalKind, result: Result<T, DetectorError>) -> SignalState<T> {
    match result {
        Ok(value) => SignalState::Observed(value),
        Err(err) => {
            warn!(kind = kind.label(), error = %err, "detector call failed; signal unavailable");
            SignalState::Unavailable
        }
    }
}

/// reqwest-backed detector client with a fixed per-call timeout.
#[derive(Debug, Clone)]
pub struct HttpDetectorClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDetectorClient {
    pub fn new(config: &DetectorConfig) -> Result<Self, DetectorError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<R>(&self, path: &str, body: serde_json::Value) -> Result<R, DetectorError>
    where
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}/{path}", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DetectorError::Status {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl DetectorClient for HttpDetectorClient {
    async fn detect_text(&self, text: &str) -> Result<TextDetection, DetectorError> {
        self.post_json("detect/text", json!({ "text": text })).await
    }

    async fn detect_image(&self, image_reference: &str) -> Result<ImageDetection, DetectorError> {
        self.post_json("detect/image", json!({ "image_reference": image_reference }))
            .await
    }

    async fn check_facts(&self, text: &str) -> Result<FactCheckReport, DetectorError> {
        self.post_json("fact-check", json!({ "text": text })).await
    }
}
