// ============================================================
// Layer 5 — Remote Model Classifier
// ============================================================
// Talks to a hosted text-classification model over HTTP. The
// default endpoint is the Hugging Face inference API for the
// configured model id; `--endpoint` points it anywhere that
// speaks the same wire format.
//
// Wire format (text-classification task):
//   request:  POST { "inputs": "<headline>", ... }
//   response: [[ {"label": "...", "score": 0.97}, ... ]]
//             (some servers return the inner array unnested)
//
// Reference: reqwest docs (blocking client), serde_json docs

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::domain::headline::EmotionPrediction;
use crate::domain::traits::EmotionClassifier;
use crate::ml::top_prediction;

/// Base URL for the hosted inference API.
const HF_INFERENCE_BASE: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding an optional API bearer token.
pub const API_TOKEN_ENV: &str = "HF_API_TOKEN";

/// Per-request timeout. Cold models can take a while to load
/// server-side, so this is generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One scored label as the server serialises it.
#[derive(Debug, Deserialize)]
struct ScoredLabel {
    label: String,
    score: f64,
}

/// Emotion classifier backed by a hosted pre-trained model.
pub struct RemoteClassifier {
    model:    String,
    endpoint: String,
    token:    Option<String>,
    client:   reqwest::blocking::Client,
}

impl RemoteClassifier {
    /// Create a classifier for `model`, shelling out to `endpoint`
    /// if given, otherwise to the hosted inference API.
    pub fn new(model: impl Into<String>, endpoint: Option<String>) -> Result<Self> {
        let model = model.into();
        let endpoint = endpoint.unwrap_or_else(|| format!("{HF_INFERENCE_BASE}/{model}"));
        let token = std::env::var(API_TOKEN_ENV).ok();

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            model,
            endpoint,
            token,
            client,
        })
    }
}

impl EmotionClassifier for RemoteClassifier {
    fn classify(&self, title: &str) -> Result<EmotionPrediction> {
        // ── Step 1: send the headline to the model server ──
        let body = serde_json::json!({
            "inputs": title,
            "options": { "wait_for_model": true },
        });

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .with_context(|| format!("Request to '{}' failed", self.endpoint))?;

        // ── Step 2: reject non-success statuses with the server's text ──
        let status = response.status();
        let text = response
            .text()
            .with_context(|| format!("Failed to read response from '{}'", self.endpoint))?;
        if !status.is_success() {
            bail!("Model server returned {status}: {}", text.trim());
        }

        // ── Step 3: parse the scored labels and keep the dominant one ──
        let candidates = parse_candidates(&text)
            .with_context(|| format!("Unexpected response from '{}'", self.endpoint))?;
        top_prediction(candidates)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// Parse a text-classification response body into predictions.
///
/// Accepts both the nested form `[[{label, score}, ...]]` (one inner
/// array per input; we only ever send one) and the flat form
/// `[{label, score}, ...]`. Scores outside [0, 1] are rejected.
fn parse_candidates(body: &str) -> Result<Vec<EmotionPrediction>> {
    let labels: Vec<ScoredLabel> =
        if let Ok(nested) = serde_json::from_str::<Vec<Vec<ScoredLabel>>>(body) {
            nested.into_iter().next().unwrap_or_default()
        } else {
            serde_json::from_str(body).context("Response is not a list of scored labels")?
        };

    let mut candidates = Vec::with_capacity(labels.len());
    for scored in labels {
        if !(0.0..=1.0).contains(&scored.score) {
            bail!(
                "Score {} for label '{}' is outside [0, 1]",
                scored.score,
                scored.label
            );
        }
        candidates.push(EmotionPrediction::new(scored.label, scored.score));
    }
    Ok(candidates)
}
