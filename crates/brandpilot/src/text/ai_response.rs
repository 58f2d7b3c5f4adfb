use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

const RETRY_MESSAGE: &str =
    "L'IA a renvoyé une réponse dans un format inattendu. Merci de relancer la génération.";

static CODE_FENCE: OnceLock<Regex> = OnceLock::new();
static EMBEDDED_OBJECT: OnceLock<Regex> = OnceLock::new();
static EMBEDDED_ARRAY: OnceLock<Regex> = OnceLock::new();

fn code_fence() -> &'static Regex {
    CODE_FENCE.get_or_init(|| Regex::new(r"```(?:json)?\n?").expect("valid code fence regex"))
}

fn embedded_object() -> &'static Regex {
    EMBEDDED_OBJECT.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("valid object regex"))
}

fn embedded_array() -> &'static Regex {
    EMBEDDED_ARRAY.get_or_init(|| Regex::new(r"(?s)\[.*\]").expect("valid array regex"))
}

/// Extraction attempts applied to generated text, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStrategy {
    Direct,
    FenceStripped,
    EmbeddedObject,
    EmbeddedArray,
}

impl RecoveryStrategy {
    pub const ORDER: [Self; 4] = [
        Self::Direct,
        Self::FenceStripped,
        Self::EmbeddedObject,
        Self::EmbeddedArray,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::FenceStripped => "fence_stripped",
            Self::EmbeddedObject => "embedded_object",
            Self::EmbeddedArray => "embedded_array",
        }
    }
}

/// Generated text held no JSON that could be recovered; the generation should be retried.
#[derive(Debug, Clone, Error)]
#[error("AI response could not be parsed after {} recovery strategies: {last_error}", .attempted.len())]
pub struct MalformedAiResponse {
    attempted: Vec<RecoveryStrategy>,
    last_error: String,
    input_len: usize,
}

impl MalformedAiResponse {
    /// Message suitable for the end user, asking them to retry.
    pub fn user_message(&self) -> &'static str {
        RETRY_MESSAGE
    }

    pub fn is_retryable(&self) -> bool {
        true
    }

    pub fn attempted(&self) -> &[RecoveryStrategy] {
        &self.attempted
    }

    /// Parser error from the last strategy that found a candidate.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    pub fn input_len(&self) -> usize {
        self.input_len
    }
}

/// Recovers a JSON payload from text produced by a language model.
///
/// Tries the raw text, then the text without markdown code fences, then the
/// span from the first `{` to the last `}`, then from the first `[` to the last
/// `]`. Invalid JSON is never repaired.
pub fn parse_ai_response<T: DeserializeOwned>(raw: &str) -> Result<T, MalformedAiResponse> {
    let cleaned = code_fence().replace_all(raw, "");
    let cleaned = cleaned.trim();

    let mut attempted = Vec::with_capacity(RecoveryStrategy::ORDER.len());
    let mut last_error = None;

    for strategy in RecoveryStrategy::ORDER {
        attempted.push(strategy);
        let candidate = match strategy {
            RecoveryStrategy::Direct => Some(raw),
            RecoveryStrategy::FenceStripped => Some(cleaned),
            RecoveryStrategy::EmbeddedObject => embedded_object().find(cleaned).map(|m| m.as_str()),
            RecoveryStrategy::EmbeddedArray => embedded_array().find(cleaned).map(|m| m.as_str()),
        };

        let Some(candidate) = candidate else {
            continue;
        };

        match serde_json::from_str::<T>(candidate) {
            Ok(value) => {
                debug!(strategy = strategy.label(), "recovered AI response");
                return Ok(value);
            }
            Err(err) => last_error = Some(err.to_string()),
        }
    }

    debug!(input_len = raw.len(), "AI response unrecoverable");
    Err(MalformedAiResponse {
        attempted,
        last_error: last_error.unwrap_or_else(|| "no JSON structure found".to_string()),
        input_len: raw.len(),
    })
}
