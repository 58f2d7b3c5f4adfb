//! Completion of the branding questionnaire.
//!
//! Each section is scored independently over its structural fields (see
//! [`fields`]) and the total is the plain average of the five sections, so a
//! three-field section weighs as much as a seven-field one.

pub mod fields;
mod presence;

pub use presence::{is_filled, section_completion};

use fields::{PERSONA_FIELDS, PROPOSITION_FIELDS, STRATEGY_FIELDS, TONE_FIELDS};
use presence::percent_rounded;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw questionnaire records as fetched for one account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingRawData {
    /// Storytelling records; anything but a non-empty list scores 0.
    #[serde(default)]
    pub storytelling: Option<Value>,
    #[serde(default)]
    pub persona: Option<Value>,
    #[serde(default)]
    pub proposition: Option<Value>,
    /// Brand profile merged with its tone settings; scored as the tone section.
    #[serde(default)]
    pub brand_profile: Option<Value>,
    #[serde(default)]
    pub strategy: Option<Value>,
}

/// Per-section completion percentages and their average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandingCompletion {
    pub storytelling: u8,
    pub persona: u8,
    pub proposition: u8,
    pub tone: u8,
    pub strategy: u8,
    pub total: u8,
}

impl BrandingCompletion {
    pub fn sections(&self) -> [(&'static str, u8); 5] {
        [
            ("storytelling", self.storytelling),
            ("persona", self.persona),
            ("proposition", self.proposition),
            ("tone", self.tone),
            ("strategy", self.strategy),
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.total == 100
    }
}

pub fn calculate_branding_completion(raw: &BrandingRawData) -> BrandingCompletion {
    let storytelling = match &raw.storytelling {
        Some(Value::Array(records)) if !records.is_empty() => 100,
        _ => 0,
    };
    let persona = section_completion(raw.persona.as_ref(), PERSONA_FIELDS);
    let proposition = section_completion(raw.proposition.as_ref(), PROPOSITION_FIELDS);
    let tone = section_completion(raw.brand_profile.as_ref(), TONE_FIELDS);
    let strategy = section_completion(raw.strategy.as_ref(), STRATEGY_FIELDS);

    let sum: usize = [storytelling, persona, proposition, tone, strategy]
        .iter()
        .map(|score| usize::from(*score))
        .sum();
    let total = percent_rounded(sum, 500);

    BrandingCompletion {
        storytelling,
        persona,
        proposition,
        tone,
        strategy,
        total,
    }
}
