//! Profile audit scoring.
//!
//! A [`ProfileSnapshot`] is scored over eight independent buckets whose maxima
//! add up to 100. Missing or empty fields contribute nothing; nothing here
//! fails.

pub mod import;
mod label;
mod report;
mod rules;

pub use label::{score_label, ScoreBand, ScoreLabel};
pub use report::AuditReport;
pub use rules::{ScoreBreakdown, ScoreBucket, ScoreComponent};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Presentation fields of a social profile at the time of the audit.
///
/// Every field deserializes leniently: a value of the wrong shape is read as
/// absent, so one bad field never rejects the whole snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default, alias = "displayName", deserialize_with = "lenient")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub bio: Option<String>,
    #[serde(default, alias = "bioLink", deserialize_with = "lenient")]
    pub bio_link: Option<String>,
    /// Only checked for presence.
    #[serde(default, alias = "profilePhoto", deserialize_with = "lenient")]
    pub profile_photo: Option<String>,
    /// Takes precedence over the length of `highlights` when set.
    #[serde(default, alias = "highlightsCount", deserialize_with = "lenient_u32")]
    pub highlights_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub highlights: Option<Vec<Value>>,
    /// A list holding anything but pinned post objects is dropped.
    #[serde(default, alias = "pinnedPosts", deserialize_with = "lenient")]
    pub pinned_posts: Vec<PinnedPost>,
    /// A list holding anything but strings is dropped.
    #[serde(default, alias = "contentPillars", deserialize_with = "lenient")]
    pub content_pillars: Vec<String>,
    /// Visual feed sub-score, already bounded to 0..=15 upstream.
    #[serde(default, alias = "feedScore", deserialize_with = "lenient_u8")]
    pub feed_score: Option<u8>,
}

impl ProfileSnapshot {
    pub fn highlight_count(&self) -> usize {
        match self.highlights_count {
            Some(count) => usize::try_from(count).unwrap_or(usize::MAX),
            None => self.highlights.as_ref().map_or(0, Vec::len),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedPost {
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
}

/// Reads the field as `T`, falling back to its default when the shape is wrong.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Whole numbers only; negatives read as 0, fractions and non-numbers as absent.
fn whole_number(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    match (number.as_u64(), number.as_i64()) {
        (Some(positive), _) => Some(positive),
        (None, Some(_negative)) => Some(0),
        (None, None) => None,
    }
}

fn lenient_u8<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(&value).map(|number| u8::try_from(number).unwrap_or(u8::MAX)))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(whole_number(&value).map(|number| u32::try_from(number).unwrap_or(u32::MAX)))
}

/// Scores a profile between 0 and 100.
pub fn calculate_audit_score(profile: &ProfileSnapshot) -> u8 {
    ScoreBreakdown::from_profile(profile).score()
}
