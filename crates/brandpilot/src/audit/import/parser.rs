use super::normalizer::{normalize_handle, unescape_line_breaks};
use crate::audit::{PinnedPost, ProfileSnapshot};
use crate::text::parse_to_tags;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::io::Read;

#[derive(Debug)]
pub(crate) struct ProfileRecord {
    pub(crate) handle: String,
    pub(crate) captured_at: Option<NaiveDateTime>,
    pub(crate) snapshot: ProfileSnapshot,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ProfileRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<ProfileRow>() {
        let row = record?;
        records.push(row.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ProfileRow {
    #[serde(rename = "Handle")]
    handle: String,
    #[serde(rename = "Display Name", default, deserialize_with = "empty_string_as_none")]
    display_name: Option<String>,
    #[serde(rename = "Bio", default, deserialize_with = "empty_string_as_none")]
    bio: Option<String>,
    #[serde(rename = "Bio Link", default, deserialize_with = "empty_string_as_none")]
    bio_link: Option<String>,
    #[serde(rename = "Profile Photo", default, deserialize_with = "empty_string_as_none")]
    profile_photo: Option<String>,
    #[serde(rename = "Highlights", default, deserialize_with = "empty_string_as_none")]
    highlights: Option<String>,
    #[serde(rename = "Pinned Posts", default, deserialize_with = "empty_string_as_none")]
    pinned_posts: Option<String>,
    #[serde(rename = "Content Pillars", default, deserialize_with = "empty_string_as_none")]
    content_pillars: Option<String>,
    #[serde(rename = "Feed Score", default, deserialize_with = "empty_string_as_none")]
    feed_score: Option<String>,
    #[serde(rename = "Captured At", default, deserialize_with = "empty_string_as_none")]
    captured_at: Option<String>,
}

impl ProfileRow {
    fn into_record(self) -> ProfileRecord {
        let captured_at = self.captured_at.as_deref().and_then(parse_datetime);
        let pinned_posts = split_list(self.pinned_posts)
            .into_iter()
            .map(|description| PinnedPost {
                description: Some(description),
            })
            .collect();

        let snapshot = ProfileSnapshot {
            display_name: self.display_name,
            bio: self.bio.as_deref().map(unescape_line_breaks),
            bio_link: self.bio_link,
            profile_photo: self.profile_photo,
            highlights_count: self.highlights.as_deref().and_then(parse_count),
            highlights: None,
            pinned_posts,
            content_pillars: split_list(self.content_pillars),
            feed_score: self
                .feed_score
                .as_deref()
                .and_then(|raw| raw.trim().parse::<u8>().ok()),
        };

        ProfileRecord {
            handle: normalize_handle(&self.handle),
            captured_at,
            snapshot,
        }
    }
}

fn split_list(cell: Option<String>) -> Vec<String> {
    match cell {
        Some(raw) => parse_to_tags(&Value::String(unescape_line_breaks(&raw))),
        None => Vec::new(),
    }
}

fn parse_count(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok()
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
