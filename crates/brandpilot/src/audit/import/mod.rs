//! Batch import of profile snapshots from spreadsheet exports.

mod normalizer;
mod parser;

use super::{AuditReport, ProfileSnapshot};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use parser::ProfileRecord;

#[derive(Debug, Error)]
pub enum ProfileImportError {
    #[error("failed to read profile export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid profile CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// One profile from an export, deduplicated by handle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedProfile {
    pub handle: String,
    pub captured_at: Option<NaiveDateTime>,
    pub snapshot: ProfileSnapshot,
}

impl ImportedProfile {
    pub fn report(&self) -> AuditReport {
        AuditReport::from_profile(&self.snapshot)
    }
}

pub struct ProfileImporter;

impl ProfileImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedProfile>, ProfileImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows sharing a handle keep the latest capture; the first row wins ties.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedProfile>, ProfileImportError> {
        let records = parser::parse_records(reader)?;
        let row_count = records.len();

        let mut profiles: Vec<ImportedProfile> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut skipped = 0usize;

        for record in records {
            if record.handle.is_empty() {
                skipped += 1;
                continue;
            }

            match positions.get(&record.handle) {
                Some(&index) => {
                    if let Some(existing) = profiles.get_mut(index) {
                        if record.captured_at > existing.captured_at {
                            *existing = into_profile(record);
                        }
                    }
                }
                None => {
                    positions.insert(record.handle.clone(), profiles.len());
                    profiles.push(into_profile(record));
                }
            }
        }

        debug!(
            rows = row_count,
            profiles = profiles.len(),
            skipped,
            "imported profile export"
        );
        Ok(profiles)
    }
}

fn into_profile(record: ProfileRecord) -> ImportedProfile {
    ImportedProfile {
        handle: record.handle,
        captured_at: record.captured_at,
        snapshot: record.snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const HEADER: &str = "Handle,Display Name,Bio,Bio Link,Profile Photo,Highlights,Pinned Posts,Content Pillars,Feed Score,Captured At\n";

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parser::parse_datetime_for_tests("2025-09-24T10:00:00Z").expect("parse rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2025, 9, 24)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );

        let date = parser::parse_datetime_for_tests("2025-09-30").expect("parse date");
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2025, 9, 30)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("not-a-date").is_none());
    }

    #[test]
    fn row_maps_every_column() {
        let csv = format!(
            "{HEADER}@Lea.Coach,Léa | Coach mindset,Je t'aide à oser\\nCoaching 1:1\\nRDV 👇,https://lea.coach,photo.jpg,4,\"Mon histoire; Mes offres\",\"mindset, business, bien-être\",11,2025-09-24\n"
        );
        let profiles = ProfileImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(profiles.len(), 1);

        let profile = &profiles[0];
        assert_eq!(profile.handle, "lea.coach");
        let snapshot = &profile.snapshot;
        assert_eq!(snapshot.display_name.as_deref(), Some("Léa | Coach mindset"));
        assert_eq!(snapshot.bio.as_deref().map(|bio| bio.lines().count()), Some(3));
        assert_eq!(snapshot.highlights_count, Some(4));
        assert_eq!(snapshot.pinned_posts.len(), 2);
        assert_eq!(
            snapshot.content_pillars,
            vec!["mindset", "business", "bien-être"]
        );
        assert_eq!(snapshot.feed_score, Some(11));
    }

    #[test]
    fn blank_and_invalid_cells_are_not_provided() {
        let csv = format!("{HEADER}studio,,,,,many,,,high,\n");
        let profiles = ProfileImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(profiles[0].snapshot, ProfileSnapshot::default());
        assert_eq!(profiles[0].report().score, 0);
    }

    #[test]
    fn duplicate_handles_keep_latest_capture() {
        let csv = format!(
            "{HEADER}lea,Old,,,,,,,,2025-09-01\n@LEA,New,,,,,,,,2025-09-20\nlea,Older,,,,,,,,2025-08-01\nlea,Undated,,,,,,,,\n"
        );
        let profiles = ProfileImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].snapshot.display_name.as_deref(), Some("New"));
    }

    #[test]
    fn rows_without_handle_are_skipped() {
        let csv = format!("{HEADER}@,Ghost,,,,,,,,\nmona,Mona,,,,,,,,\n");
        let profiles = ProfileImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].handle, "mona");
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = ProfileImporter::from_path("./does-not-exist.csv").expect_err("io error");
        match error {
            ProfileImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
