use crate::infra::{normalize, read_input, NormalizeMode, NormalizeOutput};
use brandpilot::audit::import::{ImportedProfile, ProfileImporter};
use brandpilot::error::AppError;
use brandpilot::{
    calculate_branding_completion, parse_ai_response, AuditReport, BrandingCompletion,
    BrandingRawData, ProfileSnapshot,
};
use clap::{ArgGroup, Args};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["profile", "csv"])))]
pub(crate) struct AuditArgs {
    /// JSON file holding a single profile snapshot
    #[arg(long)]
    pub(crate) profile: Option<PathBuf>,
    /// CSV export with one profile per row
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Print machine-readable JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BrandingArgs {
    /// JSON file with the raw questionnaire records (stdin when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Print machine-readable JSON instead of a summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    #[arg(long, value_enum)]
    pub(crate) mode: NormalizeMode,
    /// File holding the value to normalize (stdin when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AiParseArgs {
    /// File holding the generated text (stdin when omitted)
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
}

pub(crate) fn run_audit(args: AuditArgs) -> Result<(), AppError> {
    let AuditArgs { profile, csv, json } = args;

    if let Some(path) = csv {
        let profiles = ProfileImporter::from_path(path)?;
        if json {
            let payload: Vec<Value> = profiles
                .iter()
                .map(|profile| {
                    serde_json::json!({
                        "handle": profile.handle,
                        "captured_at": profile.captured_at,
                        "report": profile.report(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            render_imported_profiles(&profiles);
        }
        return Ok(());
    }

    let raw = read_input(profile.as_deref())?;
    let snapshot: ProfileSnapshot = serde_json::from_str(&raw)?;
    let report = AuditReport::from_profile(&snapshot);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_audit_report(&report);
    }
    Ok(())
}

pub(crate) fn run_branding(args: BrandingArgs) -> Result<(), AppError> {
    let raw = read_input(args.input.as_deref())?;
    let data: BrandingRawData = serde_json::from_str(&raw)?;
    let completion = calculate_branding_completion(&data);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&completion)?);
    } else {
        render_branding_completion(&completion);
    }
    Ok(())
}

pub(crate) fn run_normalize(args: NormalizeArgs) -> Result<(), AppError> {
    let raw = read_input(args.input.as_deref())?;
    let value = input_value(raw);

    match normalize(args.mode, &value) {
        NormalizeOutput::Items { items } => {
            for item in items {
                println!("{item}");
            }
        }
        NormalizeOutput::Value { value } => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

/// Decodes input that opens like a JSON list, object or string; anything else stays text.
fn input_value(raw: String) -> Value {
    if raw.trim_start().starts_with(['[', '{', '"']) {
        if let Ok(value) = serde_json::from_str::<Value>(&raw) {
            return value;
        }
    }
    Value::String(raw)
}

pub(crate) fn run_ai_parse(args: AiParseArgs) -> Result<(), AppError> {
    let raw = read_input(args.input.as_deref())?;
    let value: Value = parse_ai_response(&raw)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn render_audit_report(report: &AuditReport) {
    println!(
        "Profile audit: {}/100 {} {}",
        report.score, report.label.emoji, report.label.label
    );
    for component in report.breakdown.components() {
        println!(
            "  - {:<20} {:>2}/{:<2} {}",
            component.bucket.label(),
            component.points,
            component.max_points,
            component.notes
        );
    }

    if report.improvements.is_empty() {
        println!("Nothing left to improve.");
    } else {
        println!("Next steps:");
        for hint in &report.improvements {
            println!("  * {hint}");
        }
    }
}

fn render_imported_profiles(profiles: &[ImportedProfile]) {
    println!("Imported {} profile(s)", profiles.len());
    for profile in profiles {
        let report = profile.report();
        let captured = profile
            .captured_at
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown capture date".to_string());
        println!(
            "  - @{} ({captured}): {}/100 {} {}",
            profile.handle, report.score, report.label.emoji, report.label.label
        );
    }
}

fn render_branding_completion(completion: &BrandingCompletion) {
    println!("Branding completion: {}%", completion.total);
    for (section, percent) in completion.sections() {
        println!("  - {section:<12} {percent:>3}%");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("brandpilot-{}-{name}", std::process::id()));
        fs::write(&path, contents).expect("temp file written");
        path
    }

    #[test]
    fn audit_rejects_invalid_profile_json() {
        let path = temp_file("broken-profile.json", "{\"bio\": ");
        let err = run_audit(AuditArgs {
            profile: Some(path.clone()),
            csv: None,
            json: true,
        })
        .expect_err("truncated json rejected");
        assert!(matches!(err, AppError::Json(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn branding_accepts_partial_documents() {
        let path = temp_file("branding.json", r#"{"storytelling": [{"id": 1}]}"#);
        run_branding(BrandingArgs {
            input: Some(path.clone()),
            json: false,
        })
        .expect("partial document accepted");
        fs::remove_file(path).ok();
    }

    #[test]
    fn ai_parse_surfaces_malformed_output() {
        let path = temp_file("ai.txt", "Désolé, je ne peux pas répondre.");
        let err = run_ai_parse(AiParseArgs {
            input: Some(path.clone()),
        })
        .expect_err("no JSON to recover");
        assert!(matches!(err, AppError::AiResponse(_)));
        fs::remove_file(path).ok();
    }

    #[test]
    fn bare_scalars_stay_text() {
        assert_eq!(input_value("42".to_string()), Value::String("42".to_string()));
        assert_eq!(input_value("true\n".to_string()), Value::String("true\n".to_string()));
        assert_eq!(
            normalize(NormalizeMode::Array, &input_value("42".to_string())),
            NormalizeOutput::Items {
                items: vec!["42".to_string()]
            }
        );
    }

    #[test]
    fn json_shaped_input_is_decoded() {
        assert_eq!(
            input_value(" [\"a\", \"b\"]".to_string()),
            serde_json::json!(["a", "b"])
        );
        assert_eq!(input_value("\"a, b\"".to_string()), Value::String("a, b".to_string()));
        assert_eq!(input_value("{oops".to_string()), Value::String("{oops".to_string()));
    }

    #[test]
    fn missing_csv_is_an_import_error() {
        let err = run_audit(AuditArgs {
            profile: None,
            csv: Some(PathBuf::from("./does-not-exist.csv")),
            json: false,
        })
        .expect_err("missing csv");
        assert!(matches!(err, AppError::Import(_)));
    }
}
