use brandpilot::{parse_string_list, parse_to_array, parse_to_tags, safe_parse_json};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Which normalizer to run over free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub(crate) enum NormalizeMode {
    /// Line or bullet separated block list
    Array,
    /// Comma, semicolon or slash separated inline list
    Tags,
    /// Block list that also splits on en and em dashes
    StringList,
    /// Decode embedded JSON, null when unparseable
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum NormalizeOutput {
    Items { items: Vec<String> },
    Value { value: Option<Value> },
}

pub(crate) fn normalize(mode: NormalizeMode, value: &Value) -> NormalizeOutput {
    match mode {
        NormalizeMode::Array => NormalizeOutput::Items {
            items: parse_to_array(value),
        },
        NormalizeMode::Tags => NormalizeOutput::Items {
            items: parse_to_tags(value),
        },
        NormalizeMode::StringList => NormalizeOutput::Items {
            items: parse_string_list(value),
        },
        NormalizeMode::Json => NormalizeOutput::Value {
            value: safe_parse_json(value).map(Cow::into_owned),
        },
    }
}

/// Reads the whole file, or standard input when no path is given.
pub(crate) fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_modes_wrap_items() {
        let output = normalize(NormalizeMode::Tags, &json!("a; b"));
        assert_eq!(
            serde_json::to_value(output).expect("serializes"),
            json!({"items": ["a", "b"]})
        );
    }

    #[test]
    fn json_mode_reports_null_for_garbage() {
        let output = normalize(NormalizeMode::Json, &json!("{oops"));
        assert_eq!(
            serde_json::to_value(output).expect("serializes"),
            json!({"value": null})
        );
    }

    #[test]
    fn read_input_propagates_missing_files() {
        let err = read_input(Some(Path::new("./missing-input.json"))).expect_err("missing file");
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
