//! Output formatting and control utilities.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::ValidationError;

/// Output control settings from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct OutputControls {
    pub json: bool,
    pub compact: bool,
    /// Comma-separated allowlist of report/listing fields
    pub fields: Option<String>,
}

impl OutputControls {
    /// Field names from `--fields`, trimmed, empty entries dropped.
    pub fn field_list(&self) -> Option<Vec<&str>> {
        self.fields.as_deref().map(|fields| {
            fields
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect()
        })
    }

    /// Render data as JSON according to output controls.
    ///
    /// The allowlist applies to a single report object or to each row of
    /// a listing.
    pub fn emit<T: Serialize>(&self, data: &T) -> String {
        let mut value = serde_json::to_value(data).unwrap_or(Value::Null);

        if let Some(allowed) = self.field_list() {
            match &mut value {
                Value::Array(rows) => {
                    for row in rows.iter_mut().filter_map(Value::as_object_mut) {
                        retain_fields(row, &allowed);
                    }
                }
                Value::Object(report) => retain_fields(report, &allowed),
                _ => {}
            }
        }

        let rendered = if self.compact {
            serde_json::to_string(&value)
        } else {
            serde_json::to_string_pretty(&value)
        };
        rendered.unwrap_or_else(|_| "{}".to_string())
    }

    /// Print data to stdout according to output controls.
    pub fn print<T: Serialize>(&self, data: &T) {
        println!("{}", self.emit(data));
    }
}

fn retain_fields(object: &mut Map<String, Value>, allowed: &[&str]) {
    object.retain(|key, _| allowed.contains(&key.as_str()));
}

/// Format a command failure as JSON.
///
/// When the failure is a rejected person field, `kind` names the check that
/// failed (e.g. `postal_code_format`).
pub fn format_error(error: &anyhow::Error) -> String {
    let kind = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ValidationError>())
        .map(ValidationError::kind);

    let mut body = json!({
        "success": false,
        "error": format!("{:#}", error),
    });
    if let Some(kind) = kind {
        body["kind"] = json!(kind);
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn controls(fields: Option<&str>) -> OutputControls {
        OutputControls {
            json: true,
            compact: true,
            fields: fields.map(String::from),
        }
    }

    #[test]
    fn test_fields_filter_each_listing_row() {
        let data = json!([
            { "index": 1, "name": "John Doe", "phone": "123" },
            { "index": 2, "name": "Jane Roe", "tags": ["work"] }
        ]);
        assert_eq!(
            controls(Some("name, index")).emit(&data),
            r#"[{"index":1,"name":"John Doe"},{"index":2,"name":"Jane Roe"}]"#
        );
    }

    #[test]
    fn test_fields_filter_single_report() {
        let data = json!({ "canonical": "1,Main St,#1-1,123456", "block": "1", "unit": "#1-1" });
        assert_eq!(
            controls(Some("canonical,")).emit(&data),
            r#"{"canonical":"1,Main St,#1-1,123456"}"#
        );
    }

    #[test]
    fn test_no_allowlist_keeps_everything() {
        let data = json!({ "similar": true, "name": "John" });
        assert_eq!(controls(None).emit(&data), r#"{"name":"John","similar":true}"#);
    }

    #[test]
    fn test_format_error_reports_validation_kind() {
        let err = Err::<(), _>(ValidationError::PostalCodeFormat("12a456".to_string()))
            .context("Invalid person record at index 0")
            .unwrap_err();
        let parsed: Value = serde_json::from_str(&format_error(&err)).unwrap();
        assert_eq!(parsed["success"], json!(false));
        assert_eq!(parsed["kind"], json!("postal_code_format"));
        assert!(parsed["error"].as_str().unwrap().contains("index 0"));
    }

    #[test]
    fn test_format_error_without_kind() {
        let err = anyhow::anyhow!("The person index provided is invalid: 9");
        let parsed: Value = serde_json::from_str(&format_error(&err)).unwrap();
        assert!(parsed.get("kind").is_none());
        assert_eq!(parsed["error"], json!("The person index provided is invalid: 9"));
    }
}
