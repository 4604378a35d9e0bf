//! Record-structure formatters used by inspection tooling.

use serde_json::json;

use crate::document::{Document, Record, Value};

/// Format a document's record structure as plain text, one line per record.
pub fn format_text(doc: &Document) -> String {
    let mut lines = Vec::with_capacity(doc.records().len());
    for record in doc.records() {
        match record {
            Record::Opaque { raw } => lines.push(format!(". {raw}")),
            Record::Assignment { name, value } => match value {
                Value::Scalar { value, .. } => lines.push(format!("= {name} {value}")),
                Value::Array { .. } => {
                    lines.push(format!("@ {name} [{}]", value.elements().join(" ")));
                }
            },
        }
    }
    lines.join("\n")
}

/// Format a document's record structure as JSON.
pub fn format_json(doc: &Document) -> String {
    let records: Vec<serde_json::Value> = doc
        .records()
        .iter()
        .map(|record| match record {
            Record::Opaque { raw } => json!({ "kind": "opaque", "raw": raw }),
            Record::Assignment { name, value } => match value {
                Value::Scalar { value, quote } => json!({
                    "kind": "scalar",
                    "name": name,
                    "value": value,
                    "quote": quote,
                }),
                Value::Array { .. } => json!({
                    "kind": "array",
                    "name": name,
                    "elements": value.elements(),
                }),
            },
        })
        .collect();

    serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".to_string())
}
