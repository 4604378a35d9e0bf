use crate::document::{Document, Record, Value};

/// Serialize a [`Document`] back into configuration text.
///
/// Opaque records are emitted verbatim; assignments re-render as
/// `name=<value>` with their original quoting or array spacing. The presence
/// or absence of a final newline matches the parsed input.
pub fn write(doc: &Document) -> String {
    let lines: Vec<String> = doc
        .records()
        .iter()
        .map(|record| match record {
            Record::Opaque { raw } => raw.clone(),
            Record::Assignment { name, value } => render_assignment(name, value),
        })
        .collect();

    let mut out = lines.join("\n");
    if doc.has_trailing_newline() {
        out.push('\n');
    }
    out
}

fn render_assignment(name: &str, value: &Value) -> String {
    match value {
        Value::Scalar { value, quote } => {
            let delim = quote.delimiter();
            format!("{name}={delim}{value}{delim}")
        }
        Value::Array { inner } => format!("{name}=({inner})"),
    }
}
