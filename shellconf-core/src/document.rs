use serde::Serialize;
use thiserror::Error;

/// Quoting style of a scalar assignment value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quote {
    /// Bare value, no delimiters.
    None,
    /// Single-quoted value.
    Single,
    /// Double-quoted value.
    Double,
}

impl Quote {
    /// The delimiter string this style wraps values in.
    pub fn delimiter(self) -> &'static str {
        match self {
            Quote::None => "",
            Quote::Single => "'",
            Quote::Double => "\"",
        }
    }
}

/// Parsed value portion of an assignment line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    /// `NAME=value`, optionally quoted.
    Scalar { value: String, quote: Quote },
    /// `NAME=(a b c)`; `inner` is the raw text between the parentheses,
    /// whitespace included.
    Array { inner: String },
}

impl Value {
    /// Scalar value text, or `None` for arrays.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar { value, .. } => Some(value),
            Value::Array { .. } => None,
        }
    }

    /// Whitespace-separated array elements; empty for scalars.
    pub fn elements(&self) -> Vec<&str> {
        match self {
            Value::Array { inner } => inner.split_whitespace().collect(),
            Value::Scalar { .. } => Vec::new(),
        }
    }
}

/// One line of a parsed configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Record {
    /// A line preserved verbatim: comment, blank, or anything unrecognized.
    Opaque { raw: String },
    /// A recognized `NAME=...` line.
    Assignment { name: String, value: Value },
}

/// Errors that can occur while mutating a [`Document`].
///
/// Mutations never invent new lines: a missing target is reported, not
/// created, so a hand-maintained file is never restructured behind the
/// owner's back.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// No assignment with the requested name exists in the file.
    #[error("no assignment named `{0}`")]
    MissingAnchor(String),
    /// The named assignment is an array, not a scalar.
    #[error("assignment `{0}` is not a scalar")]
    NotScalar(String),
    /// The named assignment is a scalar, not an array.
    #[error("assignment `{0}` is not an array")]
    NotArray(String),
}

/// An ordered sequence of configuration lines with targeted mutation support.
///
/// Opaque lines round-trip byte-identically through [`crate::parse`] and
/// [`crate::write`]; only the value portion of assignments touched by a
/// mutation changes. Every mutation is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub(crate) records: Vec<Record>,
    pub(crate) trailing_newline: bool,
}

impl Document {
    /// All records in original file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Whether the source text ended with a newline.
    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Return the value of the first assignment with the provided name.
    pub fn find(&self, name: &str) -> Option<&Value> {
        self.records.iter().find_map(|record| match record {
            Record::Assignment { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.records.iter_mut().find_map(|record| match record {
            Record::Assignment { name: n, value } if n == name => Some(value),
            _ => None,
        })
    }

    /// Replace the value of an existing scalar assignment, keeping its
    /// quoting style.
    pub fn set_scalar(&mut self, name: &str, new_value: &str) -> Result<(), EditError> {
        match self.find_mut(name) {
            Some(Value::Scalar { value, .. }) => {
                *value = new_value.to_string();
                Ok(())
            }
            Some(Value::Array { .. }) => Err(EditError::NotScalar(name.to_string())),
            None => Err(EditError::MissingAnchor(name.to_string())),
        }
    }

    /// Whether the named array assignment contains the element. Returns
    /// `false` when the assignment is missing or not an array.
    pub fn array_contains(&self, name: &str, element: &str) -> bool {
        match self.find(name) {
            Some(value @ Value::Array { .. }) => value.elements().contains(&element),
            _ => false,
        }
    }

    /// Append an element to an existing array assignment unless it is
    /// already a member. Existing elements and their spacing are untouched.
    pub fn array_append_if_absent(&mut self, name: &str, element: &str) -> Result<(), EditError> {
        match self.find_mut(name) {
            Some(Value::Array { inner }) => {
                if inner.split_whitespace().any(|t| t == element) {
                    return Ok(());
                }
                if inner.trim().is_empty() {
                    *inner = element.to_string();
                } else {
                    let kept = inner.trim_end().len();
                    let trailing = inner[kept..].to_string();
                    inner.truncate(kept);
                    inner.push(' ');
                    inner.push_str(element);
                    inner.push_str(&trailing);
                }
                Ok(())
            }
            Some(Value::Scalar { .. }) => Err(EditError::NotArray(name.to_string())),
            None => Err(EditError::MissingAnchor(name.to_string())),
        }
    }

    /// Replace the first array element exactly equal to `old` with `new`,
    /// in place. `new` may hold several whitespace-separated elements. A
    /// missing `old` element is a no-op.
    pub fn array_replace_element(
        &mut self,
        name: &str,
        old: &str,
        new: &str,
    ) -> Result<(), EditError> {
        match self.find_mut(name) {
            Some(Value::Array { inner }) => {
                if let Some(replaced) = replace_token(inner, old, new) {
                    *inner = replaced;
                }
                Ok(())
            }
            Some(Value::Scalar { .. }) => Err(EditError::NotArray(name.to_string())),
            None => Err(EditError::MissingAnchor(name.to_string())),
        }
    }
}

/// Replace the first whitespace-delimited token equal to `old`, keeping all
/// surrounding whitespace byte-identical. `None` when no token matched.
fn replace_token(inner: &str, old: &str, new: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len() + new.len());
    let mut rest = inner;
    let mut replaced = false;

    while !rest.is_empty() {
        let ws = rest.len() - rest.trim_start().len();
        out.push_str(&rest[..ws]);
        rest = &rest[ws..];

        let token_len = rest
            .find(|c: char| c.is_whitespace())
            .unwrap_or(rest.len());
        let token = &rest[..token_len];
        if !replaced && token == old {
            out.push_str(new);
            replaced = true;
        } else {
            out.push_str(token);
        }
        rest = &rest[token_len..];
    }

    replaced.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::{Document, Record, Value};

    #[test]
    fn append_preserves_interior_spacing() {
        let mut doc = Document {
            records: vec![Record::Assignment {
                name: "INTERFACES".to_string(),
                value: Value::Array {
                    inner: " eth0 ".to_string(),
                },
            }],
            trailing_newline: true,
        };

        doc.array_append_if_absent("INTERFACES", "eth1")
            .expect("append");
        assert_eq!(
            doc.find("INTERFACES"),
            Some(&Value::Array {
                inner: " eth0 eth1 ".to_string()
            })
        );
    }
}
