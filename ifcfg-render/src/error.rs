use thiserror::Error;

/// Errors reported by the renderer registry and the family renderers.
///
/// None of these are downgraded to defaults or partial output; a failed
/// render produces no file map at all.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The distribution identifier matches no registered family.
    #[error("unknown distribution family `{0}`")]
    UnknownFamily(String),
    /// The version selector is not one the family recognizes.
    #[error("unsupported version `{version}` for family `{family}`")]
    UnsupportedVersion {
        family: &'static str,
        version: String,
    },
    /// A patch-based renderer needs an assignment the existing file lacks.
    #[error("{path}: missing required assignment `{name}`")]
    MissingAnchor { path: String, name: String },
    /// An IPv4 netmask has no prefix-length equivalent in the conversion
    /// table.
    #[error("netmask `{0}` has no prefix-length equivalent")]
    InvalidNetmask(String),
    /// Supplied existing text could not be tokenized into line records.
    #[error("{path}: malformed existing file: {source}")]
    MalformedExistingFile {
        path: String,
        source: shellconf_core::ParseError,
    },
    /// A patch-based variant was invoked without the current text of a file
    /// it must patch.
    #[error("no existing content supplied for `{0}`")]
    MissingExistingFile(String),
}
