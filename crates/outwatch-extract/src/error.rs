use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document unparsable: {reason}")]
    DocumentUnparsable { reason: String },

    #[error("invalid CSS selector for {field} (\"{selector}\"): {reason}")]
    InvalidSelector {
        field: String,
        selector: String,
        reason: String,
    },

    #[error("invalid pattern for {field} (\"{pattern}\"): {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
