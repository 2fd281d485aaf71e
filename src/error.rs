use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayoutError {
    #[error("Failed to read input {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed layout markup: {0}")]
    Markup(#[from] quick_xml::Error),

    #[error("Malformed layout document: {0}")]
    Document(String),

    #[error("Malformed position on widget '{widget}': {detail}")]
    Position { widget: String, detail: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelayoutError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RelayoutError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RelayoutError::Write {
            path: path.into(),
            source,
        }
    }

    pub fn position(widget: impl Into<String>, detail: impl Into<String>) -> Self {
        RelayoutError::Position {
            widget: widget.into(),
            detail: detail.into(),
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            RelayoutError::Read { .. } => ErrorPayload::new(
                ErrorCategory::Input,
                self.to_string(),
                "Verify the input path exists and is readable; use an absolute path or run from the working directory.",
            ),
            RelayoutError::Write { .. } => ErrorPayload::new(
                ErrorCategory::Output,
                self.to_string(),
                "Check that the output directory exists and is writable.",
            ),
            RelayoutError::Markup(e) => ErrorPayload::new(
                ErrorCategory::Document,
                e.to_string(),
                "The input is not well-formed XML; check for unclosed tags or invalid attributes.",
            ),
            RelayoutError::Document(msg) => ErrorPayload::new(
                ErrorCategory::Document,
                msg.to_string(),
                "Ensure the file contains a single root element with Widget children.",
            ),
            RelayoutError::Position { .. } => ErrorPayload::new(
                ErrorCategory::Position,
                self.to_string(),
                "position/position_real must hold exactly four numeric values: x y width height.",
            ),
            RelayoutError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check serialization inputs; run with --verbose for details.",
            ),
            RelayoutError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check flags/paths and the config file (TOML with input/output keys).",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayoutError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Input,
    Document,
    Position,
    Output,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_payload_uses_input_category() {
        let err = RelayoutError::read(
            "missing.layout",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Input);
        assert!(payload.message.contains("missing.layout"));
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("input path"),
            "expected input-path remediation, got: {remediation}"
        );
    }

    #[test]
    fn position_payload_names_the_widget() {
        let err = RelayoutError::position("MainWindow", "expected 4 values, found 3");
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Position);
        assert!(payload.message.contains("MainWindow"));
        assert!(payload.message.contains("expected 4 values"));
    }

    #[test]
    fn position_payload_mentions_expected_shape() {
        let err = RelayoutError::position("Button1", "invalid numeric value 'abc'");
        let remediation = err.to_payload().remediation.unwrap_or_default();
        assert!(
            remediation.contains("x y width height"),
            "expected coordinate-shape remediation, got: {remediation}"
        );
    }

    #[test]
    fn write_payload_uses_output_category() {
        let err = RelayoutError::write(
            "/nope/output.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Output);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("writable"),
            "expected writable-directory remediation, got: {remediation}"
        );
    }

    #[test]
    fn config_payload_uses_config_category() {
        let err = RelayoutError::Config("bad config".to_string());
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Config);
        assert!(payload
            .remediation
            .unwrap_or_default()
            .contains("config file"));
    }
}
