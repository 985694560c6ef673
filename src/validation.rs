use serde::{Deserialize, Serialize};
use std::fmt;

/// One segment of a validation error path, e.g. `["body", "message"]`
/// or `["detail", 0, "loc"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(u64),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<u64> for PathSegment {
    fn from(index: u64) -> Self {
        Self::Index(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub loc: Vec<PathSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub error_type: String,
}

impl ValidationError {
    pub fn new(
        loc: Vec<PathSegment>,
        msg: impl Into<String>,
        error_type: impl Into<String>,
    ) -> Self {
        Self {
            loc,
            msg: msg.into(),
            error_type: error_type.into(),
        }
    }

    /// The conventional "field required" error for a missing field.
    pub fn missing(loc: Vec<PathSegment>) -> Self {
        Self::new(loc, "field required", "value_error.missing")
    }

    /// Dotted rendering of `loc`, e.g. `body.message`.
    pub fn path(&self) -> String {
        self.loc
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.path(), self.msg, self.error_type)
    }
}

/// Body of a 422 response: the errors that made a request unprocessable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HTTPValidationError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Vec<ValidationError>>,
}

impl HTTPValidationError {
    pub fn new(detail: Vec<ValidationError>) -> Self {
        Self {
            detail: Some(detail),
        }
    }

    pub fn single(error: ValidationError) -> Self {
        Self::new(vec![error])
    }

    pub fn errors(&self) -> &[ValidationError] {
        self.detail.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for HTTPValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors() {
            [] => write!(f, "no detail"),
            errors => {
                let rendered = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "{}", rendered)
            }
        }
    }
}
