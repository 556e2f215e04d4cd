//! Crate error taxonomy.

use thiserror::Error;

/// Failures surfaced while turning a payload into a rendered report.
///
/// Validation and payload errors are client faults: the input has to change
/// before a retry can succeed.  Renderer failures are server faults.  The
/// transformation itself is deterministic, so retrying without fixing the
/// input reproduces the same error.
#[derive(Debug, Error)]
pub enum Error {
    /// A required payload field is missing or malformed.
    #[error("missing or malformed required field `{field}`")]
    Validation { field: &'static str },

    /// The payload is not structurally valid JSON for the report model.
    #[error("malformed report payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// The PDF backend failed while consuming the document tree.
    #[error("renderer failure: {0}")]
    Render(#[from] genpdf::error::Error),
}

impl Error {
    /// Whether the failure is attributable to the caller's input.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Payload(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_name_the_field() {
        let err = Error::Validation { field: "subject" };
        assert!(err.to_string().contains("`subject`"));
        assert!(err.is_client_fault());
    }

    #[test]
    fn payload_errors_are_client_faults() {
        let err = Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err());
        assert!(err.is_client_fault());
    }
}
