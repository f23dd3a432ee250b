//! Error types for contour extraction.

use thiserror::Error;

/// Result type alias using TopoError.
pub type TopoResult<T> = Result<T, TopoError>;

/// Errors raised while validating input or extracting contours.
///
/// Every input is deterministic, so none of these are retryable: they signal
/// a caller bug (bad configuration or grid) or a geometry bug in the core.
#[derive(Debug, Error)]
pub enum TopoError {
    /// Invalid extraction settings, e.g. a non-positive contour interval.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Ragged, degenerate or non-integer elevation grid.
    #[error("malformed grid: {0}")]
    MalformedGrid(String),

    /// A qualifying level crossed an odd number of cell edges.
    #[error(
        "cell ({x}, {z}) produced {crossings} crossings for level {level}; expected an even count"
    )]
    InternalInvariant {
        x: usize,
        z: usize,
        level: i32,
        crossings: usize,
    },
}

impl TopoError {
    /// Create a Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a MalformedGrid error.
    pub fn malformed_grid(msg: impl Into<String>) -> Self {
        Self::MalformedGrid(msg.into())
    }

    /// Short machine-readable tag for this error.
    pub fn kind(&self) -> &'static str {
        match self {
            TopoError::Configuration(_) => "configuration",
            TopoError::MalformedGrid(_) => "malformed_grid",
            TopoError::InternalInvariant { .. } => "internal_invariant",
        }
    }
}

impl From<serde_yaml::Error> for TopoError {
    fn from(err: serde_yaml::Error) -> Self {
        TopoError::Configuration(format!("YAML error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(TopoError::configuration("x").kind(), "configuration");
        assert_eq!(TopoError::malformed_grid("x").kind(), "malformed_grid");
        let err = TopoError::InternalInvariant {
            x: 1,
            z: 2,
            level: 7,
            crossings: 3,
        };
        assert_eq!(err.kind(), "internal_invariant");
    }

    #[test]
    fn test_invariant_message_names_cell() {
        let err = TopoError::InternalInvariant {
            x: 4,
            z: 9,
            level: -3,
            crossings: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("(4, 9)"));
        assert!(msg.contains("level -3"));
    }
}
