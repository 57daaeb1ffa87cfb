//! Error types for goldengraphs
//!
//! The algorithms themselves report "no path" and "cycle" as ordinary result
//! values. Errors only surface from the checked entry points
//! (`try_reconstruct_path`, `kahn_strict`, `try_add_edge`) and from loading
//! logging configuration.

mod macros;

use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during goldengraphs operations
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("no path from {from} to {to} in predecessor map")]
    Unreachable { from: String, to: String },

    #[error("graph contains a cycle: only {sorted} of {total} nodes could be ordered")]
    CycleDetected { sorted: usize, total: usize },

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be finite)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a target with no predecessor chain back to the source
    pub fn unreachable(from: &impl Debug, to: &impl Debug) -> Self {
        GraphError::Unreachable {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for an edge weight that would break the total order
    pub fn invalid_weight(from: &impl Debug, to: &impl Debug, weight: f64) -> Self {
        GraphError::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::Unreachable { .. } => "unreachable",
            GraphError::CycleDetected { .. } => "cycle_detected",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Toml(_) => "toml_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let GraphError::CycleDetected { sorted, total } = self {
            error_obj["sorted"] = serde_json::json!(sorted);
            error_obj["total"] = serde_json::json!(total);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for goldengraphs operations
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that node identities are rendered with Debug
    #[test]
    fn test_unreachable_message_uses_debug_rendering() {
        let err = GraphError::unreachable(&"A", &"D");
        assert_eq!(
            err.to_string(),
            "no path from \"A\" to \"D\" in predecessor map"
        );
        assert_eq!(err.error_type(), "unreachable");
    }

    /// Test that the cycle envelope includes both counts
    #[test]
    fn test_cycle_json_carries_counts() {
        let err = GraphError::CycleDetected { sorted: 1, total: 3 };
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "cycle_detected");
        assert_eq!(json["error"]["sorted"], 1);
        assert_eq!(json["error"]["total"], 3);
    }

    /// Test that other envelopes carry only type and message
    #[test]
    fn test_invalid_weight_json_has_no_counts() {
        let err = GraphError::invalid_weight(&1u32, &2u32, f64::NAN);
        let json = err.to_json();
        assert_eq!(json["error"]["type"], "invalid_weight");
        assert!(json["error"].get("sorted").is_none());
        assert!(err.to_string().contains("1 -> 2"));
    }
}
