//! Error types for tokenflow.
//!
//! This module provides strongly-typed errors with actionable context.
//! All errors include the relevant identifiers (node ID, node kind, limit)
//! to aid in debugging.

use crate::model::NodeKind;
use crate::types::NodeId;
use thiserror::Error;

/// The main error type for tokenflow operations.
#[derive(Error, Debug)]
pub enum TokenflowError {
    // =========================================================================
    // Model-shape errors (E001-E099)
    // =========================================================================
    /// A non-Start node was declared without any incoming flow.
    #[error("E001: {kind} node {node_id} ('{label}') has no incoming flow")]
    MissingIncoming {
        /// The node with no incoming flow.
        node_id: NodeId,
        /// The node's kind.
        kind: NodeKind,
        /// The node's display label.
        label: String,
    },

    /// A non-End node was declared without any outgoing flow.
    #[error("E002: {kind} node {node_id} ('{label}') has no outgoing flow")]
    MissingOutgoing {
        /// The node with no outgoing flow.
        node_id: NodeId,
        /// The node's kind.
        kind: NodeKind,
        /// The node's display label.
        label: String,
    },

    // =========================================================================
    // Execution errors (E100-E199)
    // =========================================================================
    /// The configured step bound was exceeded during execution.
    ///
    /// Counted per queue pop across the whole `execute` call. Usually a sign
    /// of a cyclic graph with no reachable End node.
    #[error("E101: step limit of {limit} queue pops exceeded")]
    StepLimitExceeded {
        /// The configured step limit.
        limit: usize,
    },
}

impl TokenflowError {
    /// Get the error code (e.g., "E001").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingIncoming { .. } => "E001",
            Self::MissingOutgoing { .. } => "E002",
            Self::StepLimitExceeded { .. } => "E101",
        }
    }

    /// Check if this error is a model-shape (construction time) error.
    #[must_use]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::MissingIncoming { .. } | Self::MissingOutgoing { .. }
        )
    }
}

/// Result type alias using `TokenflowError`.
pub type Result<T> = std::result::Result<T, TokenflowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_are_correct() {
        let err = TokenflowError::MissingIncoming {
            node_id: NodeId::new(3),
            kind: NodeKind::Activity,
            label: "Check order".to_string(),
        };
        assert_eq!(err.code(), "E001");

        let err = TokenflowError::StepLimitExceeded { limit: 100 };
        assert_eq!(err.code(), "E101");
    }

    #[test]
    fn error_display() {
        let err = TokenflowError::MissingOutgoing {
            node_id: NodeId::new(5),
            kind: NodeKind::ExclusiveChoice,
            label: "Route".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("E002"));
        assert!(msg.contains("node_5"));
        assert!(msg.contains("Route"));
    }

    #[test]
    fn shape_errors() {
        assert!(
            TokenflowError::MissingIncoming {
                node_id: NodeId::new(1),
                kind: NodeKind::End,
                label: "Done".to_string(),
            }
            .is_shape_error()
        );

        assert!(!TokenflowError::StepLimitExceeded { limit: 10 }.is_shape_error());
    }
}
