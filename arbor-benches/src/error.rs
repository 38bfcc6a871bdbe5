//! Benchmark setup error type.

use arbor_core::GraphBuilderError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated edges were rejected by the graph builder.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphBuilderError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The maximum edge weight was negative.
    #[error("maximum edge weight must be non-negative, got {max_weight}")]
    NegativeMaxWeight {
        /// The rejected bound.
        max_weight: i64,
    },
}
