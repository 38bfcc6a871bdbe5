//! Error types for the Arbor core library.
//!
//! Every public error enum carries a stable machine-readable code so callers
//! can branch on failures without matching on message text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while mutating or querying a graph.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex argument fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The rejected vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge was supplied with a negative weight.
    #[error("edge ({from}, {to}) has negative weight {weight}")]
    NegativeWeight {
        /// Source endpoint of the rejected edge.
        from: usize,
        /// Target endpoint of the rejected edge.
        to: usize,
        /// The weight supplied by the caller.
        weight: i64,
    },
    /// A reachable vertex's shortest path costs more than a `u64` distance
    /// can hold below the unreachable sentinel.
    #[error("shortest path cost to vertex {vertex} exceeds the representable range")]
    PathCostOverflow {
        /// First vertex whose distance could not be represented.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex argument fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge was supplied with a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// A shortest path cost does not fit in a distance.
        PathCostOverflow => PathCostOverflow { .. } => "GRAPH_PATH_COST_OVERFLOW",
    }
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// Requested element was outside the structure's bounds.
    #[error("element {element} is out of bounds for a disjoint set of {len} elements")]
    OutOfBounds {
        /// The requested element.
        element: usize,
        /// Number of elements managed by the structure.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// Requested element was outside the structure's bounds.
        OutOfBounds => OutOfBounds { .. } => "DISJOINT_SET_OUT_OF_BOUNDS",
    }
}

/// Error raised when [`crate::GraphBuilder::build`] rejects its configuration.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphBuilderError {
    /// One of the queued edges failed validation.
    #[error("edge #{index} was rejected: {error}")]
    InvalidEdge {
        /// Position of the offending edge in insertion order.
        index: usize,
        #[source]
        /// Underlying validation failure.
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphBuilderError`] variants.
    enum GraphBuilderErrorCode for GraphBuilderError {
        /// One of the queued edges failed validation.
        InvalidEdge => InvalidEdge { .. } => "BUILDER_INVALID_EDGE",
    }
}

impl GraphBuilderError {
    /// Retrieve the inner [`GraphErrorCode`] that caused the edge to be rejected.
    #[must_use]
    pub const fn graph_code(&self) -> GraphErrorCode {
        match self {
            Self::InvalidEdge { error, .. } => error.code(),
        }
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
