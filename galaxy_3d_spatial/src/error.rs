//! Error types for the Galaxy3D spatial core
//!
//! This module defines the error types returned by scene management:
//! engine initialization, node lookups, hierarchy edits and re-parenting.
//! Geometric operations on bounding volumes never fail; they degrade
//! gracefully on degenerate input instead.

use std::fmt;

/// Result type for Galaxy3D spatial operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D spatial errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Initialization failed (engine, scene manager)
    InitializationFailed(String),

    /// A node key does not refer to a live node (destroyed or foreign)
    InvalidNode(String),

    /// A hierarchy edit would create a cycle or references an unrelated node
    InvalidHierarchy(String),

    /// A transform could not be inverted or decomposed
    DegenerateTransform(String),

    /// Scene lookup or registration failed
    InvalidScene(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidHierarchy(msg) => write!(f, "Invalid hierarchy: {}", msg),
            Error::DegenerateTransform(msg) => write!(f, "Degenerate transform: {}", msg),
            Error::InvalidScene(msg) => write!(f, "Invalid scene: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`] variant and log it at ERROR severity.
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_spatial::engine_err;
/// let err = engine_err!("galaxy3d::Scene", InvalidNode, "node {} not found", 42);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $kind:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::galaxy3d::Error::$kind(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
