//! Error types for the framing engine
//!
//! This module defines the error taxonomy for framing passes. Only
//! conditions that abort a pass surface as errors; soft conditions
//! (degenerate projection, iteration budget exhausted) are reported
//! through `framing::FramingOutcome` so that a pass always completes
//! with a usable, possibly imperfect, camera placement.

use std::fmt;

/// Result type for framing engine operations
pub type FramingResult<T> = Result<T, FramingError>;

/// Framing engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum FramingError {
    /// No eligible vertices: the target group is empty, invisible, or
    /// fully excluded. The pass aborts before mutating camera or pivot.
    EmptyGeometry,

    /// A framing pass is already running on this session
    PassInProgress,

    /// Evaluated-mesh extraction failed for an object. Inside the
    /// collector this is a per-object skip-and-continue condition.
    MeshEvaluation(String),
}

impl fmt::Display for FramingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FramingError::EmptyGeometry => {
                write!(f, "No eligible geometry to frame")
            }
            FramingError::PassInProgress => {
                write!(f, "A framing pass is already in progress on this session")
            }
            FramingError::MeshEvaluation(msg) => {
                write!(f, "Mesh evaluation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for FramingError {}

/// Log an ERROR and construct a `FramingError::MeshEvaluation` in one step
///
/// # Example
///
/// ```no_run
/// use autoframe_engine::framing_err;
///
/// let err = framing_err!("autoframe::Collector", "object '{}' has no mesh", "rig_helper");
/// ```
#[macro_export]
macro_rules! framing_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::engine_error!($source, $($arg)*);
        $crate::autoframe::FramingError::MeshEvaluation(format!($($arg)*))
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
