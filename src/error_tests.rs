//! Unit tests for error.rs
//!
//! Tests the FramingError taxonomy, Display formatting, and the
//! framing_err! macro.

use crate::error::{FramingError, FramingResult};
use serial_test::serial;

// ============================================================================
// DISPLAY TESTS
// ============================================================================

#[test]
fn test_empty_geometry_display() {
    let err = FramingError::EmptyGeometry;
    assert_eq!(format!("{}", err), "No eligible geometry to frame");
}

#[test]
fn test_pass_in_progress_display() {
    let err = FramingError::PassInProgress;
    assert_eq!(
        format!("{}", err),
        "A framing pass is already in progress on this session"
    );
}

#[test]
fn test_mesh_evaluation_display() {
    let err = FramingError::MeshEvaluation("modifier stack failed".to_string());
    assert_eq!(
        format!("{}", err),
        "Mesh evaluation failed: modifier stack failed"
    );
}

// ============================================================================
// TRAIT TESTS
// ============================================================================

#[test]
fn test_error_equality() {
    assert_eq!(FramingError::EmptyGeometry, FramingError::EmptyGeometry);
    assert_ne!(FramingError::EmptyGeometry, FramingError::PassInProgress);
    assert_eq!(
        FramingError::MeshEvaluation("a".to_string()),
        FramingError::MeshEvaluation("a".to_string())
    );
    assert_ne!(
        FramingError::MeshEvaluation("a".to_string()),
        FramingError::MeshEvaluation("b".to_string())
    );
}

#[test]
fn test_error_clone() {
    let err = FramingError::MeshEvaluation("no mesh data".to_string());
    let cloned = err.clone();
    assert_eq!(err, cloned);
}

#[test]
fn test_error_implements_std_error() {
    fn assert_std_error<E: std::error::Error>() {}
    assert_std_error::<FramingError>();
}

#[test]
fn test_result_alias_propagates() {
    fn inner() -> FramingResult<u32> {
        Err(FramingError::EmptyGeometry)
    }
    fn outer() -> FramingResult<u32> {
        let v = inner()?;
        Ok(v + 1)
    }
    assert_eq!(outer(), Err(FramingError::EmptyGeometry));
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_framing_err_macro_constructs_error() {
    // Routes through the global logger; keep it serial with engine tests
    let err = crate::framing_err!("autoframe::test", "object '{}' has no mesh", "rig_helper");
    assert_eq!(
        err,
        FramingError::MeshEvaluation("object 'rig_helper' has no mesh".to_string())
    );
}
