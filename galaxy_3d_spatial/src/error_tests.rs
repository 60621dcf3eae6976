//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_initialization_failed_display() {
    let err = Error::InitializationFailed("Engine not initialized".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Initialization failed"));
    assert!(display.contains("Engine not initialized"));
}

#[test]
fn test_invalid_node_display() {
    let err = Error::InvalidNode("stale key".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid node"));
    assert!(display.contains("stale key"));
}

#[test]
fn test_invalid_hierarchy_display() {
    let err = Error::InvalidHierarchy("cycle".to_string());
    assert_eq!(format!("{}", err), "Invalid hierarchy: cycle");
}

#[test]
fn test_degenerate_transform_display() {
    let err = Error::DegenerateTransform("zero scale".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Degenerate transform"));
    assert!(display.contains("zero scale"));
}

#[test]
fn test_invalid_scene_display() {
    let err = Error::InvalidScene("main".to_string());
    assert_eq!(format!("{}", err), "Invalid scene: main");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidNode("x".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug = format!("{:?}", Error::InvalidHierarchy("loop".to_string()));
    assert!(debug.contains("InvalidHierarchy"));

    let debug = format!("{:?}", Error::DegenerateTransform("m".to_string()));
    assert!(debug.contains("DegenerateTransform"));
}

#[test]
fn test_error_clone_and_eq() {
    let err1 = Error::InvalidScene("ui".to_string());
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, Error::InvalidNode("ui".to_string()));
}

// ============================================================================
// RESULT ALIAS AND MACRO
// ============================================================================

fn failing() -> Result<u32> {
    Err(crate::engine_err!("galaxy3d::Test", InvalidNode, "node {} missing", 7))
}

#[test]
fn test_result_propagation() {
    fn outer() -> Result<u32> {
        let value = failing()?;
        Ok(value + 1)
    }
    assert_eq!(outer(), Err(Error::InvalidNode("node 7 missing".to_string())));
}

#[test]
fn test_engine_err_builds_variant() {
    let err = crate::engine_err!("galaxy3d::Test", DegenerateTransform, "det = {}", 0.0);
    assert_eq!(err, Error::DegenerateTransform("det = 0".to_string()));
}
