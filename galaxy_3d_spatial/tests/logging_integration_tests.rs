//! Integration tests for the logging layer as seen by an application
//!
//! Scene edits and rejected operations report through the installed logger;
//! the per-frame update pass and culling stay silent.
//!
//! Run with: cargo test --test logging_integration_tests

use galaxy_3d_spatial::galaxy3d::Engine;
use galaxy_3d_spatial::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use galaxy_3d_spatial::galaxy3d::bounds::BoundingVolume;
use galaxy_3d_spatial::galaxy3d::camera::Camera;
use galaxy_3d_spatial::galaxy3d::scene::{CameraCuller, FrustumCuller, Scene, SceneConfig, SceneManager};
use galaxy_3d_spatial::glam::{Mat4, Vec3};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST LOGGER
// ============================================================================

/// Keeps a copy of every entry
struct RecordingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl RecordingLogger {
    fn install() -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Engine::set_logger(Self { entries: Arc::clone(&entries) });
        entries
    }
}

impl Logger for RecordingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn severities(entries: &[LogEntry]) -> Vec<LogSeverity> {
    entries.iter().map(|e| e.severity).collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_scene_edits_log_at_debug() {
    let entries = RecordingLogger::install();

    let mut scene = Scene::new(SceneConfig::default());
    let root = scene.create_node("root");
    scene.create_child(root, "child").unwrap();
    Engine::reset_logger();

    let captured = entries.lock().unwrap();
    assert_eq!(severities(&captured), vec![LogSeverity::Debug, LogSeverity::Debug]);
    assert!(captured.iter().all(|e| e.source == "galaxy3d::Scene"));
    assert!(captured[1].message.contains("'child'"));
}

#[test]
#[serial]
fn test_integration_rejected_reparent_logs_error_with_location() {
    let mut scene = Scene::new(SceneConfig::default());
    let root = scene.create_node("root");
    let child = scene.create_child(root, "child").unwrap();

    let entries = RecordingLogger::install();
    let result = scene.add_child(child, root);
    Engine::reset_logger();

    assert!(result.is_err());
    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let entry = &captured[0];
    assert_eq!(entry.severity, LogSeverity::Error);
    assert!(entry.message.contains("cycle"));
    assert!(entry.file.is_some());
    assert!(entry.line.is_some());
    assert_eq!(entry.message, result.unwrap_err().to_string().trim_start_matches("Invalid hierarchy: "));
}

#[test]
#[serial]
fn test_integration_stale_destroy_logs_warning() {
    let mut scene = Scene::new(SceneConfig::default());
    let node = scene.create_node("gone");
    scene.destroy_node(node);

    let entries = RecordingLogger::install();
    assert!(!scene.destroy_node(node));
    Engine::reset_logger();

    assert_eq!(severities(&entries.lock().unwrap()), vec![LogSeverity::Warn]);
}

#[test]
#[serial]
fn test_integration_frame_loop_logs_nothing() {
    let mut scene = Scene::new(SceneConfig::default());
    let root = scene.create_node("root");
    let child = scene.create_child(root, "child").unwrap();
    scene.node_mut(child).unwrap().set_local_bounds(BoundingVolume::from_points(Vec3::splat(-1.0), Vec3::ONE));
    let camera = Camera::from_view_projection(
        Mat4::IDENTITY,
        Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0),
    );
    let mut culler = FrustumCuller::new();

    let entries = RecordingLogger::install();
    // First pass does real work, the rest are idle
    assert!(scene.update());
    for _ in 0..100 {
        assert!(!scene.update());
        culler.cull(&scene, &camera);
    }
    scene.node_mut(child).unwrap().set_position(Vec3::new(0.0, 0.0, -10.0));
    assert!(scene.update());
    Engine::reset_logger();

    assert!(entries.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_integration_update_all_logs_nothing() {
    let mut manager = SceneManager::new();
    for name in ["world", "overlay"] {
        let scene = manager.create_scene(name).unwrap();
        scene.lock().unwrap().create_node("root");
    }

    let entries = RecordingLogger::install();
    assert_eq!(manager.update_all().unwrap(), 2);
    for _ in 0..10 {
        assert_eq!(manager.update_all().unwrap(), 0);
    }
    Engine::reset_logger();

    assert!(entries.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_integration_reset_logger_stops_capture() {
    let entries = RecordingLogger::install();
    Engine::log(LogSeverity::Info, "app", "captured".to_string());
    Engine::reset_logger();
    Engine::log(LogSeverity::Info, "app", "not captured".to_string());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].format_plain().split("] ").last(), Some("captured"));
}
