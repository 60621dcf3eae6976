/// Tests for SceneManager
///
/// These tests validate scene registration, lookup, removal and the ordered
/// per-frame update of every scene.

use super::*;
use crate::error::Error;
use glam::Vec3;
use std::sync::Arc;

fn config_with_order(order: i32) -> SceneConfig {
    SceneConfig { order, ..SceneConfig::default() }
}

// ============================================================================
// Tests: Registration
// ============================================================================

#[test]
fn test_scene_manager_new_is_empty() {
    let sm = SceneManager::new();
    assert_eq!(sm.scene_count(), 0);
    assert!(sm.scene_names().is_empty());
}

#[test]
fn test_create_scene_is_stored() {
    let mut sm = SceneManager::new();
    let created = sm.create_scene("world").unwrap();
    let retrieved = sm.scene("world").unwrap();

    assert!(Arc::ptr_eq(&created, &retrieved));
    assert_eq!(created.lock().unwrap().node_count(), 0);
    assert_eq!(sm.scene_count(), 1);
}

#[test]
fn test_create_scene_duplicate_name_fails() {
    let mut sm = SceneManager::new();
    sm.create_scene("world").unwrap();

    let result = sm.create_scene_with_config("world", config_with_order(3));
    assert!(matches!(result, Err(Error::InvalidScene(_))));
    assert_eq!(sm.scene_count(), 1);
    assert_eq!(sm.scene("world").unwrap().lock().unwrap().config().order, 0);
}

#[test]
fn test_create_scene_with_config() {
    let mut sm = SceneManager::new();
    let config = SceneConfig { order: -2, bounds_margin: 0.25, ..SceneConfig::default() };
    let scene = sm.create_scene_with_config("hud", config).unwrap();
    assert_eq!(*scene.lock().unwrap().config(), config);
}

#[test]
fn test_scene_not_found() {
    let sm = SceneManager::new();
    assert!(sm.scene("missing").is_none());
}

#[test]
fn test_scene_names() {
    let mut sm = SceneManager::new();
    sm.create_scene("world").unwrap();
    sm.create_scene("hud").unwrap();

    let names = sm.scene_names();
    assert_eq!(names.len(), 2);
    assert!(names.contains(&"world"));
    assert!(names.contains(&"hud"));
}

// ============================================================================
// Tests: Removal
// ============================================================================

#[test]
fn test_remove_scene_returns_it() {
    let mut sm = SceneManager::new();
    let created = sm.create_scene("world").unwrap();
    sm.create_scene("hud").unwrap();

    let removed = sm.remove_scene("world").unwrap();
    assert!(Arc::ptr_eq(&created, &removed));
    assert!(sm.scene("world").is_none());
    assert!(sm.scene("hud").is_some());
    assert!(sm.remove_scene("world").is_none());
}

#[test]
fn test_removed_scene_stays_usable() {
    let mut sm = SceneManager::new();
    let scene = sm.create_scene("world").unwrap();
    sm.remove_scene("world");

    let mut guard = scene.lock().unwrap();
    guard.create_node("still alive");
    assert_eq!(guard.node_count(), 1);
}

#[test]
fn test_clear_then_recreate() {
    let mut sm = SceneManager::new();
    let first = sm.create_scene("world").unwrap();
    sm.create_scene("hud").unwrap();
    sm.clear();
    assert_eq!(sm.scene_count(), 0);

    let second = sm.create_scene("world").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

// ============================================================================
// Tests: Update
// ============================================================================

#[test]
fn test_update_order_by_order_then_name() {
    let mut sm = SceneManager::new();
    sm.create_scene_with_config("overlay", config_with_order(10)).unwrap();
    sm.create_scene_with_config("b_world", config_with_order(0)).unwrap();
    sm.create_scene_with_config("a_world", config_with_order(0)).unwrap();
    sm.create_scene_with_config("sky", config_with_order(-5)).unwrap();

    assert_eq!(sm.update_order().unwrap(), vec!["sky", "a_world", "b_world", "overlay"]);
}

#[test]
fn test_update_all_counts_changed_scenes() {
    let mut sm = SceneManager::new();
    let world = sm.create_scene("world").unwrap();
    sm.create_scene("empty").unwrap();

    let node = world.lock().unwrap().create_node("player");
    assert_eq!(sm.update_all().unwrap(), 1);
    assert_eq!(sm.update_all().unwrap(), 0);

    world.lock().unwrap().node_mut(node).unwrap().set_position(Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(sm.update_all().unwrap(), 1);
    let position = world.lock().unwrap().node(node).unwrap().world_position();
    assert_eq!(position, Vec3::new(0.0, 2.0, 0.0));
}
