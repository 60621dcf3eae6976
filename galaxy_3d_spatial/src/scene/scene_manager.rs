//! Central scene manager for the engine.
//!
//! Owns named scenes and drives their per-frame update pass in a fixed
//! order. Scenes are shared as `Arc<Mutex<Scene>>` so gameplay, culling
//! and collision code can hold them across frames.

use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::engine_err;
use super::scene::Scene;
use super::scene_config::SceneConfig;

const SOURCE: &str = "galaxy3d::SceneManager";

pub struct SceneManager {
    scenes: FxHashMap<String, Arc<Mutex<Scene>>>,
}

impl SceneManager {
    /// Create a new empty scene manager
    pub fn new() -> Self {
        Self {
            scenes: FxHashMap::default(),
        }
    }

    /// Create a scene with the default configuration
    ///
    /// # Errors
    ///
    /// `InvalidScene` if a scene with the same name already exists
    pub fn create_scene(&mut self, name: &str) -> Result<Arc<Mutex<Scene>>> {
        self.create_scene_with_config(name, SceneConfig::default())
    }

    /// Create a scene with an explicit configuration
    pub fn create_scene_with_config(
        &mut self,
        name: &str,
        config: SceneConfig,
    ) -> Result<Arc<Mutex<Scene>>> {
        if self.scenes.contains_key(name) {
            return Err(engine_err!(SOURCE, InvalidScene, "Scene '{}' already exists", name));
        }

        let scene = Arc::new(Mutex::new(Scene::new(config)));
        self.scenes.insert(name.to_string(), Arc::clone(&scene));
        crate::engine_debug!(SOURCE, "Created scene '{}' (order {})", name, config.order);
        Ok(scene)
    }

    /// Get a scene by name
    pub fn scene(&self, name: &str) -> Option<Arc<Mutex<Scene>>> {
        self.scenes.get(name).cloned()
    }

    /// Remove a scene by name, returning it if it existed
    ///
    /// Outstanding Arc references stay valid until dropped.
    pub fn remove_scene(&mut self, name: &str) -> Option<Arc<Mutex<Scene>>> {
        let removed = self.scenes.remove(name);
        if removed.is_some() {
            crate::engine_debug!(SOURCE, "Removed scene '{}'", name);
        }
        removed
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Names of all scenes, in no particular order
    pub fn scene_names(&self) -> Vec<&str> {
        self.scenes.keys().map(|name| name.as_str()).collect()
    }

    /// Remove all scenes
    pub fn clear(&mut self) {
        self.scenes.clear();
    }

    /// Scene names in update order: ascending `SceneConfig::order`, ties
    /// broken by name.
    pub fn update_order(&self) -> Result<Vec<String>> {
        Ok(self.ordered_scenes()?.into_iter().map(|(name, _)| name.to_string()).collect())
    }

    /// Run `Scene::update()` on every scene in `update_order()`. Returns how
    /// many scenes changed.
    ///
    /// # Errors
    ///
    /// `InvalidScene` if a scene mutex is poisoned; scenes ordered before it
    /// have already been updated.
    pub fn update_all(&self) -> Result<usize> {
        let mut changed = 0;
        for (name, scene) in self.ordered_scenes()? {
            let mut scene = scene.lock()
                .map_err(|_| engine_err!(SOURCE, InvalidScene, "Scene '{}' lock poisoned", name))?;
            if scene.update() {
                changed += 1;
            }
        }
        Ok(changed)
    }

    fn ordered_scenes(&self) -> Result<Vec<(&str, &Arc<Mutex<Scene>>)>> {
        let mut ordered = Vec::with_capacity(self.scenes.len());
        for (name, scene) in &self.scenes {
            let order = scene.lock()
                .map_err(|_| engine_err!(SOURCE, InvalidScene, "Scene '{}' lock poisoned", name))?
                .config()
                .order;
            ordered.push((order, name.as_str(), scene));
        }
        ordered.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
        Ok(ordered.into_iter().map(|(_, name, scene)| (name, scene)).collect())
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
