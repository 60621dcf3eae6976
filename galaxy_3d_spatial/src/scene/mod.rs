//! Scene module
//!
//! The scene graph transform cache: nodes with local transforms and bounds,
//! the per-frame update pass deriving world matrices and world bounds,
//! named scenes, and culling strategies reading the result.

mod spatial_node;
mod scene;
mod scene_config;
mod scene_manager;
mod culler;

pub use spatial_node::{SpatialNode, NodeKey, NodeFlags};
pub use scene::Scene;
pub use scene_config::SceneConfig;
pub use scene_manager::SceneManager;
pub use culler::{CameraCuller, BruteForceCuller, FrustumCuller};
