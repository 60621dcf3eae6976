/*!
# Galaxy 3D Spatial

Spatial core of the Galaxy3D engine: bounding volumes with exact oriented
intersection tests, and the scene graph transform cache that keeps every
node's world matrix and world bounds current from frame to frame.

## Architecture

- **BoundingVolume**: empty-or-active axis-aligned box; merge, affine image,
  support value, axis-aligned and oriented (separating axis) collision
- **SpatialNode**: local transform and bounds plus cached world state
- **Scene**: arena of nodes with dirty-flag update pass and re-parenting
- **SceneManager**: named scenes updated in a fixed order
- **Camera / Frustum / CameraCuller**: visibility queries over updated scenes

Everything is reachable through the [`galaxy3d`] namespace.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod bounds;
pub mod camera;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only; the engine_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Bounding volumes and intersection tests
    pub mod bounds {
        pub use crate::bounds::*;
    }

    // Camera, frustum and render view
    pub mod camera {
        pub use crate::camera::*;
    }

    // Scene graph
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
