//! Camera module: low-level camera, frustum, and render view.
//!
//! Passive data for culling: the caller owns and drives cameras, cullers
//! turn a camera and a scene into a RenderView.

mod camera;
mod frustum;
mod render_view;

pub use camera::Camera;
pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use render_view::{RenderView, VisibleNode};
