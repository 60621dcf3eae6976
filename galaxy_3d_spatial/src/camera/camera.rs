/// Camera: low-level passive data container.
///
/// The caller computes the view matrix, the projection matrix and the
/// frustum and hands them over; cullers read them. The engine does not
/// store or manage cameras.

use glam::{Mat4, Vec3};
use super::frustum::Frustum;

/// Low-level camera: view, projection and culling frustum.
#[derive(Debug, Clone)]
pub struct Camera {
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    pub fn new(view: Mat4, projection: Mat4, frustum: Frustum) -> Self {
        Self {
            view_matrix: view,
            projection_matrix: projection,
            frustum,
        }
    }

    /// Camera whose frustum is extracted from `projection * view`.
    pub fn from_view_projection(view: Mat4, projection: Mat4) -> Self {
        let frustum = Frustum::from_view_projection(&(projection * view));
        Self::new(view, projection, frustum)
    }

    // ===== GETTERS =====

    /// View matrix (inverse of the camera's world transform).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// World-space eye position, recovered from the view matrix.
    pub fn eye_position(&self) -> Vec3 {
        self.view_matrix.inverse().w_axis.truncate()
    }

    // ===== SETTERS (no derived state is refreshed) =====

    pub fn set_view(&mut self, matrix: Mat4) {
        self.view_matrix = matrix;
    }

    pub fn set_projection(&mut self, matrix: Mat4) {
        self.projection_matrix = matrix;
    }

    pub fn set_frustum(&mut self, frustum: Frustum) {
        self.frustum = frustum;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
