//! Camera for Pong
//!
//! Simple 2D orthographic camera over the window in pixel coordinates,
//! y growing downward to match the simulation.

use glam::Mat4;

/// Camera struct
pub struct Camera {
    pub view: Mat4,
    pub projection: Mat4,
}

impl Camera {
    /// Orthographic camera covering `(0, 0)` top-left to `(width, height)`
    pub fn orthographic(width: f32, height: f32) -> Self {
        // Flipped bottom/top so +y points down the screen
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self {
            view: Mat4::IDENTITY,
            projection,
        }
    }
}

/// Camera uniform data (matches the WGSL struct)
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        let view_proj = camera.projection * camera.view;
        Self {
            view_proj: view_proj.to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_screen_y_grows_downward() {
        let camera = Camera::orthographic(800.0, 600.0);
        let view_proj = camera.projection * camera.view;

        let top_left = view_proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let bottom_left = view_proj * Vec4::new(0.0, 600.0, 0.0, 1.0);

        // Top of the window maps to clip-space +1, bottom to -1
        assert!((top_left.y - 1.0).abs() < 1e-5);
        assert!((bottom_left.y + 1.0).abs() < 1e-5);
        assert!((top_left.x + 1.0).abs() < 1e-5);
    }
}
