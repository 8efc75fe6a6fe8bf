//! Camera for ray generation.

use lumen_math::{Ray, Vec3};

/// Projection mode for camera rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// Camera for generating one ray per pixel.
///
/// Holds the projection mode and the viewing frustum, and derives a
/// right-handed orthonormal basis (u, v, w) from eye/look-at/up with w
/// pointing from the look-at target toward the eye. The basis is cached
/// and recomputed by every builder step that changes the defining
/// vectors, so it can never go stale.
#[derive(Debug, Clone)]
pub struct Camera {
    projection: Projection,

    // Camera positioning
    eye: Vec3,
    look_at: Vec3,
    up: Vec3,

    // Clip planes and image plane
    near: f32,
    far: f32,
    width: u32,
    height: u32,
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,

    // Cached orthonormal basis
    u: Vec3,
    v: Vec3,
    w: Vec3,
}

impl Camera {
    /// Create a default camera: orthographic, at the origin looking down
    /// -Z, 512 x 512 pixels over a 2 x 2 frustum.
    pub fn new() -> Self {
        let mut camera = Self {
            projection: Projection::Orthographic,
            eye: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            up: Vec3::Y,
            near: 0.1,
            far: 10.0,
            width: 512,
            height: 512,
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
        };
        camera.compute_basis();
        camera
    }

    /// Set the projection mode.
    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Set camera position and orientation.
    pub fn with_position(mut self, eye: Vec3, look_at: Vec3, up: Vec3) -> Self {
        self.eye = eye;
        self.look_at = look_at;
        self.up = up;
        self.compute_basis();
        self
    }

    /// Set the near and far clip distances. The far plane doubles as the
    /// extent of the distance-shading falloff.
    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Set image resolution in pixels.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the frustum boundaries on the image plane.
    pub fn with_frustum(mut self, left: f32, right: f32, bottom: f32, top: f32) -> Self {
        self.left = left;
        self.right = right;
        self.bottom = bottom;
        self.top = top;
        self
    }

    /// Derive the right-handed look-at frame.
    ///
    /// Degenerate when up is parallel to the view direction (the cross
    /// product is zero); callers must supply a non-degenerate triple.
    fn compute_basis(&mut self) {
        self.w = (self.eye - self.look_at).normalize_or_zero();
        self.u = self.up.cross(self.w).normalize_or_zero();
        self.v = self.w.cross(self.u);
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Generate the ray for pixel (i, j), sampled at the pixel center.
    ///
    /// Orthographic rays start on the near plane and all travel along -w;
    /// perspective rays share the eye as origin and diverge through the
    /// pixel grid on the near plane.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let u_coord =
            self.left + (self.right - self.left) * (i as f32 + 0.5) / self.width as f32;
        let v_coord =
            self.bottom + (self.top - self.bottom) * (j as f32 + 0.5) / self.height as f32;

        match self.projection {
            Projection::Orthographic => {
                let origin =
                    self.eye + u_coord * self.u + v_coord * self.v - self.near * self.w;
                Ray::new(origin, -self.w)
            }
            Projection::Perspective => {
                let direction = u_coord * self.u + v_coord * self.v - self.near * self.w;
                Ray::new(self.eye, direction)
            }
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
