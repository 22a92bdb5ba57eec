//! Wireframe sphere scene: camera, geometry, rotation rig and projection.
//!
//! These types avoid platform APIs. The web front-end uploads the geometry to
//! a WebGPU line pipeline; [`WireframeCanvas`] projects it onto any
//! [`Surface2d`] instead (fallback and headless rendering).

use crate::constants::*;
use crate::waves::{Rgba, Stroke, Surface2d};
use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed camera looking at the sphere from +Z.
    pub fn sphere_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }
}

/// Latitude/longitude sphere as unique vertices plus a line list.
///
/// Poles are single vertices, so there are no degenerate pole edges.
#[derive(Clone, Debug)]
pub struct WireSphere {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<[u32; 2]>,
}

impl WireSphere {
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let ws = width_segments.max(3);
        let hs = height_segments.max(2);
        let rings = hs - 1;

        let mut vertices = Vec::with_capacity((2 + rings * ws) as usize);
        vertices.push(Vec3::new(0.0, radius, 0.0));
        for iy in 1..hs {
            let theta = iy as f32 / hs as f32 * std::f32::consts::PI;
            for ix in 0..ws {
                let phi = ix as f32 / ws as f32 * std::f32::consts::TAU;
                vertices.push(Vec3::new(
                    -radius * phi.cos() * theta.sin(),
                    radius * theta.cos(),
                    radius * phi.sin() * theta.sin(),
                ));
            }
        }
        vertices.push(Vec3::new(0.0, -radius, 0.0));

        let top = 0u32;
        let bottom = vertices.len() as u32 - 1;
        let ring = |r: u32, ix: u32| 1 + r * ws + (ix % ws);

        let mut edges = Vec::with_capacity((rings * ws + hs * ws) as usize);
        // parallels
        for r in 0..rings {
            for ix in 0..ws {
                edges.push([ring(r, ix), ring(r, ix + 1)]);
            }
        }
        // meridians
        for ix in 0..ws {
            edges.push([top, ring(0, ix)]);
            for r in 0..rings - 1 {
                edges.push([ring(r, ix), ring(r + 1, ix)]);
            }
            edges.push([ring(rings - 1, ix), bottom]);
        }

        Self { vertices, edges }
    }

    pub fn line_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.edges
            .iter()
            .flat_map(|[a, b]| [self.vertices[*a as usize], self.vertices[*b as usize]])
    }
}

impl Default for WireSphere {
    fn default() -> Self {
        Self::new(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS)
    }
}

/// Frame-driven rotation: two angles bumped by fixed deltas every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereRig {
    pub rotation: Vec2,
    pub step: Vec2,
}

impl SphereRig {
    pub fn new() -> Self {
        Self {
            rotation: Vec2::ZERO,
            step: Vec2::new(SPHERE_ROT_X_PER_FRAME, SPHERE_ROT_Y_PER_FRAME),
        }
    }

    pub fn advance(&mut self) {
        self.rotation += self.step;
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}

impl Default for SphereRig {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen-space segments (pixels, y down). Edges with an endpoint at or
/// behind the camera plane are dropped.
pub fn project_edges(sphere: &WireSphere, mvp: Mat4, width: f32, height: f32) -> Vec<[Vec2; 2]> {
    let projected: Vec<Option<Vec2>> = sphere
        .vertices
        .iter()
        .map(|v| {
            let clip = mvp * v.extend(1.0);
            if clip.w <= f32::EPSILON {
                return None;
            }
            let ndc = clip.truncate() / clip.w;
            Some(Vec2::new(
                (ndc.x + 1.0) * 0.5 * width,
                (1.0 - ndc.y) * 0.5 * height,
            ))
        })
        .collect();
    sphere
        .edges
        .iter()
        .filter_map(|[a, b]| Some([projected[*a as usize]?, projected[*b as usize]?]))
        .collect()
}

/// Minimal 3-D scene capability: draw the mesh with a model transform.
pub trait SceneRenderer {
    fn draw(&mut self, model: Mat4);
}

/// Renders the sphere by projecting it onto a 2-D surface.
pub struct WireframeCanvas<S: Surface2d> {
    pub surface: S,
    pub sphere: WireSphere,
    pub camera: Camera,
    pub stroke: Stroke,
}

impl<S: Surface2d> WireframeCanvas<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            sphere: WireSphere::default(),
            camera: Camera::sphere_default(1.0),
            stroke: Stroke {
                color: Rgba::new(255.0, 102.0, 0.0, 0.9),
                width: 1.0,
            },
        }
    }
}

impl<S: Surface2d> SceneRenderer for WireframeCanvas<S> {
    fn draw(&mut self, model: Mat4) {
        let (w, h) = self.surface.size();
        let (w, h) = (w as f32, h as f32);
        self.camera.set_viewport(w, h);
        let mvp = self.camera.view_projection() * model;
        self.surface.clear();
        for [a, b] in project_edges(&self.sphere, mvp, w, h) {
            self.surface.stroke_path(
                &[(a.x as f64, a.y as f64), (b.x as f64, b.y as f64)],
                self.stroke,
            );
        }
    }
}
