// Host-side tests for the oscilloscope waves, the glitch overlay and the
// wireframe sphere geometry.

use glam::{Mat4, Vec3};
use panel_core::rng;
use panel_core::{
    css_size, project_edges, wave_points, Blend, Camera, Glitch, Rect, Rgba, SceneRenderer,
    SphereRig, Stroke, Surface2d, WaveAnimator, WaveSpec, WireSphere, WireframeCanvas,
};

#[derive(Default)]
struct Recorder {
    paths: Vec<(Vec<(f64, f64)>, Stroke)>,
    fills: Vec<(Rect, Rgba, Blend)>,
    clears: usize,
}

impl Surface2d for Recorder {
    fn size(&self) -> (f64, f64) {
        (300.0, 100.0)
    }
    fn clear(&mut self) {
        self.clears += 1;
        self.paths.clear();
        self.fills.clear();
    }
    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: Stroke) {
        self.paths.push((points.to_vec(), stroke));
    }
    fn fill_rect(&mut self, rect: Rect, color: Rgba, blend: Blend) {
        self.fills.push((rect, color, blend));
    }
}

#[test]
fn wave_samples_every_column_around_the_midline() {
    let pts = wave_points(&WaveSpec::GREEN, 300.0, 100.0, 0.0);
    assert_eq!(pts.len(), 300);
    assert_eq!(pts[0], (0.0, 50.0));
    for (x, y) in &pts {
        assert!((y - 50.0).abs() <= 20.0 + 1e-9, "x={} y={}", x, y);
    }
    let blue = wave_points(&WaveSpec::BLUE, 300.0, 100.0, 0.0);
    assert!((blue[0].1 - (50.0 + 15.0 * 1.0f64.sin())).abs() < 1e-9);
}

#[test]
fn hidpi_canvas_keeps_css_pixel_wave_geometry() {
    assert_eq!(css_size((600, 200), 2.0), (300.0, 100.0));
    assert_eq!(css_size((300, 100), 0.0), (300.0, 100.0));
    assert_eq!(css_size((300, 100), f64::NAN), (300.0, 100.0));

    let (w, h) = css_size((600, 200), 2.0);
    let hidpi = wave_points(&WaveSpec::GREEN, w, h, 1.0);
    let plain = wave_points(&WaveSpec::GREEN, 300.0, 100.0, 1.0);
    assert_eq!(hidpi, plain);
}

#[test]
fn animator_draws_two_traces_and_advances_time() {
    let mut anim = WaveAnimator::new();
    anim.glitch_chance = 0.0;
    let mut surface = Recorder::default();
    let mut rng = rng::seeded(1);
    assert!(anim.draw(&mut surface, &mut rng).is_none());
    assert_eq!(surface.paths.len(), 2);
    assert!(surface.fills.is_empty());
    assert_eq!(surface.paths[0].1.width, 1.5);
    assert_eq!(surface.paths[0].1.color.to_string(), "rgba(102, 255, 102, 0.8)");
    assert_eq!(surface.paths[1].1.color.to_string(), "rgba(102, 204, 255, 0.7)");
    anim.draw(&mut surface, &mut rng);
    assert_eq!(anim.time(), 1.0);
    assert_eq!(surface.clears, 2);
}

#[test]
fn glitch_shapes_stay_in_range() {
    let mut rng = rng::seeded(77);
    for _ in 0..200 {
        let g = Glitch::roll(&mut rng, 300.0, 100.0, 1.0).unwrap();
        assert!((-2.0..2.0).contains(&g.tint_rect.x));
        assert_eq!(g.tint.a, 0.1);
        assert_eq!(g.bars.len(), 3);
        assert_eq!(g.bar_color.a, 0.3);
        for c in [g.bar_color.r, g.bar_color.g, g.bar_color.b] {
            assert!((155.0..255.0).contains(&c));
        }
        for bar in &g.bars {
            assert!((1.0..3.0).contains(&bar.h));
            assert!((0.0..100.0).contains(&bar.y));
            assert_eq!(bar.w, 300.0);
        }
    }
    assert!(Glitch::roll(&mut rng, 300.0, 100.0, 0.0).is_none());
}

#[test]
fn glitch_draws_a_difference_tint_then_bars() {
    let mut rng = rng::seeded(4);
    let g = Glitch::roll(&mut rng, 300.0, 100.0, 1.0).unwrap();
    let mut surface = Recorder::default();
    g.draw(&mut surface);
    let blends: Vec<Blend> = surface.fills.iter().map(|f| f.2).collect();
    assert_eq!(
        blends,
        [
            Blend::Difference,
            Blend::SourceOver,
            Blend::SourceOver,
            Blend::SourceOver
        ]
    );
    assert_eq!(Blend::Difference.composite_op(), "difference");
}

#[test]
fn sphere_has_unique_poles_and_expected_counts() {
    let sphere = WireSphere::default();
    // 24 x 16 segments: 15 rings of 24 plus two poles
    assert_eq!(sphere.vertices.len(), 362);
    assert_eq!(sphere.edges.len(), 15 * 24 + 16 * 24);
    for v in &sphere.vertices {
        assert!((v.length() - 1.0).abs() < 1e-5);
    }
    for [a, b] in &sphere.edges {
        assert_ne!(a, b);
        assert!((*b as usize) < sphere.vertices.len());
    }
    assert_eq!(sphere.line_vertices().count(), sphere.edges.len() * 2);
}

#[test]
fn sphere_in_front_of_camera_projects_inside_the_viewport() {
    let sphere = WireSphere::default();
    let camera = Camera::sphere_default(1.0);
    let segs = project_edges(&sphere, camera.view_projection(), 200.0, 200.0);
    assert_eq!(segs.len(), sphere.edges.len());
    for seg in &segs {
        for p in seg {
            assert!((0.0..=200.0).contains(&p.x) && (0.0..=200.0).contains(&p.y));
        }
    }
}

#[test]
fn sphere_behind_camera_is_culled() {
    let sphere = WireSphere::default();
    let camera = Camera::sphere_default(1.0);
    let model = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));
    let segs = project_edges(&sphere, camera.view_projection() * model, 200.0, 200.0);
    assert!(segs.is_empty());
}

#[test]
fn rig_accumulates_fixed_rotation() {
    let mut rig = SphereRig::default();
    assert_eq!(rig.model_matrix(), Mat4::IDENTITY);
    for _ in 0..10 {
        rig.advance();
    }
    assert!((rig.rotation.x - 0.03).abs() < 1e-6);
    assert!((rig.rotation.y - 0.05).abs() < 1e-6);
}

#[test]
fn wireframe_canvas_strokes_every_visible_edge() {
    let mut canvas = WireframeCanvas::new(Recorder::default());
    canvas.draw(Mat4::IDENTITY);
    assert_eq!(canvas.surface.clears, 1);
    assert_eq!(canvas.surface.paths.len(), canvas.sphere.edges.len());
    assert!(canvas.surface.paths.iter().all(|(pts, _)| pts.len() == 2));
}
