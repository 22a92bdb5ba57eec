/// Page wiring and renderer constants for the web front-end.
///
/// Which screen boots is decided by which canvas the page carries.
pub const TACTICAL_CANVAS_ID: &str = "sine-wave-canvas";
pub const ANALYSIS_CANVAS_ID: &str = "sphere-canvas";

// `?seed=1234` pins the random source for a reproducible session
pub const SEED_QUERY_KEY: &str = "seed";

// Sphere line colour, sRGB 0..1
pub const SPHERE_LINE_COLOR: [f32; 4] = [1.0, 0.4, 0.0, 0.9];
pub const SPHERE_CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
