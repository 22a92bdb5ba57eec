//! Oscilloscope wave canvas with an occasional retro glitch overlay.

use crate::constants::*;
use crate::rng;
use rand::Rng;
use std::fmt;

/// 8-bit channels with a float alpha, rendered as a CSS `rgba()` string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    Difference,
}

impl Blend {
    /// Canvas `globalCompositeOperation` value.
    pub const fn composite_op(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::Difference => "difference",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// Size in CSS pixels of a canvas whose backing store is `backing` device
/// pixels at `dpr` device pixels per CSS pixel. A non-finite or non-positive
/// ratio counts as 1.
pub fn css_size(backing: (u32, u32), dpr: f64) -> (f64, f64) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (backing.0 as f64 / dpr, backing.1 as f64 / dpr)
}

/// Minimal 2-D drawing capability.
pub trait Surface2d {
    /// Drawable size in CSS pixels.
    fn size(&self) -> (f64, f64);
    fn clear(&mut self);
    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: Stroke);
    fn fill_rect(&mut self, rect: Rect, color: Rgba, blend: Blend);
}

/// One sine trace: `y = h/2 + amplitude*h * sin(x*frequency + t*speed + phase)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSpec {
    pub amplitude: f64,
    pub frequency: f64,
    pub speed: f64,
    pub phase: f64,
    pub color: Rgba,
}

impl WaveSpec {
    pub const GREEN: WaveSpec = WaveSpec {
        amplitude: 0.2,
        frequency: 0.03,
        speed: 0.05,
        phase: 0.0,
        color: Rgba::new(102.0, 255.0, 102.0, 0.8),
    };

    pub const BLUE: WaveSpec = WaveSpec {
        amplitude: 0.15,
        frequency: 0.05,
        speed: -0.07,
        phase: 1.0,
        color: Rgba::new(102.0, 204.0, 255.0, 0.7),
    };
}

/// Sample the wave at every integer column in `[0, width)`.
pub fn wave_points(spec: &WaveSpec, width: f64, height: f64, time: f64) -> Vec<(f64, f64)> {
    let center = height / 2.0;
    let amp = height * spec.amplitude;
    let columns = width.max(0.0).ceil() as usize;
    (0..columns)
        .map(|x| {
            let x = x as f64;
            (
                x,
                center + amp * (x * spec.frequency + time * spec.speed + spec.phase).sin(),
            )
        })
        .collect()
}

/// A one-frame glitch: a difference-blended tint plus a few bright bars.
#[derive(Clone, Debug, PartialEq)]
pub struct Glitch {
    pub tint_rect: Rect,
    pub tint: Rgba,
    pub bar_color: Rgba,
    pub bars: Vec<Rect>,
}

impl Glitch {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64, chance: f64) -> Option<Self> {
        if !rng::chance(rng, chance) {
            return None;
        }
        let shift = rng::between(rng, -GLITCH_MAX_SHIFT, GLITCH_MAX_SHIFT);
        let tint = Rgba::new(
            rng::unit(rng) * 255.0,
            rng::unit(rng) * 255.0,
            rng::unit(rng) * 255.0,
            GLITCH_BLEND_ALPHA,
        );
        let span = 255.0 - GLITCH_BAR_MIN_CHANNEL;
        let bar_color = Rgba::new(
            GLITCH_BAR_MIN_CHANNEL + rng::unit(rng) * span,
            GLITCH_BAR_MIN_CHANNEL + rng::unit(rng) * span,
            GLITCH_BAR_MIN_CHANNEL + rng::unit(rng) * span,
            GLITCH_BAR_ALPHA,
        );
        let bars = (0..GLITCH_BAR_COUNT)
            .map(|_| {
                let y = rng::unit(rng) * height;
                let h = rng::between(rng, 1.0, 3.0);
                Rect {
                    x: 0.0,
                    y,
                    w: width,
                    h,
                }
            })
            .collect();
        Some(Self {
            tint_rect: Rect {
                x: shift,
                y: 0.0,
                w: width,
                h: height,
            },
            tint,
            bar_color,
            bars,
        })
    }

    pub fn draw(&self, surface: &mut dyn Surface2d) {
        surface.fill_rect(self.tint_rect, self.tint, Blend::Difference);
        for bar in &self.bars {
            surface.fill_rect(*bar, self.bar_color, Blend::SourceOver);
        }
    }
}

/// Phase accumulator plus the two traces it drives.
#[derive(Clone, Debug)]
pub struct WaveAnimator {
    pub waves: [WaveSpec; 2],
    pub line_width: f64,
    pub time_step: f64,
    pub glitch_chance: f64,
    time: f64,
}

impl WaveAnimator {
    pub fn new() -> Self {
        Self {
            waves: [WaveSpec::GREEN, WaveSpec::BLUE],
            line_width: WAVE_LINE_WIDTH,
            time_step: WAVE_TIME_STEP,
            glitch_chance: GLITCH_CHANCE,
            time: 0.0,
        }
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Redraw one frame and advance the phase. Returns the glitch if one was drawn.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn Surface2d,
        rng: &mut R,
    ) -> Option<Glitch> {
        let (w, h) = surface.size();
        surface.clear();
        for spec in &self.waves {
            let pts = wave_points(spec, w, h, self.time);
            surface.stroke_path(
                &pts,
                Stroke {
                    color: spec.color,
                    width: self.line_width,
                },
            );
        }
        let glitch = Glitch::roll(rng, w, h, self.glitch_chance);
        if let Some(g) = &glitch {
            g.draw(surface);
        }
        self.time += self.time_step;
        glitch
    }
}

impl Default for WaveAnimator {
    fn default() -> Self {
        Self::new()
    }
}
