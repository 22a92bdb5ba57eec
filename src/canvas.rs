use anyhow::anyhow;
use panel_core::{css_size, Blend, Rect, Rgba, Stroke, Surface2d};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Canvas 2D context behind the [`Surface2d`] capability.
pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    fn device_pixel_ratio() -> f64 {
        web::window().map_or(1.0, |w| w.device_pixel_ratio())
    }

    fn set_color(&self, key: &str, color: Rgba) {
        _ = js_sys::Reflect::set(
            &self.ctx,
            &JsValue::from_str(key),
            &JsValue::from_str(&color.to_string()),
        );
    }
}

impl Surface2d for Canvas2d {
    fn size(&self) -> (f64, f64) {
        css_size(
            (self.canvas.width(), self.canvas.height()),
            Self::device_pixel_ratio(),
        )
    }

    // Backing store is sized in device pixels; draw in CSS pixels on top of it.
    fn clear(&mut self) {
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        let dpr = Self::device_pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn stroke_path(&mut self, points: &[(f64, f64)], stroke: Stroke) {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.set_line_width(stroke.width);
        self.set_color("strokeStyle", stroke.color);
        self.ctx.move_to(x0, y0);
        for &(x, y) in rest {
            self.ctx.line_to(x, y);
        }
        self.ctx.stroke();
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba, blend: Blend) {
        _ = self.ctx.set_global_composite_operation(blend.composite_op());
        self.set_color("fillStyle", color);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
        if blend != Blend::SourceOver {
            _ = self
                .ctx
                .set_global_composite_operation(Blend::SourceOver.composite_op());
        }
    }
}
