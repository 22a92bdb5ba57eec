use crate::canvas::Canvas2d;
use crate::clock;
use crate::dom::DomSink;
use crate::render;
use instant::Instant;
use panel_core::{SceneRenderer, Screen, Session, WireSphere, WireframeCanvas};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame touches.
pub struct FrameContext<S: Screen> {
    pub session: Session<S>,
    pub sink: DomSink,
    pub canvas: Box<S::Canvas>,
    pub last_instant: Instant,
}

impl<S: Screen> FrameContext<S> {
    pub fn new(session: Session<S>, sink: DomSink, canvas: Box<S::Canvas>) -> Self {
        Self {
            session,
            sink,
            canvas,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let fired = self.session.advance(
            dt,
            clock::local_now(),
            &mut self.sink,
            self.canvas.as_mut(),
        );
        if fired.len() > 2 {
            log::debug!("[frame] caught up {} jobs after {:?}", fired.len(), dt);
        }
    }
}

/// WebGPU sphere when available, else the canvas-2D projection.
pub async fn init_renderer(canvas: &web::HtmlCanvasElement) -> Box<dyn SceneRenderer> {
    let sphere = WireSphere::default();
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuSphere::new(leaked_canvas, &sphere).await {
        Ok(g) => return Box::new(g),
        Err(e) => log::error!("WebGPU init error: {:?}", e),
    }
    match Canvas2d::new(canvas) {
        Ok(surface) => {
            log::warn!("[frame] falling back to canvas wireframe");
            Box::new(WireframeCanvas::new(surface))
        }
        Err(e) => {
            log::error!("canvas fallback unavailable: {:?}", e);
            Box::new(render::Blank)
        }
    }
}

pub fn start_loop<S>(frame_ctx: Rc<RefCell<FrameContext<S>>>)
where
    S: Screen + 'static,
    S::Canvas: 'static,
{
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
