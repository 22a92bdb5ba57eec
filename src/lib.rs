#![cfg(target_arch = "wasm32")]
use crate::constants::{ANALYSIS_CANVAS_ID, SEED_QUERY_KEY, TACTICAL_CANVAS_ID};
use panel_core::{
    AnalysisConfig, AnalysisScreen, Region, Session, SessionConfig, Surface2d, TacticalConfig,
    TacticalScreen,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod clock;
mod constants;
mod dom;
mod frame;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn find_canvas(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

/// `?seed=N` from the page URL. Anything unparsable falls back to entropy.
fn seed_from_query() -> Option<u64> {
    let search = web::window()?.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    let raw = params.get(SEED_QUERY_KEY)?;
    match raw.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(_) => {
            log::warn!("ignoring unparsable seed {:?}", raw);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("panel-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let session_config = SessionConfig {
        seed: seed_from_query(),
        ..SessionConfig::default()
    };
    if let Some(seed) = session_config.seed {
        log::info!("seeded session: {}", seed);
    }

    if let Some(canvas) = find_canvas(&document, TACTICAL_CANVAS_ID) {
        boot_tactical(document, canvas, &session_config)
    } else if let Some(canvas) = find_canvas(&document, ANALYSIS_CANVAS_ID) {
        boot_analysis(document, canvas, &session_config).await
    } else {
        Err(anyhow::anyhow!(
            "missing #{} or #{}",
            TACTICAL_CANVAS_ID,
            ANALYSIS_CANVAS_ID
        ))
    }
}

fn boot_tactical(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    session_config: &SessionConfig,
) -> anyhow::Result<()> {
    let screen = TacticalScreen::new(&TacticalConfig::default())?;
    let mut session = Session::new(screen, session_config);
    let mut sink = dom::DomSink::bind(document, &Region::TACTICAL);
    session.boot(clock::local_now(), &mut sink);

    wire_canvas_resize(&canvas);
    let surface: Box<dyn Surface2d> = Box::new(canvas::Canvas2d::new(&canvas)?);
    let frame_ctx = frame::FrameContext::new(session, sink, surface);
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}

async fn boot_analysis(
    document: web::Document,
    canvas: web::HtmlCanvasElement,
    session_config: &SessionConfig,
) -> anyhow::Result<()> {
    let screen = AnalysisScreen::new(&AnalysisConfig::default())?;
    let mut session = Session::new(screen, session_config);
    let mut sink = dom::DomSink::bind(document, &Region::ANALYSIS);
    session.boot(clock::local_now(), &mut sink);

    // Avoid grabbing a 2D context here so WebGPU can acquire the canvas first
    wire_canvas_resize(&canvas);
    let renderer = frame::init_renderer(&canvas).await;
    let frame_ctx = frame::FrameContext::new(session, sink, renderer);
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}
