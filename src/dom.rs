use fnv::FnvHashMap;
use panel_core::{DisplaySink, LogEntry, Region};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

fn lookup(document: &web::Document, region: Region) -> Option<web::HtmlElement> {
    let el = document
        .get_element_by_id(region.element_id())
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());
    if el.is_none() {
        log::warn!("[dom] missing #{}; writes to it are skipped", region.element_id());
    }
    el
}

/// [`DisplaySink`] over the page's elements, looked up once by id.
///
/// A missing element is remembered as missing, so it only warns once.
pub struct DomSink {
    document: web::Document,
    elements: FnvHashMap<Region, Option<web::HtmlElement>>,
}

impl DomSink {
    pub fn bind(document: web::Document, regions: &[Region]) -> Self {
        let elements = regions
            .iter()
            .map(|&r| (r, lookup(&document, r)))
            .collect();
        Self { document, elements }
    }

    fn element(&mut self, region: Region) -> Option<web::HtmlElement> {
        let document = &self.document;
        self.elements
            .entry(region)
            .or_insert_with(|| lookup(document, region))
            .clone()
    }
}

impl DisplaySink for DomSink {
    fn set_text(&mut self, region: Region, text: &str) {
        if let Some(el) = self.element(region) {
            el.set_text_content(Some(text));
        }
    }

    fn set_class(&mut self, region: Region, class: &str) {
        if let Some(el) = self.element(region) {
            el.set_class_name(class);
        }
    }

    fn add_class(&mut self, region: Region, token: &str) {
        if let Some(el) = self.element(region) {
            _ = el.class_list().add_1(token);
        }
    }

    fn set_style(&mut self, region: Region, property: &str, value: &str) {
        if let Some(el) = self.element(region) {
            _ = el.style().set_property(property, value);
        }
    }

    fn prepend_log(&mut self, region: Region, entry: &LogEntry) {
        let Some(el) = self.element(region) else {
            return;
        };
        let div = match self.document.create_element("div") {
            Ok(d) => d,
            Err(e) => {
                log::error!("[dom] create_element failed: {:?}", e);
                return;
            }
        };
        div.set_class_name(entry.kind.class());
        div.set_text_content(Some(&entry.text()));
        _ = el.insert_before(&div, el.first_child().as_ref());
    }

    fn trim_log(&mut self, region: Region, keep: usize) {
        let Some(el) = self.element(region) else {
            return;
        };
        while el.child_element_count() as usize > keep {
            match el.last_element_child() {
                Some(last) => last.remove(),
                None => break,
            }
        }
    }
}
