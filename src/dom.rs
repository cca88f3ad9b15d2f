use crate::constants::{DARK_CLASS, OVERRIDE_ATTRIBUTE_PREFIX, PRESET_ATTRIBUTE};
use field_core::{Anchor, VisualMode};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|dpr| dpr.is_finite() && *dpr > 0.0)
        .unwrap_or(1.0)
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio and return the CSS size, which is the simulation's surface.
///
/// The context transform is reset to `scale(dpr)` rather than multiplied,
/// so repeated resizes never compound.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    anchor: Anchor,
) -> (f32, f32) {
    let rect = match anchor {
        Anchor::Element => canvas.get_bounding_client_rect(),
        Anchor::Document => match window_document().and_then(|d| d.document_element()) {
            Some(root) => root.get_bounding_client_rect(),
            None => canvas.get_bounding_client_rect(),
        },
    };
    let (w_css, h_css) = (rect.width().max(0.0), rect.height().max(0.0));
    let dpr = device_pixel_ratio();
    canvas.set_width((w_css * dpr) as u32);
    canvas.set_height((h_css * dpr) as u32);
    if anchor == Anchor::Document {
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", w_css));
        _ = style.set_property("height", &format!("{}px", h_css));
    }
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (w_css as f32, h_css as f32)
}

/// Current mode as signalled by the page's theme class.
#[inline]
pub fn current_mode(document: &web::Document) -> VisualMode {
    let dark = document
        .document_element()
        .map(|root| root.class_list().contains(DARK_CLASS))
        .unwrap_or(false);
    VisualMode::from_dark_flag(dark)
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// 2D context with an alpha channel, or `None` when the browser refuses one.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    let options = js_sys::Object::new();
    _ = js_sys::Reflect::set(&options, &"alpha".into(), &true.into());
    canvas
        .get_context_with_context_options("2d", &options)
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

pub fn preset_attribute(canvas: &web::HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute(PRESET_ATTRIBUTE)
}

/// `data-field-<key>` attributes as `(key, value)` pairs, minus the preset
/// selector.
pub fn override_attributes(canvas: &web::HtmlCanvasElement) -> Vec<(String, String)> {
    canvas
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter(|name| name != PRESET_ATTRIBUTE)
        .filter_map(|name| {
            let key = name.strip_prefix(OVERRIDE_ATTRIBUTE_PREFIX)?.to_string();
            let value = canvas.get_attribute(&name)?;
            Some((key, value))
        })
        .collect()
}
