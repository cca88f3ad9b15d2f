use crate::dom;
use field_core::{Anchor, ParticleField, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached DOM event listener. Dropping it detaches the listener and
/// frees the closure.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] failed to attach {}: {:?}", kind, e);
        }
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub anchor: Anchor,
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
}

/// Pointer and resize listeners for one field. Keep the returned listeners
/// alive for as long as the field runs.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<Listener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let (move_target, leave_target): (web::EventTarget, web::EventTarget) = match w.anchor {
        Anchor::Element => (w.canvas.clone().into(), w.canvas.clone().into()),
        Anchor::Document => {
            let root = dom::window_document()
                .and_then(|d| d.document_element())
                .map(web::EventTarget::from)
                .unwrap_or_else(|| window.clone().into());
            (window.clone().into(), root)
        }
    };
    vec![
        wire_mousemove(w, &move_target),
        wire_mouseleave(w, &leave_target),
        wire_resize(w, &window),
    ]
}

fn wire_mousemove(w: &InputWiring, target: &web::EventTarget) -> Listener {
    let canvas = w.canvas.clone();
    let pointer = w.pointer.clone();
    Listener::attach(target, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        // Surface space is CSS pixels relative to the canvas' top-left corner.
        let rect = canvas.get_bounding_client_rect();
        let x = ev.client_x() as f32 - rect.left() as f32;
        let y = ev.client_y() as f32 - rect.top() as f32;
        pointer.borrow_mut().move_to(x, y);
    })
}

fn wire_mouseleave(w: &InputWiring, target: &web::EventTarget) -> Listener {
    let pointer = w.pointer.clone();
    Listener::attach(target, "mouseleave", move |_ev: web::Event| {
        pointer.borrow_mut().leave();
    })
}

fn wire_resize(w: &InputWiring, window: &web::Window) -> Listener {
    let w = w.clone();
    Listener::attach(window, "resize", move |_ev: web::Event| {
        let (width, height) = dom::sync_canvas_backing_size(&w.canvas, &w.ctx, w.anchor);
        w.field.borrow_mut().resize(width, height);
    })
}
