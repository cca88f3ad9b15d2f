use crate::constants::FRAME_BUDGET_MS;
use crate::dom;
use crate::painter::CanvasPainter;
use field_core::{paint, FrameStats, ParticleField, PointerState, VisualMode};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub label: String,
    pub document: web::Document,
    pub field: Rc<RefCell<ParticleField>>,
    pub pointer: Rc<RefCell<PointerState>>,
    /// Host-pinned mode; `None` follows the document's theme class.
    pub mode_override: Rc<Cell<Option<VisualMode>>>,
    pub painter: CanvasPainter,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Read every frame so a theme toggle shows up on the next paint.
        let mode = self
            .mode_override
            .get()
            .unwrap_or_else(|| dom::current_mode(&self.document));

        let started = Instant::now();
        let summary = {
            let pointer = *self.pointer.borrow();
            let mut field = self.field.borrow_mut();
            field.update(&pointer);
            paint(&field, mode, &mut self.painter)
        };
        let elapsed = started.elapsed();

        if let Some(report) = self.stats.record(elapsed, summary.links) {
            log::debug!(
                "[field {} {}] {} frames mean={:.2}ms worst={:.2}ms particles={} links/frame={:.1}",
                self.label,
                mode.name(),
                report.frames,
                report.mean.as_secs_f64() * 1000.0,
                report.worst.as_secs_f64() * 1000.0,
                summary.particles,
                report.mean_links
            );
            if report.over_budget(Duration::from_millis(FRAME_BUDGET_MS)) {
                log::warn!(
                    "[field {} {}] mean frame cost {:.2}ms exceeds {}ms budget; lower max-particles",
                    self.label,
                    mode.name(),
                    report.mean.as_secs_f64() * 1000.0,
                    FRAME_BUDGET_MS
                );
            }
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop. Stopping (or dropping) cancels the
/// pending frame and releases the tick closure.
pub struct AnimationLoop {
    stopped: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl AnimationLoop {
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to its own slot.
        self.tick.borrow_mut().take();
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot, raf_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(mut frame_ctx: FrameContext) -> AnimationLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let stopped = Rc::new(Cell::new(false));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let stopped_tick = stopped.clone();
    let raf_id_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_id_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        frame_ctx.frame();
        request_frame(&tick_clone, &raf_id_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    AnimationLoop {
        stopped,
        raf_id,
        tick,
    }
}
