#![cfg(target_arch = "wasm32")]
use crate::constants::{AUTO_MOUNTS, STATS_INTERVAL_FRAMES};
use field_core::{FieldConfig, FrameStats, ParticleField, PointerState, VisualMode};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod events;
mod frame;
mod painter;

thread_local! {
    // Fields mounted at start-up; kept alive until `unmount_all`.
    static AUTO_MOUNTED: RefCell<Vec<ParticleFieldHandle>> = RefCell::new(Vec::new());
}

/// A live particle field bound to one canvas.
///
/// `stop` (or dropping the handle) ends the animation loop and detaches all
/// listeners in one go.
#[wasm_bindgen]
pub struct ParticleFieldHandle {
    label: String,
    field: Rc<RefCell<ParticleField>>,
    mode_override: Rc<Cell<Option<VisualMode>>>,
    animation: Option<frame::AnimationLoop>,
    listeners: Vec<events::Listener>,
}

#[wasm_bindgen]
impl ParticleFieldHandle {
    pub fn stop(&mut self) {
        if let Some(animation) = self.animation.take() {
            animation.stop();
            self.listeners.clear();
            log::info!("[field {}] stopped", self.label);
        }
    }

    pub fn is_running(&self) -> bool {
        self.animation
            .as_ref()
            .map(|a| !a.is_stopped())
            .unwrap_or(false)
    }

    pub fn particle_count(&self) -> usize {
        self.field.borrow().len()
    }

    /// Pin the palette to `"dark"` or `"light"`, or follow the page again
    /// with `"auto"`.
    pub fn set_mode(&self, mode: &str) -> Result<(), JsValue> {
        let pinned = match mode.trim() {
            "auto" => None,
            other => Some(
                other
                    .parse::<VisualMode>()
                    .map_err(|e| JsValue::from_str(&e.to_string()))?,
            ),
        };
        self.mode_override.set(pinned);
        Ok(())
    }
}

impl Drop for ParticleFieldHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Mount a field on `canvas_id` using `preset`, adjusted by any
/// `data-field-*` attributes on the canvas. Returns nothing when the canvas
/// or its 2D context is unavailable.
#[wasm_bindgen]
pub fn mount_field(canvas_id: &str, preset: &str) -> Result<Option<ParticleFieldHandle>, JsValue> {
    let config = FieldConfig::preset(preset).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(canvas_id, config).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

/// Stop every field mounted at start-up.
#[wasm_bindgen]
pub fn unmount_all() {
    let handles = AUTO_MOUNTED.with(|m| std::mem::take(&mut *m.borrow_mut()));
    log::info!("unmounting {} field(s)", handles.len());
    drop(handles);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    if let Err(e) = auto_mount() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn auto_mount() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    for (id, default_preset) in AUTO_MOUNTS {
        let Some(canvas) = dom::canvas_by_id(&document, id) else {
            continue;
        };
        let preset = dom::preset_attribute(&canvas).unwrap_or_else(|| default_preset.to_string());
        let config = match FieldConfig::preset(&preset) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[field {}] {}; using {}", id, e, default_preset);
                FieldConfig::preset(default_preset)?
            }
        };
        if let Some(handle) = mount(id, config)? {
            AUTO_MOUNTED.with(|m| m.borrow_mut().push(handle));
        }
    }
    Ok(())
}

fn mount(canvas_id: &str, preset: FieldConfig) -> anyhow::Result<Option<ParticleFieldHandle>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::canvas_by_id(&document, canvas_id) else {
        log::info!("[field {}] no canvas, skipping", canvas_id);
        return Ok(None);
    };
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("[field {}] 2d context unavailable, skipping", canvas_id);
        return Ok(None);
    };

    let overrides = dom::override_attributes(&canvas);
    let config = match preset
        .clone()
        .with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    {
        Ok(c) => c,
        Err(e) => {
            log::warn!("[field {}] ignoring overrides: {}", canvas_id, e);
            preset
        }
    };

    let anchor = config.anchor;
    let field = Rc::new(RefCell::new(ParticleField::new(config, rand::random())));
    let pointer = Rc::new(RefCell::new(PointerState::default()));
    let mode_override = Rc::new(Cell::new(None));

    let (width, height) = dom::sync_canvas_backing_size(&canvas, &ctx, anchor);
    field.borrow_mut().resize(width, height);
    log::info!(
        "[field {}] mounted {:.0}x{:.0} with {} particles",
        canvas_id,
        width,
        height,
        field.borrow().len()
    );

    let listeners = events::wire_input_handlers(&events::InputWiring {
        canvas: canvas.clone(),
        ctx: ctx.clone(),
        anchor,
        field: field.clone(),
        pointer: pointer.clone(),
    });

    let animation = frame::start_loop(frame::FrameContext {
        label: canvas_id.to_string(),
        document: document.clone(),
        field: field.clone(),
        pointer,
        mode_override: mode_override.clone(),
        painter: painter::CanvasPainter::new(ctx),
        stats: FrameStats::new(STATS_INTERVAL_FRAMES),
    });

    Ok(Some(ParticleFieldHandle {
        label: canvas_id.to_string(),
        field,
        mode_override,
        animation: Some(animation),
        listeners,
    }))
}
