#![cfg(target_arch = "wasm32")]
//! WASM entry point: exposes `ParticleVisual` to the hosting page and wires
//! input, scheduling, and the WebGPU adapter around the simulation core.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::anyhow;
use vis_core::{Camera, Jitter, Scheduler, Simulation, VariantKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vis-web starting");
    Ok(())
}

struct Mounted {
    scheduler: Rc<RefCell<frame::RafScheduler>>,
    /// Set before `stop` on unmount so a GPU bring-up still in flight never
    /// starts the loop afterwards.
    cancelled: Rc<Cell<bool>>,
}

/// One mounted (or mountable) particle visual. The hosting page constructs
/// it with a variant name, mounts it into a canvas, and unmounts it when the
/// section leaves the viewport; re-mounting re-samples and re-randomizes.
#[wasm_bindgen]
pub struct ParticleVisual {
    kind: VariantKind,
    interaction: Rc<Cell<bool>>,
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleVisual {
    /// `variant` is one of "emblem", "cube-letters", "soundwave",
    /// "node-graph".
    #[wasm_bindgen(constructor)]
    pub fn new(variant: &str) -> Result<ParticleVisual, JsValue> {
        let kind =
            VariantKind::from_name(variant).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            kind,
            interaction: Rc::new(Cell::new(false)),
            mounted: None,
        })
    }

    /// Build the scene into the canvas with the given element id and start
    /// the frame loop. GPU bring-up is asynchronous; a visual unmounted
    /// before it completes simply never starts.
    pub fn mount(&mut self, canvas_id: String) -> Result<(), JsValue> {
        if self.mounted.is_some() {
            return Err(JsValue::from_str("already mounted"));
        }
        let scheduler = Rc::new(RefCell::new(frame::RafScheduler::new()));
        let cancelled = Rc::new(Cell::new(false));
        let kind = self.kind;
        let interaction = self.interaction.clone();
        {
            let scheduler = scheduler.clone();
            let cancelled = cancelled.clone();
            spawn_local(async move {
                if let Err(e) =
                    mount_inner(kind, canvas_id, interaction, scheduler, cancelled).await
                {
                    log::error!("[mount] {e:?}");
                }
            });
        }
        self.mounted = Some(Mounted {
            scheduler,
            cancelled,
        });
        Ok(())
    }

    /// Cancel the frame callback synchronously, then let the scene drop. A
    /// stale callback mutating freed state is impossible by construction.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            m.cancelled.set(true);
            m.scheduler.borrow_mut().stop();
            log::info!("[mount] unmounted");
        }
    }

    /// Gate for variants whose final phase is interaction-driven.
    pub fn set_interaction_flag(&mut self, on: bool) {
        self.interaction.set(on);
    }
}

async fn mount_inner(
    kind: VariantKind,
    canvas_id: String,
    interaction: Rc<Cell<bool>>,
    scheduler: Rc<RefCell<frame::RafScheduler>>,
    cancelled: Rc<Cell<bool>>,
) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(&canvas_id)
        .ok_or_else(|| anyhow!("missing #{canvas_id}"))?
        .dyn_into()
        .map_err(|e| anyhow!("{e:?}"))?;
    dom::wire_canvas_resize(&canvas);

    let config = kind.config();
    let mut sim = Simulation::new(&config, Jitter::Entropy, None)?;
    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let camera = Camera::default_for_aspect(aspect);
    sim.set_camera(&camera);

    let mouse = Rc::new(RefCell::new(input::MouseState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        mouse: mouse.clone(),
        interaction: interaction.clone(),
    });
    events::wire_transform_toggle_t(interaction.clone());

    // Leak one canvas clone per mount to satisfy the surface's 'static
    // lifetime, as the surface cannot outlive its target.
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    let gpu = render::GpuState::new(
        leaked_canvas,
        sim.len(),
        config.particle_radius,
        config.color,
    )
    .await?;
    if cancelled.get() {
        return Ok(());
    }

    let ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        gpu,
        canvas,
        mouse,
        interaction,
        camera,
    }));
    let ctx_tick = ctx.clone();
    scheduler
        .borrow_mut()
        .start(Box::new(move |dt| ctx_tick.borrow_mut().frame(dt)));
    Ok(())
}
