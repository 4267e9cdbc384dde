//! Per-frame context and the `requestAnimationFrame` scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use vis_core::{Camera, Scheduler, Simulation};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_SEC;
use crate::input;
use crate::render;

pub struct FrameContext {
    pub sim: Simulation,
    pub gpu: render::GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub mouse: Rc<RefCell<input::MouseState>>,
    pub interaction: Rc<Cell<bool>>,
    pub camera: Camera,
}

impl FrameContext {
    pub fn frame(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT_SEC);

        // One input snapshot; every particle sees the same values.
        let pointer = {
            let ms = self.mouse.borrow();
            ms.seen.then(|| Vec2::new(ms.u, ms.v))
        };
        self.sim.set_pointer_uv(pointer);
        self.sim.set_interaction(self.interaction.get());

        let w = self.canvas.width();
        let h = self.canvas.height();
        if self.gpu.resize_if_needed(w, h) {
            self.camera = Camera::default_for_aspect(w as f32 / h.max(1) as f32);
            self.sim.set_camera(&self.camera);
        }

        self.sim.advance(dt);
        if let Err(e) = self.gpu.render(self.sim.particles(), &self.camera, dt) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// `requestAnimationFrame` implementation of the core's scheduler
/// capability. `stop` cancels the pending callback id synchronously, so a
/// torn-down visual can never receive another frame.
pub struct RafScheduler {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        }
    }

    fn request(&self) {
        if let Some(w) = web::window() {
            if let Some(t) = self.tick.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(t.as_ref().unchecked_ref()) {
                    self.raf_id.set(Some(id));
                }
            }
        }
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for RafScheduler {
    fn start(&mut self, mut on_frame: Box<dyn FnMut(f32)>) {
        self.stop();
        let raf_id = self.raf_id.clone();
        let tick = self.tick.clone();
        let mut last = Instant::now();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let now = Instant::now();
            let dt = (now - last).as_secs_f32();
            last = now;
            on_frame(dt);
            // Re-request only while the registration is still live.
            if let Some(w) = web::window() {
                if let Some(t) = tick.borrow().as_ref() {
                    if let Ok(id) = w.request_animation_frame(t.as_ref().unchecked_ref()) {
                        raf_id.set(Some(id));
                    }
                }
            }
        }) as Box<dyn FnMut()>));
        self.request();
    }

    fn stop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}
