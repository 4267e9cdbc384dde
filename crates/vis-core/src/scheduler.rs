//! Frame-scheduling capability injected into the render adapters.
//!
//! The web frontend implements [`Scheduler`] over `requestAnimationFrame`;
//! the native event loop drives frames directly. Tests use
//! [`ManualScheduler`], which advances simulated time synchronously, so the
//! whole pipeline runs without a display.

/// Per-frame scheduling primitive supplied by the host environment.
pub trait Scheduler {
    /// Begin invoking `on_frame` with the seconds elapsed since its previous
    /// invocation, once per display refresh, until [`stop`](Self::stop).
    fn start(&mut self, on_frame: Box<dyn FnMut(f32)>);

    /// Deregister the callback. Must take effect synchronously: after this
    /// returns, the callback can never fire again, so a torn-down visual
    /// cannot touch freed state.
    fn stop(&mut self);
}

/// Fixed-step scheduler for tests and headless tooling.
pub struct ManualScheduler {
    step_sec: f32,
    on_frame: Option<Box<dyn FnMut(f32)>>,
}

impl ManualScheduler {
    pub fn new(step_sec: f32) -> Self {
        Self {
            step_sec,
            on_frame: None,
        }
    }

    /// Drive `frames` callbacks back to back.
    pub fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            match self.on_frame.as_mut() {
                Some(f) => f(self.step_sec),
                None => break,
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.on_frame.is_some()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, on_frame: Box<dyn FnMut(f32)>) {
        self.on_frame = Some(on_frame);
    }

    fn stop(&mut self) {
        self.on_frame = None;
    }
}
