// requestAnimationFrame driven loop. The loop owns its closure and the id of
// the frame it last requested, and stops for good once its token is cancelled.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct FrameLoop {
    window: Window,
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    // Calls `frame` once per display refresh until cancelled. The first frame
    // is requested before this returns.
    pub fn start<F>(window: &Window, mut frame: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut() + 'static,
    {
        let token = CancelToken::new();
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let closure = {
            let window = window.clone();
            let token = token.clone();
            let pending = pending.clone();
            // Weak so the closure doesn't keep itself alive once the loop drops it
            let this = Rc::downgrade(&callback);
            Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                if !tick(&token, &mut frame) {
                    return;
                }
                let this = match this.upgrade() {
                    Some(this) => this,
                    None => return,
                };
                let this = this.borrow();
                if let Some(callback) = this.as_ref() {
                    // Nothing useful to do if the browser refuses; the loop just ends
                    if let Ok(id) = request_frame(&window, callback) {
                        pending.set(Some(id));
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = request_frame(window, &closure)?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(closure);

        Ok(FrameLoop {
            window: window.clone(),
            token,
            pending,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    // Safe to call any number of times
    pub fn cancel(&mut self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            // Only fails for a window that is already gone, which can't run the frame either
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the closure here is fine: nothing can call it any more
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

// Runs one frame unless the loop was cancelled. Returns whether to request the
// next one, which is never the case once the token is cancelled, even by the
// frame itself.
fn tick<F: FnMut()>(token: &CancelToken, frame: &mut F) -> bool {
    if token.is_cancelled() {
        return false;
    }
    frame();
    !token.is_cancelled()
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    window.request_animation_frame(callback.as_ref().unchecked_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_live() {
        assert!(!CancelToken::new().is_cancelled());
    }

    #[test]
    fn cancelling_is_shared_between_clones() {
        let token = CancelToken::new();
        let seen_by_loop = token.clone();
        token.cancel();
        assert!(seen_by_loop.is_cancelled());
    }

    #[test]
    fn live_loop_runs_frame_and_reschedules() {
        let token = CancelToken::new();
        let mut frames = 0;
        assert!(tick(&token, &mut || frames += 1));
        assert!(tick(&token, &mut || frames += 1));
        assert_eq!(frames, 2);
    }

    #[test]
    fn cancelled_loop_never_runs_frame() {
        let token = CancelToken::new();
        token.cancel();
        let mut frames = 0;
        for _ in 0..3 {
            assert!(!tick(&token, &mut || frames += 1));
        }
        assert_eq!(frames, 0);
    }

    #[test]
    fn cancelling_from_inside_a_frame_stops_rescheduling() {
        let token = CancelToken::new();
        let inner = token.clone();
        let mut frames = 0;
        let reschedule = tick(&token, &mut || {
            frames += 1;
            inner.cancel();
        });
        assert!(!reschedule);
        assert_eq!(frames, 1);
        assert!(!tick(&token, &mut || frames += 1));
        assert_eq!(frames, 1);
    }

    #[test]
    fn cancelling_twice_is_harmless() {
        let token = CancelToken::new();
        token.cancel();
        token.cancel();
        assert!(token.is_cancelled());
    }
}
