// Drawing surface the particle field paints onto. The browser build uses a
// canvas 2D context; anything else (tests) can implement the two calls.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait Surface {
    /// Paints `fill_style` over the whole `width` x `height` area.
    fn fade(&mut self, width: f64, height: f64, fill_style: &str);

    fn fill_circle(&mut self, center: &glm::DVec2, radius: f64, fill_style: &str);
}

impl Surface for CanvasRenderingContext2d {
    fn fade(&mut self, width: f64, height: f64, fill_style: &str) {
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(fill_style));
        self.fill_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: &glm::DVec2, radius: f64, fill_style: &str) {
        self.begin_path();
        if self
            .arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0)
            .is_err()
        {
            return;
        }
        #[allow(deprecated)]
        self.set_fill_style(&JsValue::from_str(fill_style));
        self.fill();
    }
}

// Grabs the 2D context from the canvas, None if the canvas can't provide one
// (detached during teardown, context lost, unsupported browser)
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

#[cfg(test)]
pub mod recording {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Fade {
            width: f64,
            height: f64,
            fill_style: String,
        },
        Circle {
            x: f64,
            y: f64,
            radius: f64,
            fill_style: String,
        },
    }

    // Surface that only remembers what it was asked to draw
    #[derive(Default)]
    pub struct RecordingSurface {
        pub calls: Vec<Call>,
    }

    impl RecordingSurface {
        pub fn circles(&self) -> usize {
            self.calls
                .iter()
                .filter(|call| matches!(call, Call::Circle { .. }))
                .count()
        }
    }

    impl Surface for RecordingSurface {
        fn fade(&mut self, width: f64, height: f64, fill_style: &str) {
            self.calls.push(Call::Fade {
                width,
                height,
                fill_style: fill_style.to_owned(),
            });
        }

        fn fill_circle(&mut self, center: &glm::DVec2, radius: f64, fill_style: &str) {
            self.calls.push(Call::Circle {
                x: center.x,
                y: center.y,
                radius,
                fill_style: fill_style.to_owned(),
            });
        }
    }
}
