#[macro_use]
mod utils;
pub mod color;
pub mod config;
pub mod field;
pub mod frame_loop;
pub mod listeners;
pub mod particle;
pub mod pointer;
pub mod renderer;

extern crate nalgebra_glm as glm;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::frame_loop::FrameLoop;
use crate::listeners::Listeners;
use crate::pointer::Pointer;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

pub struct Timer<'a> {
    name: &'a str,
}

impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        console::time_with_label(name);
        Timer { name }
    }
}

impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        console::time_end_with_label(self.name);
    }
}

// Everything the frame loop and the input listeners share
struct Scene {
    field: ParticleField,
    pointer: Pointer,
    // Frame callbacks that ran, drawn or skipped
    ticks: u32,
}

#[wasm_bindgen]
pub struct OrganismBackground {
    canvas: HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    frames: FrameLoop,
    listeners: Listeners,
}

#[wasm_bindgen]
impl OrganismBackground {
    // Starts animating on `canvas` straight away
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<OrganismBackground, JsValue> {
        OrganismBackground::with_config(canvas, FieldConfig::default())
    }

    pub fn mount(canvas_id: &str) -> Result<OrganismBackground, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or("no document to mount into")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| format!("no element with id '{}'", canvas_id))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| format!("element '{}' is not a canvas", canvas_id))?;
        OrganismBackground::new(canvas)
    }

    // Stops the frame loop and detaches every listener. Calling it again does nothing.
    pub fn teardown(&mut self) {
        if !self.frames.is_running() && self.listeners.is_empty() {
            return;
        }
        self.frames.cancel();
        self.listeners.remove_all();
        log!("organism background: torn down");
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn ticks(&self) -> u32 {
        self.scene.borrow().ticks
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.particles().len()
    }

    pub fn width(&self) -> f64 {
        self.scene.borrow().field.width()
    }

    pub fn height(&self) -> f64 {
        self.scene.borrow().field.height()
    }

    // Flat [x0, y0, x1, y1, ...]
    pub fn positions(&self) -> Vec<f64> {
        let scene = self.scene.borrow();
        let mut out = Vec::with_capacity(scene.field.particles().len() * 2);
        for p in scene.field.particles() {
            out.push(p.pos.x);
            out.push(p.pos.y);
        }
        out
    }
}

impl OrganismBackground {
    pub fn with_config(
        canvas: HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<OrganismBackground, JsValue> {
        let window = web_sys::window().ok_or("no global window")?;

        let (width, height) = fit_to_window(&window, &canvas)
            .unwrap_or((canvas.width() as f64, canvas.height() as f64));
        let field = ParticleField::new(config, width, height)?;
        let scene = Rc::new(RefCell::new(Scene {
            field,
            pointer: Pointer::default(),
            ticks: 0,
        }));

        let mut listeners = Listeners::new(EventTarget::from(window.clone()));
        {
            let window = window.clone();
            let canvas = canvas.clone();
            let scene = scene.clone();
            listeners.listen("resize", move |_: Event| {
                if let Some((width, height)) = fit_to_window(&window, &canvas) {
                    scene.borrow_mut().field.reset(width, height);
                }
            })?;
        }
        {
            let scene = scene.clone();
            listeners.listen("mousemove", move |event: Event| {
                if let Some(event) = event.dyn_ref::<MouseEvent>() {
                    let (x, y) = (event.client_x() as f64, event.client_y() as f64);
                    scene.borrow_mut().pointer.move_to(x, y);
                }
            })?;
        }
        {
            let scene = scene.clone();
            listeners.listen("mouseleave", move |_: Event| {
                scene.borrow_mut().pointer.leave();
            })?;
        }

        let frames = {
            let canvas = canvas.clone();
            let scene = scene.clone();
            FrameLoop::start(&window, move || {
                #[cfg(feature = "profile")]
                let _timer = Timer::new("OrganismBackground::frame");
                scene.borrow_mut().ticks += 1;
                let mut context = match renderer::context_2d(&canvas) {
                    Some(context) => context,
                    None => return,
                };
                let mut scene = scene.borrow_mut();
                let Scene { field, pointer, .. } = &mut *scene;
                field.frame(&mut context, pointer);
            })?
        };

        log!(
            "organism background: {} particles on {}x{}",
            config.particle_count,
            width,
            height
        );

        Ok(OrganismBackground {
            canvas,
            scene,
            frames,
            listeners,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn pointer(&self) -> Pointer {
        self.scene.borrow().pointer
    }
}

// Sizes the canvas to the window's inner size and returns the new size, None
// when the window won't report one
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Option<(f64, f64)> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    Some((canvas.width() as f64, canvas.height() as f64))
}
