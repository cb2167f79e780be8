// Event listeners registered on one target, kept so they can all be removed
// again. Dropping the registry removes whatever is still attached.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

pub struct Listeners {
    target: EventTarget,
    entries: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl Listeners {
    pub fn new(target: EventTarget) -> Self {
        Listeners {
            target,
            entries: Vec::new(),
        }
    }

    pub fn listen<F>(&mut self, event_type: &'static str, handler: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.target
            .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        self.entries.push((event_type, closure));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remove_all(&mut self) {
        for (event_type, closure) in self.entries.drain(..) {
            // Removing a listener that is already gone is not an error in the DOM
            let _ = self
                .target
                .remove_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
