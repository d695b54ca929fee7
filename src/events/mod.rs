pub mod pointer;
pub mod resize;

pub use pointer::wire_pointer_handlers;
pub use resize::{wire_resize, SizeWatch};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners that stay registered until [`Listeners::remove_all`].
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("addEventListener({kind}) failed: {:?}", e))?;
        self.entries.push(Listener {
            target: target.clone(),
            kind,
            closure,
        });
        Ok(())
    }

    pub fn remove_all(&mut self) {
        for l in self.entries.drain(..) {
            _ = l
                .target
                .remove_event_listener_with_callback(l.kind, l.closure.as_ref().unchecked_ref());
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
