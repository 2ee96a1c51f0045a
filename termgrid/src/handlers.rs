//! Element event handlers.
//!
//! Widgets register closures against the ids of the elements they build;
//! the host hit-tests input, then routes each event to the handler
//! registered for its target.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::event::Event;

/// A handler closure invoked with the event that triggered it.
pub type Handler = Arc<dyn Fn(&Event) + Send + Sync>;

/// Event name under which click handlers are registered.
pub const ON_CLICK: &str = "on_click";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Slot {
    element: String,
    event: String,
}

impl Slot {
    fn new(element: &str, event: &str) -> Self {
        Self {
            element: element.to_string(),
            event: event.to_string(),
        }
    }
}

/// Handlers keyed by element id and event name.
///
/// Cheap to clone; clones share the same table. Handlers refer to the
/// frame they were built for, so hosts clear the registry before each build.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    slots: Arc<RwLock<HashMap<Slot, Handler>>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `event` on `element_id`, replacing any previous one.
    pub fn register(&self, element_id: &str, event: &str, handler: Handler) {
        let mut slots = self.slots.write().unwrap_or_else(|e| e.into_inner());
        slots.insert(Slot::new(element_id, event), handler);
    }

    pub fn get(&self, element_id: &str, event: &str) -> Option<Handler> {
        let slots = self.slots.read().unwrap_or_else(|e| e.into_inner());
        slots.get(&Slot::new(element_id, event)).cloned()
    }

    pub fn clear(&self) {
        self.slots.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.slots.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.len())
            .finish()
    }
}

/// Route a click to the handler registered for its target.
///
/// Returns true if a handler ran.
pub fn dispatch(registry: &HandlerRegistry, event: &Event) -> bool {
    let Some(target) = event.target() else {
        return false;
    };

    // The registry lock is released before the handler runs.
    let Some(handler) = registry.get(target, ON_CLICK) else {
        log::trace!("no {ON_CLICK} handler for {target}");
        return false;
    };
    log::trace!("dispatching {ON_CLICK} to {target}");
    handler(event);
    true
}
