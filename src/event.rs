//! Event handling.
//!
//! This library exposes an event-based interface for reacting to detection
//! and folding activity. [EventListeners](EventListener) can be registered on
//! the [FoldingProvider](crate::provider::FoldingProvider) with the
//! [add_listener](crate::provider::FoldingProvider::add_listener) method.
//! A host can drive its own concerns, such as gutter decorations, from these
//! events without this crate knowing about any editor API.
//!
//! A blanket implementation of [EventListener] for all `Fn(&Event)` is provided.

use crate::provider::FoldDirection;
use crate::range::FoldRange;

/// Represents something the folding provider did on behalf of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The provider (re)detected the docstring blocks of a document.
    RangesDetected {
        /// The identity key of the document.
        key: String,

        /// The number of detected blocks.
        count: usize,
    },

    /// The provider dropped the cached ranges of a document.
    CacheInvalidated {
        /// The identity key of the document.
        key: String,
    },

    /// The provider asked the host to fold or unfold a range.
    FoldRequested {
        /// Whether the range is to be folded or unfolded.
        direction: FoldDirection,

        /// The range the request applies to.
        range: FoldRange,
    },
}

/// Trait for consuming events.
pub trait EventListener {
    /// Called whenever a new event has been created.
    fn event(&mut self, event: &Event);
}

impl<F> EventListener for F where F: Fn(&Event) {
    fn event(&mut self, event: &Event) {
        self(event)
    }
}

pub(crate) struct EventDispatcher {
    listeners: Vec<Box<dyn EventListener>>,
}

impl EventDispatcher {
    pub fn new() -> EventDispatcher {
        EventDispatcher {
            listeners: Vec::new(),
        }
    }

    pub fn add_listener<L: EventListener + 'static>(&mut self, listener: L) {
        self.listeners.push(Box::new(listener) as Box<dyn EventListener>)
    }

    pub fn dispatch(&mut self, event: Event) {
        for listener in &mut self.listeners {
            listener.event(&event);
        }
    }
}
