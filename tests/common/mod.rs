//! Shared helpers for integration tests

#![allow(dead_code)]

pub mod fixtures;

use brand_gallery::controls::{EventBus, Subscription};
use brand_gallery::domain::{EventKind, GalleryEvent};
use std::cell::RefCell;
use std::rc::Rc;

/// Records every event of one kind published on a bus
pub struct EventLog {
    events: Rc<RefCell<Vec<GalleryEvent>>>,
    subscription: Subscription,
}

impl EventLog {
    pub fn attach(bus: &EventBus, kind: EventKind) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let subscription = bus.subscribe(kind, move |event| sink.borrow_mut().push(event.clone()));
        Self {
            events,
            subscription,
        }
    }

    pub fn events(&self) -> Vec<GalleryEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn detach(self, bus: &EventBus) {
        bus.unsubscribe(self.subscription);
    }
}

/// A fresh shared bus
pub fn new_bus() -> Rc<EventBus> {
    Rc::new(EventBus::new())
}
