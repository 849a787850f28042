//! Synchronous publish/subscribe bus for gallery signals
//!
//! The bus is an explicit object handed to every control (usually as
//! `Rc<EventBus>`) instead of an ambient document-level channel. Delivery is
//! synchronous, on the calling thread, in subscription order. There is no
//! buffering: a listener only sees events published while it is subscribed.
//!
//! Handlers may publish, subscribe or unsubscribe from inside a delivery.
//! Listeners added during a publish are not called for that publish; listeners
//! removed during a publish are not called after their removal.

use brand_gallery_core::{EventKind, GalleryEvent};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

type Handler = Rc<dyn Fn(&GalleryEvent)>;

struct Listener {
    id: u64,
    kind: EventKind,
    handler: Handler,
    active: Rc<Cell<bool>>,
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "dropping a Subscription leaves the listener registered"]
pub struct Subscription {
    id: u64,
    kind: EventKind,
}

impl Subscription {
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

/// Single-threaded event bus
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<Listener>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind` until unsubscribed
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> Subscription
    where
        F: Fn(&GalleryEvent) + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            kind,
            handler: Rc::new(handler),
            active: Rc::new(Cell::new(true)),
        });
        trace!(subscription = id, event = %kind, "Subscribed");
        Subscription { id, kind }
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        match listeners.iter().position(|l| l.id == subscription.id) {
            Some(index) => {
                let listener = listeners.remove(index);
                listener.active.set(false);
                trace!(subscription = subscription.id, event = %subscription.kind, "Unsubscribed");
                true
            }
            None => false,
        }
    }

    /// Deliver `event` to every current listener of its kind
    ///
    /// Returns the number of listeners called.
    pub fn publish(&self, event: GalleryEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<(Handler, Rc<Cell<bool>>)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| (Rc::clone(&l.handler), Rc::clone(&l.active)))
            .collect();

        debug!(event = %event, listeners = targets.len(), "Publishing");

        let mut delivered = 0;
        for (handler, active) in targets {
            if active.get() {
                handler(&event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of listeners registered for `kind`
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|l| l.kind == kind)
            .count()
    }

    /// Number of listeners registered for any kind
    pub fn total_listeners(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.total_listeners())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Recorder;
    use super::*;
    use brand_gallery_core::SortOption;

    #[test]
    fn test_delivers_only_matching_kind() {
        let bus = EventBus::new();
        let formats = Recorder::attach(&bus, EventKind::FormatFilterChange);
        let sorts = Recorder::attach(&bus, EventKind::SortOptionChange);

        bus.publish(GalleryEvent::format_filter_change("SVG"));

        assert_eq!(formats.events(), vec![GalleryEvent::format_filter_change("SVG")]);
        assert!(sorts.events().is_empty());
    }

    #[test]
    fn test_delivers_in_subscription_order() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = Rc::clone(&order);
            let _ = bus.subscribe(EventKind::ResetFormatFilter, move |_| order.borrow_mut().push(n));
        }

        assert_eq!(bus.publish(GalleryEvent::ResetFormatFilter), 3);
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_replay_for_late_subscribers() {
        let bus = EventBus::new();
        bus.publish(GalleryEvent::sort_option_change(SortOption::NameDesc));
        let late = Recorder::attach(&bus, EventKind::SortOptionChange);
        assert!(late.events().is_empty());
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let recorder = Recorder::attach(&bus, EventKind::FormatFilterChange);
        assert_eq!(bus.listener_count(EventKind::FormatFilterChange), 1);

        assert!(bus.unsubscribe(recorder.subscription));
        assert!(!bus.unsubscribe(recorder.subscription));
        assert_eq!(bus.total_listeners(), 0);

        assert_eq!(bus.publish(GalleryEvent::format_filter_change("PNG")), 0);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_handler_can_publish_reentrantly() {
        let bus = Rc::new(EventBus::new());
        let weak = Rc::downgrade(&bus);
        let _ = bus.subscribe(EventKind::ResetFormatFilter, move |_| {
            if let Some(bus) = weak.upgrade() {
                bus.publish(GalleryEvent::format_filter_change(""));
            }
        });
        let formats = Recorder::attach(&bus, EventKind::FormatFilterChange);

        bus.publish(GalleryEvent::ResetFormatFilter);

        assert_eq!(formats.events(), vec![GalleryEvent::format_filter_change("")]);
    }

    #[test]
    fn test_listener_removed_mid_publish_is_skipped() {
        let bus = Rc::new(EventBus::new());
        let victim: Rc<Cell<Option<Subscription>>> = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(&bus);
        let target = Rc::clone(&victim);
        let _ = bus.subscribe(EventKind::ResetFormatFilter, move |_| {
            if let (Some(bus), Some(sub)) = (weak.upgrade(), target.take()) {
                bus.unsubscribe(sub);
            }
        });
        let recorder = Recorder::attach(&bus, EventKind::ResetFormatFilter);
        victim.set(Some(recorder.subscription));

        assert_eq!(bus.publish(GalleryEvent::ResetFormatFilter), 1);
        assert!(recorder.events().is_empty());
    }

    #[test]
    fn test_listener_added_mid_publish_waits_for_next() {
        let bus = Rc::new(EventBus::new());
        let added = Rc::new(Cell::new(0));

        let weak = Rc::downgrade(&bus);
        let counter = Rc::clone(&added);
        let _ = bus.subscribe(EventKind::ResetFormatFilter, move |_| {
            if let Some(bus) = weak.upgrade() {
                let counter = Rc::clone(&counter);
                let _ = bus.subscribe(EventKind::ResetFormatFilter, move |_| {
                    counter.set(counter.get() + 1)
                });
            }
        });

        assert_eq!(bus.publish(GalleryEvent::ResetFormatFilter), 1);
        assert_eq!(added.get(), 0);
        assert_eq!(bus.listener_count(EventKind::ResetFormatFilter), 2);
    }
}
