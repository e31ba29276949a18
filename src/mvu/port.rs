//! Message ports: swappable callback cells attached to interactive leaves.
//!
//! A port is a cell holding a shared cell holding a callback. Native
//! widgets keep a clone of the port and only ever fire it; retargeting
//! happens by changing what the inner cell holds, so the widget itself is
//! never touched.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Callback installed in a port.
pub type Handler<T> = Rc<dyn Fn(T)>;

type Slot<T> = Rc<RefCell<Handler<T>>>;

pub struct MessagePort<T> {
    outer: Rc<RefCell<Slot<T>>>,
}

impl<T: 'static> MessagePort<T> {
    /// Create a port holding a no-op handler.
    pub fn new() -> Self {
        Self::with_handler(|_| {})
    }

    pub fn with_handler(handler: impl Fn(T) + 'static) -> Self {
        let handler: Handler<T> = Rc::new(handler);
        Self {
            outer: Rc::new(RefCell::new(Rc::new(RefCell::new(handler)))),
        }
    }

    /// Install `handler` into the inner cell.
    ///
    /// Every clone of this port, and every port linked to it by
    /// [`MessagePort::rewire`], observes the new handler.
    pub fn bind(&self, handler: impl Fn(T) + 'static) {
        let handler: Handler<T> = Rc::new(handler);
        self.slot().replace(handler);
    }

    /// Invoke the currently installed handler.
    ///
    /// All borrows are released before the call, so the handler may bind,
    /// swap or rewire ports (including this one).
    pub fn fire(&self, value: T) {
        let handler = self.handler();
        handler(value);
    }

    /// The handler currently reachable from this port.
    pub fn handler(&self) -> Handler<T> {
        let slot = self.slot();
        let handler = Rc::clone(&slot.borrow());
        handler
    }

    /// Full symmetric swap of the two ports' handlers.
    ///
    /// Afterwards firing `a` runs what was bound to `b` and vice versa.
    pub fn swap(a: &Self, b: &Self) {
        let (slot_a, slot_b) = (a.slot(), b.slot());
        if Rc::ptr_eq(&slot_a, &slot_b) {
            return;
        }
        slot_a.swap(&slot_b);
    }

    /// Retarget `old` to `new`'s handler without touching whoever holds `old`.
    ///
    /// The inner cell reachable from `old` receives `new`'s handler and
    /// `new` adopts that same inner cell, so a later `rewire(new, newer)`
    /// still reaches every widget created from `old`. Returns the handler
    /// that was displaced from `old`.
    ///
    /// Matching is positional, so this cannot follow a port that moved.
    /// When two reused nodes trade places, `rewire(a, b)` is followed by
    /// `rewire(b, a)`: both ports end up linked to one inner cell and one
    /// of the two handlers is dropped. Use [`MessagePort::swap`] when the
    /// exchange is known to be symmetric.
    pub fn rewire(old: &Self, new: &Self) -> Handler<T> {
        let target = old.slot();
        let incoming = new.handler();
        let displaced = target.replace(incoming);
        *new.outer.borrow_mut() = target;
        displaced
    }

    /// True when both values are clones of the same port.
    pub fn same_port(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.outer, &b.outer)
    }

    /// True when firing either port reaches the same inner cell.
    pub fn is_linked(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot(), &other.slot())
    }

    fn slot(&self) -> Slot<T> {
        Rc::clone(&self.outer.borrow())
    }
}

impl<T: 'static> Default for MessagePort<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MessagePort<T> {
    fn clone(&self) -> Self {
        Self {
            outer: Rc::clone(&self.outer),
        }
    }
}

/// Ports compare by identity, never by handler.
impl<T> PartialEq for MessagePort<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.outer, &other.outer)
    }
}

impl<T> fmt::Debug for MessagePort<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MessagePort({:p})", Rc::as_ptr(&self.outer))
    }
}

/// A deferred port retarget produced by the differ.
///
/// Running it is a pure in-memory pointer swap with no dependency on the
/// native tree, so it may run before any positional patch.
#[derive(Debug, Clone, PartialEq)]
pub enum PortRewire {
    Input {
        old: MessagePort<String>,
        new: MessagePort<String>,
    },
    Button {
        old: MessagePort<()>,
        new: MessagePort<()>,
    },
    Checkbox {
        old: MessagePort<bool>,
        new: MessagePort<bool>,
    },
}

impl PortRewire {
    pub fn apply(&self) {
        match self {
            PortRewire::Input { old, new } => {
                MessagePort::rewire(old, new);
            }
            PortRewire::Button { old, new } => {
                MessagePort::rewire(old, new);
            }
            PortRewire::Checkbox { old, new } => {
                MessagePort::rewire(old, new);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Handler<()>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let make = move |tag: &'static str| -> Handler<()> {
            let sink = Rc::clone(&sink);
            Rc::new(move |_: ()| sink.borrow_mut().push(tag))
        };
        (log, make)
    }

    #[test]
    fn new_port_is_a_noop() {
        let port: MessagePort<u32> = MessagePort::new();
        port.fire(7);
    }

    #[test]
    fn bind_is_visible_through_clones() {
        let hits = Rc::new(Cell::new(0));
        let port: MessagePort<u32> = MessagePort::new();
        let held_by_widget = port.clone();

        let counter = Rc::clone(&hits);
        port.bind(move |n| counter.set(counter.get() + n));
        held_by_widget.fire(3);

        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn swap_exchanges_handlers_both_ways() {
        let (log, make) = recorder();
        let p1: MessagePort<()> = MessagePort::new();
        let p2: MessagePort<()> = MessagePort::new();
        let h1 = make("one");
        let h2 = make("two");
        p1.bind(move |v| h1(v));
        p2.bind(move |v| h2(v));

        MessagePort::swap(&p1, &p2);
        p1.fire(());
        p2.fire(());

        assert_eq!(*log.borrow(), vec!["two", "one"]);
    }

    #[test]
    fn rewire_routes_old_port_to_new_handler() {
        let (log, make) = recorder();
        let old: MessagePort<()> = MessagePort::new();
        let new: MessagePort<()> = MessagePort::new();
        let h_old = make("old");
        let h_new = make("new");
        old.bind(move |v| h_old(v));
        new.bind(move |v| h_new(v));
        let widget = old.clone();

        MessagePort::rewire(&old, &new);
        widget.fire(());

        assert_eq!(*log.borrow(), vec!["new"]);
        assert!(old.is_linked(&new));
        assert!(!MessagePort::same_port(&old, &new));
    }

    #[test]
    fn rewire_chain_keeps_first_widget_current() {
        let (log, make) = recorder();
        let first: MessagePort<()> = MessagePort::new();
        let widget = first.clone();
        let mut previous = first;

        for tag in ["a", "b", "c"] {
            let next: MessagePort<()> = MessagePort::new();
            let handler = make(tag);
            next.bind(move |v| handler(v));
            MessagePort::rewire(&previous, &next);
            previous = next;
        }
        widget.fire(());

        assert_eq!(*log.borrow(), vec!["c"]);
    }

    #[test]
    fn crossed_rewires_collapse_onto_one_handler() {
        let (log, make) = recorder();
        let a: MessagePort<()> = MessagePort::new();
        let b: MessagePort<()> = MessagePort::new();
        let h_a = make("a");
        let h_b = make("b");
        a.bind(move |v| h_a(v));
        b.bind(move |v| h_b(v));
        let (widget_a, widget_b) = (a.clone(), b.clone());

        MessagePort::rewire(&a, &b);
        MessagePort::rewire(&b, &a);
        widget_a.fire(());
        widget_b.fire(());

        assert!(a.is_linked(&b));
        assert_eq!(*log.borrow(), vec!["b", "b"]);
    }

    #[test]
    fn rewire_returns_displaced_handler() {
        let (log, make) = recorder();
        let old: MessagePort<()> = MessagePort::new();
        let h_old = make("old");
        old.bind(move |v| h_old(v));

        let displaced = MessagePort::rewire(&old, &MessagePort::new());
        displaced(());

        assert_eq!(*log.borrow(), vec!["old"]);
    }

    #[test]
    fn handler_may_rebind_its_own_port() {
        let port: MessagePort<()> = MessagePort::new();
        let inner = port.clone();
        let fired = Rc::new(Cell::new(0));
        let seen = Rc::clone(&fired);
        port.bind(move |_| {
            seen.set(seen.get() + 1);
            inner.bind(|_| {});
        });

        port.fire(());
        port.fire(());

        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn port_rewire_compares_by_port_identity() {
        let old = MessagePort::<()>::new();
        let new = MessagePort::<()>::new();
        let a = PortRewire::Button {
            old: old.clone(),
            new: new.clone(),
        };
        let b = PortRewire::Button {
            old,
            new: MessagePort::new(),
        };

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
