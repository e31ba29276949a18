//! View builders: element trees annotated with a message type.
//!
//! Every [`Ui`] carries a sink port. Leaf builders bind their element's
//! port to a closure that turns the raw widget value into a message and
//! fires the sink; panels point each child's sink at their own; the
//! runtime binds the root sink to its dispatch function.

use std::rc::Rc;

use super::element::{Element, Layout, Node};
use super::port::MessagePort;

/// An element tree whose interactive leaves produce messages of type `M`.
pub struct Ui<M> {
    element: Node,
    sink: MessagePort<M>,
}

impl<M: 'static> Ui<M> {
    /// Wrap an element built elsewhere. Its ports stay as they are.
    pub fn new(element: Node) -> Self {
        Self {
            element,
            sink: MessagePort::new(),
        }
    }

    pub fn element(&self) -> &Node {
        &self.element
    }

    pub fn into_element(self) -> Node {
        self.element
    }

    /// Port that receives every message this tree produces.
    pub fn sink(&self) -> &MessagePort<M> {
        &self.sink
    }

    /// Route messages produced by this tree to `handler`.
    pub fn on_message(&self, handler: impl Fn(M) + 'static) {
        self.sink.bind(handler);
    }

    /// Same element tree, messages transformed by `f`.
    pub fn map<N: 'static>(self, f: impl Fn(M) -> N + 'static) -> Ui<N> {
        let target = Ui::new(self.element);
        let sink = target.sink.clone();
        self.sink.bind(move |message| sink.fire(f(message)));
        target
    }
}

impl<M> std::fmt::Debug for Ui<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("element", &self.element)
            .finish_non_exhaustive()
    }
}

pub fn text<M: 'static>(content: impl Into<String>) -> Ui<M> {
    Ui::new(Element::text(content))
}

/// Text box; `on_change` maps the new content to a message.
pub fn input<M: 'static>(
    content: impl Into<String>,
    on_change: impl Fn(String) -> M + 'static,
) -> Ui<M> {
    let changed = MessagePort::new();
    let ui = Ui::new(Element::input(content, changed.clone()));
    let sink = ui.sink.clone();
    changed.bind(move |value| sink.fire(on_change(value)));
    ui
}

/// Button that sends a copy of `message` on every click.
pub fn button<M: Clone + 'static>(label: impl Into<String>, message: M) -> Ui<M> {
    button_with(label, move || message.clone())
}

pub fn button_with<M: 'static>(
    label: impl Into<String>,
    on_click: impl Fn() -> M + 'static,
) -> Ui<M> {
    let clicked = MessagePort::new();
    let ui = Ui::new(Element::button(label, clicked.clone()));
    let sink = ui.sink.clone();
    clicked.bind(move |()| sink.fire(on_click()));
    ui
}

pub fn checkbox<M: 'static>(
    label: impl Into<String>,
    checked: bool,
    on_change: impl Fn(bool) -> M + 'static,
) -> Ui<M> {
    let changed = MessagePort::new();
    let ui = Ui::new(Element::checkbox(label, checked, changed.clone()));
    let sink = ui.sink.clone();
    changed.bind(move |value| sink.fire(on_change(value)));
    ui
}

pub fn panel<M: 'static>(layout: Layout, children: impl IntoIterator<Item = Ui<M>>) -> Ui<M> {
    let sink: MessagePort<M> = MessagePort::new();
    let children: Vec<Node> = children
        .into_iter()
        .map(|child| {
            let parent = sink.clone();
            child.sink.bind(move |message| parent.fire(message));
            child.element
        })
        .collect();

    Ui {
        element: Rc::new(Element::Panel { layout, children }),
        sink,
    }
}

pub fn row<M: 'static>(children: impl IntoIterator<Item = Ui<M>>) -> Ui<M> {
    panel(Layout::Horizontal, children)
}

pub fn column<M: 'static>(children: impl IntoIterator<Item = Ui<M>>) -> Ui<M> {
    panel(Layout::Vertical, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Clicked,
        Typed(String),
        Checked(bool),
    }

    fn capture<M: 'static>(ui: &Ui<M>) -> Rc<RefCell<Vec<M>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        ui.on_message(move |message| log.borrow_mut().push(message));
        seen
    }

    fn child_port<T>(tree: &Node, index: usize, pick: impl Fn(&Element) -> Option<MessagePort<T>>) -> MessagePort<T> {
        pick(&tree.children()[index]).expect("expected interactive child")
    }

    #[test]
    fn leaf_ports_reach_the_root_sink_through_panels() {
        let ui = column(vec![
            text("title"),
            row(vec![
                button("go", Msg::Clicked),
                input("", Msg::Typed),
                checkbox("done", false, Msg::Checked),
            ]),
        ]);
        let seen = capture(&ui);
        let inner = Rc::clone(&ui.element().children()[1]);

        child_port(&inner, 0, |e| match e {
            Element::Button { clicked, .. } => Some(clicked.clone()),
            _ => None,
        })
        .fire(());
        child_port(&inner, 1, |e| match e {
            Element::Input { changed, .. } => Some(changed.clone()),
            _ => None,
        })
        .fire("hi".to_string());
        child_port(&inner, 2, |e| match e {
            Element::Checkbox { changed, .. } => Some(changed.clone()),
            _ => None,
        })
        .fire(true);

        assert_eq!(
            *seen.borrow(),
            vec![Msg::Clicked, Msg::Typed("hi".to_string()), Msg::Checked(true)]
        );
    }

    #[test]
    fn map_transforms_messages_and_keeps_the_element() {
        let inner = button("+", 1_i32);
        let element = Rc::clone(inner.element());
        let mapped = inner.map(|n| n * 10);
        let seen = capture(&mapped);

        assert!(Rc::ptr_eq(mapped.element(), &element));
        if let Element::Button { clicked, .. } = &**mapped.element() {
            clicked.fire(());
        }

        assert_eq!(*seen.borrow(), vec![10]);
    }

    #[test]
    fn unbound_root_drops_messages_silently() {
        let ui = button("x", Msg::Clicked);
        if let Element::Button { clicked, .. } = &**ui.element() {
            clicked.fire(());
        }
    }
}
