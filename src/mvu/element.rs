//! Immutable element tree.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::port::MessagePort;

/// Shared handle to an element. The differ short-circuits on pointer
/// equality, so views that reuse a node get a free no-op diff.
pub type Node = Rc<Element>;

/// Panel axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Horizontal,
    Vertical,
}

/// One UI node.
///
/// Structural fields are write-once. The only mutable parts are the
/// leaves' message ports, which the differ retargets in place.
///
/// Equality is structural on visible fields; ports compare by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        content: String,
    },
    Input {
        content: String,
        changed: MessagePort<String>,
    },
    Button {
        label: String,
        clicked: MessagePort<()>,
    },
    Checkbox {
        label: String,
        checked: bool,
        changed: MessagePort<bool>,
    },
    Panel {
        layout: Layout,
        children: Vec<Node>,
    },
}

/// Discriminant of [`Element`], used for logging and renderer checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Input,
    Button,
    Checkbox,
    Panel,
}

impl Element {
    pub fn text(content: impl Into<String>) -> Node {
        Rc::new(Element::Text {
            content: content.into(),
        })
    }

    pub fn input(content: impl Into<String>, changed: MessagePort<String>) -> Node {
        Rc::new(Element::Input {
            content: content.into(),
            changed,
        })
    }

    pub fn button(label: impl Into<String>, clicked: MessagePort<()>) -> Node {
        Rc::new(Element::Button {
            label: label.into(),
            clicked,
        })
    }

    pub fn checkbox(label: impl Into<String>, checked: bool, changed: MessagePort<bool>) -> Node {
        Rc::new(Element::Checkbox {
            label: label.into(),
            checked,
            changed,
        })
    }

    pub fn panel(layout: Layout, children: Vec<Node>) -> Node {
        Rc::new(Element::Panel { layout, children })
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Text { .. } => ElementKind::Text,
            Element::Input { .. } => ElementKind::Input,
            Element::Button { .. } => ElementKind::Button,
            Element::Checkbox { .. } => ElementKind::Checkbox,
            Element::Panel { .. } => ElementKind::Panel,
        }
    }

    /// Children of a panel; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Element::Panel { children, .. } => children,
            _ => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(element) = pending.pop() {
            count += 1;
            pending.extend(element.children().iter().map(|child| &**child));
        }
        count
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Text => "text",
            ElementKind::Input => "input",
            ElementKind::Button => "button",
            ElementKind::Checkbox => "checkbox",
            ElementKind::Panel => "panel",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Horizontal => f.write_str("horizontal"),
            Layout::Vertical => f.write_str("vertical"),
        }
    }
}
