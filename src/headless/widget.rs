//! In-memory stand-ins for native widgets.

use std::fmt;

use crate::mvu::{Element, ElementKind, Layout, MessagePort};

/// Identity of a widget, unique within one renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub struct Widget {
    pub id: WidgetId,
    pub kind: WidgetKind,
}

/// Widget state. Interactive widgets keep the port of the element they
/// were built from for their whole life; retargeting happens inside the
/// port.
#[derive(Debug)]
pub enum WidgetKind {
    Label {
        text: String,
    },
    TextBox {
        text: String,
        changed: MessagePort<String>,
    },
    Button {
        label: String,
        clicked: MessagePort<()>,
    },
    CheckBox {
        label: String,
        checked: bool,
        changed: MessagePort<bool>,
    },
    StackPanel {
        layout: Layout,
        children: Vec<Widget>,
    },
}

impl WidgetKind {
    /// The element kind this widget renders.
    pub fn element_kind(&self) -> ElementKind {
        match self {
            WidgetKind::Label { .. } => ElementKind::Text,
            WidgetKind::TextBox { .. } => ElementKind::Input,
            WidgetKind::Button { .. } => ElementKind::Button,
            WidgetKind::CheckBox { .. } => ElementKind::Checkbox,
            WidgetKind::StackPanel { .. } => ElementKind::Panel,
        }
    }
}

/// Hands out monotonically increasing ids.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn next_id(&mut self) -> WidgetId {
        self.next += 1;
        WidgetId(self.next)
    }

    /// Number of widgets ever built.
    pub fn issued(&self) -> u64 {
        self.next
    }
}

impl Widget {
    /// Build a fresh widget subtree for `element`.
    pub fn build(element: &Element, ids: &mut IdAllocator) -> Widget {
        let id = ids.next_id();
        let kind = match element {
            Element::Text { content } => WidgetKind::Label {
                text: content.clone(),
            },
            Element::Input { content, changed } => WidgetKind::TextBox {
                text: content.clone(),
                changed: changed.clone(),
            },
            Element::Button { label, clicked } => WidgetKind::Button {
                label: label.clone(),
                clicked: clicked.clone(),
            },
            Element::Checkbox {
                label,
                checked,
                changed,
            } => WidgetKind::CheckBox {
                label: label.clone(),
                checked: *checked,
                changed: changed.clone(),
            },
            Element::Panel { layout, children } => WidgetKind::StackPanel {
                layout: *layout,
                children: children
                    .iter()
                    .map(|child| Widget::build(child, ids))
                    .collect(),
            },
        };
        Widget { id, kind }
    }

    /// Copy the visible fields of `element` onto this widget.
    ///
    /// Returns the element's kind on mismatch. Ports are left alone.
    pub fn update_from(&mut self, element: &Element) -> Result<(), ElementKind> {
        match (&mut self.kind, element) {
            (WidgetKind::Label { text }, Element::Text { content }) => {
                text.clone_from(content);
            }
            (WidgetKind::TextBox { text, .. }, Element::Input { content, .. }) => {
                text.clone_from(content);
            }
            (WidgetKind::Button { label, .. }, Element::Button { label: next, .. }) => {
                label.clone_from(next);
            }
            (
                WidgetKind::CheckBox { label, checked, .. },
                Element::Checkbox {
                    label: next_label,
                    checked: next_checked,
                    ..
                },
            ) => {
                label.clone_from(next_label);
                *checked = *next_checked;
            }
            (WidgetKind::StackPanel { layout, .. }, Element::Panel { layout: next, .. }) => {
                *layout = *next;
            }
            (_, other) => return Err(other.kind()),
        }
        Ok(())
    }

    pub fn children(&self) -> &[Widget] {
        match &self.kind {
            WidgetKind::StackPanel { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvu::ui::{button, column, input, text};
    use crate::mvu::Ui;

    fn element(ui: Ui<()>) -> crate::mvu::Node {
        ui.into_element()
    }

    #[test]
    fn build_assigns_ids_depth_first() {
        let tree = element(column(vec![text("a"), button("b", ())]));
        let mut ids = IdAllocator::default();

        let widget = Widget::build(&tree, &mut ids);

        assert_eq!(widget.id, WidgetId(1));
        let child_ids: Vec<_> = widget.children().iter().map(|w| w.id).collect();
        assert_eq!(child_ids, vec![WidgetId(2), WidgetId(3)]);
        assert_eq!(ids.issued(), 3);
    }

    #[test]
    fn update_keeps_identity_and_port() {
        let first = element(input("old", |_| ()));
        let second = element(input("new", |_| ()));
        let mut ids = IdAllocator::default();
        let mut widget = Widget::build(&first, &mut ids);

        widget.update_from(&second).unwrap();

        assert_eq!(widget.id, WidgetId(1));
        match (&widget.kind, &*first) {
            (WidgetKind::TextBox { text, changed }, Element::Input { changed: port, .. }) => {
                assert_eq!(text, "new");
                assert!(MessagePort::same_port(changed, port));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn update_rejects_other_kinds() {
        let mut ids = IdAllocator::default();
        let mut widget = Widget::build(&element(text("a")), &mut ids);

        let err = widget.update_from(&element(button("b", ()))).unwrap_err();

        assert_eq!(err, ElementKind::Button);
    }
}
