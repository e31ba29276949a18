//! Serializable view of a widget tree.

use std::fmt;

use serde::Serialize;

use super::widget::{Widget, WidgetKind};
use crate::mvu::{Element, Layout, Path};

/// Visible state of a widget subtree, without ids or ports.
///
/// Two trees that look the same compare equal regardless of how they
/// were built, which is what convergence checks need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetSnapshot {
    Label {
        text: String,
    },
    TextBox {
        text: String,
    },
    Button {
        label: String,
    },
    CheckBox {
        label: String,
        checked: bool,
    },
    StackPanel {
        layout: Layout,
        children: Vec<WidgetSnapshot>,
    },
}

impl WidgetSnapshot {
    pub fn of(widget: &Widget) -> Self {
        match &widget.kind {
            WidgetKind::Label { text } => Self::Label { text: text.clone() },
            WidgetKind::TextBox { text, .. } => Self::TextBox { text: text.clone() },
            WidgetKind::Button { label, .. } => Self::Button {
                label: label.clone(),
            },
            WidgetKind::CheckBox { label, checked, .. } => Self::CheckBox {
                label: label.clone(),
                checked: *checked,
            },
            WidgetKind::StackPanel { layout, children } => Self::StackPanel {
                layout: *layout,
                children: children.iter().map(Self::of).collect(),
            },
        }
    }

    /// What a freshly built widget tree for `element` would look like.
    pub fn from_element(element: &Element) -> Self {
        match element {
            Element::Text { content } => Self::Label {
                text: content.clone(),
            },
            Element::Input { content, .. } => Self::TextBox {
                text: content.clone(),
            },
            Element::Button { label, .. } => Self::Button {
                label: label.clone(),
            },
            Element::Checkbox { label, checked, .. } => Self::CheckBox {
                label: label.clone(),
                checked: *checked,
            },
            Element::Panel { layout, children } => Self::StackPanel {
                layout: *layout,
                children: children.iter().map(|child| Self::from_element(child)).collect(),
            },
        }
    }
}

/// Indented outline of a widget tree, one line per widget, with the path
/// to use for event injection.
///
/// ```text
/// / panel vertical #1
///   /0 button "+" #2
///   /1 label "0" #3
/// ```
pub struct Outline<'a>(pub &'a Widget);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(Path::root(), self.0)];
        while let Some((path, widget)) = pending.pop() {
            let indent = "  ".repeat(path.depth());
            let id = &widget.id;
            match &widget.kind {
                WidgetKind::Label { text } => writeln!(f, "{indent}{path} label {text:?} {id}")?,
                WidgetKind::TextBox { text, .. } => {
                    writeln!(f, "{indent}{path} input {text:?} {id}")?
                }
                WidgetKind::Button { label, .. } => {
                    writeln!(f, "{indent}{path} button {label:?} {id}")?
                }
                WidgetKind::CheckBox { label, checked, .. } => {
                    let mark = if *checked { "[x]" } else { "[ ]" };
                    writeln!(f, "{indent}{path} checkbox {mark} {label:?} {id}")?
                }
                WidgetKind::StackPanel { layout, .. } => {
                    writeln!(f, "{indent}{path} panel {layout} {id}")?
                }
            }
            pending.extend(
                widget
                    .children()
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(index, child)| (path.child(index), child)),
            );
        }
        Ok(())
    }
}
