//! In-memory native renderer.
//!
//! Keeps a widget tree that mirrors what a desktop toolkit would hold and
//! lets callers inject user events by path. Used by the integration tests
//! and by the `teacup run` command.
//!
//! [`HeadlessRenderer`] is a cheap handle: one clone goes to the runtime,
//! the other stays with the host to read snapshots and inject events.

mod snapshot;
mod widget;

pub use snapshot::{Outline, WidgetSnapshot};
pub use widget::WidgetId;

use std::cell::RefCell;
use std::rc::Rc;

use crate::mvu::{ElementKind, MessagePort, Patch, Path};
use crate::render::{NativeRenderer, RenderError};
use widget::{IdAllocator, Widget, WidgetKind};

#[derive(Debug, Default)]
struct Window {
    content: Option<Widget>,
    ids: IdAllocator,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    window: Rc<RefCell<Window>>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible state of the window content; `None` before the first insert.
    pub fn snapshot(&self) -> Option<WidgetSnapshot> {
        self.window.borrow().content.as_ref().map(WidgetSnapshot::of)
    }

    /// Outline of the widget tree, one widget per line.
    pub fn render_text(&self) -> String {
        match &self.window.borrow().content {
            Some(root) => snapshot::Outline(root).to_string(),
            None => String::from("(empty)\n"),
        }
    }

    pub fn widget_id(&self, path: &Path) -> Option<WidgetId> {
        self.window.borrow().widget(path).ok().map(|widget| widget.id)
    }

    /// Number of widgets built since the renderer was created.
    pub fn widgets_built(&self) -> u64 {
        self.window.borrow().ids.issued()
    }

    /// Simulate a click on the button at `path`.
    pub fn click(&self, path: &Path) -> Result<(), RenderError> {
        let port = self.with_widget(path, ElementKind::Button, |kind| match kind {
            WidgetKind::Button { clicked, .. } => Some(clicked.clone()),
            _ => None,
        })?;
        tracing::debug!(%path, "click");
        port.fire(());
        Ok(())
    }

    /// Replace the text of the input at `path` and fire its change port.
    pub fn type_text(&self, path: &Path, value: &str) -> Result<(), RenderError> {
        let port: MessagePort<String> =
            self.with_widget(path, ElementKind::Input, |kind| match kind {
                WidgetKind::TextBox { text, changed } => {
                    value.clone_into(text);
                    Some(changed.clone())
                }
                _ => None,
            })?;
        tracing::debug!(%path, value, "type");
        port.fire(value.to_owned());
        Ok(())
    }

    /// Set the checkbox at `path` and fire its change port.
    pub fn set_checked(&self, path: &Path, value: bool) -> Result<(), RenderError> {
        let port = self.with_widget(path, ElementKind::Checkbox, |kind| match kind {
            WidgetKind::CheckBox {
                checked, changed, ..
            } => {
                *checked = value;
                Some(changed.clone())
            }
            _ => None,
        })?;
        tracing::debug!(%path, value, "check");
        port.fire(value);
        Ok(())
    }

    /// Run `pick` against the widget at `path` and release the window
    /// before returning, so the caller can fire ports that re-enter the
    /// renderer.
    fn with_widget<T>(
        &self,
        path: &Path,
        expected: ElementKind,
        pick: impl FnOnce(&mut WidgetKind) -> Option<T>,
    ) -> Result<T, RenderError> {
        let mut window = self.window.borrow_mut();
        let widget = window.widget_mut(path)?;
        let actual = widget.kind.element_kind();
        pick(&mut widget.kind).ok_or_else(|| RenderError::KindMismatch {
            path: path.clone(),
            expected,
            actual,
        })
    }
}

impl NativeRenderer for HeadlessRenderer {
    fn apply_patches(&mut self, patches: &[Patch]) -> Result<(), RenderError> {
        let mut window = self.window.borrow_mut();
        for patch in patches {
            window.apply(patch)?;
        }
        Ok(())
    }
}

impl Window {
    fn apply(&mut self, patch: &Patch) -> Result<(), RenderError> {
        match patch {
            Patch::Insert { path, element } => {
                let widget = Widget::build(element, &mut self.ids);
                match path.parent() {
                    None => self.content = Some(widget),
                    Some(parent) => {
                        let index = child_index(path);
                        let children = self.panel_children_mut(&parent)?;
                        if index > children.len() {
                            return Err(RenderError::IndexOutOfBounds {
                                path: path.clone(),
                                len: children.len(),
                            });
                        }
                        children.insert(index, widget);
                    }
                }
            }
            Patch::Update { path, element } => {
                let widget = self.widget_mut(path)?;
                let actual = widget.kind.element_kind();
                widget
                    .update_from(element)
                    .map_err(|expected| RenderError::KindMismatch {
                        path: path.clone(),
                        expected,
                        actual,
                    })?;
            }
            Patch::Replace { path, element } => {
                let fresh = Widget::build(element, &mut self.ids);
                if path.is_root() {
                    self.content = Some(fresh);
                } else {
                    *self.widget_mut(path)? = fresh;
                }
            }
            Patch::Remove { path } => {
                let Some(parent) = path.parent() else {
                    return Err(RenderError::RemoveRoot);
                };
                let index = child_index(path);
                let children = self.panel_children_mut(&parent)?;
                if index >= children.len() {
                    return Err(RenderError::IndexOutOfBounds {
                        path: path.clone(),
                        len: children.len(),
                    });
                }
                children.remove(index);
            }
            Patch::PortRewire(_) => {}
        }
        Ok(())
    }

    fn widget(&self, path: &Path) -> Result<&Widget, RenderError> {
        let mut current = self.content.as_ref().ok_or_else(|| RenderError::MissingNode {
            path: Path::root(),
        })?;
        for (depth, &index) in path.as_slice().iter().enumerate() {
            current = match &current.kind {
                WidgetKind::StackPanel { children, .. } => {
                    children.get(index).ok_or_else(|| missing(path, depth))?
                }
                _ => return Err(not_a_panel(path, depth)),
            };
        }
        Ok(current)
    }

    fn widget_mut(&mut self, path: &Path) -> Result<&mut Widget, RenderError> {
        let mut current = self.content.as_mut().ok_or_else(|| RenderError::MissingNode {
            path: Path::root(),
        })?;
        for (depth, &index) in path.as_slice().iter().enumerate() {
            current = match &mut current.kind {
                WidgetKind::StackPanel { children, .. } => {
                    children.get_mut(index).ok_or_else(|| missing(path, depth))?
                }
                _ => return Err(not_a_panel(path, depth)),
            };
        }
        Ok(current)
    }

    fn panel_children_mut(&mut self, path: &Path) -> Result<&mut Vec<Widget>, RenderError> {
        match &mut self.widget_mut(path)?.kind {
            WidgetKind::StackPanel { children, .. } => Ok(children),
            _ => Err(RenderError::NotAPanel { path: path.clone() }),
        }
    }
}

fn child_index(path: &Path) -> usize {
    path.last().unwrap_or_default()
}

fn prefix(path: &Path, len: usize) -> Path {
    Path::from(path.as_slice()[..len].to_vec())
}

fn missing(path: &Path, depth: usize) -> RenderError {
    RenderError::MissingNode {
        path: prefix(path, depth + 1),
    }
}

fn not_a_panel(path: &Path, depth: usize) -> RenderError {
    RenderError::NotAPanel {
        path: prefix(path, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvu::ui::{button, column, row, text};
    use crate::mvu::{diff, Element, Layout};

    fn mounted(tree: &crate::mvu::Node) -> HeadlessRenderer {
        let mut renderer = HeadlessRenderer::new();
        renderer
            .apply_patches(&[Patch::Insert {
                path: Path::root(),
                element: Rc::clone(tree),
            }])
            .unwrap();
        renderer
    }

    #[test]
    fn empty_window_has_no_snapshot() {
        let renderer = HeadlessRenderer::new();
        assert!(renderer.snapshot().is_none());
        assert_eq!(renderer.render_text(), "(empty)\n");
    }

    #[test]
    fn diff_brings_widgets_in_line_with_the_new_tree() {
        let old = column::<()>(vec![text("a"), text("b"), text("c")]).into_element();
        let new = column::<()>(vec![text("a"), text("x")]).into_element();
        let mut renderer = mounted(&old);

        renderer.apply_patches(&diff(&old, &new)).unwrap();

        assert_eq!(renderer.snapshot(), Some(WidgetSnapshot::from_element(&new)));
    }

    #[test]
    fn update_keeps_widget_identity() {
        let old = column::<()>(vec![text("a")]).into_element();
        let new = column::<()>(vec![text("b")]).into_element();
        let mut renderer = mounted(&old);
        let before = renderer.widget_id(&Path::from([0]));

        renderer.apply_patches(&diff(&old, &new)).unwrap();

        assert_eq!(renderer.widget_id(&Path::from([0])), before);
        assert_eq!(renderer.widgets_built(), 2);
    }

    #[test]
    fn replace_builds_a_new_widget() {
        let old = column::<()>(vec![text("a")]).into_element();
        let new = row::<()>(vec![text("a")]).into_element();
        let mut renderer = mounted(&old);

        renderer.apply_patches(&diff(&old, &new)).unwrap();

        assert_eq!(renderer.widget_id(&Path::root()), Some(WidgetId(3)));
        assert_eq!(renderer.snapshot(), Some(WidgetSnapshot::from_element(&new)));
    }

    #[test]
    fn removing_the_root_is_an_error() {
        let mut renderer = mounted(&Element::text("a"));
        let err = renderer
            .apply_patches(&[Patch::Remove { path: Path::root() }])
            .unwrap_err();
        assert_eq!(err, RenderError::RemoveRoot);
    }

    #[test]
    fn bad_paths_are_reported() {
        let tree = Element::panel(Layout::Vertical, vec![Element::text("a")]);
        let mut renderer = mounted(&tree);

        let err = renderer
            .apply_patches(&[Patch::Remove {
                path: Path::from([3]),
            }])
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::IndexOutOfBounds {
                path: Path::from([3]),
                len: 1
            }
        );

        let err = renderer
            .apply_patches(&[Patch::Insert {
                path: Path::from([0, 0]),
                element: Element::text("b"),
            }])
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::NotAPanel {
                path: Path::from([0])
            }
        );

        assert_eq!(
            renderer.click(&Path::from([1])).unwrap_err(),
            RenderError::MissingNode {
                path: Path::from([1])
            }
        );
    }

    #[test]
    fn events_on_the_wrong_widget_kind_are_rejected() {
        let tree = column::<()>(vec![text("a")]).into_element();
        let renderer = mounted(&tree);

        assert_eq!(
            renderer.click(&Path::from([0])).unwrap_err(),
            RenderError::KindMismatch {
                path: Path::from([0]),
                expected: ElementKind::Button,
                actual: ElementKind::Text,
            }
        );
    }

    #[test]
    fn click_fires_the_widget_port() {
        let ui = column(vec![button("go", 7_u8)]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        ui.on_message(move |message| log.borrow_mut().push(message));
        let renderer = mounted(ui.element());

        renderer.click(&Path::from([0])).unwrap();

        assert_eq!(*seen.borrow(), vec![7]);
    }
}
