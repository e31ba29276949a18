//! Positional tree reconciliation.
//!
//! Walks two element trees depth-first, left to right, and emits the
//! patches that turn the native rendering of `old` into one of `new`.
//! Children are matched by position only: inserting or removing in the
//! middle of a list degrades to in-place updates of the surviving
//! positions plus trailing inserts or removes.
//!
//! The walk uses an explicit work stack, so neither tree depth nor list
//! length grows the call stack.

use std::rc::Rc;

use super::element::{Element, Node};
use super::patch::Patch;
use super::path::Path;
use super::port::PortRewire;

/// Diff two trees from the root.
pub fn diff(old: &Node, new: &Node) -> Vec<Patch> {
    diff_at(old, new, Path::root())
}

/// Diff two subtrees rooted at `path`.
///
/// Total: every pair of elements yields some patch list, `Replace` in the
/// worst case.
pub fn diff_at(old: &Node, new: &Node, path: Path) -> Vec<Patch> {
    let mut patches = Vec::new();
    let mut stack = vec![Task::Nodes { old, new, path }];

    while let Some(task) = stack.pop() {
        match task {
            Task::Nodes { old, new, path } => {
                diff_nodes(old, new, path, &mut patches, &mut stack);
            }
            Task::Grow {
                children,
                start,
                path,
            } => {
                for (offset, child) in children.iter().enumerate() {
                    patches.push(Patch::Insert {
                        path: path.child(start + offset),
                        element: Rc::clone(child),
                    });
                }
            }
            Task::Shrink { start, end, path } => {
                // Last index first, so every path still names a live node.
                for index in (start..end).rev() {
                    patches.push(Patch::Remove {
                        path: path.child(index),
                    });
                }
            }
        }
    }

    tracing::trace!(count = patches.len(), "diff complete");
    patches
}

enum Task<'a> {
    Nodes {
        old: &'a Node,
        new: &'a Node,
        path: Path,
    },
    Grow {
        children: &'a [Node],
        start: usize,
        path: Path,
    },
    Shrink {
        start: usize,
        end: usize,
        path: Path,
    },
}

fn diff_nodes<'a>(
    old: &'a Node,
    new: &'a Node,
    path: Path,
    patches: &mut Vec<Patch>,
    stack: &mut Vec<Task<'a>>,
) {
    if Rc::ptr_eq(old, new) {
        return;
    }

    match (&**old, &**new) {
        (Element::Text { content: a }, Element::Text { content: b }) => {
            if a != b {
                patches.push(update(path, new));
            }
        }
        (
            Element::Input {
                content: a,
                changed: old_port,
            },
            Element::Input {
                content: b,
                changed: new_port,
            },
        ) => {
            if a != b {
                patches.push(update(path, new));
            }
            patches.push(Patch::PortRewire(PortRewire::Input {
                old: old_port.clone(),
                new: new_port.clone(),
            }));
        }
        (
            Element::Button {
                label: a,
                clicked: old_port,
            },
            Element::Button {
                label: b,
                clicked: new_port,
            },
        ) => {
            if a != b {
                patches.push(update(path, new));
            }
            patches.push(Patch::PortRewire(PortRewire::Button {
                old: old_port.clone(),
                new: new_port.clone(),
            }));
        }
        (
            Element::Checkbox {
                label: label_a,
                checked: checked_a,
                changed: old_port,
            },
            Element::Checkbox {
                label: label_b,
                checked: checked_b,
                changed: new_port,
            },
        ) => {
            if label_a != label_b || checked_a != checked_b {
                patches.push(update(path, new));
            }
            patches.push(Patch::PortRewire(PortRewire::Checkbox {
                old: old_port.clone(),
                new: new_port.clone(),
            }));
        }
        (
            Element::Panel {
                layout: layout_a,
                children: children_a,
            },
            Element::Panel {
                layout: layout_b,
                children: children_b,
            },
        ) if layout_a == layout_b => schedule_children(children_a, children_b, path, stack),
        _ => patches.push(Patch::Replace {
            path,
            element: Rc::clone(new),
        }),
    }
}

fn update(path: Path, element: &Node) -> Patch {
    Patch::Update {
        path,
        element: Rc::clone(element),
    }
}

/// Queue the lock-step walk of two child lists. Tasks are pushed in
/// reverse so they pop in document order: shared positions first, then
/// the trailing insert or remove run.
fn schedule_children<'a>(
    old: &'a [Node],
    new: &'a [Node],
    path: Path,
    stack: &mut Vec<Task<'a>>,
) {
    let common = old.len().min(new.len());

    if new.len() > common {
        stack.push(Task::Grow {
            children: &new[common..],
            start: common,
            path: path.clone(),
        });
    } else if old.len() > common {
        stack.push(Task::Shrink {
            start: common,
            end: old.len(),
            path: path.clone(),
        });
    }

    for index in (0..common).rev() {
        stack.push(Task::Nodes {
            old: &old[index],
            new: &new[index],
            path: path.child(index),
        });
    }
}
