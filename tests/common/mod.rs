//! Shared helpers for integration tests.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;
use teacup::headless::{HeadlessRenderer, WidgetSnapshot};
use teacup::mvu::{Element, Layout, MessagePort, Node, Patch, Path};
use teacup::render::NativeRenderer;

/// Renderer holding a fresh rendering of `tree`.
pub fn mounted(tree: &Node) -> HeadlessRenderer {
    let mut renderer = HeadlessRenderer::new();
    renderer
        .apply_patches(&[Patch::Insert {
            path: Path::root(),
            element: Rc::clone(tree),
        }])
        .expect("mounting a tree into an empty window succeeds");
    renderer
}

pub fn snapshot_of(tree: &Node) -> WidgetSnapshot {
    WidgetSnapshot::from_element(tree)
}

/// A single leaf element. Labels come from a tiny alphabet so that two
/// generated trees often share content.
pub fn arb_leaf() -> impl Strategy<Value = Node> {
    let word = prop::sample::select(vec!["a", "b", "c"]);
    prop_oneof![
        word.clone().prop_map(Element::text),
        word.clone()
            .prop_map(|word| Element::input(word, MessagePort::new())),
        word.clone()
            .prop_map(|word| Element::button(word, MessagePort::new())),
        (word, any::<bool>())
            .prop_map(|(word, checked)| Element::checkbox(word, checked, MessagePort::new())),
    ]
}

/// Trees up to three panel levels deep, each panel holding up to four
/// children.
pub fn arb_tree() -> impl Strategy<Value = Node> {
    arb_leaf().prop_recursive(3, 48, 4, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..5)).prop_map(|(horizontal, children)| {
            let layout = if horizontal {
                Layout::Horizontal
            } else {
                Layout::Vertical
            };
            Element::panel(layout, children)
        })
    })
}

/// Collects every message a port-driven handler receives.
pub fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(T) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |value| sink.borrow_mut().push(value))
}
