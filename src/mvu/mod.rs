//! Model-View-Update (MVU) primitives.
//!
//! This module provides the element tree, message ports and the tree
//! differ that the runtime drives.
//!
//! # Architecture
//!
//! ```text
//! Component ──view──→ Ui<M> ──element──→ Node ──diff──→ Vec<Patch>
//!     ↑                 │
//!     └──── update ←── sink (MessagePort<M>)
//! ```
//!
//! - **Element**: Immutable description of one UI node
//! - **MessagePort**: Swappable callback cell attached to interactive leaves
//! - **Patch**: One primitive native-tree mutation
//! - **Component**: Pure update/view pair over an immutable model

pub mod collection;
mod component;
mod diff;
mod element;
mod patch;
mod path;
mod port;
pub mod ui;

pub use component::{view_child, Application, ChildChanged, Component, Message};
pub use diff::{diff, diff_at};
pub use element::{Element, ElementKind, Layout, Node};
pub use patch::{split_rewires, Patch};
pub use path::{ParsePathError, Path};
pub use port::{Handler, MessagePort, PortRewire};
pub use ui::Ui;
