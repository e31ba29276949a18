//! Native-tree mutation instructions produced by the differ.

use std::fmt;

use super::element::Node;
use super::path::Path;
use super::port::PortRewire;

/// One primitive native-tree mutation.
///
/// Positional patches are applied by the renderer in list order.
/// `PortRewire` is not positional: the runtime runs it before handing the
/// positional patches to the renderer, and renderers ignore it.
#[derive(Debug, Clone, PartialEq)]
pub enum Patch {
    /// The node did not exist before.
    Insert { path: Path, element: Node },
    /// Same node kind; only visible fields differ.
    Update { path: Path, element: Node },
    /// Incompatible kinds, or a panel whose layout changed.
    Replace { path: Path, element: Node },
    /// The node existed before and is gone now.
    Remove { path: Path },
    /// Retarget a message port.
    PortRewire(PortRewire),
}

impl Patch {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Patch::Insert { path, .. }
            | Patch::Update { path, .. }
            | Patch::Replace { path, .. }
            | Patch::Remove { path } => Some(path),
            Patch::PortRewire(_) => None,
        }
    }

    pub fn is_positional(&self) -> bool {
        !matches!(self, Patch::PortRewire(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Patch::Insert { .. } => "insert",
            Patch::Update { .. } => "update",
            Patch::Replace { .. } => "replace",
            Patch::Remove { .. } => "remove",
            Patch::PortRewire(_) => "rewire",
        }
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::Insert { path, element }
            | Patch::Update { path, element }
            | Patch::Replace { path, element } => {
                write!(f, "{} {} {}", self.name(), path, element.kind())
            }
            Patch::Remove { path } => write!(f, "remove {}", path),
            Patch::PortRewire(rewire) => {
                let kind = match rewire {
                    PortRewire::Input { .. } => "input",
                    PortRewire::Button { .. } => "button",
                    PortRewire::Checkbox { .. } => "checkbox",
                };
                write!(f, "rewire {}", kind)
            }
        }
    }
}

/// Separate port rewires from positional patches, keeping the relative
/// order of each group.
pub fn split_rewires(patches: Vec<Patch>) -> (Vec<PortRewire>, Vec<Patch>) {
    let (rewires, positional): (Vec<Patch>, Vec<Patch>) =
        patches.into_iter().partition(|patch| !patch.is_positional());
    let rewires = rewires
        .into_iter()
        .filter_map(|patch| match patch {
            Patch::PortRewire(rewire) => Some(rewire),
            _ => None,
        })
        .collect();
    (rewires, positional)
}
