//! Boundary to the native widget toolkit.

use thiserror::Error;

use crate::mvu::{ElementKind, Patch, Path};

/// Errors a renderer reports when a patch or event cannot be applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("no widget at {path}")]
    MissingNode { path: Path },

    #[error("widget at {path} is not a panel")]
    NotAPanel { path: Path },

    #[error("child index out of bounds at {path} (panel has {len} children)")]
    IndexOutOfBounds { path: Path, len: usize },

    #[error("widget at {path} is a {actual}, expected {expected}")]
    KindMismatch {
        path: Path,
        expected: ElementKind,
        actual: ElementKind,
    },

    #[error("the root widget cannot be removed")]
    RemoveRoot,
}

/// Applies patches to a native widget tree.
///
/// For each patch, in list order:
/// - `Insert` builds and mounts a widget; the root path sets the window
///   content, any other path inserts into the panel at `path.parent()` at
///   child index `path.last()`.
/// - `Update` changes visible fields of the existing widget in place.
/// - `Replace` unmounts the widget at `path` and mounts a fresh one.
/// - `Remove` unmounts the widget at `path`.
/// - `PortRewire` is ignored; the runtime has already run it.
///
/// Widgets wire native input events to fire the element's message ports.
/// Implementations must not fire ports synchronously from inside
/// `apply_patches`.
pub trait NativeRenderer {
    fn apply_patches(&mut self, patches: &[Patch]) -> Result<(), RenderError>;
}

/// Renderer that discards everything. Useful for driving a runtime whose
/// native side is irrelevant.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl NativeRenderer for NullRenderer {
    fn apply_patches(&mut self, _patches: &[Patch]) -> Result<(), RenderError> {
        Ok(())
    }
}
