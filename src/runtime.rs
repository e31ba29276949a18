//! The Model-View-Update loop.
//!
//! ```text
//! init ──→ view ──→ Insert(/) ──→ renderer
//!                                    │ user event
//!                                    ↓
//!  renderer ←── positional ←── diff ←── view ←── update ←── port
//!                patches        │
//!                               └──→ port rewires (run first)
//! ```
//!
//! Everything runs synchronously on the thread that fires the port. The
//! runtime owns the current model and tree; both are replaced wholesale
//! once per cycle.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::mvu::{diff, split_rewires, Application, Component, Node, Patch, Path, Ui};
use crate::render::{NativeRenderer, RenderError};

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A message arrived while a cycle was still running.
    #[error("dispatch re-entered while an update cycle was running")]
    ReentrantDispatch,

    #[error("renderer failed: {0}")]
    Render(#[from] RenderError),

    /// The runtime behind a port has been dropped.
    #[error("runtime stopped")]
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// Waiting for a UI event.
    Idle,
    /// Running update, view, diff and patch application.
    Dispatching,
}

/// Owned handle to a running MVU loop.
///
/// Ports in the rendered tree hold only a weak reference to the loop, so
/// dropping the last `Runtime` handle ends it: later events are ignored.
pub struct Runtime<C: Component> {
    inner: Rc<Inner<C>>,
}

struct Inner<C: Component> {
    current: RefCell<Cycle<C>>,
    state: Cell<DispatchState>,
    renderer: RefCell<Box<dyn NativeRenderer>>,
    cycles: Cell<u64>,
    log_patches: Cell<bool>,
}

struct Cycle<C> {
    model: C,
    tree: Node,
}

/// Marks the loop busy for the lifetime of the guard.
struct DispatchGuard<'a> {
    state: &'a Cell<DispatchState>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(state: &'a Cell<DispatchState>) -> Result<Self, RuntimeError> {
        if state.get() == DispatchState::Dispatching {
            return Err(RuntimeError::ReentrantDispatch);
        }
        state.set(DispatchState::Dispatching);
        Ok(Self { state })
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.state.set(DispatchState::Idle);
    }
}

impl<A: Application> Runtime<A> {
    /// Start from `A::init()`.
    pub fn start(renderer: impl NativeRenderer + 'static) -> Result<Self, RuntimeError> {
        Self::start_with(A::init(), renderer)
    }
}

impl<C: Component> Runtime<C> {
    /// Render `model` and mount it as the whole native tree.
    pub fn start_with(
        model: C,
        renderer: impl NativeRenderer + 'static,
    ) -> Result<Self, RuntimeError> {
        let ui = model.view();
        let tree = Rc::clone(ui.element());
        let inner = Rc::new(Inner {
            current: RefCell::new(Cycle {
                model,
                tree: Rc::clone(&tree),
            }),
            state: Cell::new(DispatchState::Idle),
            renderer: RefCell::new(Box::new(renderer)),
            cycles: Cell::new(0),
            log_patches: Cell::new(false),
        });
        bind_root(&inner, &ui);

        {
            let _guard = DispatchGuard::enter(&inner.state)?;
            let bootstrap = [Patch::Insert {
                path: Path::root(),
                element: tree,
            }];
            inner.renderer.borrow_mut().apply_patches(&bootstrap)?;
        }

        tracing::debug!(nodes = inner.current.borrow().tree.node_count(), "runtime started");
        Ok(Self { inner })
    }

    /// Run one update cycle for `message`.
    ///
    /// This is what the root sink calls when a port fires; hosts may also
    /// call it directly.
    pub fn dispatch(&self, message: C::Message) -> Result<(), RuntimeError> {
        dispatch(&self.inner, message)
    }

    /// Clone of the current model.
    pub fn model(&self) -> C {
        self.inner.current.borrow().model.clone()
    }

    /// The tree last handed to the renderer.
    pub fn tree(&self) -> Node {
        Rc::clone(&self.inner.current.borrow().tree)
    }

    /// Number of completed update cycles.
    pub fn cycles(&self) -> u64 {
        self.inner.cycles.get()
    }

    pub fn state(&self) -> DispatchState {
        self.inner.state.get()
    }

    /// Log every patch at `info` instead of `trace`.
    pub fn set_log_patches(&self, enabled: bool) {
        self.inner.log_patches.set(enabled);
    }
}

fn bind_root<C: Component>(inner: &Rc<Inner<C>>, ui: &Ui<C::Message>) {
    let weak: Weak<Inner<C>> = Rc::downgrade(inner);
    ui.on_message(move |message| {
        let result = match weak.upgrade() {
            Some(inner) => dispatch(&inner, message),
            None => Err(RuntimeError::Stopped),
        };
        match result {
            Ok(()) => {}
            Err(RuntimeError::Stopped) => tracing::debug!("runtime dropped, message ignored"),
            Err(err) => tracing::error!(error = %err, "message dropped"),
        }
    });
}

fn dispatch<C: Component>(inner: &Rc<Inner<C>>, message: C::Message) -> Result<(), RuntimeError> {
    let _guard = DispatchGuard::enter(&inner.state)?;
    tracing::debug!(?message, "dispatch");

    let (model, previous) = {
        let current = inner.current.borrow();
        (current.model.update(message), Rc::clone(&current.tree))
    };
    let ui = model.view();
    let tree = Rc::clone(ui.element());
    bind_root(inner, &ui);

    let patches = diff(&previous, &tree);
    for patch in &patches {
        if inner.log_patches.get() {
            tracing::info!(%patch, "patch");
        } else {
            tracing::trace!(%patch, "patch");
        }
    }
    let (rewires, positional) = split_rewires(patches);
    for rewire in &rewires {
        rewire.apply();
    }

    let applied = inner.renderer.borrow_mut().apply_patches(&positional);

    // Rewires already point native callbacks at the new handlers, so the
    // new model is committed even when the renderer fails.
    *inner.current.borrow_mut() = Cycle { model, tree };
    inner.cycles.set(inner.cycles.get() + 1);

    tracing::debug!(
        cycle = inner.cycles.get(),
        rewires = rewires.len(),
        positional = positional.len(),
        "cycle complete"
    );
    applied.map_err(RuntimeError::from)
}
