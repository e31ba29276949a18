//! Component contract and message lifting.

use std::fmt;
use std::rc::Rc;

use super::collection;
use super::ui::Ui;

/// Marker trait for messages.
///
/// Messages are transient values: produced by a fired port, consumed by
/// `update`, never stored.
pub trait Message: Clone + fmt::Debug + 'static {}

/// Pure update/view pair over an immutable model.
///
/// The implementing type is the model. `update` must not mutate `self`;
/// it returns the next model.
pub trait Component: Clone + 'static {
    /// The message type this component handles.
    type Message: Message;

    /// Fold a message into a new model.
    fn update(&self, message: Self::Message) -> Self;

    /// Render the model.
    fn view(&self) -> Ui<Self::Message>;
}

/// A top-level component the runtime can start from scratch.
pub trait Application: Component {
    /// Initial model.
    fn init() -> Self;
}

/// A child component's message tagged with the child's position in its
/// parent's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildChanged<M> {
    pub index: usize,
    pub message: M,
}

impl<M: Message> Message for ChildChanged<M> {}

impl<M: Message> ChildChanged<M> {
    pub fn new(index: usize, message: M) -> Self {
        Self { index, message }
    }

    /// Route the message to child `index` and rebuild only that slot.
    ///
    /// An index outside the collection is a no-op: the result is slot-for-
    /// slot pointer-equal to `children`. Every other slot is always
    /// pointer-equal to its input.
    pub fn apply_to<C>(self, children: &[Rc<C>]) -> Vec<Rc<C>>
    where
        C: Component<Message = M>,
    {
        if self.index >= children.len() {
            tracing::warn!(
                index = self.index,
                len = children.len(),
                "child message for missing slot ignored"
            );
        }
        let message = self.message;
        collection::update_at(children, self.index, |child| Rc::new(child.update(message)))
    }
}

/// Render `child` inside a parent whose messages are built by `lift`.
///
/// Every message the child produces reaches the parent as
/// `lift(ChildChanged { index, message })`.
pub fn view_child<C, P>(
    child: &C,
    index: usize,
    lift: impl Fn(ChildChanged<C::Message>) -> P + 'static,
) -> Ui<P>
where
    C: Component,
    P: 'static,
{
    child
        .view()
        .map(move |message| lift(ChildChanged { index, message }))
}
