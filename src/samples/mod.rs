//! Demo applications built on the MVU runtime.

mod changed_event;
mod counter;
mod counter_list;
mod todo;

pub use changed_event::{ChangedEvent, Toggle};
pub use counter::{Counter, CounterMsg};
pub use counter_list::{CounterList, CounterListMsg};
pub use todo::{
    CardChanged, ToDoCards, ToDoHistory, ToDoHistoryMsg, ToDoItem, ToDoItemMsg, ToDoList,
    ToDoListMsg,
};

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::mvu::Application;
use crate::render::NativeRenderer;
use crate::runtime::{Runtime, RuntimeError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleKind {
    #[default]
    Counter,
    CounterList,
    ChangedEvent,
    TodoList,
    TodoCards,
    TodoHistory,
}

impl SampleKind {
    pub const ALL: [SampleKind; 6] = [
        SampleKind::Counter,
        SampleKind::CounterList,
        SampleKind::ChangedEvent,
        SampleKind::TodoList,
        SampleKind::TodoCards,
        SampleKind::TodoHistory,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SampleKind::Counter => "counter",
            SampleKind::CounterList => "counter-list",
            SampleKind::ChangedEvent => "changed-event",
            SampleKind::TodoList => "todo-list",
            SampleKind::TodoCards => "todo-cards",
            SampleKind::TodoHistory => "todo-history",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SampleKind::Counter => "+ and - buttons around a number",
            SampleKind::CounterList => "add and remove counters, each with its own state",
            SampleKind::ChangedEvent => "a button whose message changes after two clicks",
            SampleKind::TodoList => "check, remove and add to-do items",
            SampleKind::TodoCards => "two to-do lists side by side",
            SampleKind::TodoHistory => "to-do cards with a restorable history",
        }
    }

    /// Start the sample's runtime on `renderer`.
    pub fn start(
        self,
        renderer: impl NativeRenderer + 'static,
    ) -> Result<Box<dyn RunningSample>, RuntimeError> {
        Ok(match self {
            SampleKind::Counter => boxed::<Counter>(renderer)?,
            SampleKind::CounterList => boxed::<CounterList>(renderer)?,
            SampleKind::ChangedEvent => boxed::<ChangedEvent>(renderer)?,
            SampleKind::TodoList => boxed::<ToDoList>(renderer)?,
            SampleKind::TodoCards => boxed::<ToDoCards>(renderer)?,
            SampleKind::TodoHistory => boxed::<ToDoHistory>(renderer)?,
        })
    }
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type-erased handle to a started sample. Keeps the runtime alive.
pub trait RunningSample {
    fn cycles(&self) -> u64;

    /// Debug rendering of the current model.
    fn describe(&self) -> String;

    fn set_log_patches(&self, enabled: bool);
}

impl<A> RunningSample for Runtime<A>
where
    A: Application + fmt::Debug,
{
    fn cycles(&self) -> u64 {
        Runtime::cycles(self)
    }

    fn describe(&self) -> String {
        format!("{:?}", self.model())
    }

    fn set_log_patches(&self, enabled: bool) {
        Runtime::set_log_patches(self, enabled)
    }
}

fn boxed<A>(renderer: impl NativeRenderer + 'static) -> Result<Box<dyn RunningSample>, RuntimeError>
where
    A: Application + fmt::Debug,
{
    Ok(Box::new(Runtime::<A>::start(renderer)?))
}
