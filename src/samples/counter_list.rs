use std::rc::Rc;

use super::counter::{Counter, CounterMsg};
use crate::mvu::collection;
use crate::mvu::ui::{button, column};
use crate::mvu::{view_child, Application, ChildChanged, Component, Message, Ui};

/// A stack of counters. New counters go on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CounterList {
    pub counters: Vec<Rc<Counter>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CounterListMsg {
    Insert,
    Remove,
    Counter(ChildChanged<CounterMsg>),
}

impl Message for CounterListMsg {}

impl Component for CounterList {
    type Message = CounterListMsg;

    fn update(&self, message: CounterListMsg) -> Self {
        match message {
            CounterListMsg::Insert => Self {
                counters: collection::prepend(&self.counters, Counter::new(0)),
            },
            CounterListMsg::Remove => Self {
                counters: collection::remove_at(&self.counters, 0),
            },
            CounterListMsg::Counter(changed) => Self {
                counters: changed.apply_to(&self.counters),
            },
        }
    }

    fn view(&self) -> Ui<CounterListMsg> {
        column(vec![
            button("Add", CounterListMsg::Insert),
            button("Remove", CounterListMsg::Remove),
            column(
                self.counters
                    .iter()
                    .enumerate()
                    .map(|(index, counter)| view_child(&**counter, index, CounterListMsg::Counter)),
            ),
        ])
    }
}

impl Application for CounterList {
    fn init() -> Self {
        Self::default()
    }
}
