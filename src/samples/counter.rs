use crate::mvu::ui::{button, row, text};
use crate::mvu::{Application, Component, Message, Ui};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterMsg {
    Increment,
    Decrement,
}

impl Message for CounterMsg {}

impl Counter {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

impl Component for Counter {
    type Message = CounterMsg;

    fn update(&self, message: CounterMsg) -> Self {
        match message {
            CounterMsg::Increment => Self::new(self.count + 1),
            CounterMsg::Decrement => Self::new(self.count - 1),
        }
    }

    fn view(&self) -> Ui<CounterMsg> {
        row(vec![
            button("+", CounterMsg::Increment),
            button("-", CounterMsg::Decrement),
            text(self.count.to_string()),
        ])
    }
}

impl Application for Counter {
    fn init() -> Self {
        Self::default()
    }
}
