use crate::mvu::ui::{button, row, text};
use crate::mvu::{Application, Component, Message, Ui};

/// A label and a button whose message changes once the label ends in
/// `++`. Exercises rewiring a button port to a different message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedEvent {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Plus,
    Minus,
}

impl Message for Toggle {}

impl Component for ChangedEvent {
    type Message = Toggle;

    fn update(&self, message: Toggle) -> Self {
        let suffix = match message {
            Toggle::Plus => '+',
            Toggle::Minus => '-',
        };
        let mut text = self.text.clone();
        text.push(suffix);
        Self { text }
    }

    fn view(&self) -> Ui<Toggle> {
        let toggle = if self.text.ends_with("++") {
            button("Minus", Toggle::Minus)
        } else {
            button("Plus", Toggle::Plus)
        };
        row(vec![text(self.text.clone()), toggle])
    }
}

impl Application for ChangedEvent {
    fn init() -> Self {
        Self::default()
    }
}
