//! To-do samples: a single list, a row of lists, and a row of lists with
//! an undo history.

use std::fmt;
use std::rc::Rc;

use crate::mvu::collection;
use crate::mvu::ui::{button, checkbox, column, input, row, text};
use crate::mvu::{view_child, Application, ChildChanged, Component, Message, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToDoItem {
    pub text: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToDoItemMsg {
    StateChanged(bool),
    /// Handled by the owning list.
    Remove,
}

impl Message for ToDoItemMsg {}

impl ToDoItem {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            text: text.into(),
            done,
        }
    }
}

impl Component for ToDoItem {
    type Message = ToDoItemMsg;

    fn update(&self, message: ToDoItemMsg) -> Self {
        match message {
            ToDoItemMsg::StateChanged(done) => Self {
                text: self.text.clone(),
                done,
            },
            ToDoItemMsg::Remove => self.clone(),
        }
    }

    fn view(&self) -> Ui<ToDoItemMsg> {
        row(vec![
            checkbox(self.text.clone(), self.done, ToDoItemMsg::StateChanged),
            button("remove", ToDoItemMsg::Remove),
        ])
    }
}

impl fmt::Display for ToDoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "[{mark}] {}", self.text)
    }
}

/// Items followed by an input and an add button.
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoList {
    pub items: Vec<Rc<ToDoItem>>,
    pub new_item: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToDoListMsg {
    NewItemChanged(String),
    AddNewItem,
    Item(ChildChanged<ToDoItemMsg>),
}

impl Message for ToDoListMsg {}

impl Component for ToDoList {
    type Message = ToDoListMsg;

    fn update(&self, message: ToDoListMsg) -> Self {
        match message {
            ToDoListMsg::NewItemChanged(new_item) => Self {
                items: self.items.clone(),
                new_item,
            },
            ToDoListMsg::AddNewItem => {
                let text = self.new_item.trim();
                if text.is_empty() {
                    return self.clone();
                }
                Self {
                    items: collection::append(&self.items, ToDoItem::new(text, false)),
                    new_item: String::new(),
                }
            }
            ToDoListMsg::Item(ChildChanged {
                index,
                message: ToDoItemMsg::Remove,
            }) => Self {
                items: collection::remove_at(&self.items, index),
                new_item: self.new_item.clone(),
            },
            ToDoListMsg::Item(changed) => Self {
                items: changed.apply_to(&self.items),
                new_item: self.new_item.clone(),
            },
        }
    }

    fn view(&self) -> Ui<ToDoListMsg> {
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| view_child(&**item, index, ToDoListMsg::Item));
        let entry = row(vec![
            input(self.new_item.clone(), ToDoListMsg::NewItemChanged),
            button("add", ToDoListMsg::AddNewItem),
        ]);
        column(items.chain(std::iter::once(entry)))
    }
}

impl Application for ToDoList {
    fn init() -> Self {
        Self {
            items: vec![
                Rc::new(ToDoItem::new("bar", true)),
                Rc::new(ToDoItem::new("foo", false)),
            ],
            new_item: String::new(),
        }
    }
}

impl fmt::Display for ToDoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, item) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("}")
    }
}

/// Lists side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoCards {
    pub cards: Vec<Rc<ToDoList>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardChanged(pub ChildChanged<ToDoListMsg>);

impl Message for CardChanged {}

impl Component for ToDoCards {
    type Message = CardChanged;

    fn update(&self, CardChanged(changed): CardChanged) -> Self {
        Self {
            cards: changed.apply_to(&self.cards),
        }
    }

    fn view(&self) -> Ui<CardChanged> {
        row(self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| view_child(&**card, index, CardChanged)))
    }
}

impl Application for ToDoCards {
    fn init() -> Self {
        Self {
            cards: vec![Rc::new(ToDoList::init()), Rc::new(ToDoList::init())],
        }
    }
}

impl fmt::Display for ToDoCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Cards plus every earlier state, newest first, each with a button that
/// brings it back.
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoHistory {
    pub history: Vec<Rc<ToDoCards>>,
    pub app: Rc<ToDoCards>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToDoHistoryMsg {
    App(CardChanged),
    /// Make `history[index]` current. History itself is kept.
    Restore(usize),
}

impl Message for ToDoHistoryMsg {}

impl Component for ToDoHistory {
    type Message = ToDoHistoryMsg;

    fn update(&self, message: ToDoHistoryMsg) -> Self {
        match message {
            ToDoHistoryMsg::App(changed) => Self {
                history: collection::prepend(&self.history, (*self.app).clone()),
                app: Rc::new(self.app.update(changed)),
            },
            ToDoHistoryMsg::Restore(index) => match collection::get_at(&self.history, index) {
                Some(past) => Self {
                    history: self.history.clone(),
                    app: Rc::clone(past),
                },
                None => {
                    tracing::warn!(index, "restore of unknown history entry ignored");
                    self.clone()
                }
            },
        }
    }

    fn view(&self) -> Ui<ToDoHistoryMsg> {
        column(vec![
            self.app.view().map(ToDoHistoryMsg::App),
            column(self.history.iter().enumerate().map(|(index, past)| {
                row(vec![
                    button("apply", ToDoHistoryMsg::Restore(index)),
                    text(past.to_string()),
                ])
            })),
        ])
    }
}

impl Application for ToDoHistory {
    fn init() -> Self {
        Self {
            history: Vec::new(),
            app: Rc::new(ToDoCards::init()),
        }
    }
}
