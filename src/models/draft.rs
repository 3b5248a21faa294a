use std::rc::Rc;
use yew::functional::Reducible;

use super::NewAnecdote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Content,
    Author,
    Info,
}

pub enum DraftAction {
    Edit(DraftField, String),
    Reset,
}

/// Uncommitted values of the create form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnecdoteDraft {
    pub content: String,
    pub author: String,
    pub info: String,
}

impl AnecdoteDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Content => &self.content,
            DraftField::Author => &self.author,
            DraftField::Info => &self.info,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Content => self.content = value,
            DraftField::Author => self.author = value,
            DraftField::Info => self.info = value,
        }
    }

    pub fn reset(&mut self) {
        self.content.clear();
        self.author.clear();
        self.info.clear();
    }

    pub fn to_new_anecdote(&self) -> NewAnecdote {
        NewAnecdote::new(&*self.content, &*self.author, &*self.info)
    }
}

impl Reducible for AnecdoteDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DraftAction::Edit(field, value) => next.set(field, value),
            DraftAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}
