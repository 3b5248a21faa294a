// ============================================================================
// ANECDOTE STORE - Collection + transient notification
// ============================================================================
// Plain struct with &mut operations; Yew sees it through `Reducible`.
// ============================================================================

use std::rc::Rc;
use yew::functional::Reducible;

use crate::models::{Anecdote, NewAnecdote};
use crate::stores::ids::SharedIdSource;

/// Candidates drawn from the id source before giving up on it
pub const MAX_ID_ATTEMPTS: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// Creation that produced this message; its timer expires it by this
    pub seq: u64,
}

pub enum StoreAction {
    Add(NewAnecdote),
    ClearNotification,
    ExpireNotification { seq: u64 },
}

#[derive(Clone)]
pub struct AnecdoteStore {
    anecdotes: Vec<Anecdote>,
    notification: Option<Notification>,
    last_seq: u64,
    ids: SharedIdSource,
}

impl AnecdoteStore {
    pub fn new(seed: Vec<Anecdote>, ids: SharedIdSource) -> Self {
        Self {
            anecdotes: seed,
            notification: None,
            last_seq: 0,
            ids,
        }
    }

    pub fn anecdotes(&self) -> &[Anecdote] {
        &self.anecdotes
    }

    pub fn len(&self) -> usize {
        self.anecdotes.len()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Anecdote a `/anecdotes/:id` parameter points at
    pub fn find(&self, id_param: &str) -> Option<&Anecdote> {
        self.anecdotes.iter().find(|a| a.matches_id(id_param))
    }

    /// Appends a new anecdote and announces it. Empty fields are fine.
    pub fn add_anecdote(&mut self, new: NewAnecdote) -> &Anecdote {
        let id = self.fresh_id();
        let anecdote = Anecdote::from_new(id, new);

        self.last_seq += 1;
        self.notification = Some(Notification {
            message: created_message(&anecdote.content),
            seq: self.last_seq,
        });
        log::info!("📝 Anecdote {} created: {}", anecdote.id, anecdote.content);

        self.anecdotes.push(anecdote);
        &self.anecdotes[self.anecdotes.len() - 1]
    }

    pub fn clear_notification(&mut self) {
        self.notification = None;
    }

    /// Timer callback. Leaves a newer notification alone.
    pub fn expire_notification(&mut self, seq: u64) {
        match &self.notification {
            Some(current) if current.seq == seq => {
                log::debug!("🔕 Notification {} expired", seq);
                self.notification = None;
            }
            Some(current) => {
                log::debug!("Stale expiry {} ignored, showing {}", seq, current.seq);
            }
            None => {}
        }
    }

    fn is_taken(&self, candidate: &str) -> bool {
        self.anecdotes
            .iter()
            .any(|a| a.id == candidate || a.matches_id(candidate))
    }

    fn fresh_id(&mut self) -> String {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.borrow_mut().next_id();
            if !candidate.trim().is_empty() && !self.is_taken(&candidate) {
                return candidate;
            }
        }

        // At most len() numbers are taken, so this stops by len() + 1
        let fallback = (1..=self.anecdotes.len() as u64 + 1)
            .map(|n| n.to_string())
            .find(|candidate| !self.is_taken(candidate))
            .unwrap_or_else(|| (self.anecdotes.len() as u64 + 1).to_string());
        log::warn!("⚠️ Id source kept colliding, using {}", fallback);
        fallback
    }
}

pub fn created_message(content: &str) -> String {
    format!("A new anecdote '{}' was created.", content)
}

impl PartialEq for AnecdoteStore {
    fn eq(&self, other: &Self) -> bool {
        self.anecdotes == other.anecdotes
            && self.notification == other.notification
            && self.last_seq == other.last_seq
    }
}

impl Reducible for AnecdoteStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            StoreAction::Add(new) => {
                next.add_anecdote(new);
            }
            StoreAction::ClearNotification => next.clear_notification(),
            StoreAction::ExpireNotification { seq } => next.expire_notification(seq),
        }
        Rc::new(next)
    }
}
