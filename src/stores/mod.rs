pub mod anecdote_store;
pub mod ids;

pub use anecdote_store::{AnecdoteStore, Notification, StoreAction};
pub use ids::{IdSource, RandomIds, SequentialIds, SharedIdSource};
