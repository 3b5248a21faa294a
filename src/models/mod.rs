pub mod anecdote;
pub mod draft;
pub mod seed;

pub use anecdote::{numeric_id, Anecdote, NewAnecdote};
pub use draft::{AnecdoteDraft, DraftAction, DraftField};
pub use seed::load_seed;
