use std::collections::HashSet;

use super::Anecdote;
use crate::error::{AppError, AppResult};

const SEED_JSON: &str = include_str!("../../assets/anecdotes.json");

/// Anecdotes the store starts with
pub fn load_seed() -> AppResult<Vec<Anecdote>> {
    parse_seed(SEED_JSON)
}

pub fn parse_seed(json: &str) -> AppResult<Vec<Anecdote>> {
    let anecdotes: Vec<Anecdote> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for anecdote in &anecdotes {
        if !seen.insert(anecdote.id.as_str()) {
            return Err(AppError::DuplicateSeedId(anecdote.id.clone()));
        }
    }

    Ok(anecdotes)
}
