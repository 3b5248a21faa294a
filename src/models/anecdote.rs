use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anecdote {
    pub id: String,
    pub content: String,
    pub author: String,
    /// Meant to be a URL, never validated
    pub info: String,
    #[serde(default)]
    pub votes: u32,
}

impl Anecdote {
    pub fn from_new(id: String, new: NewAnecdote) -> Self {
        Self {
            id,
            content: new.content,
            author: new.author,
            info: new.info,
            votes: 0,
        }
    }

    /// `<n> votes`, as shown in the list table
    pub fn votes_label(&self) -> String {
        format!("{} votes", self.votes)
    }

    /// Numeric value of the id, if it has one
    pub fn numeric_id(&self) -> Option<f64> {
        numeric_id(&self.id)
    }

    /// Whether this anecdote is the one a route parameter points at.
    /// Both sides compare as numbers, so "01" finds "1".
    pub fn matches_id(&self, param: &str) -> bool {
        match (self.numeric_id(), numeric_id(param)) {
            (Some(own), Some(wanted)) => own == wanted,
            _ => false,
        }
    }
}

/// User supplied part of an anecdote. Missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewAnecdote {
    pub content: String,
    pub author: String,
    pub info: String,
}

impl NewAnecdote {
    pub fn new(
        content: impl Into<String>,
        author: impl Into<String>,
        info: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            info: info.into(),
        }
    }
}

/// Loose number conversion for ids, the way `Number()` reads a string:
/// surrounding whitespace is ignored, a blank string counts as zero,
/// unsigned `0x`/`0b`/`0o` literals are integers in their radix, and
/// anything else that is not a finite decimal number has no value.
pub fn numeric_id(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    if let Some(n) = radix_literal(trimmed) {
        return n;
    }
    // f64's parser also takes "inf" and "nan", which are not ids
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `Some(value)` when `raw` carries a radix prefix, `None` when it does not
fn radix_literal(raw: &str) -> Option<Option<f64>> {
    let prefix = raw.get(..2)?;
    let radix = match prefix.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0b" => 2,
        "0o" => 8,
        _ => return None,
    };

    let digits = &raw[2..];
    // from_str_radix tolerates a leading sign, Number() does not
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Some(None);
    }
    Some(u64::from_str_radix(digits, radix).ok().map(|n| n as f64))
}
