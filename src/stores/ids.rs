// ============================================================================
// ID SOURCES - Pluggable identifier generation for new anecdotes
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Upper bound (exclusive) of random ids
pub const RANDOM_ID_RANGE: f64 = 1_000_000.0;

/// Produces candidate ids. The store rejects candidates that collide, so a
/// source only has to be unlikely to repeat itself.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

pub type SharedIdSource = Rc<RefCell<dyn IdSource>>;

pub fn shared<S: IdSource + 'static>(source: S) -> SharedIdSource {
    Rc::new(RefCell::new(source))
}

impl<F> IdSource for F
where
    F: FnMut() -> String,
{
    fn next_id(&mut self) -> String {
        self()
    }
}

/// Random numeric ids from `Math.random()`. Browser only.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        let n = (js_sys::Math::random() * RANDOM_ID_RANGE).floor() as u64;
        n.to_string()
    }
}

/// Deterministic 1, 2, 3, ... starting wherever asked
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next;
        self.next += 1;
        id.to_string()
    }
}
