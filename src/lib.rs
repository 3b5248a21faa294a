// ============================================================================
// ROUTED ANECDOTES - Yew single page app
// ============================================================================
// - components: views (pure rendering from props / store snapshot)
// - hooks: store context, notification timer, navigation
// - stores: anecdote collection + notification state
// - router: path -> view resolution
// - models: records, drafts and seed data
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod stores;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use components::App;
pub use config::CONFIG;
pub use error::{AppError, AppResult};
