pub mod store_context;
pub mod use_navigation;
pub mod use_notification_timer;

pub use store_context::{
    use_anecdote_store, AnecdoteStoreHandle, AnecdoteStoreProvider, StoreInit,
};
pub use use_navigation::{redirect_after_create, use_navigation, NavigationController, RouteSink};
pub use use_notification_timer::use_notification_timer;
