pub mod about;
pub mod anecdote_detail;
pub mod anecdote_list;
pub mod app;
pub mod create_new;
pub mod footer;
pub mod menu;
pub mod notification;

pub use about::About;
pub use anecdote_detail::AnecdoteDetail;
pub use anecdote_list::AnecdoteList;
pub use app::{App, AppShell};
pub use create_new::CreateNew;
pub use footer::Footer;
pub use menu::Menu;
pub use notification::Notification;
