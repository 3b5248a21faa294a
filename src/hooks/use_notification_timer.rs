use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::stores::{AnecdoteStore, StoreAction};

/// Expires the current notification after `delay_ms`.
///
/// The effect is keyed on the notification's sequence number, so every new
/// notification drops the pending `Timeout` (which cancels it) and arms a
/// fresh one.
#[hook]
pub fn use_notification_timer(store: UseReducerHandle<AnecdoteStore>, delay_ms: u32) {
    let seq = store.notification().map(|n| n.seq);

    use_effect_with(seq, move |seq| {
        let timeout = (*seq).map(|seq| {
            log::debug!("⏰ Notification {} expires in {} ms", seq, delay_ms);
            Timeout::new(delay_ms, move || {
                store.dispatch(StoreAction::ExpireNotification { seq });
            })
        });

        move || drop(timeout)
    });
}
