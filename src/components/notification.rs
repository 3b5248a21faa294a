use yew::prelude::*;

use crate::stores::Notification as NotificationState;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationProps {
    #[prop_or_default]
    pub notification: Option<NotificationState>,
}

/// Success banner, present only while the store holds a message
#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    match &props.notification {
        Some(n) => html! {
            <div class="alert alert-success" role="alert">
                {n.message.clone()}
            </div>
        },
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_at;

    #[tokio::test]
    async fn hidden_without_message() {
        let html = render_at("/", || html! { <Notification /> }).await;
        assert!(!html.contains("alert"));
    }

    #[tokio::test]
    async fn shows_message() {
        let html = render_at("/", || {
            let n = NotificationState {
                message: "A new anecdote was created.".into(),
                seq: 1,
            };
            html! { <Notification notification={Some(n)} /> }
        })
        .await;
        assert!(html.contains("alert-success"));
        assert!(html.contains("A new anecdote was created."));
    }
}
