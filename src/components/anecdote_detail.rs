use yew::prelude::*;

use crate::models::Anecdote;

#[derive(Properties, PartialEq, Clone)]
pub struct AnecdoteDetailProps {
    /// `None` when the route points at an id nobody has
    #[prop_or_default]
    pub anecdote: Option<Anecdote>,
}

#[function_component(AnecdoteDetail)]
pub fn anecdote_detail(props: &AnecdoteDetailProps) -> Html {
    let Some(anecdote) = &props.anecdote else {
        return html! {
            <div class="anecdote-missing">
                <p>{"anecdote not found"}</p>
            </div>
        };
    };

    html! {
        <div>
            <h2>{anecdote.content.clone()}</h2>
            <div>{format!("has {} votes", anecdote.votes)}</div>
            <div>
                <a href={anecdote.info.clone()}>
                    {format!("for more info see {}", anecdote.info)}
                </a>
            </div>
        </div>
    }
}
