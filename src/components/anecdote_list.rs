use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Anecdote;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct AnecdoteListProps {
    pub anecdotes: Vec<Anecdote>,
}

#[function_component(AnecdoteList)]
pub fn anecdote_list(props: &AnecdoteListProps) -> Html {
    html! {
        <div>
            <h2>{"Anecdotes"}</h2>
            <table class="table table-striped">
                <thead>
                    <tr>
                        <th>{"Anecdote"}</th>
                        <th>{"Author"}</th>
                        <th>{"Votes"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.anecdotes.iter().map(|anecdote| html! {
                        <tr key={anecdote.id.clone()}>
                            <td>
                                <Link<Route> to={Route::Anecdote { id: anecdote.id.clone() }}>
                                    {anecdote.content.clone()}
                                </Link<Route>>
                            </td>
                            <td>{anecdote.author.clone()}</td>
                            <td>{anecdote.votes_label()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
