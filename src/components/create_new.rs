use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_navigation;
use crate::models::{AnecdoteDraft, DraftAction, DraftField, NewAnecdote};

#[derive(Properties, PartialEq)]
pub struct CreateNewProps {
    pub on_create: Callback<NewAnecdote>,
}

#[function_component(CreateNew)]
pub fn create_new(props: &CreateNewProps) -> Html {
    let draft = use_reducer(AnecdoteDraft::default);
    let navigation = use_navigation();

    let on_submit = {
        let draft = draft.clone();
        let on_create = props.on_create.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_create.emit(draft.to_new_anecdote());
            navigation.after_create();
        })
    };

    let on_reset = {
        let draft = draft.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            draft.dispatch(DraftAction::Reset);
        })
    };

    let input = |field: DraftField, name: &'static str| {
        let oninput = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let target: HtmlInputElement = e.target_unchecked_into();
                draft.dispatch(DraftAction::Edit(field, target.value()));
            })
        };
        html! {
            <input
                class="form-control"
                type="text"
                id={name}
                name={name}
                value={draft.field(field).to_string()}
                {oninput}
            />
        }
    };

    html! {
        <div>
            <h2>{"create a new anecdote"}</h2>
            <form onsubmit={on_submit}>
                <div class="form-group">
                    <label for="content">{"content"}</label>
                    {input(DraftField::Content, "content")}
                </div>
                <div class="form-group">
                    <label for="author">{"author"}</label>
                    {input(DraftField::Author, "author")}
                </div>
                <div class="form-group">
                    <label for="info">{"url for more info"}</label>
                    {input(DraftField::Info, "info")}
                </div>
                <button class="btn btn-primary" type="submit">{"create"}</button>
                <button class="btn btn-danger ml-2" type="button" onclick={on_reset}>{"reset"}</button>
            </form>
        </div>
    }
}
