use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Menu)]
pub fn menu() -> Html {
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    // Picking a link folds the bar back on small screens
    let on_select = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(false))
    };

    let collapse_class = classes!(
        "collapse",
        "navbar-collapse",
        expanded.then_some("show")
    );

    html! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <button
                type="button"
                class="navbar-toggler"
                aria-controls="responsive-navbar-nav"
                aria-expanded={expanded.to_string()}
                aria-label="Toggle navigation"
                onclick={on_toggle}
            >
                <span class="navbar-toggler-icon"></span>
            </button>
            <div class={collapse_class} id="responsive-navbar-nav" onclick={on_select}>
                <div class="navbar-nav mr-auto">
                    <span class="nav-link">
                        <Link<Route> to={Route::Anecdotes} classes="pr-1">{"anecdotes"}</Link<Route>>
                    </span>
                    <span class="nav-link">
                        <Link<Route> to={Route::Create} classes="pr-1">{"create new"}</Link<Route>>
                    </span>
                    <span class="nav-link">
                        <Link<Route> to={Route::About} classes="pr-1">{"about"}</Link<Route>>
                    </span>
                </div>
            </div>
        </nav>
    }
}
