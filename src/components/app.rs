// ============================================================================
// APP - Router, store provider and the page shell
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{About, AnecdoteDetail, AnecdoteList, CreateNew, Footer, Menu, Notification};
use crate::hooks::{use_anecdote_store, AnecdoteStoreProvider, StoreInit};
use crate::router::{resolve, View};

#[function_component(App)]
pub fn app() -> Html {
    let init = use_memo((), |_| StoreInit::browser());

    html! {
        <BrowserRouter>
            <AnecdoteStoreProvider init={(*init).clone()}>
                <AppShell />
            </AnecdoteStoreProvider>
        </BrowserRouter>
    }
}

/// Header, menu, notification, the routed view and the footer.
/// Must sit below a router and an `AnecdoteStoreProvider`.
#[function_component(AppShell)]
pub fn app_shell() -> Html {
    let location = use_location();
    let store = use_anecdote_store();
    let Some(store) = store else {
        log::error!("❌ AppShell rendered without an AnecdoteStoreProvider");
        return html! {};
    };

    let path = location
        .as_ref()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let view = resolve(&path);
    log::debug!("🧭 {} -> {:?}", path, view);

    let state = &store.state;
    let content = match view {
        View::List => html! { <AnecdoteList anecdotes={state.anecdotes().to_vec()} /> },
        View::Detail { id } => html! { <AnecdoteDetail anecdote={state.find(&id).cloned()} /> },
        View::About => html! { <About /> },
        View::Create => html! { <CreateNew on_create={store.add_anecdote.clone()} /> },
    };

    html! {
        <div class="container">
            <h1>{"Software anecdotes"}</h1>
            <Menu />
            <Notification notification={state.notification().cloned()} />
            {content}
            <Footer />
        </div>
    }
}
