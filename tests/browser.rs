// The mounted app in a real DOM: typing, submitting, redirecting and the
// dismissal timer, plus how often store consumers re-render.
// Run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement};
use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

use routed_anecdotes::components::AppShell;
use routed_anecdotes::hooks::{use_anecdote_store, AnecdoteStoreProvider, StoreInit};
use routed_anecdotes::models::load_seed;
use routed_anecdotes::stores::ids::shared;
use routed_anecdotes::stores::SequentialIds;

wasm_bindgen_test_configure!(run_in_browser);

const TIMEOUT_MS: u32 = 600;

fn test_init() -> StoreInit {
    StoreInit::new(load_seed().unwrap(), shared(SequentialIds::starting_at(3)))
}

#[derive(Properties, PartialEq)]
struct TestAppProps {
    start: AttrValue,
}

#[function_component(TestApp)]
fn test_app(props: &TestAppProps) -> Html {
    let start = props.start.clone();
    let history = use_memo((), move |_| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(start.to_string());
        history
    });
    let init = use_memo((), |_| test_init());

    html! {
        <Router history={(*history).clone()}>
            <AnecdoteStoreProvider init={(*init).clone()} notification_timeout_ms={TIMEOUT_MS}>
                <AppShell />
            </AnecdoteStoreProvider>
        </Router>
    }
}

fn fresh_root() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn mount_at(start: &'static str) -> Element {
    let root = fresh_root();
    yew::Renderer::<TestApp>::with_root_and_props(
        root.clone(),
        TestAppProps {
            start: AttrValue::from(start),
        },
    )
    .render();
    root
}

async fn settle() {
    TimeoutFuture::new(30).await;
}

fn find(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

fn type_into(root: &Element, id: &str, value: &str) {
    let input: HtmlInputElement = find(root, &format!("#{}", id)).unwrap().dyn_into().unwrap();
    input.set_value(value);

    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn click(root: &Element, selector: &str) {
    let element: HtmlElement = find(root, selector).unwrap().dyn_into().unwrap();
    element.click();
}

fn banner(root: &Element) -> Option<String> {
    find(root, ".alert-success").map(|e| e.text_content().unwrap_or_default())
}

async fn submit_content(root: &Element, content: &str) {
    type_into(root, "content", content);
    settle().await;
    click(root, "button[type='submit']");
    settle().await;
}

#[wasm_bindgen_test]
async fn typed_anecdote_is_listed_announced_and_dismissed() {
    let root = mount_at("/create");
    settle().await;

    type_into(&root, "author", "Me");
    type_into(&root, "info", "http://example.com");
    submit_content(&root, "Test").await;

    let text = root.text_content().unwrap_or_default();
    assert!(!text.contains("create a new anecdote"));
    assert!(find(&root, "h2").unwrap().text_content().unwrap().contains("Anecdotes"));
    assert!(find(&root, "a[href='/anecdotes/3']").is_some());
    assert_eq!(banner(&root).as_deref(), Some("A new anecdote 'Test' was created."));

    TimeoutFuture::new(TIMEOUT_MS + 200).await;
    assert_eq!(banner(&root), None);
}

#[wasm_bindgen_test]
async fn earlier_timer_does_not_dismiss_a_newer_banner() {
    let root = mount_at("/create");
    settle().await;

    submit_content(&root, "first").await;
    TimeoutFuture::new(TIMEOUT_MS / 2).await;

    click(&root, "a[href='/create']");
    settle().await;
    submit_content(&root, "second").await;

    // Past the first banner's deadline, short of the second's
    TimeoutFuture::new(TIMEOUT_MS / 2 + 100).await;
    assert_eq!(banner(&root).as_deref(), Some("A new anecdote 'second' was created."));

    TimeoutFuture::new(TIMEOUT_MS).await;
    assert_eq!(banner(&root), None);
}

thread_local! {
    static CONSUMER_RENDERS: Cell<u32> = Cell::new(0);
}

#[function_component(CountingConsumer)]
fn counting_consumer() -> Html {
    let store = use_anecdote_store();
    CONSUMER_RENDERS.with(|renders| renders.set(renders.get() + 1));
    html! { <span>{store.map(|s| s.state.len()).unwrap_or_default()}</span> }
}

#[function_component(RerenderingParent)]
fn rerendering_parent() -> Html {
    let ticks = use_state(|| 0_u32);
    let init = use_memo((), |_| test_init());

    let onclick = {
        let ticks = ticks.clone();
        Callback::from(move |_: MouseEvent| ticks.set(*ticks + 1))
    };

    html! {
        <AnecdoteStoreProvider init={(*init).clone()}>
            <button id="tick" {onclick}>{"tick"}</button>
            <span id="ticks">{*ticks}</span>
            <CountingConsumer />
        </AnecdoteStoreProvider>
    }
}

#[wasm_bindgen_test]
async fn provider_rerender_leaves_consumers_alone() {
    let root = fresh_root();
    yew::Renderer::<RerenderingParent>::with_root(root.clone()).render();
    settle().await;
    assert_eq!(CONSUMER_RENDERS.with(Cell::get), 1);

    click(&root, "#tick");
    settle().await;
    click(&root, "#tick");
    settle().await;

    assert_eq!(find(&root, "#ticks").unwrap().text_content().as_deref(), Some("2"));
    assert_eq!(CONSUMER_RENDERS.with(Cell::get), 1);
}
