// Server-side rendering harness for component tests.
// Components render inside a router whose memory history starts at `path`.

use yew::prelude::*;
use yew::ServerRenderer;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::Router;

use crate::hooks::StoreInit;
use crate::models::load_seed;
use crate::stores::ids::shared;
use crate::stores::SequentialIds;

#[derive(Properties, PartialEq)]
pub struct HarnessProps {
    pub path: AttrValue,
    pub view: fn() -> Html,
}

#[function_component(Harness)]
fn harness(props: &HarnessProps) -> Html {
    let history = MemoryHistory::new();
    history.push(props.path.to_string());

    html! {
        <Router history={AnyHistory::from(history)}>
            {(props.view)()}
        </Router>
    }
}

pub async fn render_at(path: &'static str, view: fn() -> Html) -> String {
    ServerRenderer::<Harness>::with_props(move || HarnessProps {
        path: AttrValue::from(path),
        view,
    })
    .hydratable(false)
    .render()
    .await
}

/// Seeded store whose new ids are 3, 4, 5, ...
pub fn test_store() -> StoreInit {
    StoreInit::new(load_seed().unwrap(), shared(SequentialIds::starting_at(3)))
}
