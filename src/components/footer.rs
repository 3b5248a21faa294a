use yew::prelude::*;

use crate::utils::constants::{COURSE_URL, SOURCE_LABEL, SOURCE_URL};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <div class="footer mt-3">
            {"Anecdote app for "}
            <a href={COURSE_URL}>{"Full Stack -websovelluskehitys"}</a>
            {". See "}
            <a href={SOURCE_URL}>{SOURCE_LABEL}</a>
            {" for the source code."}
        </div>
    }
}
