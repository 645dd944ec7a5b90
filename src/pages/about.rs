// src/pages/about.rs
use gloo::utils::document;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(About)]
pub fn about() -> Html {
    use_effect_with((), |_| {
        document().set_title("About - Hello Yew");
        || ()
    });

    html! {
        <section class="p-6">
            <h1 class="text-2xl font-bold mb-2">{ "About Page" }</h1>
            <p class="mb-2">{ "This demo is built with Yew and rendered entirely in the browser." }</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                { "Go back to landing page" }
            </Link<Route>>
        </section>
    }
}
