// src/pages/home.rs
use gloo::utils::document;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::button_counter::ButtonCounter;
use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with((), |_| {
        document().set_title("Hello Yew");
        || ()
    });

    html! {
        <div class="p-6">
            <h1 class="text-2xl font-bold mb-2">{ "Hello Yew" }</h1>
            <ButtonCounter />
            <Link<Route> to={Route::About}>{ "About page" }</Link<Route>>
        </div>
    }
}
