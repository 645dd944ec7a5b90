mod components;
mod counter;
mod pages;
mod router;

use yew::prelude::*;

use crate::router::AppRouter;

#[function_component(App)]
fn app() -> Html {
    html! {
        <AppRouter />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
