// src/components/button_counter.rs
use gloo::console::log;
use yew::prelude::*;

use crate::counter::Count;

#[function_component(ButtonCounter)]
pub fn button_counter() -> Html {
    let count = use_state(Count::new);

    let onclick = {
        let count = count.clone();
        Callback::from(move |_| {
            let next = count.increment();
            log!("counter incremented to:", next.value());
            count.set(next);
        })
    };

    html! {
        <div>
            <h3 class="counter">{ count.value() }</h3>
            <button class="btn" onclick={onclick}>{ "Click Me!" }</button>
        </div>
    }
}
