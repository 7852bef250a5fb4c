use yew::prelude::*;

#[function_component(Space)]
pub fn space() -> Html {
    html! { <div class="mb-space" /> }
}
