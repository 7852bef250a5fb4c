use crate::components::foundations::{BasicProps, render_container};
use yew::prelude::*;

#[function_component(Layout)]
pub fn layout(props: &BasicProps) -> Html {
    render_container("div", "mb-layout", props)
}
