use crate::components::foundations::{BasicProps, render_container};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toolbar)]
pub fn toolbar(props: &ToolbarProps) -> Html {
    let classes = classes!("mb-toolbar", props.class.clone());
    html! {
        <div class={classes} role="toolbar">
            { for props.children.iter() }
        </div>
    }
}

#[function_component(ToolbarTitle)]
pub fn toolbar_title(props: &BasicProps) -> Html {
    render_container("div", "mb-toolbar-title", props)
}
