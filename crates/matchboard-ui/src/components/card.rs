use crate::components::foundations::{BasicProps, render_container};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub flat: bool,
    #[prop_or_default]
    pub bordered: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = classes!(
        "mb-card",
        props.flat.then_some("mb-card-flat"),
        props.bordered.then_some("mb-card-bordered"),
        props.class.clone()
    );
    html! {
        <div class={classes}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardSection)]
pub fn card_section(props: &BasicProps) -> Html {
    render_container("div", "mb-card-section", props)
}
