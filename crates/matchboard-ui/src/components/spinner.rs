use crate::components::foundations::Size;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let classes = classes!(
        "mb-spinner",
        props.size.with_prefix("mb-spinner"),
        props.class.clone()
    );
    html! {
        <span class={classes} role="status" aria-label={props.label.clone()} />
    }
}
