use crate::components::foundations::{Size, Tone, tone_class};
use crate::components::icon::Icon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChipProps {
    #[prop_or_default]
    pub tone: Option<Tone>,
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Chip)]
pub fn chip(props: &ChipProps) -> Html {
    let tone = tone_class("mb-chip", props.tone);
    let size = props.size.with_prefix("mb-chip");
    let mut classes = classes!(
        "mb-chip",
        size,
        props.outline.then_some("mb-chip-outline"),
        props.class.clone()
    );
    if let Some(tone) = tone {
        classes.push(tone);
    }

    html! {
        <span class={classes}>
            {props.icon.clone().map(|name| html! {
                <Icon name={name} size={props.size} />
            }).unwrap_or_default()}
            { for props.children.iter() }
        </span>
    }
}
