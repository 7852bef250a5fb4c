use crate::components::foundations::Size;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Ligature name of the glyph, rendered as text content.
    pub name: AttrValue,
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let classes = classes!(
        "mb-icon",
        props.size.with_prefix("mb-icon"),
        props.class.clone()
    );
    html! {
        <i class={classes} aria-hidden="true">{props.name.clone()}</i>
    }
}
