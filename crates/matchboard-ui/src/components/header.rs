use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub elevated: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let classes = classes!(
        "mb-header",
        props.elevated.then_some("mb-header-elevated"),
        props.class.clone()
    );
    html! {
        <header class={classes}>
            { for props.children.iter() }
        </header>
    }
}
