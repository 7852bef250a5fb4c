use crate::components::foundations::{BasicProps, render_container};
use yew::prelude::*;

#[function_component(PageContainer)]
pub fn page_container(props: &BasicProps) -> Html {
    render_container("main", "mb-page-container", props)
}

#[derive(Properties, PartialEq)]
pub struct PageProps {
    #[prop_or_default]
    pub padded: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Page)]
pub fn page(props: &PageProps) -> Html {
    let classes = classes!(
        "mb-page",
        props.padded.then_some("mb-page-padded"),
        props.class.clone()
    );
    html! {
        <section class={classes}>
            { for props.children.iter() }
        </section>
    }
}
