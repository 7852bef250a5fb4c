use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    #[prop_or_default]
    pub open: bool,
    /// Keep the dialog up when the backdrop is clicked.
    #[prop_or_default]
    pub persistent: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let classes = classes!(
        "mb-dialog",
        props.open.then_some("mb-dialog-open"),
        props.class.clone()
    );

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true">
            <div class="mb-dialog-box">
                { for props.children.iter() }
            </div>
            {(!props.persistent).then(|| html! {
                <button class="mb-dialog-backdrop" onclick={on_close}></button>
            }).unwrap_or_default()}
        </div>
    }
}
