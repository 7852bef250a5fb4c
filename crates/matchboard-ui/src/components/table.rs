use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TableProps {
    #[prop_or_default]
    pub headers: Vec<AttrValue>,
    #[prop_or_default]
    pub rows: Vec<Vec<AttrValue>>,
    #[prop_or_default]
    pub dense: bool,
    #[prop_or_default]
    pub empty_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Table)]
pub fn table(props: &TableProps) -> Html {
    let classes = classes!(
        "mb-table",
        props.dense.then_some("mb-table-dense"),
        props.class.clone()
    );
    html! {
        <div class="mb-table-scroll">
            <table class={classes}>
                {if props.headers.is_empty() {
                    html! {}
                } else {
                    html! {
                        <thead>
                            <tr>
                                {for props.headers.iter().map(|head| html! { <th>{head.clone()}</th> })}
                            </tr>
                        </thead>
                    }
                }}
                <tbody>
                    {if props.rows.is_empty() {
                        props.empty_label.clone().map(|label| html! {
                            <tr class="mb-table-empty">
                                <td colspan={props.headers.len().to_string()}>{label}</td>
                            </tr>
                        }).unwrap_or_default()
                    } else {
                        html! {
                            {for props.rows.iter().map(|row| html! {
                                <tr>
                                    {for row.iter().map(|cell| html! { <TableCell>{cell.clone()}</TableCell> })}
                                </tr>
                            })}
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TableCellProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TableCell)]
pub fn table_cell(props: &TableCellProps) -> Html {
    let classes = classes!("mb-td", props.class.clone());
    html! {
        <td class={classes}>
            { for props.children.iter() }
        </td>
    }
}
