//! Root view and wasm entrypoint for the board shell.

use crate::components::{
    Card, CardSection, Chip, Header, Icon, Layout, Page, PageContainer, Size, Space, Spinner,
    Table, Toolbar, ToolbarTitle, Tone,
};
use crate::error::ShellResult;
use crate::shell::{ShellApp, resolve_mount_point};
use yew::prelude::*;

/// Root view composed from the registered board widgets.
#[function_component(BoardApp)]
pub(crate) fn board_app() -> Html {
    let headers = vec![
        AttrValue::from("Match"),
        AttrValue::from("Sets"),
        AttrValue::from("Games"),
        AttrValue::from("Status"),
    ];
    html! {
        <Layout>
            <Header elevated=true>
                <Toolbar>
                    <Icon name="sports_tennis" />
                    <ToolbarTitle>{ "Matchboard" }</ToolbarTitle>
                    <Space />
                    <Chip tone={Tone::Positive} size={Size::Sm} outline=true>{ "live" }</Chip>
                </Toolbar>
            </Header>
            <PageContainer>
                <Page padded=true>
                    <Card bordered=true>
                        <CardSection>
                            <Spinner size={Size::Lg} label="Waiting for live matches" />
                        </CardSection>
                    </Card>
                    <Table headers={headers} empty_label="No live matches yet" />
                </Page>
            </PageContainer>
        </Layout>
    }
}

/// Entrypoint used by the wasm bundle.
///
/// # Errors
/// Returns an error when the process already hosts a shell instance or the
/// document lacks the mount point.
pub fn run_app() -> ShellResult<()> {
    console_error_panic_hook::set_once();
    let shell = ShellApp::bootstrap()?;
    let root = resolve_mount_point(
        shell.mount_point(),
        gloo::utils::document().get_element_by_id(shell.mount_point()),
    )?;
    shell.mount(root);
    Ok(())
}
