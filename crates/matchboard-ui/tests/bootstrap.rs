//! Bootstrap behavior tied to process-global state.
//!
//! The latch claimed by the first bootstrap lives for the whole process, so
//! the scenarios share a single test function in a dedicated binary.

use anyhow::Result;
use matchboard_ui::{MOUNT_POINT_ID, ShellApp, ShellError, WidgetSet};

#[test]
fn first_bootstrap_claims_the_process_and_reruns_fail() -> Result<()> {
    let shell = ShellApp::bootstrap()?;
    assert_eq!(shell.widgets(), WidgetSet::BOARD_KIT);
    assert_eq!(shell.mount_point(), MOUNT_POINT_ID);

    let err = ShellApp::bootstrap().expect_err("second bootstrap must fail");
    assert!(matches!(err, ShellError::AlreadyBootstrapped));
    Ok(())
}
