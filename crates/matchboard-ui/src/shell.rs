//! Process-wide bootstrap for the board shell.
//!
//! # Design
//! - One shell per process: the first [`ShellApp::bootstrap`] claims a latch,
//!   later calls fail instead of constructing a second instance.
//! - The registered widget set is fixed at construction and owned by the
//!   instance; mounting consumes the instance, so rendering twice from one
//!   handle does not typecheck.
//! - Mount-point resolution is a pure seam so the fatal-absence rule is
//!   testable without a document.

use crate::error::{ShellError, ShellResult};
use crate::widgets::WidgetSet;
use once_cell::sync::OnceCell;

/// Element id of the document node the shell renders into, matching the
/// placeholder in `index.html`.
pub const MOUNT_POINT_ID: &str = "app";

static BOOTSTRAPPED: OnceCell<()> = OnceCell::new();

/// Handle to the single board shell instance of this process.
#[derive(Debug)]
pub struct ShellApp {
    widgets: WidgetSet,
}

impl ShellApp {
    /// Claim the process and register the fixed board kit.
    ///
    /// # Errors
    /// Returns [`ShellError::AlreadyBootstrapped`] when a shell instance was
    /// already constructed in this process.
    pub fn bootstrap() -> ShellResult<Self> {
        BOOTSTRAPPED
            .set(())
            .map_err(|()| ShellError::AlreadyBootstrapped)?;
        Ok(Self {
            widgets: WidgetSet::BOARD_KIT,
        })
    }

    /// Widget capabilities registered by this instance.
    #[must_use]
    pub const fn widgets(&self) -> WidgetSet {
        self.widgets
    }

    /// Element id the instance renders into.
    #[must_use]
    pub const fn mount_point(&self) -> &'static str {
        MOUNT_POINT_ID
    }
}

#[cfg(target_arch = "wasm32")]
impl ShellApp {
    /// Render the root view into `root`, consuming the instance.
    pub fn mount(self, root: web_sys::Element) {
        gloo::console::info!("mounting board shell", self.widgets.to_string());
        yew::Renderer::<crate::app::BoardApp>::with_root(root).render();
    }
}

/// Resolve a mount-point lookup, turning absence into a fatal error.
///
/// # Errors
/// Returns [`ShellError::MountPointMissing`] when the lookup came back empty.
pub fn resolve_mount_point<T>(id: &'static str, element: Option<T>) -> ShellResult<T> {
    element.ok_or(ShellError::MountPointMissing { id })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_passes_a_present_mount_point_through() {
        let resolved = resolve_mount_point("app", Some("node"));
        assert_eq!(resolved.ok(), Some("node"));
    }

    #[test]
    fn resolve_turns_absence_into_a_fatal_error() {
        let err = resolve_mount_point::<()>("app", None).expect_err("absence is fatal");
        assert!(matches!(err, ShellError::MountPointMissing { id: "app" }));
    }
}
