#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Matchboard Web UI scaffolding.
//! This crate holds the Yew front-end entrypoint plus the closed widget
//! catalog the board shell registers at bootstrap.

pub mod error;
pub mod shell;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod components;

pub use error::{ShellError, ShellResult};
pub use shell::{MOUNT_POINT_ID, ShellApp};
pub use widgets::WidgetSet;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
