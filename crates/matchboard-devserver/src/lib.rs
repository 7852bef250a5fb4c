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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Typed mirror of the workspace dev-server profile.
//!
//! The board UI is served during development by an external tool that reads
//! `devserver.toml` from the workspace root exactly once at startup. This
//! crate owns the schema of that document so the checked-in copy, the serve
//! tool, and the tests all agree on one definition.
//!
//! Layout: `model.rs` (typed profile records and defaults), `validate.rs`
//! (range checks), `loader.rs` (filesystem read + parse).

pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ServeProfileError, ServeProfileResult};
pub use loader::{PROFILE_FILE_NAME, load_profile};
pub use model::{DEFAULT_PORT, HmrProfile, ServeProfile};
pub use validate::validate_profile;
