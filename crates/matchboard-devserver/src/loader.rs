//! Filesystem loader for the dev-server profile.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ServeProfileError, ServeProfileResult};
use crate::model::ServeProfile;
use crate::validate::validate_profile;

/// Conventional name of the profile document at the workspace root.
pub const PROFILE_FILE_NAME: &str = "devserver.toml";

/// Read, parse, and validate the profile document at `path`.
///
/// The serve tool calls this exactly once at startup; edits to the document
/// after that point are not observed.
///
/// # Errors
/// Returns an error when the document cannot be read, does not match the
/// schema, or fails a range check.
pub fn load_profile(path: impl AsRef<Path>) -> ServeProfileResult<ServeProfile> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ServeProfileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let profile: ServeProfile =
        toml::from_str(&raw).map_err(|source| ServeProfileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_profile(&profile)?;
    info!(
        path = %path.display(),
        addr = %profile.listen_addr(),
        strict_port = profile.strict_port,
        hmr_client_port = profile.hmr_client_port(),
        "loaded dev server profile"
    );
    Ok(profile)
}
