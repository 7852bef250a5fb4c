//! Range checks applied to a parsed profile before it is handed out.

use crate::error::{ServeProfileError, ServeProfileResult};
use crate::model::ServeProfile;

/// Validate a parsed profile.
///
/// The TOML layer already bounds ports to `u16`; the checks here reject the
/// values that type-check but cannot be served.
///
/// # Errors
/// Returns [`ServeProfileError::InvalidField`] for the first field that fails
/// a range check.
pub fn validate_profile(profile: &ServeProfile) -> ServeProfileResult<()> {
    ensure_port("port", profile.port)?;
    if let Some(client_port) = profile.hmr.client_port {
        ensure_port("hmr.client_port", client_port)?;
    }
    Ok(())
}

fn ensure_port(field: &'static str, value: u16) -> ServeProfileResult<()> {
    if value == 0 {
        return Err(ServeProfileError::InvalidField {
            field,
            reason: "port must be non-zero",
            value: Some(value.to_string()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_default_profile() {
        assert!(validate_profile(&ServeProfile::default()).is_ok());
    }

    #[test]
    fn rejects_zero_listen_port() {
        let profile = ServeProfile {
            port: 0,
            ..ServeProfile::default()
        };
        let err = validate_profile(&profile).expect_err("zero port should be rejected");
        assert!(matches!(
            err,
            ServeProfileError::InvalidField { field: "port", .. }
        ));
    }

    #[test]
    fn rejects_zero_client_port() {
        let mut profile = ServeProfile::default();
        profile.hmr.client_port = Some(0);
        let err = validate_profile(&profile).expect_err("zero client port should be rejected");
        assert!(matches!(
            err,
            ServeProfileError::InvalidField {
                field: "hmr.client_port",
                ..
            }
        ));
    }
}
