//! Typed profile records and their defaults.
//!
//! # Design
//! - Pure data carriers; filesystem access lives in `loader.rs` and range
//!   checks in `validate.rs`.
//! - The schema is closed: unknown keys fail deserialization so typos in the
//!   checked-in document surface at startup instead of being ignored.
//! - Defaults mirror the serve tool's own conventions, so a minimal document
//!   behaves the same as no document at all.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

/// Conventional TCP port the dev server listens on.
pub const DEFAULT_PORT: u16 = 5173;

/// Network profile consumed by the dev server at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServeProfile {
    /// Address the server binds; the unspecified address means every
    /// interface on the host.
    pub host: IpAddr,
    /// TCP listen port.
    pub port: u16,
    /// Fail startup when the port is taken instead of drifting to a free one.
    pub strict_port: bool,
    /// Live-reload client addressing.
    pub hmr: HmrProfile,
}

/// Hot-reload client settings, kept apart from the listen socket so a proxy
/// in front of the dev box can be accounted for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HmrProfile {
    /// Port advertised to live-reload clients; resolves to the listen port
    /// when absent.
    pub client_port: Option<u16>,
}

impl ServeProfile {
    /// Socket address the server binds.
    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Port live-reload clients are told to dial.
    #[must_use]
    pub const fn hmr_client_port(&self) -> u16 {
        match self.hmr.client_port {
            Some(port) => port,
            None => self.port,
        }
    }

    /// Whether the profile binds every interface on the host.
    #[must_use]
    pub const fn is_wildcard_host(&self) -> bool {
        self.host.is_unspecified()
    }
}

impl Default for ServeProfile {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            strict_port: false,
            hmr: HmrProfile::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_mirror_the_serve_tool() {
        let profile = ServeProfile::default();
        assert_eq!(profile.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(profile.port, DEFAULT_PORT);
        assert!(!profile.strict_port);
        assert_eq!(profile.hmr.client_port, None);
        assert!(!profile.is_wildcard_host());
    }

    #[test]
    fn hmr_client_port_falls_back_to_listen_port() {
        let mut profile = ServeProfile {
            port: 4000,
            ..ServeProfile::default()
        };
        assert_eq!(profile.hmr_client_port(), 4000);

        profile.hmr.client_port = Some(24_678);
        assert_eq!(profile.hmr_client_port(), 24_678);
    }

    #[test]
    fn listen_addr_combines_host_and_port() {
        let profile = ServeProfile {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            ..ServeProfile::default()
        };
        assert!(profile.is_wildcard_host());
        assert_eq!(
            profile.listen_addr(),
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT)
        );
    }

    #[test]
    fn minimal_document_fills_from_defaults() {
        let profile: ServeProfile =
            toml::from_str("port = 8080").expect("minimal document should parse");
        assert_eq!(profile.port, 8080);
        assert_eq!(profile.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert!(!profile.strict_port);
        assert_eq!(profile.hmr_client_port(), 8080);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = toml::from_str::<ServeProfile>("hostname = \"board\"")
            .expect_err("unknown key should fail the closed schema");
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn nested_unknown_keys_are_rejected() {
        let err = toml::from_str::<ServeProfile>("[hmr]\nclientport = 1")
            .expect_err("unknown hmr key should fail the closed schema");
        assert!(err.to_string().contains("unknown field"));
    }
}
