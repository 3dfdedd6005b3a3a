//! HATEOAS navigation links.

use serde::{Deserialize, Serialize};

/// A navigation link attached to a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name (`self`, `prev`, `next`).
    pub rel: String,
    /// Absolute URL.
    pub href: String,
    /// HTTP method to use with `href`.
    pub method: String,
}

impl Link {
    /// Relation of the link pointing at the current page.
    pub const SELF: &'static str = "self";
    /// Relation of the link pointing at the previous page.
    pub const PREV: &'static str = "prev";
    /// Relation of the link pointing at the next page.
    pub const NEXT: &'static str = "next";
}

/// Scheme and authority the client used to reach the API.
///
/// Links are absolute, so they are built against the origin of the
/// incoming request rather than the bind address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOrigin {
    scheme: String,
    host: String,
}

impl LinkOrigin {
    /// Create an origin from a scheme (`http`) and a host (`api.local:8080`).
    pub fn new(scheme: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
        }
    }

    /// The scheme, e.g. `https`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The host with optional port.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Absolute URL for a path on this origin.
    pub fn url(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.host, path)
    }

    /// Build a link. The path is not validated.
    pub fn link(&self, rel: &str, path: &str, method: &str) -> Link {
        Link {
            rel: rel.to_string(),
            href: self.url(path),
            method: method.to_string(),
        }
    }
}
