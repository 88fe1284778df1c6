//! The transport seam between the crawler and a concrete registry.

use async_trait::async_trait;
use reqwest::Client;

use hull_core::package::VersionRecord;

use crate::client::{build_client, fetch_text};
use crate::packument::parse_packument;
use crate::registry::Registry;

/// Source of per-package version metadata.
///
/// The crawler only ever talks to this trait, so tests can swap in a fixture
/// transport with no network behind it.
#[async_trait]
pub trait RegistryTransport: Send + Sync {
    /// The full version listing for one package.
    ///
    /// An unknown package is data, not an error: it yields an empty list.
    /// Errors are reserved for transport failures (network, HTTP, parse).
    async fn fetch_versions(&self, name: &str) -> miette::Result<Vec<VersionRecord>>;
}

/// Live transport speaking the npm packument protocol over HTTP.
pub struct HttpRegistry {
    registry: Registry,
    client: Client,
}

impl HttpRegistry {
    pub fn new(registry: Registry) -> miette::Result<Self> {
        Ok(Self {
            registry,
            client: build_client()?,
        })
    }
}

#[async_trait]
impl RegistryTransport for HttpRegistry {
    async fn fetch_versions(&self, name: &str) -> miette::Result<Vec<VersionRecord>> {
        let url = self.registry.packument_url(name);
        match fetch_text(&self.client, &url).await? {
            Some(body) => Ok(parse_packument(&body)?.into_records()),
            None => Ok(Vec::new()),
        }
    }
}
