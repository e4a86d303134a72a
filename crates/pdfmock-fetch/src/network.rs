use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::resource::{Resource, ResourceDescriptor};
use crate::traits::ResourceProvider;

/// Network backend: one GET per fetch, whole body returned.
#[derive(Clone, Debug)]
pub struct NetworkProvider {
    client: Client,
    base_url: Option<Url>,
}

impl NetworkProvider {
    /// Locations must be absolute URLs.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Relative locations are joined to `base_url`.
    pub fn with_base_url(base_url: &str) -> FetchResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidConfig(format!("base URL {base_url:?}: {e}")))?;
        Ok(Self {
            client: Client::new(),
            base_url: Some(base),
        })
    }

    /// Use a preconfigured client (proxies, headers, TLS roots).
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    fn resolve(&self, location: &str) -> FetchResult<Url> {
        let joined = match &self.base_url {
            Some(base) => base.join(location),
            None => Url::parse(location),
        };
        joined.map_err(|e| FetchError::InvalidConfig(format!("location {location:?}: {e}")))
    }
}

impl Default for NetworkProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceProvider for NetworkProvider {
    fn kind(&self) -> &'static str {
        "network"
    }

    async fn fetch(&self, descriptor: &ResourceDescriptor) -> FetchResult<Resource> {
        let url = self.resolve(descriptor.location())?;
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(%url, bytes = body.len(), "fetched");
        Ok(Resource::Bytes(body))
    }
}
