use crate::{
    core::config::FeedConfig,
    data::geojson::FeatureCollection,
    MapError, Result,
};
use async_trait::async_trait;
use reqwest::Client;

/// Anything that can produce the earthquake FeatureCollection.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Retrieve and parse the collection. Failures are returned as-is; no
    /// retry or fallback happens at this level.
    async fn fetch(&self) -> Result<FeatureCollection>;

    /// Short human-readable origin used in log lines.
    fn describe(&self) -> String;
}

/// Feed fetched with a single HTTP GET.
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    /// Build a feed with its own client, honoring the configured user agent
    /// and optional timeout.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: config.url.clone(),
        })
    }

    /// Reuse an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<FeatureCollection> {
        log::info!("fetching earthquake feed from {}", self.url);
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MapError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp.text().await?;
        log::debug!("feed response from {} ({} bytes)", self.url, body.len());
        body.parse()
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Feed backed by a JSON document already in memory.
#[derive(Debug, Clone)]
pub struct StaticFeed {
    body: String,
}

impl StaticFeed {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Serializes a collection so it can be served again.
    pub fn from_collection(collection: &FeatureCollection) -> Result<Self> {
        Ok(Self::new(serde_json::to_string(collection)?))
    }
}

#[async_trait]
impl FeedSource for StaticFeed {
    async fn fetch(&self) -> Result<FeatureCollection> {
        self.body.parse()
    }

    fn describe(&self) -> String {
        format!("static feed ({} bytes)", self.body.len())
    }
}

/// Fetch the collection and hand over its features in delivery order.
pub async fn load_features(source: &dyn FeedSource) -> Result<Vec<serde_json::Value>> {
    let collection = source.fetch().await?;

    match &collection.metadata {
        Some(meta) => log::debug!(
            "loaded {:?} from {}: {} features (advertised {:?})",
            meta.title.as_deref().unwrap_or("untitled feed"),
            source.describe(),
            collection.len(),
            meta.count
        ),
        None => log::debug!(
            "loaded {} features from {}",
            collection.len(),
            source.describe()
        ),
    }

    Ok(collection.features)
}
