//! The data source adapter: one outbound request, a bounded batch of posts.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The fixed public endpoint serving the demo posts.
pub const POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Fixed cap on the loaded batch. The demo never pages.
pub const POSTS_CAP: usize = 10;

/// One loaded post. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    /// Foreign reference only; never validated here.
    #[serde(rename = "userId")]
    pub user_id: u64,
}

/// The single error the adapter surfaces.
///
/// Every transport and decode failure collapses into `FetchFailed`; the
/// underlying cause only reaches the log sink.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to fetch posts")]
    FetchFailed,
}

/// The outbound transport seam. Production code uses [`HttpTransport`];
/// tests substitute in-memory transports.
#[async_trait]
pub trait PostTransport: Send + Sync {
    async fn fetch_posts(&self) -> anyhow::Result<Vec<Post>>;
}

/// One HTTP GET against a fixed endpoint returning a JSON array of posts.
/// No authentication, no request body, no query parameters.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_endpoint(POSTS_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostTransport for HttpTransport {
    async fn fetch_posts(&self) -> anyhow::Result<Vec<Post>> {
        let posts = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Post>>()
            .await?;
        Ok(posts)
    }
}

/// The data source adapter: issues exactly one request per [`load`] call and
/// returns at most [`POSTS_CAP`] posts in server order.
///
/// [`load`]: PostsClient::load
#[derive(Clone, Debug)]
pub struct PostsClient<T = HttpTransport> {
    transport: T,
}

impl PostsClient<HttpTransport> {
    pub fn new() -> Self {
        Self {
            transport: HttpTransport::new(),
        }
    }
}

impl Default for PostsClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PostTransport> PostsClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Loads the demo batch. All-or-nothing: any failure collapses into
    /// [`FetchError::FetchFailed`]. No retry, no caching, no pagination.
    pub async fn load(&self) -> Result<Vec<Post>, FetchError> {
        let mut posts = self.transport.fetch_posts().await.map_err(|err| {
            tracing::warn!(target: "postboard", error = %err, "posts fetch failed");
            FetchError::FetchFailed
        })?;
        posts.truncate(POSTS_CAP);
        tracing::debug!(target: "postboard", count = posts.len(), "posts loaded");
        Ok(posts)
    }
}
