use crate::error::ImportError;
use async_trait::async_trait;

mod request;

pub use self::request::RequestFetcher;

/// Supplies the final HTML of a page. Rendering, retries and bot handling are
/// the implementation's business; extraction only sees the returned string.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, ImportError>;
}
