use async_trait::async_trait;

use crate::data::Locator;

pub mod errors;
pub mod http;

pub use errors::PublishError;
pub use http::HttpContentStore;

/// A content-addressed blob store.
///
/// A successful upload guarantees the locator will resolve to the submitted
/// bytes, not that it is immediately visible everywhere.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<Locator, PublishError>;
}
