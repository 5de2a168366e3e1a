use {
    super::error::ConsoleError,
    serde_json::Value,
    std::{future::Future, pin::Pin},
};

pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Value, ConsoleError>> + Send + 'a>>;

/// JSON request seam between resource clients and the network.
///
/// `url` is either a path relative to the console's base URL (a resource
/// root, possibly with a query) or an absolute URL taken from a page link.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> TransportFuture<'_>;

    fn put(&self, url: &str, body: Value) -> TransportFuture<'_>;
}
