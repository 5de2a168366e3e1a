use {
    crate::domain::{
        collection::Collection,
        error::ConsoleError,
        resource::{CollectionResource, Resource},
        transport::Transport,
    },
    std::sync::Arc,
};

/// Generic REST client for one resource, with the transport injected.
pub struct ResourceClient<R> {
    resource: R,
    transport: Arc<dyn Transport>,
}

impl<R: Resource> ResourceClient<R> {
    pub fn new(resource: R, transport: Arc<dyn Transport>) -> Self {
        Self {
            resource,
            transport,
        }
    }

    pub fn model_url(&self, id: &str) -> String {
        format!("{}/{id}", self.resource.resource_root())
    }

    pub async fn fetch(&self, id: &str) -> Result<R::Model, ConsoleError> {
        let url = self.model_url(id);
        let response = self.transport.get(&url).await?;
        tracing::debug!(%url, "fetched entry");
        Ok(self.resource.parse(&response))
    }

    /// Writes `model` back and returns the server's view of it.
    pub async fn save(&self, id: &str, model: &R::Model) -> Result<R::Model, ConsoleError> {
        let url = self.model_url(id);
        let request = self.resource.serialize(model);
        let response = self.transport.put(&url, request).await?;
        tracing::info!(%url, "saved entry");
        Ok(self.resource.parse(&response))
    }
}

impl<R: CollectionResource> ResourceClient<R> {
    /// Fetches the page the collection currently points at and replaces its
    /// contents.
    pub async fn fetch_page(&self, collection: &mut Collection<R>) -> Result<(), ConsoleError> {
        let url = collection.url().to_string();
        let response = self.transport.get(&url).await?;
        collection.parse(&response);
        tracing::info!(
            %url,
            count = collection.len(),
            total = ?collection.total(),
            "fetched page"
        );
        Ok(())
    }
}
