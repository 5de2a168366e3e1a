use {
    super::error::ConsoleError,
    super::resource::CollectionResource,
    serde_json::Value,
    std::collections::BTreeMap,
};

/// A paginated, client-side view of a list resource.
///
/// Holds the URL of the page to fetch next, the parsed entries of the last
/// fetched page, the server-reported total and the navigation links.
pub struct Collection<R: CollectionResource> {
    resource: R,
    options: Vec<(String, String)>,
    current_url: String,
    total: Option<u64>,
    links: BTreeMap<String, String>,
    entries: Vec<R::Model>,
}

impl<R: CollectionResource> Collection<R> {
    pub fn new(resource: R) -> Self {
        Self::with_options(resource, Vec::new())
    }

    /// Default query parameters are applied to every `query()` call that
    /// does not override them.
    pub fn with_options(resource: R, options: Vec<(String, String)>) -> Self {
        let current_url = resource.resource_root().to_string();
        let mut collection = Self {
            resource,
            options,
            current_url,
            total: None,
            links: BTreeMap::new(),
            entries: Vec::new(),
        };
        // An unencodable default leaves the bare resource root in place.
        if let Err(e) = collection.query(&[]) {
            tracing::warn!(error = %e, "ignoring default collection options");
        }
        collection
    }

    pub fn url(&self) -> &str {
        &self.current_url
    }

    /// Rebuilds the current URL from `params` on top of the defaults. Empty
    /// values are skipped; `"0"` is kept.
    pub fn query(&mut self, params: &[(&str, &str)]) -> Result<(), ConsoleError> {
        let mut merged: Vec<(&str, &str)> = params.to_vec();
        for (name, value) in &self.options {
            if !merged.iter().any(|(n, _)| n == name) {
                merged.push((name.as_str(), value.as_str()));
            }
        }
        merged.retain(|(_, value)| !value.is_empty());

        let root = self.resource.resource_root();
        self.current_url = if merged.is_empty() {
            root.to_string()
        } else {
            let query = serde_urlencoded::to_string(&merged)
                .map_err(|e| ConsoleError::InvalidUrl(e.to_string()))?;
            format!("{root}?{query}")
        };
        Ok(())
    }

    /// Replaces entries, total and links with those of a page response.
    pub fn parse(&mut self, response: &Value) {
        self.total = self.resource.total(response);

        self.links.clear();
        for link in as_list(self.resource.links(response)) {
            let rel = link.get("rel").and_then(Value::as_str);
            let href = link.get("href").and_then(Value::as_str);
            match (rel, href) {
                (Some(rel), Some(href)) => {
                    self.links.insert(rel.to_string(), href.to_string());
                }
                _ => tracing::debug!(%link, "skipping link without rel/href"),
            }
        }

        self.entries = as_list(self.resource.entries(response))
            .iter()
            .map(|entry| self.resource.parse_entry(entry))
            .collect();
    }

    pub fn link(&self, rel: &str) -> Option<&str> {
        self.links.get(rel).map(String::as_str)
    }

    pub fn links(&self) -> &BTreeMap<String, String> {
        &self.links
    }

    /// Points the collection back at a URL it held before, e.g. after a
    /// failed fetch of a linked page.
    pub fn reset_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Points the collection at the page behind link `rel`. Returns `false`
    /// and leaves the URL unchanged if there is no such link.
    pub fn go(&mut self, rel: &str) -> bool {
        match self.links.get(rel) {
            Some(href) => {
                self.current_url = href.clone();
                true
            }
            None => false,
        }
    }

    pub fn entries(&self) -> &[R::Model] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&R::Model> {
        self.entries.get(index)
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Absent → empty, array → its items, anything else → a single item.
fn as_list(value: Option<Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => vec![other],
    }
}
