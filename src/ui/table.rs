use {
    super::{dialog::Dialog, document::Selector},
    crate::{
        domain::{
            activity::parse_timestamp,
            collection::Collection,
            error::ConsoleError,
            resource::{CollectionResource, Record},
        },
        services::resource_client::ResourceClient,
    },
    serde_json::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Epoch milliseconds or RFC 3339, shown as `YYYY-MM-DD HH:MM:SS` UTC.
    Timestamp,
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub label: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ColumnKind::Text,
        }
    }

    pub fn timestamp(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ColumnKind::Timestamp,
        }
    }

    pub fn render(&self, value: Option<&Value>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        if self.kind == ColumnKind::Timestamp
            && let Some(dt) = parse_timestamp(value)
        {
            return dt.format("%Y-%m-%d %H:%M:%S").to_string();
        }
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

pub struct TableOptions<R: CollectionResource> {
    pub element: Selector,
    pub collection: Collection<R>,
    pub columns: Vec<Column>,
    pub edit_dialog: Dialog,
}

/// Paged listing of a collection with a detail dialog per row.
pub struct Table<R: CollectionResource> {
    element: Selector,
    collection: Collection<R>,
    columns: Vec<Column>,
    edit_dialog: Dialog,
}

impl<R: CollectionResource> Table<R> {
    pub fn new(options: TableOptions<R>) -> Self {
        Self {
            element: options.element,
            collection: options.collection,
            columns: options.columns,
            edit_dialog: options.edit_dialog,
        }
    }

    pub fn element(&self) -> &Selector {
        &self.element
    }

    pub fn collection(&self) -> &Collection<R> {
        &self.collection
    }

    pub fn edit_dialog(&self) -> &Dialog {
        &self.edit_dialog
    }

    pub fn edit_dialog_mut(&mut self) -> &mut Dialog {
        &mut self.edit_dialog
    }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.label.as_str()).collect()
    }

    /// Re-fetches the page the collection points at.
    pub async fn refresh(&mut self, client: &ResourceClient<R>) -> Result<(), ConsoleError> {
        client.fetch_page(&mut self.collection).await
    }

    /// Follows link `rel` and fetches that page. Returns `false` without
    /// fetching when the current page has no such link. On a failed fetch
    /// the table stays on the page it showed before.
    pub async fn go(
        &mut self,
        client: &ResourceClient<R>,
        rel: &str,
    ) -> Result<bool, ConsoleError> {
        let previous = self.collection.url().to_string();
        if !self.collection.go(rel) {
            tracing::debug!(table = %self.element, rel, "no such page link");
            return Ok(false);
        }
        if let Err(e) = self.refresh(client).await {
            tracing::warn!(table = %self.element, rel, error = %e, "page fetch failed");
            self.collection.reset_url(previous);
            return Err(e);
        }
        Ok(true)
    }

    pub async fn first_page(&mut self, client: &ResourceClient<R>) -> Result<bool, ConsoleError> {
        self.go(client, "first").await
    }

    pub async fn previous_page(
        &mut self,
        client: &ResourceClient<R>,
    ) -> Result<bool, ConsoleError> {
        self.go(client, "prev").await
    }

    pub async fn next_page(&mut self, client: &ResourceClient<R>) -> Result<bool, ConsoleError> {
        self.go(client, "next").await
    }

    pub async fn last_page(&mut self, client: &ResourceClient<R>) -> Result<bool, ConsoleError> {
        self.go(client, "last").await
    }
}

impl<R> Table<R>
where
    R: CollectionResource,
    R::Model: Record,
{
    /// Cell text of every entry on the current page, one `Vec` per row.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.collection
            .entries()
            .iter()
            .map(|entry| {
                self.columns
                    .iter()
                    .map(|column| column.render(entry.attribute(&column.name)))
                    .collect()
            })
            .collect()
    }

    /// Shows entry `row` of the current page in the edit dialog.
    pub fn open(&mut self, row: usize) -> Result<&Dialog, ConsoleError> {
        let entry = self.collection.get(row).ok_or(ConsoleError::NoSuchRow(row))?;
        self.edit_dialog.open(entry);
        Ok(&self.edit_dialog)
    }
}
