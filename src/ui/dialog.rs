use {
    super::document::Selector,
    crate::domain::{error::ConsoleError, resource::Record},
    serde_json::Value,
    std::collections::{BTreeMap, BTreeSet},
};

pub struct DialogOptions {
    pub element: Selector,
    pub title: String,
    pub fields: Vec<String>,
    pub readonly: Vec<String>,
}

/// Detail dialog showing one record's fields.
#[derive(Debug)]
pub struct Dialog {
    element: Selector,
    title: String,
    fields: Vec<String>,
    readonly: BTreeSet<String>,
    values: BTreeMap<String, Value>,
    open: bool,
}

impl Dialog {
    pub fn new(options: DialogOptions) -> Self {
        Self {
            element: options.element,
            title: options.title,
            fields: options.fields,
            readonly: options.readonly.into_iter().collect(),
            values: BTreeMap::new(),
            open: false,
        }
    }

    pub fn element(&self) -> &Selector {
        &self.element
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn is_read_only(&self, name: &str) -> bool {
        self.readonly.contains(name)
    }

    pub fn readonly_fields(&self) -> impl Iterator<Item = &str> {
        self.readonly.iter().map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Loads every dialog field from `record` and shows the dialog. Fields
    /// the record lacks are left blank.
    pub fn open(&mut self, record: &impl Record) {
        self.values = self
            .fields
            .iter()
            .filter_map(|name| {
                record
                    .attribute(name)
                    .map(|value| (name.clone(), value.clone()))
            })
            .collect();
        self.open = true;
        tracing::debug!(dialog = %self.element, fields = self.values.len(), "dialog opened");
    }

    pub fn close(&mut self) {
        self.open = false;
        self.values.clear();
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), ConsoleError> {
        if !self.fields.iter().any(|f| f == name) {
            return Err(ConsoleError::UnknownField(name.to_string()));
        }
        if self.is_read_only(name) {
            return Err(ConsoleError::ReadOnlyField(name.to_string()));
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }
}
