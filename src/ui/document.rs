use {derive_more::Display, std::collections::HashSet};

/// Element a widget binds to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum Selector {
    #[display("#{_0}")]
    Id(String),

    #[display("{tag}[name='{name}']")]
    Named { tag: String, name: String },
}

impl Selector {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    pub fn named(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            tag: tag.into(),
            name: name.into(),
        }
    }
}

/// The page the widgets are mounted in.
pub trait Document {
    fn contains(&self, selector: &Selector) -> bool;
}

/// A document described by the set of elements it has. Used when no real
/// page exists, e.g. the headless viewer.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    elements: HashSet<Selector>,
}

impl StaticDocument {
    pub fn new(elements: impl IntoIterator<Item = Selector>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, selector: Selector) {
        self.elements.insert(selector);
    }
}

impl Document for StaticDocument {
    fn contains(&self, selector: &Selector) -> bool {
        self.elements.contains(selector)
    }
}
