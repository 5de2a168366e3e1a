use super::document::Document;

/// A console page. `load` runs once when the page is shown and builds the
/// widgets; everything after that belongs to the widgets.
pub trait Page {
    type View;

    fn load(&self, document: &dyn Document) -> Self::View;
}
