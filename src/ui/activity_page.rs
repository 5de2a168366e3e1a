use {
    super::{
        dialog::{Dialog, DialogOptions},
        document::{Document, Selector},
        page::Page,
        table::{Column, Table, TableOptions},
    },
    crate::domain::{
        activity::{ActivityField, ActivityResource},
        collection::Collection,
    },
};

pub const DIALOG_ID: &str = "activity-dialog";
pub const DIALOG_TITLE: &str = "Edit Activity";
pub const TABLE_NAME: &str = "activities";

pub fn dialog_selector() -> Selector {
    Selector::id(DIALOG_ID)
}

pub fn table_selector() -> Selector {
    Selector::named("table", TABLE_NAME)
}

/// The activity log page: a table of activities with a read-only detail
/// dialog.
#[derive(Debug, Clone)]
pub struct ActivityPage {
    page_size: u32,
}

impl ActivityPage {
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }
}

pub struct ActivityView {
    pub table: Table<ActivityResource>,
}

impl ActivityView {
    /// The detail dialog, owned by the table it serves.
    pub fn dialog(&self) -> &Dialog {
        self.table.edit_dialog()
    }
}

impl Page for ActivityPage {
    type View = ActivityView;

    fn load(&self, document: &dyn Document) -> ActivityView {
        let dialog_element = dialog_selector();
        let table_element = table_selector();
        for element in [&dialog_element, &table_element] {
            if !document.contains(element) {
                tracing::warn!(%element, "activity page element not found");
            }
        }

        // Activities are audit records: every field is shown, none editable.
        let edit_dialog = Dialog::new(DialogOptions {
            element: dialog_element,
            title: DIALOG_TITLE.to_string(),
            fields: ActivityField::attribute_names(),
            readonly: ActivityField::attribute_names(),
        });

        let collection = Collection::with_options(
            ActivityResource,
            vec![("size".to_string(), self.page_size.to_string())],
        );

        let table = Table::new(TableOptions {
            element: table_element,
            collection,
            columns: vec![
                Column::text("id", "Activity ID"),
                Column::text("tokenID", "Token ID"),
                Column::text("userID", "User ID"),
                Column::text("operation", "Operation"),
                Column::text("result", "Result"),
                Column::timestamp("date", "Date"),
            ],
            edit_dialog,
        });

        tracing::info!(
            page_size = self.page_size,
            url = table.collection().url(),
            "activity page loaded"
        );
        ActivityView { table }
    }
}
