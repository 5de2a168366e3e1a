pub mod activity_page;
pub mod dialog;
pub mod document;
pub mod page;
pub mod table;
