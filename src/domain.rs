pub mod activity;
pub mod collection;
pub mod error;
pub mod resource;
pub mod transport;
