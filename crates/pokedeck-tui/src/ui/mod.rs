pub mod app;
pub mod cards;
pub mod footer;
pub mod header;
