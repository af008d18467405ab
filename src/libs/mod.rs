pub mod data_storage;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
