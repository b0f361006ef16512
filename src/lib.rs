pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod groups;
pub mod loader;
pub mod matcher;
pub mod ncbi;
pub mod output;
pub mod rank;
pub mod report;
pub mod resolve;
pub mod store;
pub mod summary;
