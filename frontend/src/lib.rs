pub mod api;
pub mod app;
mod components;
pub mod config;
pub mod debounce;
pub mod error;
mod pages;
pub mod state;
pub mod types;
pub mod view_model;

pub use config::ListingConfig;
pub use error::ApiError;
pub use types::{Category, Pagination, SourceType, Tool, ToolsResponse};
