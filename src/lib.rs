pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod query;
pub mod storage;
pub mod website;

pub use error::{CatalogError, Result};
pub use model::{Catalog, Movie};
pub use storage::{open_storage, Storage};
