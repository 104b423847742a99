pub mod session;
pub mod shell;

pub use crate::domain::ports::{CatalogStore, ConfigProvider};
pub use crate::utils::error::Result;
