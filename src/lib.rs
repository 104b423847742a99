pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::FileCatalog;
pub use config::{LogFormat, StoreSettings};
pub use core::{session::Session, shell::ShellState};
pub use domain::{Inventory, Review, StoreItem};
pub use utils::error::{Result, StoreError};
