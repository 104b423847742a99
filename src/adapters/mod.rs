// Adapters layer: concrete implementations of the domain ports.

pub mod file_catalog;

pub use file_catalog::FileCatalog;
