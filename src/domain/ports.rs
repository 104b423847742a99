use crate::config::LogFormat;
use crate::domain::item::StoreItem;
use crate::utils::error::Result;

/// Where catalog records come from and where new ones are appended.
pub trait CatalogStore {
    fn load(&self) -> Result<Vec<StoreItem>>;
    fn append(&self, item: &StoreItem) -> Result<()>;
}

pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn log_filter(&self) -> &str;
    fn log_format(&self) -> LogFormat;
}
