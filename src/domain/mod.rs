// Domain layer: the catalog model and the ports it is loaded and saved through.

pub mod category;
pub mod inventory;
pub mod item;
pub mod ports;
pub mod review;

pub use inventory::{ByCategory, Inventory};
pub use item::StoreItem;
pub use review::Review;
