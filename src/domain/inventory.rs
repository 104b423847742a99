use crate::domain::item::StoreItem;
use std::fmt::Write as _;
use std::slice;

const LISTING_SEPARATOR: &str = "-----------------------------";

/// The in-memory catalog. Items are kept by value in insertion order and
/// duplicate names are allowed.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<StoreItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: StoreItem) {
        self.items.push(item);
    }

    /// Removes every item called `name` and returns how many went.
    /// Removing an unknown name is a silent no-op.
    pub fn remove_item(&mut self, name: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.name() != name);
        before - self.items.len()
    }

    /// First item called `name`, in insertion order.
    pub fn find_item(&self, name: &str) -> Option<&StoreItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Same lookup as [`Inventory::find_item`], for callers that append reviews.
    pub fn find_item_mut(&mut self, name: &str) -> Option<&mut StoreItem> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    /// Lazily yields the items whose category equals `category` exactly.
    pub fn list_by_category<'a>(&'a self, category: &'a str) -> ByCategory<'a> {
        ByCategory {
            items: self.items.iter(),
            category,
        }
    }

    /// Text listing for one category. The "no items" line depends only on the
    /// whole inventory being empty; a category with no matches under a
    /// non-empty inventory prints just the header.
    pub fn render_category(&self, category: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Inventory for Category: {}", category);
        for item in self.list_by_category(category) {
            let _ = write!(out, "{}", item);
            let _ = writeln!(out, "{}", LISTING_SEPARATOR);
        }
        if self.items.is_empty() {
            out.push_str("No items found in the inventory.\n");
        }
        out
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, StoreItem> {
        self.items.iter()
    }
}

impl FromIterator<StoreItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = StoreItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<StoreItem> for Inventory {
    fn extend<I: IntoIterator<Item = StoreItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Iterator returned by [`Inventory::list_by_category`].
#[derive(Debug, Clone)]
pub struct ByCategory<'a> {
    items: slice::Iter<'a, StoreItem>,
    category: &'a str,
}

impl<'a> Iterator for ByCategory<'a> {
    type Item = &'a StoreItem;

    fn next(&mut self) -> Option<Self::Item> {
        let category = self.category;
        self.items.find(|item| item.category() == category)
    }
}
