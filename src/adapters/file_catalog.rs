use crate::domain::ports::CatalogStore;
use crate::domain::StoreItem;
use crate::utils::error::Result;
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Flat-file catalog: one `name price category` line per added item.
///
/// Loading groups whitespace-separated tokens into triples, so a field with
/// embedded whitespace shifts every record after it. Records are only ever
/// appended; removals are not written back.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Splits catalog text into items. Leftover tokens that do not fill a whole
/// triple are dropped.
pub fn parse_records(content: &str) -> Vec<StoreItem> {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    let mut chunks = tokens.chunks_exact(3);
    let items: Vec<StoreItem> = chunks
        .by_ref()
        .map(|t| StoreItem::new(t[0], t[1], t[2]))
        .collect();

    let leftover = chunks.remainder();
    if !leftover.is_empty() {
        tracing::warn!(
            "Ignoring {} trailing token(s) that do not form a full record: {:?}",
            leftover.len(),
            leftover
        );
    }

    items
}

pub fn format_record(item: &StoreItem) -> String {
    format!("{} {} {}\n", item.name(), item.price(), item.category())
}

impl CatalogStore for FileCatalog {
    fn load(&self) -> Result<Vec<StoreItem>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "No catalog at {}, starting with an empty inventory",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::warn!(
                "{} contains bytes that are not valid UTF-8; they were replaced",
                self.path.display()
            );
        }

        let items = parse_records(&content);
        tracing::debug!("Loaded {} item(s) from {}", items.len(), self.path.display());
        Ok(items)
    }

    fn append(&self, item: &StoreItem) -> Result<()> {
        let fields = [item.name(), item.price(), item.category()];
        if fields.iter().any(|f| f.chars().any(char::is_whitespace)) {
            tracing::warn!(
                "Item '{}' has a field containing whitespace; it will not reload as one record",
                item.name()
            );
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_record(item).as_bytes())?;
        file.flush()?;

        tracing::debug!("Appended '{}' to {}", item.name(), self.path.display());
        Ok(())
    }
}
