use crate::core::shell::{Effect, ShellState};
use crate::domain::ports::CatalogStore;
use crate::domain::{Inventory, StoreItem};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use std::io::{BufRead, Write};

/// One interactive run: owns the inventory, the catalog it persists to and
/// the output sink, and feeds input lines through the shell state machine.
pub struct Session<C: CatalogStore, W: Write> {
    inventory: Inventory,
    catalog: C,
    out: W,
    state: ShellState,
}

impl<C: CatalogStore, W: Write> Session<C, W> {
    pub fn new(catalog: C, out: W) -> Self {
        Self {
            inventory: Inventory::new(),
            catalog,
            out,
            state: ShellState::default(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Fills the inventory from the catalog. A catalog that cannot be read
    /// is reported and the session carries on with what it has; only output
    /// failures are returned as errors.
    pub fn load(&mut self) -> Result<usize> {
        match self.catalog.load() {
            Ok(items) => {
                let count = items.len();
                self.inventory.extend(items);
                tracing::info!("Loaded {} catalog item(s)", count);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Failed to load catalog: {}", e);
                writeln!(
                    self.out,
                    "Error opening catalog file: {}",
                    e.user_friendly_message()
                )?;
                Ok(0)
            }
        }
    }

    /// Prompts and reads until the operator quits or input runs out.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut line = String::new();
        while !self.state.is_finished() {
            self.out.write_all(self.state.prompt().as_bytes())?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::info!("Input closed, ending session");
                break;
            }
            self.feed(line.trim_end_matches(['\r', '\n']))?;
        }
        Ok(())
    }

    /// Advances the state machine by one line and carries out its effect.
    pub fn feed(&mut self, line: &str) -> Result<()> {
        let (next, effect) = std::mem::take(&mut self.state).step(line);
        self.state = next;
        self.apply(effect)
    }

    fn apply(&mut self, effect: Effect) -> Result<()> {
        match effect {
            Effect::None => {}
            Effect::Say(message) => self.out.write_all(message.as_bytes())?,
            Effect::AddItem(item) => self.add_item(item)?,
            Effect::RemoveItem(name) => {
                let removed = self.inventory.remove_item(&name);
                tracing::info!("Removed {} item(s) named '{}'", removed, name);
                writeln!(self.out, "Item removed successfully!")?;
            }
            Effect::ListCategory(category) => {
                let listing = self.inventory.render_category(category);
                self.out.write_all(listing.as_bytes())?;
            }
            Effect::ShowItem(name) => match self.inventory.find_item(&name) {
                Some(item) => write!(self.out, "Item details:\n{}", item)?,
                None => {
                    tracing::debug!("Lookup miss for '{}'", name);
                    writeln!(self.out, "Item not found.")?;
                    self.state = std::mem::take(&mut self.state).abandon();
                }
            },
            Effect::AddReview { item, review } => match self.inventory.find_item_mut(&item) {
                Some(target) => {
                    target.add_review(review);
                    tracing::info!("Review added to '{}'", item);
                    writeln!(self.out, "Review added successfully!")?;
                }
                None => writeln!(self.out, "Item not found.")?,
            },
        }
        Ok(())
    }

    /// The record is written before the in-memory insert, so a failed write
    /// leaves both sides unchanged.
    fn add_item(&mut self, item: StoreItem) -> Result<()> {
        let checks = [
            ("Name", item.name()),
            ("Price", item.price()),
            ("Category", item.category()),
        ];
        for (field, value) in checks {
            if let Err(e) = validate_non_empty_string(field, value) {
                tracing::warn!("Rejected new item: {}", e);
                writeln!(self.out, "{}. The item was not added.", e.user_friendly_message())?;
                return Ok(());
            }
        }

        if let Err(e) = self.catalog.append(&item) {
            tracing::error!("Failed to persist '{}': {}", item.name(), e);
            writeln!(
                self.out,
                "Error saving item: {}. The item was not added.",
                e.user_friendly_message()
            )?;
            return Ok(());
        }

        tracing::info!("Added '{}' to {}", item.name(), item.category());
        self.inventory.add_item(item);
        writeln!(self.out, "Item added successfully!")?;
        Ok(())
    }
}
