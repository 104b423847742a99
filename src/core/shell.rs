//! The menu state machine.
//!
//! [`ShellState::step`] is a pure function from the current state and one
//! line of input to the next state and an [`Effect`]. It never touches the
//! inventory or any I/O; [`crate::core::session::Session`] carries out the
//! effects.

use crate::domain::category::{category_for_code, CATEGORY_MENU};
use crate::domain::{Review, StoreItem};

pub const MAIN_MENU: &str = "Choose one:\n1. Log in\n2. Quit\n";

pub const ROLE_MENU: &str = " Choose user type:\n\
-------------------\n\
1. Manager\n\
2. Customer\n\
3. Log off\n";

pub const MANAGER_MENU: &str = "Choose an action:\n\
1. Add new item\n\
2. Remove item\n\
3. Display inventory\n\
4. Log off\n";

pub const CUSTOMER_MENU: &str = "Choose an action:\n\
1. View inventory by category\n\
2. View details of searched item\n\
3. Log off\n";

const INVALID_CHOICE: &str = "Invalid choice. Please try again.\n";
const INVALID_CATEGORY: &str = "Invalid category choice.\n";
const INVALID_RATING: &str = "Invalid rating. Please enter a whole number.\n";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShellState {
    #[default]
    LoggedOut,
    /// Logged in, no role picked yet.
    ChoosingRole,
    Manager(ManagerStep),
    Customer(CustomerStep),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagerStep {
    Menu,
    ItemName,
    ItemPrice { name: String },
    ItemCategory { name: String, price: String },
    RemoveName,
    Category,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerStep {
    Menu,
    Category,
    ItemName,
    ReviewerName {
        item: String,
    },
    Rating {
        item: String,
        reviewer: String,
    },
    Comment {
        item: String,
        reviewer: String,
        rating: i32,
    },
}

/// What the session has to do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Say(&'static str),
    AddItem(StoreItem),
    RemoveItem(String),
    ListCategory(&'static str),
    /// Render the item. On a miss the session calls [`ShellState::abandon`].
    ShowItem(String),
    AddReview { item: String, review: Review },
}

fn menu_choice(input: &str) -> Option<char> {
    input.trim_start().chars().next()
}

fn field(input: &str) -> String {
    input.trim().to_string()
}

impl ShellState {
    /// Text printed before reading the next line.
    pub fn prompt(&self) -> &'static str {
        match self {
            ShellState::LoggedOut => MAIN_MENU,
            ShellState::ChoosingRole => ROLE_MENU,
            ShellState::Manager(step) => match step {
                ManagerStep::Menu => MANAGER_MENU,
                ManagerStep::ItemName => "Enter item details:\nName: ",
                ManagerStep::ItemPrice { .. } => "Price: ",
                ManagerStep::ItemCategory { .. } => "Category: ",
                ManagerStep::RemoveName => "Enter the name of the item to remove: ",
                ManagerStep::Category => CATEGORY_MENU,
            },
            ShellState::Customer(step) => match step {
                CustomerStep::Menu => CUSTOMER_MENU,
                CustomerStep::Category => CATEGORY_MENU,
                CustomerStep::ItemName => "Enter the name of the item to view details: ",
                CustomerStep::ReviewerName { .. } => "Enter your name: ",
                CustomerStep::Rating { .. } => "Enter your rating (1-5): ",
                CustomerStep::Comment { .. } => "Enter your comment: ",
            },
            ShellState::Quit => "",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ShellState::Quit)
    }

    /// Drops any half-filled prompt and returns to the current role's menu.
    pub fn abandon(self) -> ShellState {
        match self {
            ShellState::Manager(_) => ShellState::Manager(ManagerStep::Menu),
            ShellState::Customer(_) => ShellState::Customer(CustomerStep::Menu),
            other => other,
        }
    }

    pub fn step(self, input: &str) -> (ShellState, Effect) {
        match self {
            ShellState::LoggedOut => match menu_choice(input) {
                None => (ShellState::LoggedOut, Effect::None),
                Some('1') => (ShellState::ChoosingRole, Effect::None),
                Some('2') => (ShellState::Quit, Effect::Say("Quitting...\n")),
                Some(_) => (ShellState::LoggedOut, Effect::Say(INVALID_CHOICE)),
            },
            ShellState::ChoosingRole => match menu_choice(input) {
                None => (ShellState::ChoosingRole, Effect::None),
                Some('1') => (ShellState::Manager(ManagerStep::Menu), Effect::None),
                Some('2') => (ShellState::Customer(CustomerStep::Menu), Effect::None),
                Some('3') => (ShellState::LoggedOut, Effect::Say("Logging off...\n")),
                Some(_) => (ShellState::ChoosingRole, Effect::Say(INVALID_CHOICE)),
            },
            ShellState::Manager(step) => step_manager(step, input),
            ShellState::Customer(step) => step_customer(step, input),
            ShellState::Quit => (ShellState::Quit, Effect::None),
        }
    }
}

fn step_manager(step: ManagerStep, input: &str) -> (ShellState, Effect) {
    let next = |step| ShellState::Manager(step);
    match step {
        ManagerStep::Menu => match menu_choice(input) {
            None => (next(ManagerStep::Menu), Effect::None),
            Some('1') => (next(ManagerStep::ItemName), Effect::None),
            Some('2') => (next(ManagerStep::RemoveName), Effect::None),
            Some('3') => (next(ManagerStep::Category), Effect::None),
            Some('4') => (ShellState::ChoosingRole, Effect::Say("Logging off...\n")),
            Some(_) => (next(ManagerStep::Menu), Effect::Say(INVALID_CHOICE)),
        },
        ManagerStep::ItemName => (
            next(ManagerStep::ItemPrice { name: field(input) }),
            Effect::None,
        ),
        ManagerStep::ItemPrice { name } => (
            next(ManagerStep::ItemCategory {
                name,
                price: field(input),
            }),
            Effect::None,
        ),
        ManagerStep::ItemCategory { name, price } => (
            next(ManagerStep::Menu),
            Effect::AddItem(StoreItem::new(name, price, field(input))),
        ),
        ManagerStep::RemoveName => (next(ManagerStep::Menu), Effect::RemoveItem(field(input))),
        ManagerStep::Category => match menu_choice(input) {
            None => (next(ManagerStep::Category), Effect::None),
            Some(_) => (next(ManagerStep::Menu), category_effect(input)),
        },
    }
}

fn step_customer(step: CustomerStep, input: &str) -> (ShellState, Effect) {
    let next = |step| ShellState::Customer(step);
    match step {
        CustomerStep::Menu => match menu_choice(input) {
            None => (next(CustomerStep::Menu), Effect::None),
            Some('1') => (next(CustomerStep::Category), Effect::None),
            Some('2') => (next(CustomerStep::ItemName), Effect::None),
            Some('3') => (
                ShellState::ChoosingRole,
                Effect::Say("Logging off customer view...\n"),
            ),
            Some(_) => (next(CustomerStep::Menu), Effect::Say(INVALID_CHOICE)),
        },
        CustomerStep::Category => match menu_choice(input) {
            None => (next(CustomerStep::Category), Effect::None),
            Some(_) => (next(CustomerStep::Menu), category_effect(input)),
        },
        CustomerStep::ItemName => {
            let item = field(input);
            (
                next(CustomerStep::ReviewerName { item: item.clone() }),
                Effect::ShowItem(item),
            )
        }
        CustomerStep::ReviewerName { item } => (
            next(CustomerStep::Rating {
                item,
                reviewer: field(input),
            }),
            Effect::None,
        ),
        CustomerStep::Rating { item, reviewer } => match input.trim().parse::<i32>() {
            Ok(rating) => (
                next(CustomerStep::Comment {
                    item,
                    reviewer,
                    rating,
                }),
                Effect::None,
            ),
            Err(_) => (
                next(CustomerStep::Rating { item, reviewer }),
                Effect::Say(INVALID_RATING),
            ),
        },
        CustomerStep::Comment {
            item,
            reviewer,
            rating,
        } => (
            next(CustomerStep::Menu),
            Effect::AddReview {
                item,
                review: Review::new(reviewer, field(input), rating),
            },
        ),
    }
}

fn category_effect(input: &str) -> Effect {
    match category_for_code(input) {
        Some(category) => Effect::ListCategory(category),
        None => Effect::Say(INVALID_CATEGORY),
    }
}
