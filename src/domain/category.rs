/// The fixed categories selectable by number from the menus.
pub const CATEGORIES: [&str; 4] = [
    "Electronics",
    "Food & Beverages",
    "Beauty Products",
    "Stationeries",
];

pub const CATEGORY_MENU: &str = "Choose a category:\n\
1. Electronics\n\
2. Food & Beverages\n\
3. Beauty Products\n\
4. Stationeries\n\
Select category: ";

/// Maps a category answer to its label. Only the first non-blank character
/// is inspected, so "2" and "2 please" both select "Food & Beverages".
pub fn category_for_code(input: &str) -> Option<&'static str> {
    match input.trim_start().chars().next()? {
        '1' => Some(CATEGORIES[0]),
        '2' => Some(CATEGORIES[1]),
        '3' => Some(CATEGORIES[2]),
        '4' => Some(CATEGORIES[3]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_labels() {
        assert_eq!(category_for_code("1"), Some("Electronics"));
        assert_eq!(category_for_code("2"), Some("Food & Beverages"));
        assert_eq!(category_for_code(" 3"), Some("Beauty Products"));
        assert_eq!(category_for_code("4x"), Some("Stationeries"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(category_for_code("5"), None);
        assert_eq!(category_for_code("Electronics"), None);
        assert_eq!(category_for_code(""), None);
    }
}
