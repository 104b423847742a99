use crate::domain::review::Review;
use std::fmt;

/// A catalog entry. `name` is the lookup key, `price` is kept as the
/// operator typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreItem {
    name: String,
    price: String,
    category: String,
    reviews: Vec<Review>,
}

impl StoreItem {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            category: category.into(),
            reviews: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Reviews in submission order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

impl fmt::Display for StoreItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Name: {}, Price: {}, Category: {}",
            self.name, self.price, self.category
        )?;

        if self.reviews.is_empty() {
            return writeln!(f, "No reviews yet.");
        }

        writeln!(f, "Reviews:")?;
        for review in &self.reviews {
            writeln!(f, "{}", review)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_fields_verbatim() {
        let item = StoreItem::new("Lipstick", "$12.00 ", "Beauty Products");
        assert_eq!(item.name(), "Lipstick");
        assert_eq!(item.price(), "$12.00 ");
        assert_eq!(item.category(), "Beauty Products");
        assert!(item.reviews().is_empty());
    }

    #[test]
    fn test_render_without_reviews() {
        let item = StoreItem::new("Pen", "1.50", "Stationeries");
        assert_eq!(
            item.to_string(),
            "Name: Pen, Price: 1.50, Category: Stationeries\nNo reviews yet.\n"
        );
    }

    #[test]
    fn test_reviews_render_in_insertion_order() {
        let mut item = StoreItem::new("Laptop", "999", "Electronics");
        item.add_review(Review::new("R1", "first", 5));
        item.add_review(Review::new("R2", "second", 3));
        item.add_review(Review::new("R3", "third", 1));

        let rendered = item.to_string();
        assert!(rendered.contains("Reviews:\n"));
        assert!(!rendered.contains("No reviews yet."));

        let first = rendered.find("Customer: R1").unwrap();
        let second = rendered.find("Customer: R2").unwrap();
        let third = rendered.find("Customer: R3").unwrap();
        assert!(first < second && second < third);

        let names: Vec<&str> = item.reviews().iter().map(|r| r.reviewer_name()).collect();
        assert_eq!(names, vec!["R1", "R2", "R3"]);
    }
}
