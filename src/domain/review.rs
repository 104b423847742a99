use std::fmt;

/// A customer review. Immutable once submitted; the rating is stored as
/// given, without any range check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    reviewer_name: String,
    comment: String,
    rating: i32,
}

impl Review {
    pub fn new(reviewer_name: impl Into<String>, comment: impl Into<String>, rating: i32) -> Self {
        Self {
            reviewer_name: reviewer_name.into(),
            comment: comment.into(),
            rating,
        }
    }

    pub fn reviewer_name(&self) -> &str {
        &self.reviewer_name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }
}

impl fmt::Display for Review {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {}, Rating: {}/5\nComment: {}",
            self.reviewer_name, self.rating, self.comment
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_review() {
        let review = Review::new("Alice", "Works great", 4);
        assert_eq!(
            review.to_string(),
            "Customer: Alice, Rating: 4/5\nComment: Works great"
        );
    }

    #[test]
    fn test_out_of_range_ratings_are_kept() {
        for rating in [0, -3, 6, 42, i32::MAX, i32::MIN] {
            let review = Review::new("Bob", "meh", rating);
            assert_eq!(review.rating(), rating);
            assert!(review.to_string().contains(&format!("Rating: {}/5", rating)));
        }
    }
}
