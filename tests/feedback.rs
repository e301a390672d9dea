#[cfg(test)]
mod tests {
    use ergomate::api::backend::{Feedback, FeedbackCategory};
    use ergomate::libs::error::ValidationError;

    #[test]
    fn test_valid_feedback_is_accepted() {
        let feedback = Feedback::new(4, FeedbackCategory::Feature, "  Please add dark mode  ").unwrap();
        assert_eq!(feedback.rating, 4);
        assert_eq!(feedback.category, FeedbackCategory::Feature);
        // Whitespace is trimmed before submission
        assert_eq!(feedback.message, "Please add dark mode");
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        assert_eq!(
            Feedback::new(0, FeedbackCategory::General, "message").unwrap_err(),
            ValidationError::RatingOutOfRange(0)
        );
        assert_eq!(
            Feedback::new(6, FeedbackCategory::General, "message").unwrap_err(),
            ValidationError::RatingOutOfRange(6)
        );
        assert!(Feedback::new(1, FeedbackCategory::General, "message").is_ok());
        assert!(Feedback::new(5, FeedbackCategory::General, "message").is_ok());
    }

    #[test]
    fn test_empty_message_is_rejected() {
        assert_eq!(
            Feedback::new(3, FeedbackCategory::Bug, "   ").unwrap_err(),
            ValidationError::EmptyFeedback
        );
    }

    #[test]
    fn test_category_labels() {
        for category in FeedbackCategory::all() {
            assert!(!category.label().is_empty());
        }
        assert_eq!(FeedbackCategory::Bug.label(), "Bug report");
    }
}
