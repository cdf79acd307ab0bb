//! Review entity

impl_entity!(
    /// A review of one game written by one author
    ///
    /// Both foreign keys may point at entities that no longer exist; nothing
    /// cascades when a game is deleted.
    #[serde(rename_all = "camelCase")]
    Review,
    "review",
    "reviews",
    {
        /// Expected in 1..=5
        rating: i32,
        content: Vec<String>,
        game_id: String,
        author_id: String,
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Entity;
    use crate::core::field::FieldValue;

    fn review() -> Review {
        Review {
            id: "1".to_string(),
            rating: 4,
            content: vec!["Good game".to_string()],
            game_id: "3".to_string(),
            author_id: "5".to_string(),
        }
    }

    #[test]
    fn test_field_value_by_name() {
        let review = review();
        assert!(review.field_value("game_id").unwrap().eq_str("3"));
        assert!(review.field_value("author_id").unwrap().eq_str("5"));
        assert_eq!(review.field_value("rating"), Some(FieldValue::Integer(4)));
        assert!(review.field_value("id").unwrap().eq_str("1"));
        assert!(review.field_value("gameId").is_none());
    }

    #[test]
    fn test_resource_names() {
        assert_eq!(Review::resource_name(), "reviews");
        assert_eq!(Review::resource_name_singular(), "review");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(review()).unwrap();
        assert_eq!(json["gameId"], "3");
        assert_eq!(json["authorId"], "5");
    }
}
