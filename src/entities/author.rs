//! Author entity

impl_entity!(
    /// Someone who writes reviews
    Author,
    "author",
    "authors",
    {
        name: String,
        verified: bool,
    }
);
