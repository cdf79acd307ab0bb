//! Macros for reducing boilerplate when defining entities

/// Define an entity struct and its [`Entity`](crate::core::entity::Entity) implementation
///
/// The generated struct always carries a `pub id: String` field followed by
/// the declared fields. Every field, `id` included, is reachable through
/// `field_value` under its Rust name.
///
/// # Example
///
/// ```rust,ignore
/// impl_entity!(
///     /// A review of a game
///     Review,
///     "review",
///     "reviews",
///     {
///         rating: i32,
///         game_id: String,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_entity {
    (
        $(#[$struct_meta:meta])*
        $type:ident,
        $singular:expr,
        $plural:expr,
        {
            $( $(#[$field_meta:meta])* $field:ident : $field_type:ty ),* $(,)?
        }
        $(,)?
    ) => {
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        $(#[$struct_meta])*
        pub struct $type {
            /// Unique identifier within the collection
            pub id: String,
            $(
                $(#[$field_meta])*
                pub $field: $field_type,
            )*
        }

        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    "id" => Some($crate::core::field::FieldValue::from(self.id.clone())),
                    $(
                        stringify!($field) => {
                            Some($crate::core::field::FieldValue::from(self.$field.clone()))
                        }
                    )*
                    _ => None,
                }
            }
        }
    };
}
