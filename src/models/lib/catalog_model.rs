/// Generates a catalog model: an integer ID newtype plus the model struct
/// itself with getters, setters, a builder, serde support, and archival.
///
/// ```ignore
/// catalog_model! {
///     /// A thing we track.
///     pub struct Thing {
///         id: <<ThingID>>,
///         label: String,
///     }
///     ThingBuilder
/// }
/// ```
#[macro_export]
macro_rules! catalog_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: <<$id:ident>>,
            $($fields:tt)*
        }
        $builder:ident

    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $id(i64);

        impl $id {
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Return the raw integer value of this ID
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl std::convert::From<i64> for $id {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<i32> for $id {
            fn from(id: i32) -> Self {
                Self(id as i64)
            }
        }

        impl std::convert::From<$id> for i64 {
            fn from(id: $id) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub", set = "pub")]
        pub struct $name {
            id: $id,
            $($fields)*
            #[builder(setter(strip_option), default)]
            #[serde(default, skip_serializing_if = "Option::is_none")]
            archived: Option<chrono::DateTime<chrono::Utc>>,
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Whether the record has been archived by its administrators.
            pub fn is_archived(&self) -> bool {
                self.archived.is_some()
            }
        }
    }
}
