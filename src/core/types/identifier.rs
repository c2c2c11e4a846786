//! Resource identifier normalization
//!
//! Providers hand back identifiers as strings, integers or nothing at all.
//! Members and balancers store them as `Option<String>`; the inputs treated as
//! "no identifier" are `None`, the empty string and numeric zero.

use serde::{Deserialize, Deserializer};

/// Conversion into a normalized optional identifier
pub trait IntoResourceId {
    fn into_resource_id(self) -> Option<String>;
}

impl IntoResourceId for &str {
    fn into_resource_id(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl IntoResourceId for String {
    fn into_resource_id(self) -> Option<String> {
        if self.is_empty() { None } else { Some(self) }
    }
}

impl IntoResourceId for &String {
    fn into_resource_id(self) -> Option<String> {
        self.as_str().into_resource_id()
    }
}

impl<T: IntoResourceId> IntoResourceId for Option<T> {
    fn into_resource_id(self) -> Option<String> {
        self.and_then(IntoResourceId::into_resource_id)
    }
}

macro_rules! impl_numeric_resource_id {
    ($($ty:ty),*) => {
        $(
            impl IntoResourceId for $ty {
                fn into_resource_id(self) -> Option<String> {
                    if self == 0 { None } else { Some(self.to_string()) }
                }
            }
        )*
    };
}

impl_numeric_resource_id!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Normalize any supported identifier input
pub fn normalize_id(id: impl IntoResourceId) -> Option<String> {
    id.into_resource_id()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

/// Serde helper applying the same normalization to deserialized ids
pub(crate) fn deserialize_resource_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(RawId::Text(s)) => s.into_resource_id(),
        Some(RawId::Signed(n)) => n.into_resource_id(),
        Some(RawId::Unsigned(n)) => n.into_resource_id(),
    })
}
